//! Config string utils.

use std::collections::HashMap;

/// Parses model config string, which consists of two parts - name and options.
/// Example: `Linear[eta=0.2,voltage=3]` parts are name `Linear` and options string `eta=0.2,voltage=3`.
pub fn parse_config_value(config_str: &str) -> (String, Option<String>) {
    match config_str.trim().split_once('[') {
        Some((l, r)) => (l.trim().to_string(), Some(r.replace(']', ""))),
        None => (config_str.trim().to_string(), None),
    }
}

/// Parses options string from model config string, returns map with option names and values.
///
/// Pieces without `=` are ignored.
///
/// # Examples
///
/// ```rust
/// use dslab_radio_models::options::parse_options;
///
/// let options = parse_options("eta=0.2,voltage=3");
/// assert_eq!(options.get("eta").unwrap(), "0.2");
/// assert_eq!(options.get("voltage").unwrap(), "3");
/// assert_eq!(options.get("standby_current"), None);
/// ```
pub fn parse_options(options_str: &str) -> HashMap<String, String> {
    let mut options = HashMap::new();
    for option_str in options_str.split(',') {
        if let Some((name, value)) = option_str.split_once('=') {
            options.insert(name.trim().to_string(), value.trim().to_string());
        }
    }
    options
}

/// Parses the value of a numeric option.
pub fn parse_f64_option(name: &str, value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|e| format!("Can't parse value '{}' of option {}: {}", value, name, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_value() {
        assert_eq!(
            parse_config_value("Linear[eta=0.2,voltage=3]"),
            ("Linear".to_string(), Some("eta=0.2,voltage=3".to_string()))
        );
        assert_eq!(parse_config_value("Constant"), ("Constant".to_string(), None));
        assert_eq!(parse_config_value(" Piecewise[] "), ("Piecewise".to_string(), Some("".to_string())));
    }

    #[test]
    fn test_parse_options() {
        let options = parse_options("eta=0.2, voltage = 3,garbage");
        assert_eq!(options.len(), 2);
        assert_eq!(options["eta"], "0.2");
        assert_eq!(options["voltage"], "3");
        assert!(parse_options("").is_empty());
    }

    #[test]
    fn test_parse_f64_option() {
        assert_eq!(parse_f64_option("eta", "0.25"), Ok(0.25));
        assert_eq!(parse_f64_option("eta", "1e-3"), Ok(0.001));
        assert!(parse_f64_option("eta", "high").is_err());
    }
}
