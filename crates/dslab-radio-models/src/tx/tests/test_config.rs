//! Tests for transmit current model configuration.

use std::str::FromStr;

use crate::tx::config::{ConstantTxCurrentConfig, LinearTxCurrentConfig, PiecewiseTxCurrentConfig, TxCurrentModelConfig};
use crate::tx::current::{TxCurrentModel, TxCurrentModelKind};
use crate::tx::current_models::constant::ConstantTxCurrentModel;
use crate::tx::current_models::linear::LinearTxCurrentModel;
use crate::tx::current_models::piecewise::PiecewiseTxCurrentModel;

#[test]
fn test_parse_defaults() {
    assert_eq!(
        TxCurrentModelConfig::from_str("Linear").unwrap(),
        TxCurrentModelConfig::Linear(LinearTxCurrentConfig {
            eta: 0.1,
            voltage: 3.3,
            standby_current: 0.0014,
        })
    );
    assert_eq!(
        TxCurrentModelConfig::from_str("Constant").unwrap(),
        TxCurrentModelConfig::Constant(ConstantTxCurrentConfig { tx_current: 0.028 })
    );
    assert_eq!(
        TxCurrentModelConfig::from_str("Piecewise[]").unwrap(),
        TxCurrentModelConfig::Piecewise(PiecewiseTxCurrentConfig { voltage: 3.3 })
    );
    assert_eq!(TxCurrentModelConfig::default(), TxCurrentModelConfig::from_str("Linear").unwrap());
}

#[test]
fn test_parse_options() {
    let config = TxCurrentModelConfig::from_str("Linear[eta=0.2,standby_current=0.001]").unwrap();
    assert_eq!(
        config,
        TxCurrentModelConfig::Linear(LinearTxCurrentConfig {
            eta: 0.2,
            voltage: 3.3,
            standby_current: 0.001,
        })
    );
    let config = "Constant[tx_current=0.044]".parse::<TxCurrentModelConfig>().unwrap();
    assert_eq!(config.build(), TxCurrentModelKind::Constant(ConstantTxCurrentModel::new(0.044)));
    let config = "Piecewise[voltage=5]".parse::<TxCurrentModelConfig>().unwrap();
    assert_eq!(config.build(), TxCurrentModelKind::Piecewise(PiecewiseTxCurrentModel::new(5.)));
}

#[test]
fn test_parse_errors() {
    assert!(TxCurrentModelConfig::from_str("Cubic[voltage=3]").is_err());
    assert!(TxCurrentModelConfig::from_str("Linear[eta=high]").is_err());
    assert!(TxCurrentModelConfig::from_str("Constant[voltage=3]").is_err());
    assert!(TxCurrentModelConfig::from_str("Piecewise[eta=0.1]").is_err());
    // option without value must not fall back to the default
    assert!(TxCurrentModelConfig::from_str("Linear[eta0.2]").is_err());
    assert!(TxCurrentModelConfig::from_str("Linear[voltage=3,eta0.2]").is_err());
    // unterminated or doubly terminated options
    assert!(TxCurrentModelConfig::from_str("Linear[eta=0.2").is_err());
    assert!(TxCurrentModelConfig::from_str("Linear[eta=0.2]]").is_err());
    assert!(TxCurrentModelConfig::from_str("Linear[eta=0.2]x").is_err());
}

#[test]
fn test_parse_tolerates_spacing() {
    assert_eq!(
        TxCurrentModelConfig::from_str(" Linear[eta=0.2, voltage = 3,] ").unwrap(),
        TxCurrentModelConfig::Linear(LinearTxCurrentConfig {
            eta: 0.2,
            voltage: 3.,
            standby_current: 0.0014,
        })
    );
}

#[test]
fn test_display_is_parsable() {
    let config = TxCurrentModelConfig::from_str("Linear[voltage=1.8]").unwrap();
    assert_eq!(config.to_string(), "Linear[eta=0.1,voltage=1.8,standby_current=0.0014]");
    assert_eq!(TxCurrentModelConfig::from_str(&config.to_string()).unwrap(), config);
}

#[test]
fn test_yaml() {
    let config = TxCurrentModelConfig::from_yaml("type: Linear\neta: 0.25\n").unwrap();
    assert_eq!(
        config.build(),
        TxCurrentModelKind::Linear(LinearTxCurrentModel::new(0.25, 3.3, 0.0014))
    );
    let config = TxCurrentModelConfig::from_yaml("type: Constant\n").unwrap();
    assert_eq!(config.build().get_current(10.), 0.028);
    let config = TxCurrentModelConfig::from_yaml("type: Piecewise\nvoltage: 3.0\n").unwrap();
    assert_eq!(config.build().get_current(100.), 0.4 / 3.);

    assert!(TxCurrentModelConfig::from_yaml("type: Quadratic\n").is_err());
    assert!(TxCurrentModelConfig::from_yaml("eta: 0.25\n").is_err());
    assert!(TxCurrentModelConfig::from_file("no/such/config.yaml").is_err());
}

#[test]
fn test_validate() {
    assert!(TxCurrentModelConfig::from_str("Linear").unwrap().validate().is_ok());
    assert!(TxCurrentModelConfig::from_str("Constant").unwrap().validate().is_ok());
    assert!(TxCurrentModelConfig::from_str("Piecewise").unwrap().validate().is_ok());

    assert!(TxCurrentModelConfig::from_str("Linear[eta=0]").unwrap().validate().is_err());
    assert!(TxCurrentModelConfig::from_str("Linear[eta=1.5]").unwrap().validate().is_err());
    assert!(TxCurrentModelConfig::from_str("Linear[voltage=-3.3]").unwrap().validate().is_err());
    assert!(TxCurrentModelConfig::from_str("Linear[standby_current=-0.1]").unwrap().validate().is_err());
    assert!(TxCurrentModelConfig::from_str("Linear[voltage=NaN]").unwrap().validate().is_err());
    assert!(TxCurrentModelConfig::from_str("Constant[tx_current=-1]").unwrap().validate().is_err());
    assert!(TxCurrentModelConfig::from_str("Piecewise[voltage=0]").unwrap().validate().is_err());
}

#[test]
fn test_invalid_config_still_builds() {
    let model = TxCurrentModelConfig::from_str("Linear[eta=0]").unwrap().build();
    assert_eq!(model.get_current(0.), f64::INFINITY);
}
