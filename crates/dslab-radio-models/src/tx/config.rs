//! Transmit current model configuration.

use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::options::{parse_config_value, parse_f64_option, parse_options};
use crate::tx::current::TxCurrentModelKind;
use crate::tx::current_models::constant::{ConstantTxCurrentModel, DEFAULT_TX_CURRENT};
use crate::tx::current_models::linear::{self, LinearTxCurrentModel, DEFAULT_ETA, DEFAULT_STANDBY_CURRENT};
use crate::tx::current_models::piecewise::{self, PiecewiseTxCurrentModel};

/// Parameters of [`LinearTxCurrentModel`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearTxCurrentConfig {
    /// Power amplifier efficiency (0-1).
    pub eta: f64,
    /// Supply voltage in V.
    pub voltage: f64,
    /// Standby current in A.
    pub standby_current: f64,
}

impl Default for LinearTxCurrentConfig {
    fn default() -> Self {
        Self {
            eta: DEFAULT_ETA,
            voltage: linear::DEFAULT_VOLTAGE,
            standby_current: DEFAULT_STANDBY_CURRENT,
        }
    }
}

/// Parameters of [`ConstantTxCurrentModel`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantTxCurrentConfig {
    /// Transmit current in A.
    pub tx_current: f64,
}

impl Default for ConstantTxCurrentConfig {
    fn default() -> Self {
        Self {
            tx_current: DEFAULT_TX_CURRENT,
        }
    }
}

/// Parameters of [`PiecewiseTxCurrentModel`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PiecewiseTxCurrentConfig {
    /// Supply voltage in V.
    pub voltage: f64,
}

impl Default for PiecewiseTxCurrentConfig {
    fn default() -> Self {
        Self {
            voltage: piecewise::DEFAULT_VOLTAGE,
        }
    }
}

/// Describes which transmit current model to use and its parameters.
///
/// Can be read from YAML, where the model is selected by the `type` field
/// and omitted parameters take default values:
///
/// ```yaml
/// type: Linear
/// eta: 0.2
/// ```
///
/// or parsed from a string like `Linear[eta=0.2,voltage=3]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TxCurrentModelConfig {
    /// Linear model parameters.
    Linear(LinearTxCurrentConfig),
    /// Constant model parameters.
    Constant(ConstantTxCurrentConfig),
    /// Piecewise model parameters.
    Piecewise(PiecewiseTxCurrentConfig),
}

impl TxCurrentModelConfig {
    /// Reads config from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Can't parse tx current model config from YAML: {}", e))
    }

    /// Reads config from YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let yaml =
            std::fs::read_to_string(path).map_err(|e| format!("Can't read file {}: {}", path.display(), e))?;
        let config = Self::from_yaml(&yaml)?;
        debug!("Loaded tx current model config from {}: {}", path.display(), config);
        Ok(config)
    }

    /// Checks that the parameters are physically meaningful.
    ///
    /// Models accept any parameter values, so calling this method is up to the user.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Linear(params) => {
                if !(params.eta > 0. && params.eta <= 1.) {
                    return Err(format!("Amplifier efficiency should be in (0, 1], got {}", params.eta));
                }
                check_voltage(params.voltage)?;
                if !(params.standby_current >= 0.) {
                    return Err(format!(
                        "Standby current should be non-negative, got {}",
                        params.standby_current
                    ));
                }
            }
            Self::Constant(params) => {
                if !(params.tx_current >= 0.) {
                    return Err(format!("Tx current should be non-negative, got {}", params.tx_current));
                }
            }
            Self::Piecewise(params) => check_voltage(params.voltage)?,
        }
        Ok(())
    }

    /// Creates the configured model.
    pub fn build(&self) -> TxCurrentModelKind {
        match self {
            Self::Linear(params) => {
                LinearTxCurrentModel::new(params.eta, params.voltage, params.standby_current).into()
            }
            Self::Constant(params) => ConstantTxCurrentModel::new(params.tx_current).into(),
            Self::Piecewise(params) => PiecewiseTxCurrentModel::new(params.voltage).into(),
        }
    }
}

fn check_voltage(voltage: f64) -> Result<(), String> {
    if !(voltage > 0.) {
        return Err(format!("Supply voltage should be positive, got {}", voltage));
    }
    Ok(())
}

impl Default for TxCurrentModelConfig {
    fn default() -> Self {
        Self::Linear(LinearTxCurrentConfig::default())
    }
}

impl FromStr for TxCurrentModelConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((_, rest)) = s.trim().split_once('[') {
            if !rest.ends_with(']') || rest[..rest.len() - 1].contains(']') {
                return Err(format!("Malformed tx current model config {}: options should end with ']'", s));
            }
        }
        let (name, options_str) = parse_config_value(s);
        let options_str = options_str.unwrap_or_default();
        if let Some(piece) = options_str
            .split(',')
            .map(str::trim)
            .find(|piece| !piece.is_empty() && !piece.contains('='))
        {
            return Err(format!("Malformed option '{}' in tx current model config {}", piece, s));
        }
        let options = parse_options(&options_str);
        let mut config = match name.as_str() {
            "Linear" => Self::Linear(LinearTxCurrentConfig::default()),
            "Constant" => Self::Constant(ConstantTxCurrentConfig::default()),
            "Piecewise" => Self::Piecewise(PiecewiseTxCurrentConfig::default()),
            _ => return Err(format!("Unknown tx current model: {}", name)),
        };
        for (option, value) in options.iter() {
            let value = parse_f64_option(option, value)?;
            match (&mut config, option.as_str()) {
                (Self::Linear(params), "eta") => params.eta = value,
                (Self::Linear(params), "voltage") => params.voltage = value,
                (Self::Linear(params), "standby_current") => params.standby_current = value,
                (Self::Constant(params), "tx_current") => params.tx_current = value,
                (Self::Piecewise(params), "voltage") => params.voltage = value,
                _ => return Err(format!("Unknown option {} for tx current model {}", option, name)),
            }
        }
        Ok(config)
    }
}

impl Display for TxCurrentModelConfig {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Linear(params) => write!(
                f,
                "Linear[eta={},voltage={},standby_current={}]",
                params.eta, params.voltage, params.standby_current
            ),
            Self::Constant(params) => write!(f, "Constant[tx_current={}]", params.tx_current),
            Self::Piecewise(params) => write!(f, "Piecewise[voltage={}]", params.voltage),
        }
    }
}
