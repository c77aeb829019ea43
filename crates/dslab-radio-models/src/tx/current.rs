//! Transmit current model trait.

use dyn_clone::{clone_trait_object, DynClone};

use crate::tx::current_models::constant::ConstantTxCurrentModel;
use crate::tx::current_models::linear::LinearTxCurrentModel;
use crate::tx::current_models::piecewise::PiecewiseTxCurrentModel;

/// A model for estimating the current drawn by a radio transmitter.
///
/// The model is queried once per transmission, the returned value is integrated
/// over the transmission time by the energy accounting code.
pub trait TxCurrentModel: DynClone {
    /// Returns the current in A drawn while transmitting with the requested power.
    ///
    /// Transmit power is passed in dBm. Values outside of the modeled range are extrapolated.
    fn get_current(&self, tx_power_dbm: f64) -> f64;
}

clone_trait_object!(TxCurrentModel);

/// One of the supported transmit current models, selected at configuration time.
#[derive(Clone, Debug, PartialEq)]
pub enum TxCurrentModelKind {
    /// Power amplifier model, see [`LinearTxCurrentModel`].
    Linear(LinearTxCurrentModel),
    /// Fixed current, see [`ConstantTxCurrentModel`].
    Constant(ConstantTxCurrentModel),
    /// Interpolation of measured values, see [`PiecewiseTxCurrentModel`].
    Piecewise(PiecewiseTxCurrentModel),
}

impl TxCurrentModelKind {
    /// Returns the model name as used in config strings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear(_) => "Linear",
            Self::Constant(_) => "Constant",
            Self::Piecewise(_) => "Piecewise",
        }
    }
}

impl TxCurrentModel for TxCurrentModelKind {
    fn get_current(&self, tx_power_dbm: f64) -> f64 {
        match self {
            Self::Linear(model) => model.get_current(tx_power_dbm),
            Self::Constant(model) => model.get_current(tx_power_dbm),
            Self::Piecewise(model) => model.get_current(tx_power_dbm),
        }
    }
}

impl From<LinearTxCurrentModel> for TxCurrentModelKind {
    fn from(model: LinearTxCurrentModel) -> Self {
        Self::Linear(model)
    }
}

impl From<ConstantTxCurrentModel> for TxCurrentModelKind {
    fn from(model: ConstantTxCurrentModel) -> Self {
        Self::Constant(model)
    }
}

impl From<PiecewiseTxCurrentModel> for TxCurrentModelKind {
    fn from(model: PiecewiseTxCurrentModel) -> Self {
        Self::Piecewise(model)
    }
}
