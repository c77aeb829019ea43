//! Constant transmit current model.

use log::trace;

use crate::tx::current::TxCurrentModel;

/// Default transmit current in A (28 mA, transmission at 0 dBm).
pub const DEFAULT_TX_CURRENT: f64 = 0.028;

/// A model using a constant current value regardless of the transmit power.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantTxCurrentModel {
    tx_current: f64,
}

impl ConstantTxCurrentModel {
    /// Creates a constant transmit current model.
    ///
    /// * `tx_current` - The transmit current in A.
    pub fn new(tx_current: f64) -> Self {
        Self { tx_current }
    }

    /// Returns the transmit current in A.
    pub fn tx_current(&self) -> f64 {
        self.tx_current
    }

    /// Sets the transmit current in A.
    pub fn set_tx_current(&mut self, tx_current: f64) {
        trace!("constant tx current model: tx current = {}", tx_current);
        self.tx_current = tx_current;
    }
}

impl Default for ConstantTxCurrentModel {
    fn default() -> Self {
        Self::new(DEFAULT_TX_CURRENT)
    }
}

impl TxCurrentModel for ConstantTxCurrentModel {
    fn get_current(&self, _tx_power_dbm: f64) -> f64 {
        self.tx_current
    }
}
