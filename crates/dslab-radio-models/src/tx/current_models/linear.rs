//! Linear transmit current model.

use log::trace;

use crate::tx::current::TxCurrentModel;
use crate::units::dbm_to_w;

/// Default power amplifier efficiency.
pub const DEFAULT_ETA: f64 = 0.10;
/// Default supply voltage in V.
pub const DEFAULT_VOLTAGE: f64 = 3.3;
/// Default standby current in A (1.4 mA in idle mode).
pub const DEFAULT_STANDBY_CURRENT: f64 = 0.0014;

/// A model of a power amplifier with fixed efficiency.
///
/// The current is computed as `P_tx / (V * eta) + I_standby`, where `P_tx` is the transmit power in W,
/// `V` is the supply voltage and `I_standby` is the current drawn by the radio in standby state.
///
/// Parameters are not validated: zero voltage or efficiency results in infinite current.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearTxCurrentModel {
    eta: f64,
    voltage: f64,
    standby_current: f64,
}

impl LinearTxCurrentModel {
    /// Creates a linear transmit current model.
    ///
    /// * `eta` - The efficiency of the power amplifier (0-1).
    /// * `voltage` - The supply voltage in V.
    /// * `standby_current` - The current in standby state in A.
    pub fn new(eta: f64, voltage: f64, standby_current: f64) -> Self {
        Self {
            eta,
            voltage,
            standby_current,
        }
    }

    /// Returns the power amplifier efficiency.
    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// Sets the power amplifier efficiency.
    pub fn set_eta(&mut self, eta: f64) {
        trace!("linear tx current model: eta = {}", eta);
        self.eta = eta;
    }

    /// Returns the supply voltage in V.
    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    /// Sets the supply voltage in V.
    pub fn set_voltage(&mut self, voltage: f64) {
        trace!("linear tx current model: voltage = {}", voltage);
        self.voltage = voltage;
    }

    /// Returns the standby current in A.
    pub fn standby_current(&self) -> f64 {
        self.standby_current
    }

    /// Sets the standby current in A.
    pub fn set_standby_current(&mut self, standby_current: f64) {
        trace!("linear tx current model: standby current = {}", standby_current);
        self.standby_current = standby_current;
    }
}

impl Default for LinearTxCurrentModel {
    fn default() -> Self {
        Self::new(DEFAULT_ETA, DEFAULT_VOLTAGE, DEFAULT_STANDBY_CURRENT)
    }
}

impl TxCurrentModel for LinearTxCurrentModel {
    fn get_current(&self, tx_power_dbm: f64) -> f64 {
        trace!("linear tx current model: tx power = {} dBm", tx_power_dbm);
        dbm_to_w(tx_power_dbm) / (self.voltage * self.eta) + self.standby_current
    }
}
