//! Conversions between logarithmic and linear power units.

/// Converts power in dBm to power in W.
pub fn dbm_to_w(dbm: f64) -> f64 {
    10f64.powf((dbm - 30.) / 10.)
}

/// Converts power in W to power in dBm.
pub fn w_to_dbm(w: f64) -> f64 {
    10. * w.log10() + 30.
}
