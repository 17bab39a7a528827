use serde::Serialize;
use std::f64::consts::PI;

use crate::design::inputs::DesignInputs;

/// Quantities derived from one set of `DesignInputs`, base SI units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignResults {
    /// Vout / Vin of an ideal buck converter
    pub duty_cycle: f64,
    /// Switch on-time per period (s)
    pub t_on: f64,
    /// Switch off-time per period (s)
    pub t_off: f64,
    /// Peak-to-peak inductor ripple current (A)
    pub ripple_current: f64,
    /// Iout plus half the ripple (A)
    pub peak_current: f64,
    /// Peak flux density over one half of the hysteresis loop (T)
    pub peak_flux_density: f64,
    /// Peak magnetizing force N*Ipk/le (A/m)
    pub magnetizing_force: f64,
    /// Wire cross-section as computed for the resistance estimate
    pub wire_area: f64,
    /// Wire resistance per unit length (ohm/m)
    pub wire_ohm_per_m: f64,
}

/// Evaluate the buck-converter and core formulas.
///
/// Inputs are assumed unit-checked already. Nothing is validated here:
/// a zero frequency or inductance gives infinities/NaN in the results.
pub fn compute(inputs: &DesignInputs) -> DesignResults {
    let DesignInputs {
        v_in,
        v_out,
        i_out,
        frequency,
        turns,
        inductance,
        effective_area,
        effective_length,
        wire_diameter,
        wire_resistivity,
        ..
    } = *inputs;

    // converter
    let duty_cycle = v_out / v_in;
    let t_on = duty_cycle / frequency;
    let t_off = 1.0 / frequency - t_on;
    let ripple_current = (v_out * t_off) / inductance;
    let peak_current = 0.5 * ripple_current + i_out;

    // core, peak values
    let peak_flux_density = ((v_in - v_out) * t_on) / (2.0 * effective_area * turns);
    let magnetizing_force = (turns * peak_current) / effective_length;

    // wire; there is no winding length yet, so this stops at ohm/m
    let wire_area = PI * wire_diameter * 0.25;
    let wire_ohm_per_m = wire_resistivity / wire_area;

    DesignResults {
        duty_cycle,
        t_on,
        t_off,
        ripple_current,
        peak_current,
        peak_flux_density,
        magnetizing_force,
        wire_area,
        wire_ohm_per_m,
    }
}
