use serde::{Deserialize, Serialize};

/// The thirteen validated quantities a design is computed from, all in base SI units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignInputs {
    // Toroid core geometry
    /// Outer diameter (m)
    pub outer_diameter: f64,
    /// Inner diameter (m)
    pub inner_diameter: f64,
    /// Height (m)
    pub height: f64,
    /// Effective magnetic cross-section Ae (m^2)
    pub effective_area: f64,
    /// Effective magnetic path length le (m)
    pub effective_length: f64,

    // Winding wire
    /// Wire diameter (m)
    pub wire_diameter: f64,
    /// Wire resistivity (ohm*m, entered without unit)
    pub wire_resistivity: f64,

    // Buck converter / inductor
    pub v_in: f64,
    pub v_out: f64,
    pub i_out: f64,
    /// Switching frequency (Hz)
    pub frequency: f64,
    /// Number of turns (dimensionless)
    pub turns: f64,
    /// Expected inductance (H)
    pub inductance: f64,
}
