// Presentation of a finished design: plain text, JSON and a standalone HTML page.
// Values come unmodified from DesignResults; scaling happens only here.

pub mod html;
pub mod text;

use serde::Serialize;
use std::f64::consts::PI;

use crate::design::{DesignInputs, DesignResults};

pub use html::{render_html, write_html, DEFAULT_REPORT_FILE};
pub use text::render_text;

/// Everything a report needs about one calculation
#[derive(Debug, Clone, Serialize)]
pub struct DesignReport<'a> {
    pub core_name: &'a str,
    pub inputs: &'a DesignInputs,
    pub results: &'a DesignResults,
}

impl<'a> DesignReport<'a> {
    pub fn new(core_name: &'a str, inputs: &'a DesignInputs, results: &'a DesignResults) -> Self {
        Self {
            core_name,
            inputs,
            results,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub fn percent(fraction: f64) -> f64 {
    fraction * 1e2
}

pub fn micro_henry(henry: f64) -> f64 {
    henry * 1e6
}

pub fn gauss(tesla: f64) -> f64 {
    tesla * 1e4
}

pub fn oersted(ampere_per_meter: f64) -> f64 {
    ampere_per_meter * 4.0 * PI / 1e3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scaling() {
        assert!((percent(0.275) - 27.5).abs() < 1e-12);
        assert!((micro_henry(4.7e-6) - 4.7).abs() < 1e-12);
        assert_eq!(gauss(0.1), 1000.0);
        // 1 Oe = 1000/(4*pi) A/m
        assert!((oersted(1000.0 / (4.0 * PI)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_json_report() {
        let inputs = DesignInputs {
            v_in: 12.0,
            v_out: 6.0,
            frequency: 1.0e5,
            ..DesignInputs::default()
        };
        let results = crate::design::compute(&inputs);
        let report = DesignReport::new("T-1", &inputs, &results);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["core_name"], "T-1");
        assert_eq!(json["inputs"]["v_in"], 12.0);
        assert_eq!(json["results"]["duty_cycle"], 0.5);
    }
}
