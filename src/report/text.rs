use crate::report::{gauss, micro_henry, oersted, percent, DesignReport};

/// Render a design as aligned plain-text lines for the terminal
pub fn render_text(report: &DesignReport<'_>) -> String {
    let i = report.inputs;
    let r = report.results;

    let core = if report.core_name.is_empty() {
        "(unnamed)"
    } else {
        report.core_name
    };

    let rows: Vec<(&str, String)> = vec![
        ("Core", core.to_string()),
        ("Vin", format!("{:.1} V", i.v_in)),
        ("Vout", format!("{:.1} V", i.v_out)),
        ("Iout", format!("{:.3} A", i.i_out)),
        ("f", format!("{:.0} Hz", i.frequency)),
        ("Duty cycle", format!("{:.1} %", percent(r.duty_cycle))),
        ("t_on", format!("{:e} s", r.t_on)),
        ("t_off", format!("{:e} s", r.t_off)),
        ("Ripple current", format!("{:.3} A", r.ripple_current)),
        ("Peak current", format!("{:.3} A", r.peak_current)),
        ("L (expected)", format!("{:.1} uH", micro_henry(i.inductance))),
        (
            "Bpk",
            format!(
                "{:.4} T ({:.0} gauss)",
                r.peak_flux_density,
                gauss(r.peak_flux_density)
            ),
        ),
        (
            "Magnetizing force",
            format!(
                "{:.0} A/m ({:.1} oersteds)",
                r.magnetizing_force,
                oersted(r.magnetizing_force)
            ),
        ),
        ("Wire resistance", format!("{:e} ohm/m", r.wire_ohm_per_m)),
    ];

    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(name, value)| format!("{:<width$}  {}\n", name, value, width = width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{compute, DesignInputs};

    #[test]
    fn test_render_text() {
        let inputs = DesignInputs {
            effective_area: 1.5e-5,
            effective_length: 0.03,
            wire_diameter: 0.5e-3,
            wire_resistivity: 1.72e-8,
            v_in: 12.0,
            v_out: 3.3,
            i_out: 2.0,
            frequency: 300000.0,
            turns: 8.0,
            inductance: 4.7e-6,
            ..DesignInputs::default()
        };
        let results = compute(&inputs);
        let text = render_text(&DesignReport::new("", &inputs, &results));

        assert!(text.starts_with("Core"));
        assert!(text.contains("(unnamed)"));
        assert!(text.contains("27.5 %"));
        assert!(text.contains("0.0332 T (332 gauss)"));
        assert!(text.contains("ohm/m"));
        assert_eq!(text.lines().count(), 14);
    }
}
