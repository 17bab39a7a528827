use std::fmt::Write as _;
use std::path::Path;

use crate::report::{gauss, micro_henry, oersted, percent, DesignReport};

/// Report file written when no path is given
pub const DEFAULT_REPORT_FILE: &str = "inductor.html";

const STYLE: &str = "table, th, td {
  border: 0px solid black;
  border-collapse: collapse;
  padding-left: 10px;
  padding-right: 10px;
}";

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn row(html: &mut String, name: &str, symbol: &str, value: String, extra: Option<String>) {
    let _ = write!(html, "<tr><td>{}</td><td><b>{}</b></td><td>{}</td>", name, symbol, value);
    if let Some(extra) = extra {
        let _ = write!(html, "<td>({})</td>", extra);
    }
    html.push_str("</tr>\n");
}

/// Render a standalone HTML page for a synchronous buck inductor
pub fn render_html(report: &DesignReport<'_>) -> String {
    let i = report.inputs;
    let r = report.results;

    let mut html = String::new();
    html.push_str("<html>\n<head>\n<title>Inductor design report</title>\n");
    let _ = writeln!(html, "<style>\n{}\n</style>", STYLE);
    html.push_str("</head>\n<body>\n<h2>Synchronous buck converter</h2>\n");
    let _ = writeln!(
        html,
        "<p>Toroidal core <b>{}</b> with single-layer winding.</p>",
        escape_html(report.core_name)
    );

    html.push_str("<table>\n");
    row(&mut html, "Input voltage", "Vin", format!("{:.1} V", i.v_in), None);
    row(&mut html, "Output voltage", "Vout", format!("{:.1} V", i.v_out), None);
    row(&mut html, "Output current", "Iout", format!("{:.3} A", i.i_out), None);
    row(&mut html, "Frequency", "f", format!("{:.0} Hz", i.frequency), None);
    row(&mut html, "Duty cycle", "D.C.", format!("{:.1} %", percent(r.duty_cycle)), None);
    row(&mut html, "Ripple current", "ΔI", format!("{:.3} A", r.ripple_current), None);
    row(&mut html, "Peak current", "Ipk", format!("{:.3} A", r.peak_current), None);
    row(
        &mut html,
        "Expected inductor value",
        "L",
        format!("{:.1} uH", micro_henry(i.inductance)),
        None,
    );
    row(
        &mut html,
        "Peak flux density",
        "Bpk",
        format!("{:.4} T", r.peak_flux_density),
        Some(format!("{:.0} gauss", gauss(r.peak_flux_density))),
    );
    row(
        &mut html,
        "Peak magnetizing force",
        "N",
        format!("{:.0} A/m", r.magnetizing_force),
        Some(format!("{:.1} oersteds", oersted(r.magnetizing_force))),
    );
    html.push_str("</table>\n");

    html.push_str(
        "<p>\nPermeability will decrease from initial value. \
Please consult 'permeability vs magnetizing force' curve from datasheet.\n\
Then update expected L value and calculate again. \
Do 2 or 3 iterations to get closer to the real values.\n</p>\n",
    );
    html.push_str(
        "<p>\nConsult material datasheet to determine core loss (W/m^3 times core volume).\n</p>\n",
    );
    html.push_str("</body>\n</html>\n");
    html
}

pub fn write_html<P: AsRef<Path>>(path: P, html: &str) -> std::io::Result<()> {
    let path = path.as_ref();
    std::fs::write(path, html)?;
    tracing::info!("Wrote design report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{compute, DesignInputs};

    fn inputs() -> DesignInputs {
        DesignInputs {
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
        }
    }

    #[test]
    fn test_render_rows() {
        let inputs = inputs();
        let results = compute(&inputs);
        let html = render_html(&DesignReport::new("T50-26", &inputs, &results));

        assert!(html.contains("<title>Inductor design report</title>"));
        assert!(html.contains("<b>T50-26</b>"));
        assert!(html.contains("<td>12.0 V</td>"));
        assert!(html.contains("<td>3.3 V</td>"));
        assert!(html.contains("<td>2.000 A</td>"));
        assert!(html.contains("<td>300000 Hz</td>"));
        assert!(html.contains("<td>27.5 %</td>"));
        assert!(html.contains("<td>1.697 A</td>"));
        assert!(html.contains("<td>2.848 A</td>"));
        assert!(html.contains("<td>4.7 uH</td>"));
        assert!(html.contains("<td>0.0332 T</td><td>(332 gauss)</td>"));
        assert!(html.contains("<td>760 A/m</td><td>(9.5 oersteds)</td>"));
    }

    #[test]
    fn test_core_name_is_escaped() {
        let inputs = inputs();
        let results = compute(&inputs);
        let html = render_html(&DesignReport::new("<T&1>", &inputs, &results));
        assert!(html.contains("<b>&lt;T&amp;1&gt;</b>"));
    }

    #[test]
    fn test_non_finite_values_render() {
        let mut inputs = inputs();
        inputs.frequency = 0.0;
        let results = compute(&inputs);
        let html = render_html(&DesignReport::new("x", &inputs, &results));
        assert!(html.contains("NaN A"));
    }
}
