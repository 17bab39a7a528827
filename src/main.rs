use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use toroid::design;
use toroid::form;
use toroid::quantity;
use toroid::report;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "toroid")]
#[command(about = "Toroidal inductor calculator for synchronous buck converters", long_about = None)]
struct Cli {
    /// Enable verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an engineering value (e.g. "12.5kHz") to base SI units
    Parse {
        /// Value to convert
        text: String,

        /// Required unit (Hz, m, A, V, H or none); checks the unit when given
        #[arg(short, long)]
        unit: Option<quantity::UnitSymbol>,

        /// Power the prefix is raised to (2 for areas)
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        power: i32,
    },

    /// Validate the design fields and compute the inductor
    Calc {
        /// Design file with the field values
        #[arg(short, long, default_value = form::DEFAULT_DESIGN_FILE)]
        design: PathBuf,

        /// Override a field, e.g. --set freq=300kHz (repeatable)
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Core name shown in the report
        #[arg(long)]
        core: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Also write an HTML report to this file
        #[arg(short, long, value_name = "FILE", num_args = 0..=1, default_missing_value = report::DEFAULT_REPORT_FILE)]
        report: Option<PathBuf>,

        /// Don't write the field values back to the design file
        #[arg(long)]
        no_save: bool,
    },

    /// List the input fields with their expected units
    Fields,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let result = match cli.command {
        Commands::Parse { text, unit, power } => parse_quantity(&text, unit, power),
        Commands::Calc {
            design,
            set,
            core,
            format,
            report,
            no_save,
        } => calculate(&design, &set, core, format, report.as_deref(), !no_save),
        Commands::Fields => list_fields(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn parse_quantity(
    text: &str,
    unit: Option<quantity::UnitSymbol>,
    power: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    match unit {
        Some(expected) => {
            let value = quantity::validate(text, expected, power)?;
            println!("{} {}", value, expected.symbol());
        }
        None => {
            let parsed = quantity::parse(text, power)?;
            println!("{} {}", parsed.value, parsed.unit.symbol());
            println!("unit: {}", parsed.unit.name());
        }
    }
    Ok(())
}

fn calculate(
    design_path: &Path,
    overrides: &[String],
    core: Option<String>,
    format: OutputFormat,
    report_path: Option<&Path>,
    save: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut design_file = form::DesignFile::load_or_default(design_path)?;

    for assignment in overrides {
        let field = design_file.fields.assign(assignment)?;
        tracing::debug!("Override {} = '{}'", field, design_file.fields.get(field));
    }
    if let Some(core) = core {
        design_file.core_name = core;
    }

    // Values are stored even when some of them fail validation
    if save {
        design_file.save_to_file(design_path)?;
    }

    let inputs = match form::validate_form(&design_file.fields) {
        Ok(inputs) => inputs,
        Err(validation) => {
            eprint!("{}", validation);
            return Err(format!("{} field(s) invalid", validation.issues.len()).into());
        }
    };

    let results = design::compute(&inputs);
    let design_report = report::DesignReport::new(&design_file.core_name, &inputs, &results);

    match format {
        OutputFormat::Text => print!("{}", report::render_text(&design_report)),
        OutputFormat::Json => println!("{}", design_report.to_json()?),
    }

    if let Some(path) = report_path {
        report::write_html(path, &report::render_html(&design_report))?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}

fn list_fields() -> Result<(), Box<dyn std::error::Error>> {
    let mut group = None;
    for spec in form::FIELDS.iter() {
        if group != Some(spec.group) {
            println!("== {} ==", spec.group);
            group = Some(spec.group);
        }
        let unit = match (spec.unit, spec.power) {
            (quantity::UnitSymbol::Dimensionless, _) => "-".to_string(),
            (unit, 1) => unit.symbol().to_string(),
            (unit, power) => format!("{}^{}", unit.symbol(), power),
        };
        println!("  {:<8} {:<26} {}", spec.key, spec.label, unit);
    }
    Ok(())
}
