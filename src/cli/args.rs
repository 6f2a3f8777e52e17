//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

use super::prompts::{find_report_files, prompt_report_selection};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
pub struct CliConfig {
    pub report_path: PathBuf,
    /// Calibration override: set and persist without prompting.
    pub hours: Option<f64>,
    /// Force the setup prompt even when a calibration is stored.
    pub recalibrate: bool,
    pub skip_prompts: bool,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Sprint Lens - Terminal dashboard for sprint estimation reports");
    eprintln!();
    eprintln!("Usage: sprint-lens [report-file] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [report-file]     Path to the report JSON (default: res.json)");
    eprintln!("                    If res.json is missing, prompts for a report file");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -H, --hours <N>   Hours for a maximum-complexity (5) story;");
    eprintln!("                    sets and persists the calibration without prompting");
    eprintln!("  --recalibrate     Ask for the calibration again even if one is stored");
    eprintln!("  -y, --yes         Skip prompts (use stored calibration or default)");
    eprintln!("  -h, --help        Show this help message");
    eprintln!("  -V, --version     Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  sprint-lens                         # res.json in the current directory");
    eprintln!("  sprint-lens sprint14.json           # A specific report");
    eprintln!("  sprint-lens --hours 24              # Recalibrate to 24h and open");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut report_path: Option<PathBuf> = None;
    let mut hours: Option<f64> = None;
    let mut recalibrate = false;
    let mut skip_prompts = false;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("sprint-lens {}", VERSION);
            std::process::exit(0);
        } else if arg == "-y" || arg == "--yes" {
            skip_prompts = true;
            i += 1;
        } else if arg == "--recalibrate" {
            recalibrate = true;
            i += 1;
        } else if arg == "-H" || arg == "--hours" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --hours",
                ));
            }
            let value: f64 = args[i].parse().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid hours value: {}", args[i]),
                )
            })?;
            if !value.is_finite() || value <= 0.0 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Hours must be a positive number, got: {}", args[i]),
                ));
            }
            hours = Some(value);
            i += 1;
        } else if !arg.starts_with('-') {
            report_path = Some(PathBuf::from(arg));
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    // If no report file provided, try res.json, then look around
    let report_path = if let Some(path) = report_path {
        path
    } else {
        let default = PathBuf::from("res.json");
        if default.exists() {
            default
        } else {
            let reports = find_report_files();
            if reports.is_empty() {
                println!("No report files found in the current directory.");
                println!();
                println!("Generate one with the evaluation pipeline, or point");
                println!("sprint-lens at an existing report:");
                println!("  sprint-lens path/to/res.json");
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    "No report files found",
                ));
            } else if reports.len() == 1 {
                println!("Found one report: {}", reports[0].display());
                println!();
                reports[0].clone()
            } else if skip_prompts {
                reports[0].clone()
            } else {
                prompt_report_selection(&reports)?
            }
        }
    };

    Ok(CliConfig {
        report_path,
        hours,
        recalibrate,
        skip_prompts,
    })
}
