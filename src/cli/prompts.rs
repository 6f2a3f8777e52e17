//! User prompt functions for interactive CLI input.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::calibration::DEFAULT_MAX_COMPLEXITY_HOURS;

/// Find report files in the current directory: JSON files whose top level
/// carries both a `metadata` and a `data` key.
pub fn find_report_files() -> Vec<PathBuf> {
    let mut reports = Vec::new();

    if let Ok(entries) = std::fs::read_dir(".") {
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            if looks_like_report(&path) {
                reports.push(path);
            }
        }
    }

    reports.sort();
    reports
}

fn looks_like_report(path: &PathBuf) -> bool {
    let Ok(content) = std::fs::read_to_string(path) else {
        return false;
    };
    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(value) => {
            value.get("metadata").is_some() && value.get("data").is_some_and(|d| d.is_array())
        }
        Err(_) => false,
    }
}

/// Get report info for display: (project, sprint, story count)
pub fn get_report_info(path: &PathBuf) -> (String, String, usize) {
    let content = std::fs::read_to_string(path).unwrap_or_default();

    if let Ok(report) = serde_json::from_str::<serde_json::Value>(&content) {
        let project = report
            .pointer("/metadata/proyecto")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown project")
            .to_string();

        let sprint = report
            .pointer("/metadata/sprint")
            .and_then(|v| v.as_str())
            .map(crate::utils::friendly_sprint_name)
            .unwrap_or_else(|| "unknown sprint".to_string());

        let stories = report
            .get("data")
            .and_then(|v| v.as_array())
            .map(|arr| arr.len())
            .unwrap_or(0);

        (project, sprint, stories)
    } else {
        ("Unable to parse report".to_string(), String::new(), 0)
    }
}

/// Display report selection prompt and return the selected file
pub fn prompt_report_selection(reports: &[PathBuf]) -> io::Result<PathBuf> {
    println!();
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║  Sprint Lens - Select a Report                                ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Reports found:");
    println!();

    for (i, report) in reports.iter().enumerate() {
        let (project, sprint, stories) = get_report_info(report);
        println!(
            "  {}) {:30} {} / {} ({} stories)",
            i + 1,
            report.display().to_string(),
            project,
            sprint,
            stories
        );
    }

    println!();
    print!("Select report [1-{}]: ", reports.len());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let selection: usize = input
        .trim()
        .parse()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Invalid selection"))?;

    if selection < 1 || selection > reports.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Selection out of range",
        ));
    }

    println!();
    println!("Selected: {}", reports[selection - 1].display());
    println!();

    Ok(reports[selection - 1].clone())
}

/// One-time calibration setup. Explains the complexity scale and asks how
/// many hours a maximum-complexity story takes; non-positive input is
/// rejected here so the estimation engine never sees it.
pub fn prompt_calibration(current: Option<f64>) -> io::Result<f64> {
    let default = current.unwrap_or(DEFAULT_MAX_COMPLEXITY_HOURS);

    println!();
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║  Calibration                                                  ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Story complexity is rated from 1 (very simple) to 5 (very");
    println!("  complex). To turn those ratings into hours, sprint-lens needs");
    println!("  one reference point for your team:");
    println!();

    loop {
        print!("  Hours of real work for a complexity-5 story [{}]: ", default);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            return Ok(default);
        }

        match input.parse::<f64>() {
            Ok(hours) if hours.is_finite() && hours > 0.0 => return Ok(hours),
            _ => {
                eprintln!("  Please enter a positive number of hours.");
            }
        }
    }
}
