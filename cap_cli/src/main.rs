//! # Supercapacitor Bank Calculator CLI
//!
//! Terminal front end for `cap_core`.
//!
//! Usage:
//!   cap_cli                          Interactive: enter cell values, view results, repeat
//!   cap_cli --input <params.json>    Calculate once from a JSON parameters file
//!
//! Options:
//!   --settings <file>   Load calculation settings (precision, domain policy)
//!   --json              Also print the results as JSON
//!   -h, --help          Show this message

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use cap_core::calculations::bank::{calculate_with, CellParameters, ResultSet};
use cap_core::errors::{CalcError, CalcResult};
use cap_core::form::{CellForm, ALL_FIELDS};
use cap_core::report::{render_json, render_table, report_rows};
use cap_core::settings::CalcSettings;

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    input: Option<PathBuf>,
    settings: Option<PathBuf>,
    json: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" | "--settings" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} needs a file path", args[i]))?;
                if args[i] == "--input" {
                    options.input = Some(PathBuf::from(value));
                } else {
                    options.settings = Some(PathBuf::from(value));
                }
                i += 1;
            }
            "--json" => options.json = true,
            "-h" | "--help" => options.help = true,
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn print_usage() {
    println!("Supercapacitor Bank Calculator");
    println!();
    println!("Usage:");
    println!("  cap_cli                          Interactive input");
    println!("  cap_cli --input <params.json>    Calculate from a JSON parameters file");
    println!();
    println!("Options:");
    println!("  --settings <file>   Load settings JSON (decimal_places, domain_policy)");
    println!("  --json              Also print results as JSON");
    println!("  -h, --help          Show this message");
}

/// Print a prompt and read one line. `None` on end of input.
fn prompt_text(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim_end_matches(&['\r', '\n'][..]).to_string()),
    }
}

/// The input screen: one prompt per field. `None` if input ends midway.
fn prompt_form() -> Option<CellForm> {
    println!("═══════════════════════════════════════");
    println!("  CELL PARAMETERS");
    println!("═══════════════════════════════════════");
    println!("  (volume may be left blank if diameter and height are given)");
    println!();

    let mut form = CellForm::default();
    for field in ALL_FIELDS {
        let unit = if field.unit().is_empty() {
            String::new()
        } else {
            format!(" [{}]", field.unit())
        };
        let optional = if field.is_required() { "" } else { " (optional)" };
        let text = prompt_text(&format!("  {}{}{}: ", field.label(), unit, optional))?;
        form.set(field, text);
    }
    Some(form)
}

/// The result screen.
fn print_results(result: &ResultSet, settings: &CalcSettings, json: bool) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  BANK CALCULATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    print!("{}", render_table(&report_rows(result, settings)));

    let non_finite = result.non_finite_metrics();
    if !non_finite.is_empty() {
        println!();
        println!(
            "Note: {} value(s) are not finite (zero or negative divisor in the input)",
            non_finite.len()
        );
    }

    if json {
        println!();
        println!("JSON Output:");
        match render_json(result) {
            Ok(text) => println!("{}", text),
            Err(e) => report_error(&e),
        }
    }
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn load_params(path: &Path) -> CalcResult<CellParameters> {
    let json = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(serde_json::from_str(&json)?)
}

fn run_batch(path: &Path, settings: &CalcSettings, json: bool) -> CalcResult<()> {
    let params = load_params(path)?;
    let result = calculate_with(&params, settings)?;
    print_results(&result, settings, json);
    Ok(())
}

fn run_interactive(settings: &CalcSettings, json: bool) {
    println!("Supercapacitor Bank Calculator");
    println!();

    loop {
        let Some(form) = prompt_form() else {
            println!();
            return;
        };

        match form.calculate(settings) {
            Ok(result) => print_results(&result, settings, json),
            Err(e) => {
                println!();
                report_error(&e);
            }
        }

        println!();
        match prompt_text("Press Enter to go back, or 'q' to quit: ") {
            Some(answer) if !answer.trim().eq_ignore_ascii_case("q") => println!(),
            _ => return,
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!();
            print_usage();
            process::exit(2);
        }
    };

    if options.help {
        print_usage();
        return;
    }

    let settings = match &options.settings {
        Some(path) => match CalcSettings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                report_error(&e);
                process::exit(1);
            }
        },
        None => CalcSettings::default(),
    };

    match &options.input {
        Some(path) => {
            if let Err(e) = run_batch(path, &settings, options.json) {
                report_error(&e);
                process::exit(1);
            }
        }
        None => run_interactive(&settings, options.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_is_interactive() {
        assert_eq!(parse_args(&[]).unwrap(), CliOptions::default());
    }

    #[test]
    fn test_parse_all_options() {
        let options = parse_args(&args(&["--input", "bank.json", "--settings", "s.json", "--json"])).unwrap();
        assert_eq!(options.input, Some(PathBuf::from("bank.json")));
        assert_eq!(options.settings, Some(PathBuf::from("s.json")));
        assert!(options.json);
        assert!(!options.help);
    }

    #[test]
    fn test_missing_option_value() {
        let err = parse_args(&args(&["--input"])).unwrap_err();
        assert!(err.contains("--input"));
    }

    #[test]
    fn test_unknown_option() {
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }

    #[test]
    fn test_load_params_file() {
        let path = env::temp_dir().join(format!("cap_cli_params_{}.json", process::id()));
        fs::write(
            &path,
            r#"{"num_cells": 2, "num_circuits": 1, "capacitance_one_cell": 10,
                "max_voltage_one_cell": 2.7, "min_voltage_one_cell": 0,
                "current_draw": 1, "mass_one_cell": 5, "volume_one_cell_mm3": 1000}"#,
        )
        .unwrap();

        let params = load_params(&path).unwrap();
        assert_eq!(params.num_cells, 2.0);
        assert_eq!(params.volume_one_cell_mm3, Some(1000.0));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_params_errors() {
        let err = load_params(Path::new("/nonexistent/bank.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");

        let path = env::temp_dir().join(format!("cap_cli_bad_{}.json", process::id()));
        fs::write(&path, r#"{"num_cells": 2}"#).unwrap();
        let err = load_params(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        fs::remove_file(&path).unwrap();
    }
}
