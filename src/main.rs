//! Sheep - A spreadsheet with a small integer formula language

mod config;
mod edits;
mod error;
mod export;

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use sheep_core::{Sheet, SheetView};
use sheep_engine::engine::CellLocation;

use edits::Edit;

fn print_usage() {
    eprintln!("Usage: sheep [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <FILE>           Load sheet settings from a TOML file");
    eprintln!("  -e, --edit <CELL:FORMULA> Apply an edit (can be repeated)");
    eprintln!("  -i, --input <FILE>        Apply edits from a file, one per line (- for stdin)");
    eprintln!("  -d, --dependents <CELL>   Print the cells depending on CELL instead of the grid");
    eprintln!("  -o, --output <FILE>       Export to markdown file");
    eprintln!("  -h, --help                Print help");
}

struct Options {
    config_file: Option<PathBuf>,
    edits: Vec<Edit>,
    input_files: Vec<String>,
    dependents: Option<CellLocation>,
    output_file: Option<PathBuf>,
}

fn next_value<'a>(args: &'a [String], i: &mut usize, what: &str) -> &'a str {
    *i += 1;
    if *i >= args.len() {
        eprintln!("Error: {} requires {}", args[*i - 1], what);
        std::process::exit(1);
    }
    &args[*i]
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        config_file: None,
        edits: Vec::new(),
        input_files: Vec::new(),
        dependents: None,
        output_file: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "--config" => {
                options.config_file = Some(PathBuf::from(next_value(args, &mut i, "a file path")));
            }
            "-e" | "--edit" => match Edit::parse(next_value(args, &mut i, "an edit")) {
                Ok(edit) => options.edits.push(edit),
                Err(message) => {
                    eprintln!("Error: {}", message);
                    std::process::exit(1);
                }
            },
            "-i" | "--input" => {
                options
                    .input_files
                    .push(next_value(args, &mut i, "a file path").to_string());
            }
            "-d" | "--dependents" => match next_value(args, &mut i, "a cell").parse() {
                Ok(location) => options.dependents = Some(location),
                Err(message) => {
                    eprintln!("Error: {}", message);
                    std::process::exit(1);
                }
            },
            "-o" | "--output" => {
                options.output_file = Some(PathBuf::from(next_value(args, &mut i, "a file path")));
            }
            arg => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    options
}

/// Apply every edit, reporting failures. Returns whether all edits succeeded.
fn apply_edits(sheet: &mut Sheet, edits: &[Edit]) -> bool {
    let mut ok = true;
    for edit in edits {
        let location = edit.location;
        if let Err(e) = sheet.update(location.row(), location.column(), &edit.formula) {
            eprintln!("Error: {}: {}", location, e);
            ok = false;
        }
    }
    ok
}

fn run(options: Options) -> anyhow::Result<bool> {
    let (config, warnings) = config::load_config(options.config_file.as_ref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let mut sheet = config.build_sheet().context("Invalid sheet configuration")?;

    let mut ok = true;
    for input in &options.input_files {
        let read = if input == "-" {
            edits::read_edits(io::stdin().lock())
        } else {
            let file = File::open(input).with_context(|| format!("Failed to open {}", input))?;
            edits::read_edits(BufReader::new(file))
        };
        let edits = read.with_context(|| format!("Failed to read edits from {}", input))?;
        ok &= apply_edits(&mut sheet, &edits);
    }
    ok &= apply_edits(&mut sheet, &options.edits);

    if let Some(location) = options.dependents {
        let mut dependents: Vec<CellLocation> = sheet.dependents_of(&location).into_iter().collect();
        dependents.sort_by_key(|cell| (cell.column(), cell.row()));
        for cell in dependents {
            println!("{}", cell);
        }
    } else if let Some(output_path) = options.output_file {
        export::write_markdown(&output_path, &sheet as &dyn SheetView)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        println!("Exported to {}", output_path.display());
    } else {
        export::write_table(&mut io::stdout().lock(), &sheet)?;
    }

    Ok(ok)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    match run(options) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
