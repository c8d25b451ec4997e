//! resume – writes the sample resume in every available format.
//!
//! Usage:
//!   resume [output_dir] [--stem NAME] [--text-only] [--blocks]
//!
//! Files are written as `<output_dir>/<stem>.txt` and `<output_dir>/<stem>.pdf`
//! (default: current directory, stem `resume`). A build without the `pdf`
//! feature skips the PDF with a hint instead of failing.

use std::{env, fs, path::PathBuf, process};

use resume_forge::block::blocks_to_json;
use resume_forge::sample::sample_resume;
use resume_forge::text::{render_text, RULE_WIDTH};
use resume_forge::{render_sections, OutputFormat};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut output_dir: Option<PathBuf> = None;
    let mut stem = "resume".to_string();
    let mut text_only = false;
    let mut dump_blocks = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--text-only" => text_only = true,
            "--blocks" => dump_blocks = true,
            "--stem" | "-s" => match iter.next() {
                Some(v) => stem = v.clone(),
                None => {
                    eprintln!("Error: --stem needs a value.");
                    print_usage(&args[0]);
                    process::exit(1);
                }
            },
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown flag: {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
            path => {
                if output_dir.is_some() {
                    eprintln!("Unexpected argument: {path}");
                    print_usage(&args[0]);
                    process::exit(1);
                }
                output_dir = Some(PathBuf::from(path));
            }
        }
    }

    let data = sample_resume();
    let blocks = render_sections(&data);

    if dump_blocks {
        println!("{}", blocks_to_json(&blocks));
        return;
    }

    let dir = output_dir.unwrap_or_else(|| PathBuf::from("."));
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("Error creating output directory '{}': {e}", dir.display());
        process::exit(1);
    }

    for format in OutputFormat::ALL {
        if text_only && format != OutputFormat::Text {
            continue;
        }
        let emitter = format.emitter_for(&data);
        let path = dir.join(format!("{stem}.{}", format.extension()));
        match emitter.save(&blocks, &path) {
            Ok(()) => eprintln!("Created: {}", path.display()),
            Err(e) if e.is_capability_unavailable() => {
                eprintln!("Skipped {} output: {e}", emitter.name());
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }

    let banner = "=".repeat(RULE_WIDTH);
    println!("{banner}");
    println!("GENERATED RESUME (TXT FORMAT):");
    println!("{banner}");
    println!("{}", render_text(&blocks));
    println!("{banner}");
}

fn print_usage(prog: &str) {
    eprintln!("resume – render the sample resume as text and PDF (resume-forge)");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog} [output_dir] [--stem NAME] [--text-only] [--blocks]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [output_dir]   Directory for the generated files (default: current directory)");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --stem, -s     File name stem (default: resume)");
    eprintln!("  --text-only    Write only the plain-text resume");
    eprintln!("  --blocks       Print the rendered block list as JSON and exit");
    eprintln!("  --help         Print this message");
}
