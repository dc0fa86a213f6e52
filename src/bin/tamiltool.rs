use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use tamil_roman::translit::convert;
use tamil_roman::walker;

#[derive(Parser)]
#[command(name = "tamiltool", about = "Tamil script romanization")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a source file or directory into its mirrored converted/ output
    Convert {
        /// Source file or directory of files to romanize
        source: PathBuf,
        /// Explicit target file (single-file sources only)
        #[arg(long)]
        target: Option<PathBuf>,
    },

    /// Romanize a single line of text to stdout
    Line {
        /// Tamil text to romanize
        text: String,
    },

    /// Record romanizations for a file of lines to JSONL
    Snapshot {
        /// Path to the input file (one line of Tamil text per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
    },

    /// Compare current romanizations against a saved snapshot
    DiffSnapshot {
        /// Path to the input file (one line of Tamil text per line)
        input_file: String,
        /// Path to the baseline JSONL snapshot file
        baseline_file: String,
    },
}

/// A single snapshot entry (one per input line).
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEntry {
    line: String,
    romanized: String,
}

fn read_lines(input_file: &str) -> Vec<String> {
    let file = File::open(input_file).unwrap_or_else(|e| {
        eprintln!("Failed to open input file {}: {}", input_file, e);
        process::exit(1);
    });
    BufReader::new(file)
        .lines()
        .map(|l| {
            l.unwrap_or_else(|e| {
                eprintln!("Failed to read line: {}", e);
                process::exit(1);
            })
        })
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

fn main() {
    let _guard = tamil_roman::trace_init::init_tracing(&std::env::temp_dir());
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { source, target } => {
            let result = match target {
                Some(target) => walker::convert_file(&source, &target),
                None => walker::convert_path(&source),
            };
            if let Err(e) = result {
                eprintln!("Failed to convert {}: {}", source.display(), e);
                process::exit(1);
            }
        }

        Command::Line { text } => {
            println!("{}", convert(&text));
        }

        Command::Snapshot {
            input_file,
            output_file,
        } => {
            let lines = read_lines(&input_file);

            let file = File::create(&output_file).unwrap_or_else(|e| {
                eprintln!("Failed to create output file {}: {}", output_file, e);
                process::exit(1);
            });
            let mut writer = BufWriter::new(file);

            for line in &lines {
                let entry = SnapshotEntry {
                    line: line.clone(),
                    romanized: convert(line),
                };
                let json = serde_json::to_string(&entry).expect("JSON serialization failed");
                writeln!(writer, "{}", json).unwrap_or_else(|e| {
                    eprintln!("Failed to write: {}", e);
                    process::exit(1);
                });
            }

            eprintln!("Snapshot written: {} lines -> {}", lines.len(), output_file);
        }

        Command::DiffSnapshot {
            input_file,
            baseline_file,
        } => {
            let lines = read_lines(&input_file);

            let baseline_content = fs::read_to_string(&baseline_file).unwrap_or_else(|e| {
                eprintln!("Failed to read baseline file {}: {}", baseline_file, e);
                process::exit(1);
            });
            let mut baseline = std::collections::HashMap::new();
            for line in baseline_content.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                let entry: SnapshotEntry = serde_json::from_str(line).unwrap_or_else(|e| {
                    eprintln!("Failed to parse baseline JSONL: {}", e);
                    process::exit(1);
                });
                baseline.insert(entry.line.clone(), entry);
            }

            let mut changed = 0usize;
            let mut new_count = 0usize;
            for line in &lines {
                let current = convert(line);
                match baseline.get(line) {
                    Some(base) if base.romanized == current => {}
                    Some(base) => {
                        changed += 1;
                        println!("CHANGED {}", line);
                        println!("  baseline: {}", base.romanized);
                        println!("  current:  {}", current);
                    }
                    None => {
                        new_count += 1;
                        println!("NEW     {}", line);
                        println!("  current:  {}", current);
                    }
                }
            }

            eprintln!(
                "Compared {} lines: {} changed, {} not in baseline",
                lines.len(),
                changed,
                new_count
            );
            if changed > 0 {
                process::exit(1);
            }
        }
    }
}
