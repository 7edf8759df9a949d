// formpane: pick which programs to run, with their documentation alongside

use std::fs;
use std::path::Path;

use formpane::form::{Binding, Confirm, Form, Input, MultiSelect, Select};
use formpane::{Interaction, ScreenConfig};

const PROGRAMS: [&str; 4] = ["fastqc", "trimmomatic", "bwa", "samtools"];

const REFERENCES: [&str; 3] = ["GRCh38", "GRCh37", "T2T-CHM13"];

const DEFAULT_DOCS: &str = "\
Programs

Toggle the programs the pipeline should run. At least one must stay enabled.

fastqc
  Quality control report for raw reads.

trimmomatic
  Adapter and quality trimming.

bwa
  Aligns reads against the reference.

samtools
  Sorts and indexes the alignments.

Reference

Genome build the reads are aligned against.

Output directory

Where results are written. Created if missing.

Dry run

Print the commands instead of running them.";

fn required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(String::from("an output directory is required"))
    } else {
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_path = formpane::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("formpane");

    let documentation = match args.get(1) {
        Some(doc_file) => {
            if !Path::new(doc_file).exists() {
                eprintln!("Error: File '{}' not found", doc_file);
                eprintln!("Usage: {} [documentation.txt]", program_name);
                std::process::exit(1);
            }
            fs::read_to_string(doc_file)?
        }
        None => DEFAULT_DOCS.to_string(),
    };

    let enabled = Binding::new(vec![true; PROGRAMS.len()]);
    let out_dir = Binding::new(String::from("./results"));
    let reference = Binding::new(0);
    let dry_run = Binding::new(false);

    let config = ScreenConfig::default()
        .with_title("pipeline setup")
        .with_doc_title("Programs and options");
    let result = Interaction::new(&documentation).with_config(config).run(
        || {
            Form::new(vec![])
                .with_field(
                    MultiSelect::new("Programs", PROGRAMS, &enabled)
                        .description("x toggles, a toggles all"),
                )
                .with_field(
                    Select::new("Reference", REFERENCES, &reference).description("used by bwa"),
                )
                .with_field(
                    Input::new("Output directory", &out_dir)
                        .placeholder("./results")
                        .validate(required),
                )
                .with_field(
                    Confirm::new("Dry run?", &dry_run)
                        .description("print commands only")
                        .affirmative("Print")
                        .negative("Run"),
                )
        },
        || enabled.borrow().iter().any(|&on| on),
    );

    if let Err(cancelled) = result {
        eprintln!("{}", cancelled);
        std::process::exit(130);
    }

    let selected: Vec<&str> = PROGRAMS
        .iter()
        .zip(enabled.get())
        .filter_map(|(name, on)| on.then_some(*name))
        .collect();
    println!("programs:   {}", selected.join(", "));
    println!("reference:  {}", REFERENCES[reference.get()]);
    println!("output dir: {}", out_dir.get());
    println!("dry run:    {}", dry_run.get());
    if let Some(path) = log_path {
        eprintln!("log written to {}", path.display());
    }

    Ok(())
}
