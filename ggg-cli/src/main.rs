//! Command-line interface for GGG documents
//!
//! Validate GGG files (interlinear glossed text in a YAML container) or
//! emit their BILOU encoding for downstream sequence-labeling pipelines.
//!
//! Usage:
//!   ggg `<path>`                          - Validate a single document
//!   ggg `<path>` --encode [--format fmt]  - Emit each record's encoding
//!   ggg --batch                           - Validate all .yml files in the working directory

use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

use ggg_parser::ggg::encoding::encode_ur;
use ggg_parser::ggg::loader::{decode_document, DocumentLoader};
use ggg_parser::ggg::render;
use ggg_parser::ggg::validation::validate_document;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("ggg")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for validating and encoding GGG interlinear gloss files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the GGG file (YAML container)")
                .required_unless_present("batch")
                .index(1),
        )
        .arg(
            Arg::new("batch")
                .long("batch")
                .short('b')
                .help("Validate all .yml files in the current directory")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("encode")
                .long("encode")
                .short('e')
                .help("Emit the merged UR/gloss BILOU encoding instead of validating")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Encoding output format: json or table")
                .default_value("json"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print each validation stage")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    if matches.get_flag("batch") {
        handle_batch_command(verbose);
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless batch mode");
    if matches.get_flag("encode") {
        let format = matches
            .get_one::<String>("format")
            .expect("format has a default");
        handle_encode_command(path, format);
    } else if !handle_validate_command(path, verbose) {
        std::process::exit(1);
    }
}

/// Validate one document, reporting each stage when verbose. Returns
/// whether the document is valid.
fn handle_validate_command(path: &str, verbose: bool) -> bool {
    println!("Validating {}...", path);

    let loader = match DocumentLoader::from_path(path) {
        Ok(loader) => loader,
        Err(err) => {
            eprintln!("{}", err);
            return false;
        }
    };

    if verbose {
        println!("valid YAML?...");
    }
    let value = match loader.value() {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{}", err);
            return false;
        }
    };

    if verbose {
        println!("valid fields?...");
    }
    let doc = match decode_document(value) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("{}", err);
            return false;
        }
    };

    if verbose {
        println!("valid forms/glosses?...");
    }
    if let Err(err) = validate_document(&doc) {
        eprintln!("{}", err);
        return false;
    }

    println!("Valid.");
    true
}

/// Validate every `.yml` file in the working directory, continuing past
/// failures. Exits nonzero if any file was invalid.
fn handle_batch_command(verbose: bool) {
    let paths = glob::glob("*.yml").expect("the batch glob pattern is valid");
    let mut all_valid = true;
    for entry in paths {
        match entry {
            Ok(path) => {
                if !handle_validate_command(&path.display().to_string(), verbose) {
                    all_valid = false;
                }
            }
            Err(err) => {
                eprintln!("Cannot read path: {}", err);
                all_valid = false;
            }
        }
    }
    if !all_valid {
        std::process::exit(1);
    }
}

/// Emit the BILOU encoding of every record in a document.
fn handle_encode_command(path: &str, format: &str) {
    let doc = DocumentLoader::from_path(path)
        .and_then(|loader| loader.document())
        .unwrap_or_else(|err| {
            eprintln!("{}", err);
            std::process::exit(1);
        });

    for (seg_id, seg) in doc.segs.iter().enumerate() {
        let chars = encode_ur(&seg.ur, &seg.gl).unwrap_or_else(|err| {
            eprintln!("Cannot encode Segment {}: {}", seg_id, err);
            std::process::exit(1);
        });
        match format {
            "table" => println!("{}", render::character_table(&chars)),
            "json" => {
                let json = render::character_json(&chars).unwrap_or_else(|err| {
                    eprintln!("Error formatting characters: {}", err);
                    std::process::exit(1);
                });
                println!("{}", json);
            }
            other => {
                eprintln!("Format '{}' not supported", other);
                eprintln!("Available formats: json, table");
                std::process::exit(1);
            }
        }
    }
}
