use clap::Parser;
use json_schema_to_dart::generate_models;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "json-schema-to-dart")]
#[command(about = "Generate Dart model classes from a JSON Schema definitions table", long_about = None)]
struct Cli {
    /// Input JSON Schema file (use '-' for stdin)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Directory the model tree is generated into
    #[arg(value_name = "OUT_DIR")]
    out_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Read input
    let schema_text = if cli.input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&cli.input)?
    };

    // Generate models
    let report = generate_models(&schema_text, &cli.out_dir)?;

    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }

    println!(
        "Generated {} file(s) under {}",
        report.written.len(),
        cli.out_dir.display()
    );
    for path in &report.written {
        println!("  {}", path.display());
    }

    Ok(())
}
