use std::path::PathBuf;

use clap::Parser;

use billpress::{CompanyProfile, Error, InvoiceRecord};

#[derive(Parser)]
#[command(name = "billpress")]
#[command(version, about = "Render invoice and receipt PDFs from JSON records", long_about = None)]
struct Cli {
    /// Path to the invoice record (JSON)
    input: PathBuf,

    /// Company profile (TOML); the built-in demo profile is used if omitted
    #[arg(short = 'C', long, value_name = "FILE")]
    company: Option<PathBuf>,

    /// Output path; derived from the record when omitted,
    /// e.g. Invoice_INV-042.pdf
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    let profile = match cli.company {
        Some(path) => CompanyProfile::from_toml_file(&path)?,
        None => CompanyProfile::default(),
    };

    let data = std::fs::read(&cli.input).map_err(Error::Io)?;
    let record: InvoiceRecord = serde_json::from_slice(&data)?;

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(record.document_file_name()));

    let bytes = billpress::generate_document(&record, &profile)?;
    std::fs::write(&output, &bytes).map_err(Error::Io)?;
    println!("Wrote {} ({} bytes)", output.display(), bytes.len());

    Ok(())
}
