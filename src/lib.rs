mod config;
mod currency;
mod error;
mod fonts;
mod model;
mod pdf;

pub use config::{BankDetails, CompanyAddress, CompanyIdentity, CompanyProfile};
pub use currency::{Currency, DEFAULT_CODE, format_currency, is_supported, lookup, supported_currencies};
pub use error::Error;
pub use model::{BillTo, DocumentType, InvoiceRecord, InvoiceStatus, ServiceLine, Totals};

use std::path::Path;
use std::time::Instant;

/// Render a record into PDF bytes using the given company profile.
pub fn generate_document(
    record: &InvoiceRecord,
    profile: &CompanyProfile,
) -> Result<Vec<u8>, Error> {
    pdf::render(record, profile)
}

/// Parse a JSON record from `input`, render it and write the PDF to `output`.
pub fn generate_document_file(
    input: &Path,
    profile: &CompanyProfile,
    output: &Path,
) -> Result<(), Error> {
    let t0 = Instant::now();

    let data = std::fs::read(input).map_err(Error::Io)?;
    let record: InvoiceRecord = serde_json::from_slice(&data)?;
    let t_parse = t0.elapsed();

    let bytes = pdf::render(&record, profile)?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: parse={:.1}ms, render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_parse.as_secs_f64() * 1000.0,
        (t_render - t_parse).as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}
