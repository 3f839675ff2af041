use billpress::{BillTo, CompanyProfile, InvoiceRecord, InvoiceStatus, ServiceLine};
use chrono::NaiveDate;

/// Extract and inflate the page content stream of a generated PDF.
///
/// The documents contain exactly one stream object (the Flate-compressed
/// page content), so the first stream..endstream span is the one we want.
pub fn content_ops(pdf: &[u8]) -> String {
    let start_marker = b"stream\n";
    let start = pdf
        .windows(start_marker.len())
        .position(|w| w == start_marker)
        .expect("content stream present")
        + start_marker.len();
    let end_marker = b"\nendstream";
    let end = start
        + pdf[start..]
            .windows(end_marker.len())
            .position(|w| w == end_marker)
            .expect("endstream marker present");

    let raw = miniz_oxide::inflate::decompress_to_vec_zlib(&pdf[start..end])
        .expect("valid zlib stream");
    String::from_utf8_lossy(&raw).into_owned()
}

pub fn service(description: &str, quantity: f64, unit_price: f64) -> ServiceLine {
    ServiceLine {
        description: description.to_string(),
        quantity,
        unit_price,
        unit: None,
    }
}

/// A record matching the demo profile's typical input: one consulting line,
/// USD, default VAT.
pub fn sample_record() -> InvoiceRecord {
    InvoiceRecord {
        document_type: None,
        invoice_number: "INV-042".to_string(),
        reference_number: Some("PO-9917".to_string()),
        invoice_date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(),
        status: InvoiceStatus::Unpaid,
        currency: "USD".to_string(),
        vat_rate: 7.5,
        bill_to: BillTo {
            company_name: Some("Acme Holdings Ltd".to_string()),
            city: "Lagos".to_string(),
            country: Some("Nigeria".to_string()),
            ..BillTo::default()
        },
        services: vec![service("Consulting services", 2.0, 100.0)],
    }
}

pub fn profile() -> CompanyProfile {
    CompanyProfile::default()
}
