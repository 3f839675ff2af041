use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Document framing: an invoice requests payment, a receipt confirms one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Invoice,
    Receipt,
}

impl DocumentType {
    /// Badge text drawn on the document card.
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Invoice => "INVOICE",
            DocumentType::Receipt => "RECEIPT",
        }
    }

    /// Framing derived from payment status: a paid record goes out as a
    /// receipt, everything else as an invoice.
    pub fn for_status(status: &InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Paid => DocumentType::Receipt,
            _ => DocumentType::Invoice,
        }
    }
}

/// Payment status of a record.
///
/// Unknown wire values are preserved as [`InvoiceStatus::Other`] so the
/// status card can render them literally; they are never a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    Draft,
    Unpaid,
    Paid,
    PartiallyPaid,
    Cancelled,
    Other(String),
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InvoiceStatus::Draft => "DRAFT",
            InvoiceStatus::Unpaid => "UNPAID",
            InvoiceStatus::Paid => "PAID",
            InvoiceStatus::PartiallyPaid => "PARTIALLY_PAID",
            InvoiceStatus::Cancelled => "CANCELLED",
            InvoiceStatus::Other(s) => s,
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "DRAFT" => InvoiceStatus::Draft,
            "UNPAID" => InvoiceStatus::Unpaid,
            "PAID" => InvoiceStatus::Paid,
            "PARTIALLY_PAID" => InvoiceStatus::PartiallyPaid,
            "CANCELLED" => InvoiceStatus::Cancelled,
            _ => InvoiceStatus::Other(s),
        }
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Recipient identity for the billing panel.
///
/// Only a display name (company or personal) and a city are needed for a
/// non-degenerate render; every other field is optional and simply omitted
/// from the panel when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillTo {
    pub company_name: Option<String>,
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub department: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl BillTo {
    /// Company name preferred, else personal name.
    pub fn display_name(&self) -> &str {
        self.company_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.name.as_deref())
            .unwrap_or("")
    }

    /// "City, state-or-country" line; state wins when both are present.
    pub fn location(&self) -> String {
        let region = self
            .state
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.country.as_deref())
            .unwrap_or("");
        if region.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, region)
        }
    }
}

/// One billable line item. Display order is input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLine {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

impl ServiceLine {
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }

    pub fn unit_label(&self) -> &str {
        self.unit.as_deref().unwrap_or("Unit")
    }
}

/// Amounts derived from a record. Full f64 precision; rounding to two
/// fraction digits happens only at display time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub vat_amount: f64,
    pub grand_total: f64,
}

fn default_currency() -> String {
    "NGN".to_string()
}

fn default_vat_rate() -> f64 {
    7.5
}

fn default_status() -> InvoiceStatus {
    InvoiceStatus::Unpaid
}

/// The input to a render, immutable for the duration of the pass.
///
/// Field names follow the JSON wire shape of the billing API
/// (`invoiceNumber`, `billTo`, `unitPrice`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    #[serde(default)]
    pub document_type: Option<DocumentType>,
    pub invoice_number: String,
    #[serde(default)]
    pub reference_number: Option<String>,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default = "default_status")]
    pub status: InvoiceStatus,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,
    pub bill_to: BillTo,
    pub services: Vec<ServiceLine>,
}

impl InvoiceRecord {
    /// Explicit document type if set, otherwise derived from status.
    pub fn resolved_document_type(&self) -> DocumentType {
        self.document_type
            .unwrap_or_else(|| DocumentType::for_status(&self.status))
    }

    /// Subtotal, VAT and grand total for this record.
    pub fn totals(&self) -> Totals {
        let subtotal: f64 = self.services.iter().map(ServiceLine::line_total).sum();
        let vat_amount = subtotal * self.vat_rate / 100.0;
        Totals {
            subtotal,
            vat_amount,
            grand_total: subtotal + vat_amount,
        }
    }

    /// Attachment / Content-Disposition file name, e.g. `Invoice_INV-042.pdf`.
    pub fn document_file_name(&self) -> String {
        let kind = match self.resolved_document_type() {
            DocumentType::Invoice => "Invoice",
            DocumentType::Receipt => "Receipt",
        };
        format!("{}_{}.pdf", kind, self.invoice_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: InvoiceStatus, services: Vec<ServiceLine>, vat_rate: f64) -> InvoiceRecord {
        InvoiceRecord {
            document_type: None,
            invoice_number: "INV-001".to_string(),
            reference_number: None,
            invoice_date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(),
            status,
            currency: "USD".to_string(),
            vat_rate,
            bill_to: BillTo {
                company_name: Some("Acme Ltd".to_string()),
                city: "Lagos".to_string(),
                ..BillTo::default()
            },
            services,
        }
    }

    fn line(qty: f64, price: f64) -> ServiceLine {
        ServiceLine {
            description: "Consulting".to_string(),
            quantity: qty,
            unit_price: price,
            unit: None,
        }
    }

    #[test]
    fn totals_sum_line_items() {
        let r = record(
            InvoiceStatus::Unpaid,
            vec![line(2.0, 100.0), line(1.0, 50.0)],
            7.5,
        );
        let t = r.totals();
        assert_eq!(t.subtotal, 250.0);
        assert!((t.vat_amount - 18.75).abs() < 1e-9);
        assert!((t.grand_total - 268.75).abs() < 1e-9);
    }

    #[test]
    fn totals_on_empty_service_list() {
        let t = record(InvoiceStatus::Unpaid, vec![], 7.5).totals();
        assert_eq!(t.subtotal, 0.0);
        assert_eq!(t.vat_amount, 0.0);
        assert_eq!(t.grand_total, 0.0);
    }

    #[test]
    fn zero_vat_rate_leaves_grand_total_at_subtotal() {
        let t = record(InvoiceStatus::Unpaid, vec![line(3.0, 10.0)], 0.0).totals();
        assert_eq!(t.vat_amount, 0.0);
        assert_eq!(t.grand_total, t.subtotal);
    }

    #[test]
    fn unknown_status_round_trips_literally() {
        let status = InvoiceStatus::from("ON_HOLD".to_string());
        assert_eq!(status, InvoiceStatus::Other("ON_HOLD".to_string()));
        assert_eq!(status.as_str(), "ON_HOLD");
    }

    #[test]
    fn paid_record_resolves_to_receipt() {
        let r = record(InvoiceStatus::Paid, vec![line(1.0, 1.0)], 7.5);
        assert_eq!(r.resolved_document_type(), DocumentType::Receipt);
        assert_eq!(r.document_file_name(), "Receipt_INV-001.pdf");
    }

    #[test]
    fn explicit_document_type_wins_over_status() {
        let mut r = record(InvoiceStatus::Paid, vec![line(1.0, 1.0)], 7.5);
        r.document_type = Some(DocumentType::Invoice);
        assert_eq!(r.resolved_document_type(), DocumentType::Invoice);
    }

    #[test]
    fn bill_to_prefers_company_name() {
        let bt = BillTo {
            company_name: Some("Acme Ltd".to_string()),
            name: Some("Ada".to_string()),
            city: "Lagos".to_string(),
            ..BillTo::default()
        };
        assert_eq!(bt.display_name(), "Acme Ltd");

        let bt2 = BillTo {
            name: Some("Ada".to_string()),
            city: "Lagos".to_string(),
            ..BillTo::default()
        };
        assert_eq!(bt2.display_name(), "Ada");
    }

    #[test]
    fn location_falls_back_to_country() {
        let bt = BillTo {
            city: "Nairobi".to_string(),
            country: Some("Kenya".to_string()),
            ..BillTo::default()
        };
        assert_eq!(bt.location(), "Nairobi, Kenya");
    }

    #[test]
    fn record_deserializes_from_wire_json() {
        let json = r#"{
            "invoiceNumber": "INV-9",
            "invoiceDate": "2025-01-05",
            "dueDate": "2025-02-04",
            "status": "ON_HOLD",
            "billTo": { "companyName": "Acme Ltd", "city": "Lagos" },
            "services": [
                { "description": "Consulting", "quantity": 2, "unitPrice": 100 }
            ]
        }"#;
        let r: InvoiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.currency, "NGN");
        assert_eq!(r.vat_rate, 7.5);
        assert_eq!(r.status, InvoiceStatus::Other("ON_HOLD".to_string()));
        assert_eq!(r.services[0].line_total(), 200.0);
    }
}
