//! Fixed-height layout stages: header, document card, billing block,
//! financial summary, payment instructions and footer.
//!
//! Every stage takes the page geometry and the current cursor and returns the
//! cursor for the next stage; none of them touch shared state. The line-item
//! table, the only input-sized stage, lives in its own module.

use crate::config::{BankDetails, CompanyIdentity, CompanyProfile};
use crate::currency::{format_currency, format_date, truncate_text};
use crate::model::{BillTo, DocumentType, InvoiceRecord, InvoiceStatus};

use super::canvas::{Canvas, FONT_SCALE, PALETTE, PageGeometry, Rgb, Stroke};

/// Status→color lookup. Exhaustive on purpose: adding a status forces a
/// decision here, and anything unrecognized lands on the warning color.
pub(crate) fn status_color(status: &InvoiceStatus) -> Rgb {
    match status {
        InvoiceStatus::Draft => PALETTE.warning,
        InvoiceStatus::Unpaid => PALETTE.error,
        InvoiceStatus::Paid => PALETTE.success,
        InvoiceStatus::PartiallyPaid => PALETTE.accent,
        InvoiceStatus::Cancelled => PALETTE.text,
        InvoiceStatus::Other(_) => PALETTE.warning,
    }
}

/// Company identity bar. Static content; the geometry never varies with
/// invoice data, so the stage takes no cursor and returns the fixed one
/// below its accent rule.
pub(crate) fn header(c: &mut Canvas, geom: &PageGeometry, profile: &CompanyProfile) -> f32 {
    let g = &geom.header;
    let company = &profile.company;

    c.fill_rect(0.0, g.band_y, geom.width, g.band_h, Some(PALETTE.primary), None);

    c.text(geom.margin_left, g.name_y, FONT_SCALE.h1, PALETTE.primary, &company.name);
    c.text(geom.margin_left, g.tagline_y, FONT_SCALE.h4, PALETTE.accent, &company.tagline);

    let details = [
        format!("Reg: {}", company.registration_number),
        format!("Tax: {}", company.tax_id),
        format!("Web: {}", company.website),
    ];
    for (i, detail) in details.iter().enumerate() {
        let x = geom.margin_left + i as f32 * g.detail_col_w;
        c.text(x, g.details_y, FONT_SCALE.small, PALETTE.light_text, detail);
    }

    let contact = format!("Tel: {} | Email: {}", company.phone, company.email);
    c.text(geom.margin_left, g.contact_y, FONT_SCALE.small, PALETTE.light_text, &contact);
    c.text(
        geom.margin_left,
        g.address_y,
        FONT_SCALE.small,
        PALETTE.light_text,
        &profile.address.as_line(),
    );

    c.rule(geom.margin_left, g.rule_y, geom.content_right, g.rule_y, PALETTE.accent, 2.0);
    g.cursor_below
}

/// Two side-by-side cards (document type + status) and three date rows.
pub(crate) fn document_card(
    c: &mut Canvas,
    geom: &PageGeometry,
    record: &InvoiceRecord,
    doc_type: DocumentType,
    start_y: f32,
) -> f32 {
    let g = &geom.card;
    let card_bottom = start_y - g.card_h;

    c.fill_rect(geom.margin_left, card_bottom, g.card_w, g.card_h, Some(PALETTE.primary), None);
    let pad = geom.margin_left + g.pad_x;
    c.text(pad, start_y - g.title_dy, FONT_SCALE.h3, PALETTE.white, doc_type.label());
    c.text(pad, start_y - g.value_dy, FONT_SCALE.body, PALETTE.accent, &record.invoice_number);

    c.fill_rect(
        g.status_x,
        card_bottom,
        g.card_w,
        g.card_h,
        Some(status_color(&record.status)),
        None,
    );
    let status_pad = g.status_x + g.pad_x;
    c.text(status_pad, start_y - g.title_dy, FONT_SCALE.h3, PALETTE.white, "STATUS");
    c.text(
        status_pad,
        start_y - g.value_dy,
        FONT_SCALE.body,
        PALETTE.white,
        record.status.as_str(),
    );

    let reference = record.reference_number.as_deref().unwrap_or("N/A");
    let rows = [
        ("Invoice Date:", format_date(record.invoice_date)),
        ("Due Date:", format_date(record.due_date)),
        ("Reference:", reference.to_string()),
    ];
    let mut info_y = start_y - g.info_first_dy;
    for (label, value) in &rows {
        c.text(g.info_label_x, info_y, FONT_SCALE.small, PALETTE.dark_text, label);
        c.text(g.info_value_x, info_y, FONT_SCALE.small, PALETTE.primary, value);
        info_y -= g.info_step;
    }

    card_bottom - g.gap_below
}

/// Recipient panel. Absent optional fields leave no blank lines; present
/// lines pack contiguously below the display name.
pub(crate) fn billing_block(
    c: &mut Canvas,
    geom: &PageGeometry,
    bill_to: &BillTo,
    start_y: f32,
) -> f32 {
    let g = &geom.billing;
    let panel_y = start_y - g.panel_h;
    let pad = geom.margin_left + g.pad_x;

    c.fill_rect(
        geom.margin_left,
        panel_y,
        g.panel_w,
        g.panel_h,
        Some(PALETTE.light_bg),
        Some(Stroke { color: PALETTE.border, width: 1.0 }),
    );
    c.text(pad, panel_y + g.title_dy, FONT_SCALE.h4, PALETTE.primary, "BILL TO");

    let mut line_y = panel_y + g.name_dy;
    c.text(pad, line_y, FONT_SCALE.body, PALETTE.dark_text, bill_to.display_name());
    line_y -= g.name_step;

    let location = bill_to.location();
    let details = [
        bill_to.contact_person.as_deref(),
        bill_to.department.as_deref(),
        Some(location.as_str()),
        bill_to.email.as_deref(),
        bill_to.phone.as_deref(),
    ];
    for detail in details.into_iter().flatten() {
        if detail.is_empty() {
            continue;
        }
        c.text(
            pad,
            line_y,
            FONT_SCALE.small,
            PALETTE.text,
            &truncate_text(detail, g.max_chars),
        );
        line_y -= g.line_step;
    }

    panel_y - g.gap_below
}

/// Outputs of the financial summary needed downstream: the email body wants
/// the grand total, the next stage wants the cursor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SummaryTotals {
    pub vat_amount: f64,
    pub grand_total: f64,
    pub cursor: f32,
}

/// Subtotal, VAT and emphasized total-due rows facing the right margin.
pub(crate) fn financial_summary(
    c: &mut Canvas,
    geom: &PageGeometry,
    start_y: f32,
    subtotal: f64,
    vat_rate: f64,
    currency: &str,
) -> SummaryTotals {
    let g = &geom.summary;
    let border = Stroke { color: PALETTE.border, width: 1.0 };
    let value_right = g.x + g.value_right_dx;
    let mut y = start_y;

    c.fill_rect(g.x, y, g.width, g.row_h, Some(PALETTE.white), Some(border));
    c.text(g.x + g.label_dx, y + g.text_dy, FONT_SCALE.small, PALETTE.text, "Subtotal");
    c.text_right(
        value_right,
        y + g.text_dy,
        FONT_SCALE.small,
        PALETTE.dark_text,
        &format_currency(subtotal, currency),
    );
    y -= g.row_h;

    let vat_amount = subtotal * vat_rate / 100.0;
    c.fill_rect(g.x, y, g.width, g.row_h, Some(PALETTE.white), Some(border));
    c.text(
        g.x + g.label_dx,
        y + g.text_dy,
        FONT_SCALE.small,
        PALETTE.text,
        &format!("VAT ({}%)", vat_rate),
    );
    c.text_right(
        value_right,
        y + g.text_dy,
        FONT_SCALE.small,
        PALETTE.dark_text,
        &format_currency(vat_amount, currency),
    );
    y -= g.row_h;

    let grand_total = subtotal + vat_amount;
    c.fill_rect(
        g.x,
        y - 2.0,
        g.width,
        g.row_h + g.total_extra_h,
        Some(PALETTE.primary),
        None,
    );
    c.text(g.x + g.label_dx, y, FONT_SCALE.h4, PALETTE.white, "TOTAL DUE");
    c.text_right(
        value_right,
        y,
        FONT_SCALE.h4,
        PALETTE.accent,
        &format_currency(grand_total, currency),
    );

    SummaryTotals {
        vat_amount,
        grand_total,
        cursor: y - g.gap_below,
    }
}

/// Static bank transfer panel. Content never depends on invoice data, only
/// its vertical placement does.
pub(crate) fn payment_instructions(
    c: &mut Canvas,
    geom: &PageGeometry,
    bank: &BankDetails,
    start_y: f32,
) -> f32 {
    let g = &geom.payment;
    let panel_y = start_y - g.panel_h;
    let pad = geom.margin_left + g.pad_x;
    let width = geom.content_right - geom.margin_left - 5.0;

    c.fill_rect(
        geom.margin_left,
        panel_y,
        width,
        g.panel_h,
        Some(PALETTE.light_bg),
        Some(Stroke { color: PALETTE.border, width: 1.0 }),
    );
    c.text(pad, panel_y + g.title_dy, FONT_SCALE.h4, PALETTE.primary, "BANK TRANSFER DETAILS");

    let lines = [
        format!("Bank: {} ({})", bank.name, bank.bank_code),
        format!("Account Name: {}", bank.account_name),
        format!(
            "Account Number: {} | SWIFT: {}",
            bank.account_number, bank.swift_code
        ),
    ];
    let mut line_y = panel_y + g.line_dy;
    for line in &lines {
        c.text(
            pad,
            line_y,
            FONT_SCALE.small,
            PALETTE.text,
            &truncate_text(line, g.max_chars),
        );
        line_y -= g.line_step;
    }

    panel_y - 10.0
}

/// Page-absolute footer: anchored to the bottom edge no matter how much
/// content precedes it.
pub(crate) fn footer(c: &mut Canvas, geom: &PageGeometry, company: &CompanyIdentity) {
    let g = &geom.footer;

    c.fill_rect(0.0, 0.0, geom.width, g.band_h, Some(PALETTE.light_bg), None);
    c.rule(g.rule_x1, g.band_h, g.rule_x2, g.band_h, PALETTE.primary, 2.0);

    let identity = format!(
        "{} | Registration: {}",
        company.name, company.registration_number
    );
    c.text(geom.margin_left, g.line1_y, FONT_SCALE.tiny, PALETTE.dark_text, &identity);
    let contact = format!("{} | {}", company.email, company.phone);
    c.text(geom.margin_left, g.line2_y, FONT_SCALE.tiny, PALETTE.light_text, &contact);
    c.text(g.page_label_x, g.line1_y, FONT_SCALE.tiny, PALETTE.light_text, "Page 1 of 1");
}
