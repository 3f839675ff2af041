pub(crate) mod canvas;
mod stages;
mod table;

use pdf_writer::{Filter, Name, Pdf, Rect, Ref};

use crate::config::CompanyProfile;
use crate::error::Error;
use crate::fonts::register_helvetica;
use crate::model::InvoiceRecord;

use canvas::{Canvas, GEOMETRY};

/// Render one record into a complete single-page PDF.
///
/// Stages run top to bottom, each consuming the cursor the previous stage
/// produced; only the footer ignores the cursor and anchors to the page
/// bottom. The output is deterministic for identical input.
pub fn render(record: &InvoiceRecord, profile: &CompanyProfile) -> Result<Vec<u8>, Error> {
    let t0 = std::time::Instant::now();
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let page_id = alloc();
    let content_id = alloc();

    let font = register_helvetica(&mut pdf, alloc());
    let t_fonts = t0.elapsed();

    let geom = &GEOMETRY;
    let doc_type = record.resolved_document_type();
    let mut canvas = Canvas::new(&font);

    let cursor = stages::header(&mut canvas, geom, profile);
    let cursor = stages::document_card(
        &mut canvas,
        geom,
        record,
        doc_type,
        cursor - geom.card.gap_above,
    );
    let cursor = stages::billing_block(
        &mut canvas,
        geom,
        &record.bill_to,
        cursor - geom.billing.gap_above,
    );
    let (cursor, subtotal) = table::services_table(
        &mut canvas,
        geom,
        &record.services,
        &record.currency,
        cursor - geom.table.gap_above,
    );
    // Summary rows are bottom-anchored, so the first row starts one row
    // height below the gap.
    let totals = stages::financial_summary(
        &mut canvas,
        geom,
        cursor - geom.summary.gap_above - geom.summary.row_h,
        subtotal,
        record.vat_rate,
        &record.currency,
    );
    stages::payment_instructions(&mut canvas, geom, &profile.bank, totals.cursor);
    stages::footer(&mut canvas, geom, &profile.company);

    let t_layout = t0.elapsed();

    let raw = canvas.finish();
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
    pdf.stream(content_id, &compressed).filter(Filter::FlateDecode);

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id).kids([page_id]).count(1);
    pdf.page(page_id)
        .media_box(Rect::new(0.0, 0.0, geom.width, geom.height))
        .parent(pages_id)
        .contents(content_id)
        .resources()
        .fonts()
        .pair(Name(font.pdf_name.as_bytes()), font.font_ref);

    let t_assembly = t0.elapsed();

    log::info!(
        "Rendered {} {}: total={} lines, grand_total={:.2} {} (fonts={:.1}ms, layout={:.1}ms, assembly={:.1}ms)",
        doc_type.label(),
        record.invoice_number,
        record.services.len(),
        totals.grand_total,
        record.currency,
        t_fonts.as_secs_f64() * 1000.0,
        (t_layout - t_fonts).as_secs_f64() * 1000.0,
        (t_assembly - t_layout).as_secs_f64() * 1000.0,
    );

    Ok(pdf.finish())
}
