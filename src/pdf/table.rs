//! Line-item table stage — the only stage whose height depends on input size.

use crate::currency::{format_currency, truncate_text};
use crate::model::ServiceLine;

use super::canvas::{Canvas, FONT_SCALE, PALETTE, PageGeometry, Rgb, Stroke};

/// Row tint is a pure function of row index parity, for readability only.
pub(crate) fn row_fill(index: usize) -> Rgb {
    if index % 2 == 0 {
        PALETTE.light_bg
    } else {
        PALETTE.white
    }
}

/// Draw the column-header row and one fixed-height row per service line, in
/// input order. Returns the cursor below the last row together with the
/// running subtotal — the join point feeding the financial summary.
///
/// An empty list still draws the header row and yields a zero subtotal.
pub(crate) fn services_table(
    c: &mut Canvas,
    geom: &PageGeometry,
    services: &[ServiceLine],
    currency: &str,
    start_y: f32,
) -> (f32, f64) {
    let g = &geom.table;
    let x = geom.margin_left;
    let mut row_bottom = start_y - g.header_h;

    c.fill_rect(x, row_bottom, g.width, g.header_h, Some(PALETTE.primary), None);
    let header_y = row_bottom + g.header_text_dy;
    c.text(x + g.desc_dx, header_y, FONT_SCALE.small, PALETTE.white, "SERVICE DESCRIPTION");
    c.text(x + g.qty_dx, header_y, FONT_SCALE.small, PALETTE.white, "QTY");
    c.text(x + g.price_dx, header_y, FONT_SCALE.small, PALETTE.white, "UNIT PRICE");
    c.text(x + g.amount_dx, header_y, FONT_SCALE.small, PALETTE.white, "AMOUNT");

    let border = Stroke { color: PALETTE.border, width: 1.0 };
    let mut subtotal = 0.0f64;

    for (row, service) in services.iter().enumerate() {
        let line_total = service.line_total();
        subtotal += line_total;
        row_bottom -= g.row_h;

        c.fill_rect(x, row_bottom, g.width, g.row_h, Some(row_fill(row)), Some(border));

        let text_y = row_bottom + g.text_dy;
        c.text(
            x + g.desc_dx,
            text_y,
            FONT_SCALE.small,
            PALETTE.dark_text,
            &truncate_text(&service.description, g.desc_max_chars),
        );
        c.text(
            x + g.qty_dx,
            text_y,
            FONT_SCALE.small,
            PALETTE.text,
            &format!("{} {}", service.quantity, service.unit_label()),
        );
        c.text(
            x + g.price_dx,
            text_y,
            FONT_SCALE.small,
            PALETTE.text,
            &format_currency(service.unit_price, currency),
        );
        c.text(
            x + g.amount_dx,
            text_y,
            FONT_SCALE.small,
            PALETTE.primary,
            &format_currency(line_total, currency),
        );
    }

    (row_bottom, subtotal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts;
    use crate::pdf::canvas::GEOMETRY;

    fn line(desc: &str, qty: f64, price: f64) -> ServiceLine {
        ServiceLine {
            description: desc.to_string(),
            quantity: qty,
            unit_price: price,
            unit: None,
        }
    }

    fn draw(services: &[ServiceLine]) -> (String, f32, f64) {
        let entry = fonts::layout_only_entry();
        let mut canvas = Canvas::new(&entry);
        let (cursor, subtotal) = services_table(&mut canvas, &GEOMETRY, services, "USD", 500.0);
        let ops = String::from_utf8_lossy(&canvas.finish()).into_owned();
        (ops, cursor, subtotal)
    }

    #[test]
    fn alternation_depends_only_on_parity() {
        for count in [1usize, 4, 9] {
            for i in 0..count {
                assert_eq!(row_fill(i), row_fill(i % 2));
            }
        }
        assert_eq!(row_fill(0), row_fill(2));
        assert_eq!(row_fill(1), row_fill(3));
        assert_ne!(row_fill(0), row_fill(1));
    }

    #[test]
    fn empty_list_still_draws_header() {
        let (ops, cursor, subtotal) = draw(&[]);
        assert!(ops.contains("(SERVICE DESCRIPTION) Tj"));
        assert_eq!(subtotal, 0.0);
        assert_eq!(cursor, 500.0 - GEOMETRY.table.header_h);
    }

    #[test]
    fn subtotal_sums_line_totals() {
        let services = vec![
            line("Consulting", 2.0, 100.0),
            line("Training", 3.0, 40.0),
            line("Support", 1.0, 9.5),
        ];
        let (_, cursor, subtotal) = draw(&services);
        assert!((subtotal - 329.5).abs() < 1e-9);
        assert_eq!(
            cursor,
            500.0 - GEOMETRY.table.header_h - 3.0 * GEOMETRY.table.row_h
        );
    }

    #[test]
    fn rows_render_in_input_order() {
        let services = vec![line("Bravo", 1.0, 1.0), line("Alpha", 1.0, 1.0)];
        let (ops, _, _) = draw(&services);
        let bravo = ops.find("(Bravo) Tj").expect("Bravo row present");
        let alpha = ops.find("(Alpha) Tj").expect("Alpha row present");
        assert!(bravo < alpha, "input order must be preserved");
    }

    #[test]
    fn quantity_uses_default_unit_label() {
        let services = vec![line("Consulting", 2.0, 100.0)];
        let (ops, _, _) = draw(&services);
        assert!(ops.contains("(2 Unit) Tj"));
        assert!(ops.contains("($100.00) Tj"));
        assert!(ops.contains("($200.00) Tj"));
    }

    #[test]
    fn long_descriptions_are_truncated_per_row() {
        let services = vec![line(
            "An unreasonably verbose description of ordinary consulting work",
            1.0,
            10.0,
        )];
        let (ops, _, _) = draw(&services);
        assert!(ops.contains("...) Tj"));
    }
}
