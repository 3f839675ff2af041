//! Drawing vocabulary shared by every layout stage.
//!
//! `Canvas` is the only effectful boundary of the engine: stages call its
//! primitives and everything else stays pure. The operator stream it produces
//! is deterministic for identical input, which is what the integration tests
//! assert on.

use pdf_writer::{Content, Name, Str};

use crate::fonts::{FontEntry, to_winansi_bytes};

/// Device-RGB color in the 0..=1 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

pub(crate) const fn rgb(r: f32, g: f32, b: f32) -> Rgb {
    Rgb { r, g, b }
}

/// Named brand and signal colors. Status→color selection lives with the
/// card stage; this is just the palette it draws from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub primary: Rgb,
    pub accent: Rgb,
    pub dark_text: Rgb,
    pub text: Rgb,
    pub light_text: Rgb,
    pub border: Rgb,
    pub light_bg: Rgb,
    pub white: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
}

pub(crate) const PALETTE: Palette = Palette {
    primary: rgb(0.05, 0.25, 0.55),
    accent: rgb(0.95, 0.55, 0.05),
    dark_text: rgb(0.15, 0.15, 0.15),
    text: rgb(0.35, 0.35, 0.35),
    light_text: rgb(0.65, 0.65, 0.65),
    border: rgb(0.92, 0.92, 0.92),
    light_bg: rgb(0.97, 0.98, 0.99),
    white: rgb(1.0, 1.0, 1.0),
    success: rgb(0.18, 0.75, 0.45),
    warning: rgb(0.95, 0.6, 0.1),
    error: rgb(0.92, 0.22, 0.2),
};

/// Type scale in points.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FontScale {
    pub h1: f32,
    pub h3: f32,
    pub h4: f32,
    pub body: f32,
    pub small: f32,
    pub tiny: f32,
}

pub(crate) const FONT_SCALE: FontScale = FontScale {
    h1: 24.0,
    h3: 14.0,
    h4: 12.0,
    body: 10.0,
    small: 9.0,
    tiny: 7.0,
};

/// Header stage geometry. All values are page coordinates (origin bottom-left).
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderGeom {
    pub band_y: f32,
    pub band_h: f32,
    pub name_y: f32,
    pub tagline_y: f32,
    pub details_y: f32,
    pub detail_col_w: f32,
    pub contact_y: f32,
    pub address_y: f32,
    pub rule_y: f32,
    pub cursor_below: f32,
}

/// Document card stage geometry, relative to the incoming cursor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CardGeom {
    pub gap_above: f32,
    pub card_w: f32,
    pub card_h: f32,
    pub status_x: f32,
    pub pad_x: f32,
    pub title_dy: f32,
    pub value_dy: f32,
    pub info_label_x: f32,
    pub info_value_x: f32,
    pub info_first_dy: f32,
    pub info_step: f32,
    pub gap_below: f32,
}

/// Billing panel geometry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BillingGeom {
    pub gap_above: f32,
    pub panel_w: f32,
    pub panel_h: f32,
    pub pad_x: f32,
    pub title_dy: f32,
    pub name_dy: f32,
    pub name_step: f32,
    pub line_step: f32,
    pub max_chars: usize,
    pub gap_below: f32,
}

/// Line-item table geometry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TableGeom {
    pub gap_above: f32,
    pub width: f32,
    pub header_h: f32,
    pub row_h: f32,
    pub text_dy: f32,
    pub header_text_dy: f32,
    pub desc_dx: f32,
    pub qty_dx: f32,
    pub price_dx: f32,
    pub amount_dx: f32,
    pub desc_max_chars: usize,
}

/// Financial summary geometry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SummaryGeom {
    pub gap_above: f32,
    pub x: f32,
    pub width: f32,
    pub row_h: f32,
    pub label_dx: f32,
    pub value_right_dx: f32,
    pub text_dy: f32,
    pub total_extra_h: f32,
    pub gap_below: f32,
}

/// Payment instructions geometry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PaymentGeom {
    pub panel_h: f32,
    pub pad_x: f32,
    pub title_dy: f32,
    pub line_dy: f32,
    pub line_step: f32,
    pub max_chars: usize,
}

/// Footer geometry — page-absolute, independent of the cursor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FooterGeom {
    pub band_h: f32,
    pub rule_x1: f32,
    pub rule_x2: f32,
    pub line1_y: f32,
    pub line2_y: f32,
    pub page_label_x: f32,
}

/// Every fixed coordinate of the single-page layout, as named constants.
/// Stages compute positions from these instead of re-deriving magic numbers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub content_right: f32,
    pub header: HeaderGeom,
    pub card: CardGeom,
    pub billing: BillingGeom,
    pub table: TableGeom,
    pub summary: SummaryGeom,
    pub payment: PaymentGeom,
    pub footer: FooterGeom,
}

/// A4 portrait layout used for every document.
pub(crate) const GEOMETRY: PageGeometry = PageGeometry {
    width: 595.0,
    height: 842.0,
    margin_left: 50.0,
    content_right: 545.0,
    header: HeaderGeom {
        band_y: 820.0,
        band_h: 22.0,
        name_y: 795.0,
        tagline_y: 777.0,
        details_y: 763.0,
        detail_col_w: 165.0,
        contact_y: 753.0,
        address_y: 743.0,
        rule_y: 735.0,
        cursor_below: 730.0,
    },
    card: CardGeom {
        gap_above: 10.0,
        card_w: 140.0,
        card_h: 60.0,
        status_x: 210.0,
        pad_x: 10.0,
        title_dy: 25.0,
        value_dy: 45.0,
        info_label_x: 370.0,
        info_value_x: 460.0,
        info_first_dy: 15.0,
        info_step: 14.0,
        gap_below: 15.0,
    },
    billing: BillingGeom {
        gap_above: 10.0,
        panel_w: 230.0,
        panel_h: 85.0,
        pad_x: 10.0,
        title_dy: 70.0,
        name_dy: 55.0,
        name_step: 12.0,
        line_step: 10.0,
        max_chars: 35,
        gap_below: 15.0,
    },
    table: TableGeom {
        gap_above: 15.0,
        width: 490.0,
        header_h: 22.0,
        row_h: 18.0,
        text_dy: 5.0,
        header_text_dy: 8.0,
        desc_dx: 8.0,
        qty_dx: 280.0,
        price_dx: 320.0,
        amount_dx: 420.0,
        desc_max_chars: 32,
    },
    summary: SummaryGeom {
        gap_above: 8.0,
        x: 330.0,
        width: 210.0,
        row_h: 16.0,
        label_dx: 10.0,
        value_right_dx: 200.0,
        text_dy: 4.0,
        total_extra_h: 6.0,
        gap_below: 25.0,
    },
    payment: PaymentGeom {
        panel_h: 55.0,
        pad_x: 10.0,
        title_dy: 40.0,
        line_dy: 26.0,
        line_step: 11.0,
        max_chars: 70,
    },
    footer: FooterGeom {
        band_h: 50.0,
        rule_x1: 40.0,
        rule_x2: 555.0,
        line1_y: 32.0,
        line2_y: 20.0,
        page_label_x: 510.0,
    },
};

/// Stroke settings for rectangle borders and rules.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Stroke {
    pub color: Rgb,
    pub width: f32,
}

/// The drawing surface for one page.
pub(crate) struct Canvas<'f> {
    content: Content,
    font: &'f FontEntry,
}

impl<'f> Canvas<'f> {
    pub(crate) fn new(font: &'f FontEntry) -> Self {
        Canvas {
            content: Content::new(),
            font,
        }
    }

    /// Rectangle with independently optional fill and border. A call with
    /// neither is a no-op.
    pub(crate) fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Option<Rgb>,
        border: Option<Stroke>,
    ) {
        if fill.is_none() && border.is_none() {
            return;
        }
        self.content.save_state();
        if let Some(c) = fill {
            self.content.set_fill_rgb(c.r, c.g, c.b);
            self.content.rect(x, y, w, h);
            self.content.fill_nonzero();
        }
        if let Some(s) = border {
            self.content.set_stroke_rgb(s.color.r, s.color.g, s.color.b);
            self.content.set_line_width(s.width);
            self.content.rect(x, y, w, h);
            self.content.stroke();
        }
        self.content.restore_state();
    }

    /// Straight separator segment.
    pub(crate) fn rule(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb, thickness: f32) {
        self.content.save_state();
        self.content.set_stroke_rgb(color.r, color.g, color.b);
        self.content.set_line_width(thickness);
        self.content.move_to(x1, y1);
        self.content.line_to(x2, y2);
        self.content.stroke();
        self.content.restore_state();
    }

    /// Show `text` with its baseline origin at (x, y).
    pub(crate) fn text(&mut self, x: f32, y: f32, size: f32, color: Rgb, text: &str) {
        let bytes = to_winansi_bytes(text);
        self.content.set_fill_rgb(color.r, color.g, color.b);
        self.content
            .begin_text()
            .set_font(Name(self.font.pdf_name.as_bytes()), size)
            .next_line(x, y)
            .show(Str(&bytes))
            .end_text();
    }

    /// Show `text` ending at `right_x`, using the font width table.
    pub(crate) fn text_right(&mut self, right_x: f32, y: f32, size: f32, color: Rgb, text: &str) {
        let x = right_x - self.font.text_width(text, size);
        self.text(x, y, size, color, text);
    }

    /// Finish into the raw (uncompressed) content operator stream.
    pub(crate) fn finish(self) -> Vec<u8> {
        self.content.finish().into_vec()
    }
}
