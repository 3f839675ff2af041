//! Base-14 Helvetica support.
//!
//! The engine renders everything in the viewer-provided Helvetica (PDF
//! standard-14), so no font file is embedded: the font object is a Type1
//! dictionary with WinAnsi encoding, and layout uses an approximate width
//! table for right-aligned text.

use pdf_writer::{Name, Pdf, Ref};

pub(crate) struct FontEntry {
    pub(crate) pdf_name: &'static str,
    pub(crate) font_ref: Ref,
    widths_1000: Vec<f32>,
}

impl FontEntry {
    /// Width of `text` at `font_size`, measured over the same WinAnsi bytes
    /// that will be shown. Unmappable characters contribute nothing, matching
    /// the encoder which drops them.
    pub(crate) fn text_width(&self, text: &str, font_size: f32) -> f32 {
        to_winansi_bytes(text)
            .iter()
            .filter(|&&b| b >= 32)
            .map(|&b| self.widths_1000[(b - 32) as usize] * font_size / 1000.0)
            .sum()
    }
}

/// Register the standard Helvetica font under resource name `F1`.
pub(crate) fn register_helvetica(pdf: &mut Pdf, font_ref: Ref) -> FontEntry {
    pdf.type1_font(font_ref)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    FontEntry {
        pdf_name: "F1",
        font_ref,
        widths_1000: helvetica_widths(),
    }
}

/// Approximate Helvetica widths at 1000 units/em for WinAnsi chars 32..=255.
fn helvetica_widths() -> Vec<f32> {
    (32u8..=255u8)
        .map(|b| match b {
            32 => 278.0,                          // space
            33..=47 => 333.0,                     // punctuation
            48..=57 => 556.0,                     // digits
            58..=64 => 333.0,                     // more punctuation
            73 | 74 => 278.0,                     // I J (narrow uppercase)
            77 => 833.0,                          // M (wide)
            65..=90 => 667.0,                     // uppercase A-Z (average)
            91..=96 => 333.0,                     // brackets etc.
            102 | 105 | 106 | 108 | 116 => 278.0, // narrow lowercase: f i j l t
            109 | 119 => 833.0,                   // m w (wide)
            97..=122 => 556.0,                    // lowercase a-z (average)
            _ => 556.0,
        })
        .collect()
}

/// Encode to WinAnsi bytes, dropping characters the encoding cannot express.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .filter_map(|c| match c as u32 {
            0x0000..=0x007F => Some(c as u8),
            0x00A0..=0x00FF => Some(c as u8), // Latin-1 supplement maps directly
            0x20AC => Some(0x80),
            0x201A => Some(0x82),
            0x0192 => Some(0x83),
            0x201E => Some(0x84),
            0x2026 => Some(0x85),
            0x2020 => Some(0x86),
            0x2021 => Some(0x87),
            0x02C6 => Some(0x88),
            0x2030 => Some(0x89),
            0x0160 => Some(0x8A),
            0x2039 => Some(0x8B),
            0x0152 => Some(0x8C),
            0x017D => Some(0x8E),
            0x2018 => Some(0x91),
            0x2019 => Some(0x92),
            0x201C => Some(0x93),
            0x201D => Some(0x94),
            0x2022 => Some(0x95), // bullet
            0x2013 => Some(0x96),
            0x2014 => Some(0x97),
            0x02DC => Some(0x98),
            0x2122 => Some(0x99),
            0x0161 => Some(0x9A),
            0x203A => Some(0x9B),
            0x0153 => Some(0x9C),
            0x017E => Some(0x9E),
            0x0178 => Some(0x9F),
            _ => None,
        })
        .collect()
}

/// Width-table-only entry for layout tests that never touch a `Pdf`.
#[cfg(test)]
pub(crate) fn layout_only_entry() -> FontEntry {
    FontEntry {
        pdf_name: "F1",
        font_ref: Ref::new(1),
        widths_1000: helvetica_widths(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> FontEntry {
        layout_only_entry()
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(to_winansi_bytes("Invoice 42"), b"Invoice 42".to_vec());
    }

    #[test]
    fn currency_symbols_encode() {
        assert_eq!(to_winansi_bytes("\u{20AC}"), vec![0x80]); // euro
        assert_eq!(to_winansi_bytes("\u{A3}"), vec![0xA3]); // pound
    }

    #[test]
    fn unmappable_chars_are_dropped() {
        // The cedi sign has no WinAnsi code point.
        assert_eq!(to_winansi_bytes("GH\u{20B5}"), b"GH".to_vec());
    }

    #[test]
    fn digits_share_a_width() {
        let e = entry();
        let w0 = e.text_width("0", 10.0);
        for d in ["1", "2", "9"] {
            assert_eq!(e.text_width(d, 10.0), w0);
        }
    }

    #[test]
    fn width_grows_with_text() {
        let e = entry();
        assert!(e.text_width("$1,000.00", 9.0) > e.text_width("$1.00", 9.0));
    }
}
