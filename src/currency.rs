//! Currency registry and display formatting.
//!
//! A fixed table of supported currencies maps each ISO 4217 code to its
//! display symbol and digit separators. Lookup is lenient: unknown codes fall
//! back to the default currency rather than erroring, so formatting can never
//! fail a render. Route-level callers that want strict behavior check
//! [`is_supported`] first.

use chrono::NaiveDate;

/// One entry of the currency registry.
#[derive(Debug, Clone, Copy)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub locale: &'static str,
    group_sep: char,
    decimal_sep: char,
}

/// Supported currencies, sorted by code for binary search.
static CURRENCIES: &[Currency] = &[
    Currency { code: "EUR", symbol: "\u{20AC}", name: "Euro", locale: "en-EU", group_sep: ',', decimal_sep: '.' },
    Currency { code: "GBP", symbol: "\u{A3}", name: "British Pound", locale: "en-GB", group_sep: ',', decimal_sep: '.' },
    Currency { code: "GHS", symbol: "GH\u{20B5}", name: "Ghanaian Cedi", locale: "en-GH", group_sep: ',', decimal_sep: '.' },
    Currency { code: "KES", symbol: "KSh", name: "Kenyan Shilling", locale: "en-KE", group_sep: ',', decimal_sep: '.' },
    Currency { code: "NGN", symbol: "NGN", name: "Nigerian Naira", locale: "en-NG", group_sep: ',', decimal_sep: '.' },
    Currency { code: "USD", symbol: "$", name: "US Dollar", locale: "en-US", group_sep: ',', decimal_sep: '.' },
    Currency { code: "ZAR", symbol: "R", name: "South African Rand", locale: "en-ZA", group_sep: ',', decimal_sep: '.' },
];

/// Fallback for unrecognized codes.
pub const DEFAULT_CODE: &str = "NGN";

/// Check whether `code` is in the supported set. Callers validating input
/// should reject unknown codes before rendering; the engine itself does not.
pub fn is_supported(code: &str) -> bool {
    CURRENCIES.binary_search_by(|c| c.code.cmp(code)).is_ok()
}

/// Registry lookup with fallback to the default currency.
pub fn lookup(code: &str) -> &'static Currency {
    CURRENCIES
        .binary_search_by(|c| c.code.cmp(code))
        .map(|i| &CURRENCIES[i])
        .unwrap_or_else(|_| lookup(DEFAULT_CODE))
}

/// All registry entries, in code order.
pub fn supported_currencies() -> &'static [Currency] {
    CURRENCIES
}

/// Format an amount with the currency's symbol and separators, always with
/// exactly two fraction digits. `$-1,234.50` for negative amounts, matching
/// the symbol-first order of the upstream service.
pub fn format_currency(amount: f64, code: &str) -> String {
    let cur = lookup(code);
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    let digits = whole.len();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(cur.group_sep);
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{}{}{}", cur.symbol, sign, grouped, cur.decimal_sep, frac)
}

/// Fixed short date style: abbreviated month, unpadded day, 4-digit year
/// ("Jan 5, 2025"). Independent of currency locale.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Truncate to `max_len` characters, replacing the tail with "..." when the
/// text is longer. Applied per field, never across fields.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
