//! Plain-text table rendering for certificate listings. Works over any
//! borrowed view (full registry, sorted, filtered) so every listing shares
//! one layout.

use crate::domain::Certificate;

const RULE_WIDTH: usize = 70;

/// Caption row matching the record row widths.
pub fn table_header() -> String {
    format!(
        "{:<3} {:<12} {:<25} {:<10} {}",
        "№", "Дата", "ФИО студента", "Стипендия", "Куда выдается"
    )
}

/// Renders captions, a rule, and one row per certificate.
pub fn render_table<'a, I>(certificates: I) -> String
where
    I: IntoIterator<Item = &'a Certificate>,
{
    let mut out = String::new();
    out.push_str(&table_header());
    out.push('\n');
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for certificate in certificates {
        out.push_str(&certificate.to_string());
        out.push('\n');
    }
    out
}
