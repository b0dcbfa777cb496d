use chrono::{Datelike, NaiveDate};

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Capitalized Portuguese month name for a 1-based month number.
pub fn month_name_pt(month: u32) -> Option<String> {
    let name = MONTHS_PT.get(month.checked_sub(1)? as usize)?;
    let mut chars = name.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

/// `Edição nº 12 – Março de 2025`
pub fn edition_subtitle(number: u32, date: NaiveDate) -> String {
    let month = month_name_pt(date.month()).unwrap_or_default();
    format!("Edição nº {} – {} de {}", number, month, date.year())
}
