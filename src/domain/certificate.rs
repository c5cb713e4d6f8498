use std::fmt;

use chrono::NaiveDate;

use crate::domain::bonus::BonusCertificate;
use crate::errors::{RegistryError, Result};

/// Currency suffix appended by [`Certificate::format_amount`].
pub const AMOUNT_SUFFIX: &str = "руб.";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One scholarship disbursement certificate.
///
/// Fields are set once at construction and read through accessors; the
/// `number` is treated as a natural key by the CSV format but uniqueness is
/// the caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Certificate {
    number: i64,
    date: String,
    student_name: String,
    amount: f64,
    destination: String,
}

impl Certificate {
    /// Creates a certificate from already-typed field values.
    pub fn new(
        number: i64,
        date: impl Into<String>,
        student_name: impl Into<String>,
        amount: f64,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            number,
            date: date.into(),
            student_name: student_name.into(),
            amount,
            destination: destination.into(),
        }
    }

    /// Builds a certificate from raw text fields, the path every untyped
    /// source (CSV rows, console input) goes through.
    ///
    /// Fails with [`RegistryError::Validation`] when `number` is not an
    /// integer or `amount` is not numeric; no record is produced in that
    /// case. The three text fields are taken as-is — date format checking
    /// is the separate, opt-in [`Certificate::is_valid_date`].
    pub fn parse(
        number: &str,
        date: &str,
        student_name: &str,
        amount: &str,
        destination: &str,
    ) -> Result<Self> {
        let number = number.trim().parse::<i64>().map_err(|_| {
            RegistryError::Validation(format!("number must be an integer, got `{number}`"))
        })?;
        let amount = amount.trim().parse::<f64>().map_err(|_| {
            RegistryError::Validation(format!("amount must be numeric, got `{amount}`"))
        })?;
        Ok(Self::new(number, date, student_name, amount, destination))
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Upgrades into a bonus-carrying certificate.
    pub fn with_bonus(self, bonus: f64) -> BonusCertificate {
        BonusCertificate::new(self, bonus)
    }

    /// Returns true iff `text` parses exactly as a `YYYY-MM-DD` calendar
    /// date. `2024-13-40` and `15-01-2024` are both rejected.
    pub fn is_valid_date(text: &str) -> bool {
        NaiveDate::parse_from_str(text, DATE_FORMAT).is_ok()
    }

    /// Renders a monetary amount with two fixed decimals and the currency
    /// suffix, e.g. `1500.5` → `"1500.50 руб."`.
    pub fn format_amount(amount: f64) -> String {
        format!("{amount:.2} {AMOUNT_SUFFIX}")
    }

    /// Short diagnostic form used in logs and listings.
    pub fn summary(&self) -> String {
        format!(
            "Certificate(#{}, {}, {})",
            self.number, self.student_name, self.amount
        )
    }
}

/// Fixed-width table row; column widths match the reference table layout.
impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<3} {:<12} {:<25} {:<10} {}",
            self.number, self.date, self.student_name, self.amount, self.destination
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_fields_as_given() {
        let cert = Certificate::new(1, "2024-01-15", "Иванова Анна", 1500.5, "в деканат");
        assert_eq!(cert.number(), 1);
        assert_eq!(cert.date(), "2024-01-15");
        assert_eq!(cert.student_name(), "Иванова Анна");
        assert_eq!(cert.amount(), 1500.5);
        assert_eq!(cert.destination(), "в деканат");
    }

    #[test]
    fn parse_accepts_well_formed_fields() {
        let cert = Certificate::parse("7", "2024-01-15", "A", "100", "x").expect("valid fields");
        assert_eq!(cert.number(), 7);
        assert_eq!(cert.amount(), 100.0);
    }

    #[test]
    fn parse_rejects_non_integer_number() {
        let err = Certificate::parse("seven", "2024-01-15", "A", "100", "x")
            .expect_err("number must be rejected");
        assert!(
            matches!(err, RegistryError::Validation(ref message) if message.contains("number")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn parse_rejects_non_numeric_amount() {
        let err = Certificate::parse("1", "2024-01-15", "A", "a lot", "x")
            .expect_err("amount must be rejected");
        assert!(
            matches!(err, RegistryError::Validation(ref message) if message.contains("amount")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace_on_numbers() {
        let cert = Certificate::parse(" 3 ", "2024-01-15", "A", " 250.75 ", "x").unwrap();
        assert_eq!(cert.number(), 3);
        assert_eq!(cert.amount(), 250.75);
    }

    #[test]
    fn date_validation_accepts_calendar_dates_only() {
        assert!(Certificate::is_valid_date("2024-01-15"));
        assert!(Certificate::is_valid_date("2024-02-29")); // leap year
        assert!(!Certificate::is_valid_date("2024-13-40"));
        assert!(!Certificate::is_valid_date("15-01-2024"));
        assert!(!Certificate::is_valid_date("2023-02-29"));
        assert!(!Certificate::is_valid_date("2024-01-15 extra"));
    }

    #[test]
    fn format_amount_fixes_two_decimals_and_suffix() {
        assert_eq!(Certificate::format_amount(1500.5), "1500.50 руб.");
        assert_eq!(
            Certificate::format_amount(1500.5),
            Certificate::format_amount(1500.50)
        );
        assert_eq!(Certificate::format_amount(0.0), "0.00 руб.");
    }

    #[test]
    fn display_is_the_fixed_width_row() {
        let cert = Certificate::new(1, "2024-01-15", "Иванова Анна", 1500.5, "в деканат");
        let row = cert.to_string();
        assert!(row.starts_with("1   2024-01-15   "));
        assert!(row.ends_with("в деканат"));
        // student column is padded to 25 characters
        let after_date = &row[row.find("Иванова").expect("student present")..];
        assert!(after_date.chars().take_while(|c| *c != '1').count() >= 25);
    }

    #[test]
    fn summary_is_the_short_diagnostic_form() {
        let cert = Certificate::new(2, "2024-01-15", "Петров Пётр", 2500.0, "банк");
        assert_eq!(cert.summary(), "Certificate(#2, Петров Пётр, 2500)");
    }
}
