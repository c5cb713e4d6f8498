use std::fmt;

use crate::domain::certificate::Certificate;

/// A certificate granted a bonus on top of the base amount.
///
/// Behaves as a [`Certificate`] everywhere one is expected (base fields are
/// delegated, the registry accepts it through `From`); the bonus only shows
/// up in [`BonusCertificate::total_amount`] and the diagnostic summary.
#[derive(Debug, Clone, PartialEq)]
pub struct BonusCertificate {
    certificate: Certificate,
    bonus: f64,
}

impl BonusCertificate {
    pub fn new(certificate: Certificate, bonus: f64) -> Self {
        Self { certificate, bonus }
    }

    pub fn number(&self) -> i64 {
        self.certificate.number()
    }

    pub fn date(&self) -> &str {
        self.certificate.date()
    }

    pub fn student_name(&self) -> &str {
        self.certificate.student_name()
    }

    pub fn amount(&self) -> f64 {
        self.certificate.amount()
    }

    pub fn destination(&self) -> &str {
        self.certificate.destination()
    }

    pub fn bonus(&self) -> f64 {
        self.bonus
    }

    /// Base amount plus bonus, recomputed on every access.
    pub fn total_amount(&self) -> f64 {
        self.certificate.amount() + self.bonus
    }

    pub fn certificate(&self) -> &Certificate {
        &self.certificate
    }

    /// Short diagnostic form; unlike the base record it reports the total.
    pub fn summary(&self) -> String {
        format!(
            "BonusCertificate(#{}, {}, {})",
            self.number(),
            self.student_name(),
            self.total_amount()
        )
    }
}

/// Discards the bonus, keeping the base record. This is the upcast the
/// registry relies on; the persisted format has no bonus column either.
impl From<BonusCertificate> for Certificate {
    fn from(bonus: BonusCertificate) -> Self {
        bonus.certificate
    }
}

/// Same fixed-width row as the base record (the bonus is not a column).
impl fmt::Display for BonusCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.certificate.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BonusCertificate {
        Certificate::new(4, "2024-03-01", "Сидорова Мария", 2000.0, "общежитие").with_bonus(200.0)
    }

    #[test]
    fn delegates_base_fields() {
        let bonus = sample();
        assert_eq!(bonus.number(), 4);
        assert_eq!(bonus.date(), "2024-03-01");
        assert_eq!(bonus.student_name(), "Сидорова Мария");
        assert_eq!(bonus.amount(), 2000.0);
        assert_eq!(bonus.destination(), "общежитие");
    }

    #[test]
    fn total_is_amount_plus_bonus() {
        let bonus = sample();
        assert_eq!(bonus.bonus(), 200.0);
        assert_eq!(bonus.total_amount(), 2200.0);
    }

    #[test]
    fn summary_reports_the_total() {
        assert_eq!(
            sample().summary(),
            "BonusCertificate(#4, Сидорова Мария, 2200)"
        );
    }

    #[test]
    fn upcast_keeps_base_fields_and_drops_bonus() {
        let base: Certificate = sample().into();
        assert_eq!(base.number(), 4);
        assert_eq!(base.amount(), 2000.0);
    }

    #[test]
    fn row_form_matches_the_base_record() {
        let bonus = sample();
        assert_eq!(bonus.to_string(), bonus.certificate().to_string());
    }
}
