//! Ordered, index-addressable registry of certificates with derived
//! read-only views. Every view is recomputed from current contents on each
//! call; nothing is cached.

use std::fmt;
use std::slice;

use crate::domain::{BonusCertificate, Certificate};
use crate::errors::{RegistryError, Result};

/// Threshold above which the reference tooling grants a bonus.
pub const DEFAULT_BONUS_THRESHOLD: f64 = 2000.0;

/// Bonus granted on high awards, as a fraction of the base amount.
pub const BONUS_RATE: f64 = 0.10;

/// Insertion-ordered collection of [`Certificate`] records.
///
/// No field is required to be unique. Bonus-carrying records are accepted
/// wherever a base record is (`impl Into<Certificate>`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificateRegistry {
    entries: Vec<Certificate>,
}

impl CertificateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record; never fails.
    pub fn add(&mut self, certificate: impl Into<Certificate>) {
        self.entries.push(certificate.into());
    }

    /// Removes the record at `index`; out-of-range indexes are deliberately
    /// ignored rather than treated as errors (unlike [`Self::get`]).
    pub fn remove_at(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        } else {
            tracing::debug!(
                "ignoring removal at index {} (registry has {} entries)",
                index,
                self.entries.len()
            );
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Positional access; out-of-range indexes fail.
    pub fn get(&self, index: usize) -> Result<&Certificate> {
        self.entries.get(index).ok_or(RegistryError::OutOfBounds {
            index,
            len: self.entries.len(),
        })
    }

    /// Records in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Certificate> {
        self.entries.iter()
    }

    /// Largest certificate number currently held, if any. Front ends use
    /// this to allocate the next number.
    pub fn max_number(&self) -> Option<i64> {
        self.entries.iter().map(Certificate::number).max()
    }

    /// Records with `amount > min_amount` (strict), in insertion order.
    pub fn filter_by_amount(&self, min_amount: f64) -> impl Iterator<Item = &Certificate> {
        self.entries
            .iter()
            .filter(move |cert| cert.amount() > min_amount)
    }

    /// Records ordered by student name, compared case-insensitively; ties
    /// keep their insertion order.
    pub fn sorted_by_student(&self) -> impl Iterator<Item = &Certificate> {
        let mut sorted: Vec<&Certificate> = self.entries.iter().collect();
        sorted.sort_by_key(|cert| cert.student_name().to_lowercase());
        sorted.into_iter()
    }

    /// Records in ascending amount order; ties keep their insertion order.
    pub fn sorted_by_amount(&self) -> impl Iterator<Item = &Certificate> {
        let mut sorted: Vec<&Certificate> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.amount().total_cmp(&b.amount()));
        sorted.into_iter()
    }

    /// For every record with `amount > threshold` (strict), yields a
    /// [`BonusCertificate`] copy with `bonus = amount * BONUS_RATE`. The
    /// registry itself is untouched; order follows insertion order.
    pub fn bonus_certificates(
        &self,
        threshold: f64,
    ) -> impl Iterator<Item = BonusCertificate> + '_ {
        self.entries
            .iter()
            .filter(move |cert| cert.amount() > threshold)
            .map(|cert| cert.clone().with_bonus(cert.amount() * BONUS_RATE))
    }
}

impl fmt::Display for CertificateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CertificateRegistry({} entries)", self.entries.len())
    }
}

impl<'a> IntoIterator for &'a CertificateRegistry {
    type Item = &'a Certificate;
    type IntoIter = slice::Iter<'a, Certificate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
