//! CSV backend in the fixed Cyrillic-header format. Files produced by the
//! reference tooling load here unchanged, and saved files load there.

use std::path::Path;

use csv::{Reader, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::domain::Certificate;
use crate::errors::{RegistryError, Result};
use crate::registry::CertificateRegistry;

/// Column headers, in the order they appear on disk. Must match the
/// reference files byte for byte.
pub const CSV_HEADERS: [&str; 5] = [
    "№",
    "дата",
    "ФИО студента",
    "размер стипендии",
    "куда выдается справка",
];

/// Incoming row, kept as raw text so construction goes through the one
/// validating path ([`Certificate::parse`]).
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "№")]
    number: String,
    #[serde(rename = "дата")]
    date: String,
    #[serde(rename = "ФИО студента")]
    student_name: String,
    #[serde(rename = "размер стипендии")]
    amount: String,
    #[serde(rename = "куда выдается справка")]
    destination: String,
}

#[derive(Debug, Serialize)]
struct CsvOutRow<'a> {
    number: i64,
    date: &'a str,
    student_name: &'a str,
    amount: f64,
    destination: &'a str,
}

/// Loads a registry from `path`.
///
/// A missing file is not an error: the condition is logged and an empty
/// registry is returned, so a first run starts from nothing. A row whose
/// number or amount does not parse fails the whole load with row context;
/// other I/O failures propagate as-is.
pub fn load_registry_from_path(path: &Path) -> Result<CertificateRegistry> {
    if !path.exists() {
        tracing::warn!("data file {} not found, starting empty", path.display());
        return Ok(CertificateRegistry::new());
    }

    let mut reader = Reader::from_path(path)?;
    let mut registry = CertificateRegistry::new();
    for (index, record) in reader.deserialize::<CsvRow>().enumerate() {
        let row = record?;
        let certificate = Certificate::parse(
            &row.number,
            &row.date,
            &row.student_name,
            &row.amount,
            &row.destination,
        )
        .map_err(|err| match err {
            // header is line 1, first data row is line 2
            RegistryError::Validation(message) => {
                RegistryError::Validation(format!("line {}: {message}", index + 2))
            }
            other => other,
        })?;
        registry.add(certificate);
    }

    tracing::info!(
        "loaded {} certificates from {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}

/// Writes the header row and one row per record, overwriting `path`.
/// Numbers keep their natural text form; quoting is the csv crate default.
pub fn save_registry_to_path(registry: &CertificateRegistry, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(CSV_HEADERS)?;
    for certificate in registry {
        writer.serialize(CsvOutRow {
            number: certificate.number(),
            date: certificate.date(),
            student_name: certificate.student_name(),
            amount: certificate.amount(),
            destination: certificate.destination(),
        })?;
    }
    writer.flush()?;

    tracing::info!(
        "saved {} certificates to {}",
        registry.len(),
        path.display()
    );
    Ok(())
}
