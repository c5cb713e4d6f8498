//! Certificate record types shared by the registry, storage, and front ends.

pub mod bonus;
pub mod certificate;

pub use bonus::BonusCertificate;
pub use certificate::{Certificate, AMOUNT_SUFFIX};
