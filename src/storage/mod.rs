//! Whole-collection persistence for certificate registries.

pub mod csv_backend;

pub use csv_backend::{load_registry_from_path, save_registry_to_path, CSV_HEADERS};
