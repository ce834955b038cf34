//! Service layer: workflows composed from operator calls.

pub mod storage_service;

pub use storage_service::{StorageChanges, StorageService, UpdateOutcome};
