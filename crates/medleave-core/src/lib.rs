//! Medleave Core Library
//!
//! Record store for medical-leave certificates: bilingual (Arabic/English)
//! patient, facility, and doctor data keyed by a unique service code.
//!
//! # Architecture
//!
//! ```text
//! HTTP request → field validation → Record Store → JSON response
//! ```
//!
//! The store is the sole owner of persisted records. Lookups go through
//! the service code (plus the identity number for verification searches);
//! the surrogate row id is used only for ordering.
//!
//! # Modules
//!
//! - [`db`]: SQLite record store
//! - [`models`]: Domain types (MedicalLeave, LeaveFields)

pub mod db;
pub mod models;

// Re-export commonly used types
pub use db::{Database, StoreError, StoreResult};
pub use models::{LeaveFields, MedicalLeave};
