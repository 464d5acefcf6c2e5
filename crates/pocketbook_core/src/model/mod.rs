//! Domain model for the three record collections.
//!
//! # Responsibility
//! - Define the record shapes persisted by `RecordStore`.
//! - Define drafts (pre-ID input) and patches (partial updates) per entity.
//!
//! # Invariants
//! - Every record is identified by a store-assigned `RecordId >= 1`.
//! - Serialized field names are the on-disk contract and never change.

pub mod contact;
pub mod note;
pub mod record;
pub mod task;
