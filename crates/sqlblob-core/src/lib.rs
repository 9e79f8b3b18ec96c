//! Core domain model for sqlblob
//!
//! This crate contains:
//! - `Object`, the caller-facing unit of storage
//! - `StoreKind`, the relational store flavours a backend can target
//! - Listing comparison used by registry layers to detect index changes

pub mod diff;
pub mod kind;
pub mod object;

pub use diff::{ObjectSliceDiff, object_slice_diff};
pub use kind::StoreKind;
pub use object::Object;
