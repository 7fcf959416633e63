//! Shared data model and text helpers for the gift market catalog.
//!
//! Holds the raw record shape supplied by the catalog source, the
//! display-facing `CatalogEntry` projection, and the pure string helpers the
//! filtering pipeline is built from: serial stripping, attribute
//! normalization (rarity percentages are not part of an attribute's
//! identity), slug folding, and search-word tokenization. Nothing here does
//! I/O or fails.

pub mod normalization;
pub mod tokenization;
pub mod types;
