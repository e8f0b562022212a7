//! Implementation of the `#[derive(Sortable)]` macro.
//!
//! Generates a typed field registry and field name constants from struct
//! annotations.

mod attrs;
mod derive;

pub use derive::sortable_derive_impl;
