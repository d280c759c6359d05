//! Pure domain logic for the digital menu backend.
//!
//! Nothing in this crate performs I/O. The repository layer (`cardapio-db`)
//! and the HTTP layer (`cardapio-api`) both build on these types.

pub mod error;
pub mod menu;
pub mod ordering;
pub mod rating;
pub mod types;
pub mod visit;
