//! Row structs and DTOs, one module per table family.

pub mod category;
pub mod menu_item;
pub mod order;
pub mod rating;
pub mod restaurant;
pub mod table;
pub mod visit;
