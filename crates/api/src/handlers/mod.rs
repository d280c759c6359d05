pub mod fallback;
pub mod menu;
pub mod order;
pub mod rating;
pub mod visit;
