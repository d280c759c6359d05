//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Methods that must run inside a
//! caller-owned transaction take `&mut PgConnection` instead.

pub mod category_repo;
pub mod menu_item_repo;
pub mod order_repo;
pub mod rating_repo;
pub mod restaurant_repo;
pub mod table_repo;
pub mod visit_repo;

pub use category_repo::CategoryRepo;
pub use menu_item_repo::MenuItemRepo;
pub use order_repo::OrderRepo;
pub use rating_repo::RatingRepo;
pub use restaurant_repo::RestaurantRepo;
pub use table_repo::TableRepo;
pub use visit_repo::VisitRepo;
