//! Catalog module - the in-memory product list
//!
//! Records are loaded once at startup and only ever read afterwards.

pub mod builtin;
pub mod product;
pub mod store;

pub use product::Product;
pub use store::{Catalog, NAME_DELIMITER};
