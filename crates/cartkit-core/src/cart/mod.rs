//! Shopping cart module.
//!
//! Contains line items, the snapshot type, the inbound command set, and
//! the `CartStore` reducer.

mod command;
mod item;
mod store;

pub use command::CartCommand;
pub use item::LineItem;
pub use store::{CartSnapshot, CartStore, CART_LIMIT};
