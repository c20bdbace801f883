pub mod cart;
pub mod models;
pub mod money;
pub mod service;

pub use cart::{Cart, CartLine};
pub use models::{NewOrder, Order, OrderAction, OrderLineItem, OrderStatus};
pub use money::Totals;
pub use service::{OrderService, PlaceOrderError};
