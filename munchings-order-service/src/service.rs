use std::sync::Arc;

use chrono::Utc;
use munchings_common::sync::record::to_document;
use munchings_common::sync::{Collection, SyncAdapter};
use munchings_common::{PersistenceError, TransitionError, ValidationError, Validator};
use thiserror::Error;
use tracing::{info, warn};

use crate::cart::Cart;
use crate::models::{NewOrder, Order, OrderAction, OrderStatus};

#[derive(Error, Debug)]
pub enum PlaceOrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to place order. Please try again.")]
    Persistence(#[from] PersistenceError),
}

#[derive(Clone)]
pub struct OrderService {
    adapter: Arc<dyn SyncAdapter>,
}

impl OrderService {
    pub fn new(adapter: Arc<dyn SyncAdapter>) -> Self {
        Self { adapter }
    }

    fn validate(cart: &Cart) -> Result<(), ValidationError> {
        Validator::new()
            .check(!cart.is_empty(), "items", "Your cart is empty")
            .check(
                cart.table_number().is_some_and(|t| !t.trim().is_empty()),
                "tableNumber",
                "Table number is missing. Please scan the QR code at your table.",
            )
            .finish()
    }

    /// Submits the cart as a new order. The cart is only cleared once the
    /// order document has been written.
    pub async fn place_order(
        &self,
        cart: &mut Cart,
        special_instructions: Option<String>,
    ) -> Result<String, PlaceOrderError> {
        Self::validate(cart)?;

        let table_number = cart.table_number().unwrap_or_default().to_string();
        let special_instructions = special_instructions
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let order = NewOrder::new(
            table_number,
            cart.order_lines(),
            special_instructions,
            cart.totals(),
            Utc::now(),
        );

        let id = match self
            .adapter
            .create(Collection::Orders, to_document(&order)?)
            .await
        {
            Ok(id) => id,
            Err(err) => {
                warn!(table = %order.table_number, "order submission failed: {}", err);
                return Err(err.into());
            }
        };
        info!(%id, table = %order.table_number, total = %order.total, "order placed");

        cart.clear();
        Ok(id)
    }

    /// Applies an admin action to the order as last seen in a snapshot.
    pub async fn transition(
        &self,
        order: &Order,
        action: OrderAction,
    ) -> Result<OrderStatus, TransitionError> {
        self.set_status(order, action.target()).await
    }

    pub async fn set_status(
        &self,
        order: &Order,
        target: OrderStatus,
    ) -> Result<OrderStatus, TransitionError> {
        let status = order.status.transition_to(target)?;
        self.adapter
            .update_status(Collection::Orders, &order.id, status.as_str())
            .await?;
        info!(id = %order.id, from = %order.status, to = %status, "order status updated");
        Ok(status)
    }

    pub async fn delete(&self, id: &str) -> Result<(), PersistenceError> {
        self.adapter.delete(Collection::Orders, id).await?;
        info!(%id, "order deleted");
        Ok(())
    }
}
