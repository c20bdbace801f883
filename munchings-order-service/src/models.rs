use std::fmt::Display;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use munchings_common::sync::{Collection, Record};
use munchings_common::IllegalTransition;
use serde::{Deserialize, Serialize};

use crate::money::Totals;

#[derive(Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Debug)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Preparing,
    Served,
    Completed,
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum OrderAction {
    StartPreparing,
    MarkServed,
    Complete,
}

impl OrderAction {
    pub fn target(&self) -> OrderStatus {
        match self {
            OrderAction::StartPreparing => OrderStatus::Preparing,
            OrderAction::MarkServed => OrderStatus::Served,
            OrderAction::Complete => OrderStatus::Completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderAction::StartPreparing => "Start Preparing",
            OrderAction::MarkServed => "Mark Served",
            OrderAction::Complete => "Complete",
        }
    }
}

impl OrderStatus {
    pub const INITIAL: OrderStatus = OrderStatus::New;

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Served => "served",
            OrderStatus::Completed => "completed",
        }
    }

    /// Orders move strictly forward, one stage at a time.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::New => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Served),
            OrderStatus::Served => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        self.next() == Some(target)
    }

    pub fn transition_to(&self, target: OrderStatus) -> Result<OrderStatus, IllegalTransition> {
        if !self.can_transition_to(target) {
            return Err(IllegalTransition {
                from: self.as_str(),
                to: target.as_str(),
            });
        }
        Ok(target)
    }

    pub fn apply(&self, action: OrderAction) -> Result<OrderStatus, IllegalTransition> {
        self.transition_to(action.target())
    }

    pub fn available_actions(&self) -> Vec<OrderAction> {
        [
            OrderAction::StartPreparing,
            OrderAction::MarkServed,
            OrderAction::Complete,
        ]
        .into_iter()
        .filter(|a| self.can_transition_to(a.target()))
        .collect()
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(OrderStatus::New),
            "preparing" => Ok(OrderStatus::Preparing),
            "served" => Ok(OrderStatus::Served),
            "completed" => Ok(OrderStatus::Completed),
            _ => Err(format!("Unrecognized order status `{}`", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub menu_item_id: String,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: String,
    pub table_number: String,
    pub items: Vec<OrderLineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub subtotal: BigDecimal,
    pub tax: BigDecimal,
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

impl Record for Order {
    const COLLECTION: Collection = Collection::Orders;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort(records: &mut [Self]) {
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}

/// Order document as written at submission time.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub table_number: String,
    pub items: Vec<OrderLineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub subtotal: BigDecimal,
    pub tax: BigDecimal,
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    pub fn new(
        table_number: String,
        items: Vec<OrderLineItem>,
        special_instructions: Option<String>,
        totals: Totals,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            table_number,
            items,
            special_instructions,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            status: OrderStatus::INITIAL,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_move_forward_one_stage_at_a_time() {
        let status = OrderStatus::INITIAL;
        assert_eq!(status, OrderStatus::New);
        let status = status.apply(OrderAction::StartPreparing).unwrap();
        let status = status.apply(OrderAction::MarkServed).unwrap();
        let status = status.apply(OrderAction::Complete).unwrap();
        assert_eq!(status, OrderStatus::Completed);
        assert!(status.is_terminal());
    }

    #[test]
    fn test_serving_a_new_order_is_rejected() {
        let err = OrderStatus::New
            .transition_to(OrderStatus::Served)
            .unwrap_err();
        assert_eq!(err.from, "new");
        assert_eq!(err.to, "served");
    }

    #[test]
    fn test_no_backward_or_repeated_transitions() {
        assert!(OrderStatus::Served
            .transition_to(OrderStatus::Preparing)
            .is_err());
        assert!(OrderStatus::Preparing
            .transition_to(OrderStatus::Preparing)
            .is_err());
        assert!(OrderStatus::Completed
            .apply(OrderAction::Complete)
            .is_err());
        assert!(OrderStatus::Preparing
            .transition_to(OrderStatus::New)
            .is_err());
    }

    #[test]
    fn test_available_actions_match_button_visibility() {
        assert_eq!(
            OrderStatus::New.available_actions(),
            vec![OrderAction::StartPreparing]
        );
        assert_eq!(
            OrderStatus::Preparing.available_actions(),
            vec![OrderAction::MarkServed]
        );
        assert_eq!(
            OrderStatus::Served.available_actions(),
            vec![OrderAction::Complete]
        );
        assert!(OrderStatus::Completed.available_actions().is_empty());
    }

    #[test]
    fn test_status_strings_round_trip_through_documents() {
        for status in [
            OrderStatus::New,
            OrderStatus::Preparing,
            OrderStatus::Served,
            OrderStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::json!(status.as_str())
            );
        }
        assert!("ready".parse::<OrderStatus>().is_err());
    }
}
