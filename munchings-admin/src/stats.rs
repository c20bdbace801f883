use munchings_order_service::{Order, OrderStatus};
use munchings_reservation_service::{Reservation, ReservationStatus};

/// Counters shown at the top of the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub pending_reservations: usize,
    pub confirmed_reservations: usize,
    pub new_orders: usize,
    pub completed_orders: usize,
}

impl DashboardStats {
    pub fn compute(reservations: &[Reservation], orders: &[Order]) -> Self {
        let reservations_in = |status: ReservationStatus| {
            reservations.iter().filter(|r| r.status == status).count()
        };
        let orders_in =
            |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();
        Self {
            pending_reservations: reservations_in(ReservationStatus::Pending),
            confirmed_reservations: reservations_in(ReservationStatus::Confirmed),
            new_orders: orders_in(OrderStatus::New),
            completed_orders: orders_in(OrderStatus::Completed),
        }
    }

    /// Pending reservations and new orders need a staff member.
    pub fn needs_attention(&self) -> bool {
        self.pending_reservations > 0 || self.new_orders > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{sample_orders, sample_reservations};

    #[test]
    fn test_counts_sample_dashboard() {
        let reservations = sample_reservations();
        let orders = sample_orders();
        let stats = DashboardStats::compute(&reservations, &orders);
        assert_eq!(
            stats,
            DashboardStats {
                pending_reservations: 2,
                confirmed_reservations: 1,
                new_orders: 1,
                completed_orders: 0,
            }
        );
        assert!(stats.needs_attention());
    }

    #[test]
    fn test_empty_dashboard() {
        let stats = DashboardStats::compute(&[], &[]);
        assert_eq!(stats, DashboardStats::default());
        assert!(!stats.needs_attention());
    }
}
