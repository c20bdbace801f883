use std::sync::Arc;

use munchings_auth_service::{AuthError, Identity, IdentityProvider};
use munchings_common::sync::{Collection, LiveRecords, SyncAdapter};
use munchings_common::{PersistenceError, TransitionError};
use munchings_menu_service::{MenuError, MenuItem, MenuService, NewMenuItem};
use munchings_order_service::{Order, OrderAction, OrderService, OrderStatus};
use munchings_reservation_service::{
    filter_by_status, sort_reservations, Reservation, ReservationAction, ReservationService,
    ReservationSort, ReservationStatus,
};
use thiserror::Error;
use tracing::info;

use crate::stats::DashboardStats;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// A signed-in staff member's view of the restaurant. The reservation, order
/// and menu projections follow the backend for as long as the session lives.
pub struct AdminSession {
    user: Identity,
    reservations: LiveRecords<Reservation>,
    orders: LiveRecords<Order>,
    menu: LiveRecords<MenuItem>,
    reservation_service: ReservationService,
    order_service: OrderService,
    menu_service: MenuService,
}

fn not_found(collection: Collection, id: &str) -> PersistenceError {
    PersistenceError::NotFound {
        collection,
        id: id.to_string(),
    }
}

impl AdminSession {
    pub fn open(
        adapter: Arc<dyn SyncAdapter>,
        identity: &dyn IdentityProvider,
    ) -> Result<Self, AdminError> {
        let user = identity.current_user().ok_or(AuthError::NotSignedIn)?;
        info!(uid = %user.uid, email = %user.email, "admin session opened");
        Ok(Self {
            user,
            reservations: LiveRecords::subscribe(adapter.as_ref()),
            orders: LiveRecords::subscribe(adapter.as_ref()),
            menu: LiveRecords::subscribe(adapter.as_ref()),
            reservation_service: ReservationService::new(adapter.clone()),
            order_service: OrderService::new(adapter.clone()),
            menu_service: MenuService::new(adapter),
        })
    }

    pub fn user(&self) -> &Identity {
        &self.user
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations.records()
    }

    /// The reservation list as filtered and sorted on the dashboard tab.
    pub fn reservations_by(
        &self,
        status: Option<ReservationStatus>,
        sort: ReservationSort,
    ) -> Vec<Reservation> {
        let records = self.reservations.records();
        let mut shown = filter_by_status(&records, status)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        sort_reservations(&mut shown, sort);
        shown
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.records()
    }

    pub fn menu(&self) -> Vec<MenuItem> {
        self.menu.records()
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.reservations(), &self.orders())
    }

    fn reservation(&self, id: &str) -> Result<Reservation, PersistenceError> {
        self.reservations
            .find(id)
            .ok_or_else(|| not_found(Collection::Reservations, id))
    }

    fn order(&self, id: &str) -> Result<Order, PersistenceError> {
        self.orders
            .find(id)
            .ok_or_else(|| not_found(Collection::Orders, id))
    }

    pub async fn reservation_action(
        &self,
        id: &str,
        action: ReservationAction,
    ) -> Result<ReservationStatus, AdminError> {
        let reservation = self.reservation(id)?;
        Ok(self
            .reservation_service
            .transition(&reservation, action)
            .await?)
    }

    pub async fn set_reservation_status(
        &self,
        id: &str,
        target: ReservationStatus,
    ) -> Result<ReservationStatus, AdminError> {
        let reservation = self.reservation(id)?;
        Ok(self
            .reservation_service
            .set_status(&reservation, target)
            .await?)
    }

    pub async fn order_action(
        &self,
        id: &str,
        action: OrderAction,
    ) -> Result<OrderStatus, AdminError> {
        let order = self.order(id)?;
        Ok(self.order_service.transition(&order, action).await?)
    }

    pub async fn set_order_status(
        &self,
        id: &str,
        target: OrderStatus,
    ) -> Result<OrderStatus, AdminError> {
        let order = self.order(id)?;
        Ok(self.order_service.set_status(&order, target).await?)
    }

    pub async fn delete_order(&self, id: &str) -> Result<(), AdminError> {
        Ok(self.order_service.delete(id).await?)
    }

    pub async fn add_menu_item(&self, item: &NewMenuItem) -> Result<String, AdminError> {
        Ok(self.menu_service.add(item).await?)
    }

    pub async fn update_menu_item(&self, id: &str, item: &NewMenuItem) -> Result<(), AdminError> {
        Ok(self.menu_service.update(id, item).await?)
    }

    pub async fn delete_menu_item(&self, id: &str) -> Result<(), AdminError> {
        Ok(self.menu_service.delete(id).await?)
    }
}
