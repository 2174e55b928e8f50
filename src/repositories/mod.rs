use axum::async_trait;

use crate::errors::Error;
use crate::models::customer::Customer;
use crate::models::reservation::Reservation;

pub mod memory_repo;

/// Persistence seam for customers. Handlers only ever talk to the store
/// through this trait so tests can substitute their own implementation.
#[async_trait]
pub trait CustomerRepo: Send + Sync {
    async fn all(&self) -> Result<Vec<Customer>, Error>;

    /// Fails with [`Error::CustomerNotFound`] when the id is unknown.
    async fn get(&self, id: i64) -> Result<Customer, Error>;

    /// Assigns `customer.id` on the first save, overwrites on later saves.
    async fn save(&self, customer: &mut Customer) -> Result<(), Error>;

    async fn reservations(&self, customer_id: i64) -> Result<Vec<Reservation>, Error>;
}

#[async_trait]
pub trait ReservationRepo: Send + Sync {
    /// Assigns `reservation.id` on the first save.
    async fn save(&self, reservation: &mut Reservation) -> Result<(), Error>;
}
