use std::collections::BTreeMap;

use axum::async_trait;
use tokio::sync::RwLock;

use crate::errors::Error;
use crate::models::customer::Customer;
use crate::models::reservation::Reservation;
use crate::repositories::{CustomerRepo, ReservationRepo};

/// In-memory store backing both repository traits. Ids are assigned
/// sequentially per entity on the first save.
pub struct MemoryRepo {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    customers: BTreeMap<i64, Customer>,
    reservations: BTreeMap<i64, Reservation>,
    next_customer_id: i64,
    next_reservation_id: i64,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
        }
    }

    /// Snapshot of every stored reservation, in id order.
    pub async fn reservation_dump(&self) -> Vec<Reservation> {
        self.state.read().await.reservations.values().cloned().collect()
    }

    /// Snapshot of every stored customer, in id order.
    pub async fn customer_dump(&self) -> Vec<Customer> {
        self.state.read().await.customers.values().cloned().collect()
    }
}

impl Default for MemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepo for MemoryRepo {
    async fn all(&self) -> Result<Vec<Customer>, Error> {
        let state = self.state.read().await;
        Ok(state.customers.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Customer, Error> {
        let state = self.state.read().await;
        state
            .customers
            .get(&id)
            .cloned()
            .ok_or(Error::CustomerNotFound(id))
    }

    async fn save(&self, customer: &mut Customer) -> Result<(), Error> {
        let mut state = self.state.write().await;
        let id = match customer.id {
            Some(id) => id,
            None => {
                state.next_customer_id += 1;
                let id = state.next_customer_id;
                customer.id = Some(id);
                id
            }
        };
        state.customers.insert(id, customer.clone());
        Ok(())
    }

    async fn reservations(&self, customer_id: i64) -> Result<Vec<Reservation>, Error> {
        let state = self.state.read().await;
        Ok(state
            .reservations
            .values()
            .filter(|r| r.customer_id == customer_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReservationRepo for MemoryRepo {
    async fn save(&self, reservation: &mut Reservation) -> Result<(), Error> {
        let mut state = self.state.write().await;
        let id = match reservation.id {
            Some(id) => id,
            None => {
                state.next_reservation_id += 1;
                let id = state.next_reservation_id;
                reservation.id = Some(id);
                id
            }
        };
        state.reservations.insert(id, reservation.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(first: &str, last: &str) -> Customer {
        Customer::new(first.into(), last.into(), "555-0100".into(), String::new())
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = MemoryRepo::new();
        let mut alice = customer("Alice", "Ng");
        let mut bob = customer("Bob", "Reyes");

        CustomerRepo::save(&repo, &mut alice).await.unwrap();
        CustomerRepo::save(&repo, &mut bob).await.unwrap();

        assert_eq!(alice.id, Some(1));
        assert_eq!(bob.id, Some(2));
    }

    #[tokio::test]
    async fn save_with_id_overwrites_in_place() {
        let repo = MemoryRepo::new();
        let mut alice = customer("Alice", "Ng");
        CustomerRepo::save(&repo, &mut alice).await.unwrap();

        alice.phone = "555-0199".into();
        CustomerRepo::save(&repo, &mut alice).await.unwrap();

        let stored = repo.get(1).await.unwrap();
        assert_eq!(stored.phone, "555-0199");
        assert_eq!(repo.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let repo = MemoryRepo::new();
        match repo.get(42).await {
            Err(Error::CustomerNotFound(42)) => {}
            other => panic!("expected CustomerNotFound, got {:?}", other.map(|c| c.id)),
        }
    }

    #[tokio::test]
    async fn reservations_filter_by_customer() {
        let repo = MemoryRepo::new();
        let mut first = Reservation {
            id: None,
            customer_id: 1,
            start_at: None,
            num_guests: Some(2),
            notes: None,
        };
        let mut second = Reservation {
            id: None,
            customer_id: 2,
            start_at: None,
            num_guests: Some(6),
            notes: Some("patio".into()),
        };
        ReservationRepo::save(&repo, &mut first).await.unwrap();
        ReservationRepo::save(&repo, &mut second).await.unwrap();

        let for_two = repo.reservations(2).await.unwrap();
        assert_eq!(for_two, vec![second]);
        assert!(repo.reservations(3).await.unwrap().is_empty());
    }
}
