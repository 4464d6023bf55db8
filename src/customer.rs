// Customers: contact and payment data plus their own reservation bookkeeping

use crate::ids::IdGenerator;
use crate::records::{Address, CreditCard, CustomerId, Guest, Name};
use crate::reservation::Reservation;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    id: String,
    name: Name,
    address: Address,
    payment: CreditCard,
    identification: Option<CustomerId>,
    reservation_ids: Vec<String>,
}

impl Customer {
    pub fn new(
        ids: &mut dyn IdGenerator,
        name: Name,
        address: Address,
        payment: CreditCard,
    ) -> Self {
        Self {
            id: ids.next_id(),
            name,
            address,
            payment,
            identification: None,
            reservation_ids: Vec::new(),
        }
    }

    pub fn with_identification(mut self, identification: CustomerId) -> Self {
        self.identification = Some(identification);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn payment(&self) -> &CreditCard {
        &self.payment
    }

    pub fn identification(&self) -> Option<&CustomerId> {
        self.identification.as_ref()
    }

    pub fn reservation_ids(&self) -> &[String] {
        &self.reservation_ids
    }

    /// Appends to this customer's own list. Booking through the hotel does
    /// not call this; the caller does after a reservation is made.
    pub fn add_reservation(&mut self, reservation: &Reservation) {
        self.reservation_ids.push(reservation.id().to_string());
    }

    pub fn guest_info(&self) -> Guest {
        Guest {
            name: self.name.clone(),
            address: self.address.clone(),
        }
    }
}
