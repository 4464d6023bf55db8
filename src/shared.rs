// Thread-safe handle: one lock serializes every operation on the hotel

use crate::customer::Customer;
use crate::hotel::{Hotel, HotelError};
use crate::records::{Guest, Money};
use crate::reservation::{CheckInOutcome, Reservation};
use crate::room::{RoomHandle, RoomType};
use chrono::NaiveDate;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SharedHotel {
    inner: Arc<Mutex<Hotel>>,
}

impl SharedHotel {
    pub fn new(hotel: Hotel) -> Self {
        Self {
            inner: Arc::new(Mutex::new(hotel)),
        }
    }

    /// Availability check and booking happen under the same lock, so two
    /// callers can never be handed the same room for overlapping stays.
    pub fn make_reservation(
        &self,
        customer: &Customer,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_type: RoomType,
    ) -> Result<Reservation, HotelError> {
        let mut hotel = self.inner.lock();
        hotel
            .make_reservation(customer, check_in, check_out, room_type)
            .cloned()
    }

    pub fn check_in(&self, reservation_id: &str) -> Result<CheckInOutcome, HotelError> {
        self.inner.lock().check_in(reservation_id)
    }

    pub fn check_out(&self, room: RoomHandle) -> Result<Option<Guest>, HotelError> {
        self.inner.lock().check_out(room)
    }

    pub fn total_cost(&self, reservation_id: &str) -> Result<Money, HotelError> {
        self.inner.lock().total_cost(reservation_id)
    }

    /// Runs `f` with exclusive access to the hotel.
    pub fn with_hotel<R>(&self, f: impl FnOnce(&mut Hotel) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
