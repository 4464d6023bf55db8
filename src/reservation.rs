// Reservations: a customer, a room and a stay, plus the check-in state

use crate::customer::Customer;
use crate::records::{Guest, Money};
use crate::room::{Room, RoomHandle};
use chrono::NaiveDate;
use serde::Serialize;

/// Inclusive date range of a stay. Ordering between the two dates is not
/// enforced; an inverted range is stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StayDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayDates {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    // Touching ranges overlap: a checkout day equal to another's check-in day
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.check_out >= start && self.check_in <= end
    }

    /// Whole days between check-in and check-out, negative for inverted ranges.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    CheckedIn,
    AlreadyCheckedIn,
    RoomOccupied,
}

impl CheckInOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckInOutcome::CheckedIn)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Reservation {
    id: String,
    customer_id: String,
    guest: Guest,
    room_number: u32,
    room: RoomHandle,
    nightly_rate: Money,
    stay: StayDates,
    checked_in: bool,
}

impl Reservation {
    pub(crate) fn new(
        id: impl Into<String>,
        customer: &Customer,
        room: &Room,
        handle: RoomHandle,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer.id().to_string(),
            guest: customer.guest_info(),
            room_number: room.number(),
            room: handle,
            nightly_rate: room.nightly_rate().clone(),
            stay: StayDates::new(check_in, check_out),
            checked_in: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn guest(&self) -> &Guest {
        &self.guest
    }

    pub fn room_number(&self) -> u32 {
        self.room_number
    }

    /// The inventory slot this reservation was booked into.
    pub fn room_handle(&self) -> RoomHandle {
        self.room
    }

    pub fn stay(&self) -> StayDates {
        self.stay
    }

    pub fn check_in_date(&self) -> NaiveDate {
        self.stay.check_in
    }

    pub fn check_out_date(&self) -> NaiveDate {
        self.stay.check_out
    }

    pub fn nights(&self) -> i64 {
        self.stay.nights()
    }

    pub fn is_checked_in(&self) -> bool {
        self.checked_in
    }

    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.stay.overlaps(start, end)
    }

    /// Nights multiplied by the nightly rate. Zero or negative stays are not
    /// rejected and price as zero or negative.
    pub fn calculate_total_cost(&self) -> Money {
        self.nightly_rate.times(self.nights())
    }

    /// Puts the guest into `room`. The flag follows the room's answer, so an
    /// occupied room leaves the reservation not checked in.
    ///
    /// Availability for the stay is not re-validated here. `room` must be the
    /// room behind [`Reservation::room_handle`]; the hotel resolves it.
    pub(crate) fn check_in(&mut self, room: &mut Room) -> CheckInOutcome {
        if self.checked_in {
            return CheckInOutcome::AlreadyCheckedIn;
        }

        self.checked_in = room.check_in(self.guest.clone());
        if self.checked_in {
            CheckInOutcome::CheckedIn
        } else {
            CheckInOutcome::RoomOccupied
        }
    }
}
