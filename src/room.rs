// Room inventory entries: type, nightly rate, occupancy and the per-room booking index

use crate::records::{Guest, Money};
use crate::reservation::{Reservation, StayDates};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Deluxe,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Suite,
        RoomType::Deluxe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "SINGLE",
            RoomType::Double => "DOUBLE",
            RoomType::Suite => "SUITE",
            RoomType::Deluxe => "DELUXE",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown room type: {0}")]
pub struct ParseRoomTypeError(pub String);

impl FromStr for RoomType {
    type Err = ParseRoomTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseRoomTypeError(s.to_string()))
    }
}

/// Position of a room in a hotel's inventory. Room numbers may repeat, so
/// this is what identifies a room once it has been added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomHandle(usize);

impl RoomHandle {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// One entry of the room's booking index. Stay dates never change after
// booking, so keeping a copy next to the id cannot drift from the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct RoomBooking {
    reservation_id: String,
    stay: StayDates,
}

#[derive(Debug, Clone, Serialize)]
pub struct Room {
    number: u32,
    room_type: RoomType,
    nightly_rate: Money,
    occupant: Option<Guest>,
    bookings: Vec<RoomBooking>,
}

impl Room {
    pub fn new(number: u32, room_type: RoomType, nightly_rate: f64) -> Self {
        Self::with_rate(number, room_type, Money::new(nightly_rate, DEFAULT_CURRENCY))
    }

    pub fn with_rate(number: u32, room_type: RoomType, nightly_rate: Money) -> Self {
        Self {
            number,
            room_type,
            nightly_rate,
            occupant: None,
            bookings: Vec::new(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn nightly_rate(&self) -> &Money {
        &self.nightly_rate
    }

    pub fn occupant(&self) -> Option<&Guest> {
        self.occupant.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn reservation_ids(&self) -> impl Iterator<Item = &str> {
        self.bookings.iter().map(|b| b.reservation_id.as_str())
    }

    /// True when no reservation recorded against this room touches
    /// `[check_in, check_out]`. Boundary days count as overlapping.
    pub fn is_available(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        !self
            .bookings
            .iter()
            .any(|b| b.stay.overlaps(check_in, check_out))
    }

    // Only the hotel records bookings, right after adding them to its ledger
    pub(crate) fn record_reservation(&mut self, reservation: &Reservation) {
        self.bookings.push(RoomBooking {
            reservation_id: reservation.id().to_string(),
            stay: reservation.stay(),
        });
    }

    // Occupancy only changes through check_in/check_out
    pub fn check_in(&mut self, guest: Guest) -> bool {
        if self.occupant.is_some() {
            return false;
        }
        self.occupant = Some(guest);
        true
    }

    /// Clears the occupant, returning whoever was in the room.
    pub fn check_out(&mut self) -> Option<Guest> {
        self.occupant.take()
    }
}
