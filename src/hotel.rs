// Hotel: room inventory, reservation ledger, booking and check-in/check-out

use crate::config::{ConfigError, HotelConfig};
use crate::customer::Customer;
use crate::ids::{IdGenerator, RandomIdGenerator};
use crate::records::{Guest, Money};
use crate::reservation::{CheckInOutcome, Reservation};
use crate::room::{Room, RoomHandle, RoomType, DEFAULT_CURRENCY};
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("No available rooms of type {0}")]
    NoAvailableRoom(RoomType),

    #[error("Hotel name cannot be empty")]
    EmptyName,

    #[error("Unknown reservation: {0}")]
    UnknownReservation(String),

    #[error("Unknown room: {0}")]
    UnknownRoom(RoomHandle),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Owns every room and every reservation made through it.
///
/// The reservation ledger is the single store of reservation records. Rooms
/// keep an index of the reservations booked against them and answer
/// availability from that index; customers keep reservation ids only.
pub struct Hotel {
    name: String,
    currency: String,
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
    ids: Box<dyn IdGenerator>,
}

impl fmt::Debug for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hotel")
            .field("name", &self.name)
            .field("currency", &self.currency)
            .field("rooms", &self.rooms)
            .field("reservations", &self.reservations)
            .finish_non_exhaustive()
    }
}

impl Hotel {
    pub fn new(name: impl Into<String>) -> Result<Self, HotelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(HotelError::EmptyName);
        }

        Ok(Self {
            name,
            currency: DEFAULT_CURRENCY.to_string(),
            rooms: Vec::new(),
            reservations: Vec::new(),
            ids: Box::new(RandomIdGenerator::default()),
        })
    }

    pub fn from_config(config: &HotelConfig) -> Result<Self, HotelError> {
        config.validate()?;

        let mut hotel = Hotel::new(config.name.clone())?
            .with_id_generator(RandomIdGenerator::new(config.id_length));
        hotel.currency = config.currency.clone();
        for spec in &config.rooms {
            hotel.add_room(Room::with_rate(
                spec.number,
                spec.room_type,
                Money::new(spec.nightly_rate, config.currency.clone()),
            ));
        }

        info!(
            hotel = %hotel.name,
            rooms = hotel.rooms.len(),
            "Hotel built from configuration"
        );
        Ok(hotel)
    }

    /// Replaces the generator used for reservation ids.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Appends to the inventory. Room numbers are not checked for
    /// uniqueness; the returned handle tells rooms apart.
    pub fn add_room(&mut self, room: Room) -> RoomHandle {
        let handle = RoomHandle::new(self.rooms.len());
        debug!(
            room = room.number(),
            room_type = %room.room_type(),
            %handle,
            "Adding room to inventory"
        );
        self.rooms.push(room);
        handle
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room_by_handle(&self, handle: RoomHandle) -> Option<&Room> {
        self.rooms.get(handle.index())
    }

    /// First room in the inventory carrying `number`.
    pub fn room(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number() == number)
    }

    /// Every reservation ever made, in creation order.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn reservation(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id() == id)
    }

    pub fn reservations_for_customer(&self, customer_id: &str) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.customer_id() == customer_id)
            .collect()
    }

    pub fn occupied_rooms(&self) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.is_occupied()).collect()
    }

    fn available_room_index(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_type: RoomType,
    ) -> Option<usize> {
        self.rooms
            .iter()
            .position(|r| r.room_type() == room_type && r.is_available(check_in, check_out))
    }

    /// First room in insertion order of `room_type` that is free over the
    /// whole stay. No attempt is made to pick the cheapest room.
    pub fn find_available_room(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_type: RoomType,
    ) -> Option<&Room> {
        self.available_room_index(check_in, check_out, room_type)
            .map(|index| &self.rooms[index])
    }

    /// All free rooms for the stay, optionally limited to one type.
    pub fn available_rooms(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_type: Option<RoomType>,
    ) -> Vec<&Room> {
        let rooms: Vec<&Room> = self
            .rooms
            .iter()
            .filter(|r| room_type.map_or(true, |t| r.room_type() == t))
            .filter(|r| r.is_available(check_in, check_out))
            .collect();

        debug!(
            %check_in,
            %check_out,
            ?room_type,
            found = rooms.len(),
            "Availability scan"
        );
        rooms
    }

    /// Books the first free room of `room_type` for the stay.
    ///
    /// The reservation goes into the ledger and into the chosen room's
    /// booking index. It is not added to the customer; callers do that with
    /// [`Customer::add_reservation`].
    pub fn make_reservation(
        &mut self,
        customer: &Customer,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_type: RoomType,
    ) -> Result<&Reservation, HotelError> {
        let Some(index) = self.available_room_index(check_in, check_out, room_type) else {
            warn!(
                %room_type,
                %check_in,
                %check_out,
                customer = customer.id(),
                "No room available"
            );
            return Err(HotelError::NoAvailableRoom(room_type));
        };

        let reservation = Reservation::new(
            self.ids.next_id(),
            customer,
            &self.rooms[index],
            RoomHandle::new(index),
            check_in,
            check_out,
        );
        self.rooms[index].record_reservation(&reservation);

        info!(
            reservation = reservation.id(),
            room = reservation.room_number(),
            customer = customer.id(),
            %check_in,
            %check_out,
            "Reservation created"
        );

        self.reservations.push(reservation);
        Ok(&self.reservations[self.reservations.len() - 1])
    }

    pub fn total_cost(&self, reservation_id: &str) -> Result<Money, HotelError> {
        self.reservation(reservation_id)
            .map(Reservation::calculate_total_cost)
            .ok_or_else(|| HotelError::UnknownReservation(reservation_id.to_string()))
    }

    /// Checks the reservation's guest into its room.
    ///
    /// Quiet failures (already checked in, room occupied) come back as an
    /// outcome; only an unknown reservation is an error. Ids are not
    /// checked for collisions, so a repeated id resolves to the earliest
    /// reservation carrying it.
    pub fn check_in(&mut self, reservation_id: &str) -> Result<CheckInOutcome, HotelError> {
        let reservation = self
            .reservations
            .iter_mut()
            .find(|r| r.id() == reservation_id)
            .ok_or_else(|| HotelError::UnknownReservation(reservation_id.to_string()))?;

        // Handles come from this hotel's own inventory, which never shrinks
        let handle = reservation.room_handle();
        let room = self
            .rooms
            .get_mut(handle.index())
            .ok_or(HotelError::UnknownRoom(handle))?;
        let outcome = reservation.check_in(room);

        match outcome {
            CheckInOutcome::CheckedIn => info!(
                reservation = reservation_id,
                room = room.number(),
                "Guest checked in"
            ),
            other => warn!(
                reservation = reservation_id,
                room = room.number(),
                outcome = ?other,
                "Check-in refused"
            ),
        }
        Ok(outcome)
    }

    /// Empties the room, returning the previous occupant if there was one.
    /// Takes the handle from [`Hotel::add_room`] or
    /// [`Reservation::room_handle`].
    pub fn check_out(&mut self, handle: RoomHandle) -> Result<Option<Guest>, HotelError> {
        let room = self
            .rooms
            .get_mut(handle.index())
            .ok_or(HotelError::UnknownRoom(handle))?;

        let previous = room.check_out();
        info!(
            room = room.number(),
            %handle,
            was_occupied = previous.is_some(),
            "Room checked out"
        );
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;
    use crate::records::{Address, CreditCard, Name};
    use chrono::Duration;

    fn day(d: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap() + Duration::days(d)
    }

    fn customer(first: &str) -> Customer {
        Customer::new(
            &mut SequentialIdGenerator::new(first.to_uppercase()),
            Name::new(first, "Doe"),
            Address::new("1 Main St", "Springfield", "12345"),
            CreditCard::new("4111111111111111", "12/28"),
        )
    }

    fn hotel_with(rooms: Vec<Room>) -> Hotel {
        let mut hotel = Hotel::new("Grand Palace")
            .unwrap()
            .with_id_generator(SequentialIdGenerator::new("RES"));
        for room in rooms {
            hotel.add_room(room);
        }
        hotel
    }

    #[test]
    fn test_hotel_requires_name() {
        assert!(matches!(Hotel::new(""), Err(HotelError::EmptyName)));
        assert!(matches!(Hotel::new("   "), Err(HotelError::EmptyName)));
        assert_eq!(Hotel::new("Grand Palace").unwrap().name(), "Grand Palace");
    }

    #[test]
    fn test_add_room_keeps_order_and_duplicates() {
        let hotel = hotel_with(vec![
            Room::new(101, RoomType::Deluxe, 250.0),
            Room::new(101, RoomType::Single, 90.0),
        ]);

        assert_eq!(hotel.rooms().len(), 2);
        assert_eq!(hotel.room(101).unwrap().room_type(), RoomType::Deluxe);
        assert!(hotel.room(999).is_none());
    }

    #[test]
    fn test_deluxe_three_night_stay_costs_750() {
        let mut hotel = hotel_with(vec![Room::new(101, RoomType::Deluxe, 250.0)]);
        let guest = customer("Jane");

        let reservation = hotel
            .make_reservation(&guest, day(0), day(3), RoomType::Deluxe)
            .unwrap();

        assert!(!reservation.id().is_empty());
        assert_eq!(reservation.calculate_total_cost(), Money::new(750.0, "USD"));
        let id = reservation.id().to_string();
        assert_eq!(hotel.total_cost(&id).unwrap().amount, 750.0);
    }

    #[test]
    fn test_overlapping_request_is_refused() {
        let mut hotel = hotel_with(vec![Room::new(101, RoomType::Single, 100.0)]);

        hotel
            .make_reservation(&customer("Jane"), day(0), day(2), RoomType::Single)
            .unwrap();
        let err = hotel
            .make_reservation(&customer("John"), day(1), day(3), RoomType::Single)
            .unwrap_err();

        assert!(matches!(err, HotelError::NoAvailableRoom(RoomType::Single)));
        assert_eq!(err.to_string(), "No available rooms of type SINGLE");
        assert_eq!(hotel.reservations().len(), 1);
    }

    #[test]
    fn test_shared_boundary_day_is_refused() {
        let mut hotel = hotel_with(vec![Room::new(101, RoomType::Single, 100.0)]);

        hotel
            .make_reservation(&customer("Jane"), day(0), day(2), RoomType::Single)
            .unwrap();
        assert!(hotel
            .make_reservation(&customer("John"), day(2), day(4), RoomType::Single)
            .is_err());
    }

    #[test]
    fn test_disjoint_stays_share_a_room() {
        let mut hotel = hotel_with(vec![Room::new(101, RoomType::Single, 100.0)]);

        let first = hotel
            .make_reservation(&customer("Jane"), day(0), day(2), RoomType::Single)
            .unwrap()
            .room_number();
        let second = hotel
            .make_reservation(&customer("John"), day(3), day(5), RoomType::Single)
            .unwrap()
            .room_number();

        assert_eq!(first, 101);
        assert_eq!(second, 101);
        assert_eq!(
            hotel.room(101).unwrap().reservation_ids().collect::<Vec<_>>(),
            vec!["RES-0001", "RES-0002"]
        );
    }

    #[test]
    fn test_first_matching_room_wins_then_next() {
        let mut hotel = hotel_with(vec![
            Room::new(101, RoomType::Double, 180.0),
            Room::new(102, RoomType::Single, 90.0),
            Room::new(103, RoomType::Double, 120.0),
        ]);

        let first = hotel
            .make_reservation(&customer("Jane"), day(0), day(2), RoomType::Double)
            .unwrap()
            .room_number();
        let second = hotel
            .make_reservation(&customer("John"), day(0), day(2), RoomType::Double)
            .unwrap()
            .room_number();

        assert_eq!(first, 101);
        assert_eq!(second, 103);
        assert!(matches!(
            hotel.make_reservation(&customer("Jim"), day(1), day(1), RoomType::Double),
            Err(HotelError::NoAvailableRoom(RoomType::Double))
        ));
    }

    #[test]
    fn test_missing_room_type_fails() {
        let mut hotel = hotel_with(vec![Room::new(101, RoomType::Single, 100.0)]);
        assert!(matches!(
            hotel.make_reservation(&customer("Jane"), day(0), day(1), RoomType::Suite),
            Err(HotelError::NoAvailableRoom(RoomType::Suite))
        ));
        assert!(hotel.reservations().is_empty());
    }

    #[test]
    fn test_inverted_stay_is_accepted() {
        let mut hotel = hotel_with(vec![Room::new(101, RoomType::Single, 100.0)]);
        let reservation = hotel
            .make_reservation(&customer("Jane"), day(3), day(1), RoomType::Single)
            .unwrap();

        assert_eq!(reservation.nights(), -2);
        assert_eq!(reservation.calculate_total_cost().amount, -200.0);
    }

    #[test]
    fn test_reservation_not_attached_to_customer() {
        let mut hotel = hotel_with(vec![Room::new(101, RoomType::Single, 100.0)]);
        let mut jane = customer("Jane");

        let reservation = hotel
            .make_reservation(&jane, day(0), day(2), RoomType::Single)
            .unwrap();
        assert!(jane.reservation_ids().is_empty());

        jane.add_reservation(reservation);
        assert_eq!(jane.reservation_ids(), ["RES-0001"]);
        assert_eq!(hotel.reservations_for_customer(jane.id()).len(), 1);
    }

    #[test]
    fn test_book_then_check_in() {
        let mut hotel = hotel_with(vec![Room::new(101, RoomType::Single, 100.0)]);
        let jane = customer("Jane");

        let id = hotel
            .make_reservation(&jane, day(0), day(2), RoomType::Single)
            .unwrap()
            .id()
            .to_string();

        let outcome = hotel.check_in(&id).unwrap();
        assert!(outcome.is_success());
        assert_eq!(hotel.room(101).unwrap().occupant(), Some(&jane.guest_info()));
        assert!(hotel.reservation(&id).unwrap().is_checked_in());
        assert_eq!(hotel.occupied_rooms().len(), 1);

        assert_eq!(hotel.check_in(&id).unwrap(), CheckInOutcome::AlreadyCheckedIn);
        assert_eq!(hotel.room(101).unwrap().occupant(), Some(&jane.guest_info()));
    }

    #[test]
    fn test_check_in_does_not_revalidate_occupancy() {
        let mut hotel = hotel_with(vec![Room::new(101, RoomType::Single, 100.0)]);

        let first = hotel
            .make_reservation(&customer("Jane"), day(0), day(2), RoomType::Single)
            .unwrap()
            .id()
            .to_string();
        let second = hotel
            .make_reservation(&customer("John"), day(5), day(6), RoomType::Single)
            .unwrap()
            .id()
            .to_string();

        assert!(hotel.check_in(&first).unwrap().is_success());
        assert_eq!(hotel.check_in(&second).unwrap(), CheckInOutcome::RoomOccupied);
        assert!(!hotel.reservation(&second).unwrap().is_checked_in());

        let room = hotel.reservation(&first).unwrap().room_handle();
        let previous = hotel.check_out(room).unwrap();
        assert_eq!(previous.unwrap().name.first_name, "Jane");
        assert!(hotel.check_in(&second).unwrap().is_success());
    }

    #[test]
    fn test_check_out_unoccupied_room() {
        let mut hotel = hotel_with(vec![]);
        let room = hotel.add_room(Room::new(101, RoomType::Single, 100.0));

        assert_eq!(hotel.check_out(room).unwrap(), None);
        assert_eq!(hotel.check_out(room).unwrap(), None);
        assert!(hotel.occupied_rooms().is_empty());

        let stray = RoomHandle::new(4);
        assert!(matches!(hotel.check_out(stray), Err(HotelError::UnknownRoom(h)) if h == stray));
    }

    #[test]
    fn test_add_room_hands_out_positions() {
        let mut hotel = hotel_with(vec![]);
        let first = hotel.add_room(Room::new(101, RoomType::Single, 90.0));
        let second = hotel.add_room(Room::new(101, RoomType::Double, 150.0));

        assert_ne!(first, second);
        assert_eq!(second.index(), 1);
        assert_eq!(hotel.room_by_handle(second).unwrap().room_type(), RoomType::Double);
        assert!(hotel.room_by_handle(RoomHandle::new(2)).is_none());
    }

    #[test]
    fn test_check_out_second_room_sharing_a_number() {
        let mut hotel = hotel_with(vec![]);
        let single = hotel.add_room(Room::new(101, RoomType::Single, 90.0));
        let double = hotel.add_room(Room::new(101, RoomType::Double, 150.0));

        let reservation = hotel
            .make_reservation(&customer("Jane"), day(0), day(2), RoomType::Double)
            .unwrap();
        assert_eq!(reservation.room_handle(), double);
        let id = reservation.id().to_string();

        assert!(hotel.check_in(&id).unwrap().is_success());
        assert!(hotel.room_by_handle(double).unwrap().is_occupied());
        assert!(!hotel.room_by_handle(single).unwrap().is_occupied());

        assert_eq!(hotel.check_out(single).unwrap(), None);
        let previous = hotel.check_out(double).unwrap();
        assert_eq!(previous.unwrap().name.first_name, "Jane");
        assert!(hotel.occupied_rooms().is_empty());
    }

    #[derive(Debug)]
    struct FixedIdGenerator;

    impl IdGenerator for FixedIdGenerator {
        fn next_id(&mut self) -> String {
            "X".to_string()
        }
    }

    #[test]
    fn test_repeated_reservation_id_checks_into_its_own_room() {
        let mut hotel = Hotel::new("Grand Palace")
            .unwrap()
            .with_id_generator(FixedIdGenerator);
        let single = hotel.add_room(Room::new(101, RoomType::Single, 90.0));
        let double = hotel.add_room(Room::new(102, RoomType::Double, 150.0));

        hotel
            .make_reservation(&customer("Jane"), day(0), day(2), RoomType::Double)
            .unwrap();
        hotel
            .make_reservation(&customer("John"), day(0), day(2), RoomType::Single)
            .unwrap();
        assert_eq!(hotel.reservations().len(), 2);

        // The earliest reservation with the id wins, and it lands in its own room
        assert!(hotel.check_in("X").unwrap().is_success());
        assert_eq!(
            hotel.room_by_handle(double).unwrap().occupant().unwrap().name.first_name,
            "Jane"
        );
        assert!(!hotel.room_by_handle(single).unwrap().is_occupied());
        assert!(hotel.reservations()[0].is_checked_in());
        assert!(!hotel.reservations()[1].is_checked_in());

        assert_eq!(hotel.check_in("X").unwrap(), CheckInOutcome::AlreadyCheckedIn);
    }

    #[test]
    fn test_unknown_reservation() {
        let mut hotel = hotel_with(vec![Room::new(101, RoomType::Single, 100.0)]);
        assert!(matches!(
            hotel.check_in("nope"),
            Err(HotelError::UnknownReservation(_))
        ));
        assert!(matches!(
            hotel.total_cost("nope"),
            Err(HotelError::UnknownReservation(_))
        ));
    }

    #[test]
    fn test_available_rooms_filters_by_type_and_dates() {
        let mut hotel = hotel_with(vec![
            Room::new(101, RoomType::Single, 100.0),
            Room::new(102, RoomType::Single, 100.0),
            Room::new(201, RoomType::Suite, 300.0),
        ]);
        hotel
            .make_reservation(&customer("Jane"), day(0), day(2), RoomType::Single)
            .unwrap();

        let numbers = |rooms: Vec<&Room>| rooms.iter().map(|r| r.number()).collect::<Vec<_>>();
        assert_eq!(numbers(hotel.available_rooms(day(1), day(2), None)), vec![102, 201]);
        assert_eq!(
            numbers(hotel.available_rooms(day(1), day(2), Some(RoomType::Single))),
            vec![102]
        );
        assert_eq!(numbers(hotel.available_rooms(day(5), day(6), None)), vec![101, 102, 201]);
        assert_eq!(
            hotel
                .find_available_room(day(1), day(2), RoomType::Single)
                .map(Room::number),
            Some(102)
        );
    }

    #[test]
    fn test_hotel_from_config() {
        let config = HotelConfig {
            currency: "EUR".to_string(),
            ..HotelConfig::default()
        };
        let mut hotel = Hotel::from_config(&config).unwrap();

        assert_eq!(hotel.rooms().len(), 4);
        assert_eq!(hotel.currency(), "EUR");

        let reservation = hotel
            .make_reservation(&customer("Jane"), day(0), day(3), RoomType::Deluxe)
            .unwrap();
        assert_eq!(reservation.id().len(), 8);
        assert_eq!(reservation.calculate_total_cost(), Money::new(750.0, "EUR"));

        let bad = HotelConfig {
            id_length: 0,
            ..HotelConfig::default()
        };
        assert!(matches!(Hotel::from_config(&bad), Err(HotelError::Config(_))));
    }
}
