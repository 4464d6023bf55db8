// In-memory hotel booking: room inventory, reservations, check-in and check-out

pub mod config;
pub mod customer;
pub mod hotel;
pub mod ids;
pub mod records;
pub mod report;
pub mod reservation;
pub mod room;
pub mod shared;

// Re-export key types for convenience
pub use config::{ConfigError, HotelConfig, RoomSpec};
pub use customer::Customer;
pub use hotel::{Hotel, HotelError};
pub use ids::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use records::{Address, CreditCard, CustomerId, Guest, Money, Name};
pub use report::{AvailabilityReport, ReportError};
pub use reservation::{CheckInOutcome, Reservation, StayDates};
pub use room::{Room, RoomHandle, RoomType};
pub use shared::SharedHotel;
