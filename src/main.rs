// Demonstration driver: build the hotel, book a three-day stay and check in

use anyhow::{bail, Context, Result};
use chrono::{Duration, Local};
use hotel_booking::{
    Address, AvailabilityReport, CreditCard, Customer, CustomerId, Hotel, HotelConfig, Name,
    RandomIdGenerator, RoomType,
};
use tracing::{error, info};

fn load_config() -> Result<HotelConfig> {
    match std::env::args().nth(1) {
        Some(path) => HotelConfig::from_file(&path)
            .with_context(|| format!("Failed to load hotel configuration from {}", path)),
        None => Ok(HotelConfig::default()),
    }
}

fn run() -> Result<()> {
    let config = load_config()?;
    let mut hotel = Hotel::from_config(&config)?;

    let mut customer = Customer::new(
        &mut RandomIdGenerator::new(config.id_length),
        Name::new("John", "Smith"),
        Address::new("123 Main Street", "New York", "10001"),
        CreditCard::new("4111111111111111", "12/27"),
    )
    .with_identification(CustomerId::new("P1234567", "PASSPORT"));

    let check_in = Local::now().date_naive();
    let check_out = check_in + Duration::days(3);

    let report = AvailabilityReport::build(&hotel, check_in, check_out);
    info!(available = report.total_available(), "Rooms free for the stay");

    let reservation = hotel.make_reservation(&customer, check_in, check_out, RoomType::Deluxe)?;
    customer.add_reservation(reservation);
    let reservation_id = reservation.id().to_string();

    println!("Reservation created: {}", reservation_id);
    println!("Total cost: {}", reservation.calculate_total_cost());

    let outcome = hotel.check_in(&reservation_id)?;
    if !outcome.is_success() {
        bail!("Check-in failed for reservation {}: {:?}", reservation_id, outcome);
    }
    println!("Check-in successful: {}", outcome.is_success());

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        error!("Demo failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
