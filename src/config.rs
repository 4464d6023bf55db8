// Hotel configuration: name, currency, identifier length and the room inventory

use crate::ids::DEFAULT_ID_LENGTH;
use crate::room::{RoomType, DEFAULT_CURRENCY};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub number: u32,
    pub room_type: RoomType,
    pub nightly_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    pub name: String,
    pub currency: String,
    pub id_length: usize,
    pub rooms: Vec<RoomSpec>,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            name: "Grand Palace".to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            id_length: DEFAULT_ID_LENGTH,
            rooms: vec![
                RoomSpec {
                    number: 101,
                    room_type: RoomType::Single,
                    nightly_rate: 100.0,
                },
                RoomSpec {
                    number: 102,
                    room_type: RoomType::Double,
                    nightly_rate: 150.0,
                },
                RoomSpec {
                    number: 201,
                    room_type: RoomType::Suite,
                    nightly_rate: 200.0,
                },
                RoomSpec {
                    number: 301,
                    room_type: RoomType::Deluxe,
                    nightly_rate: 250.0,
                },
            ],
        }
    }
}

impl HotelConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: HotelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    // Duplicate room numbers are allowed, the inventory never checked them
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("hotel name is empty".to_string()));
        }
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency is empty".to_string()));
        }
        if self.id_length == 0 {
            return Err(ConfigError::Invalid(
                "id_length must be at least 1".to_string(),
            ));
        }
        if let Some(room) = self
            .rooms
            .iter()
            .find(|r| !(r.nightly_rate.is_finite() && r.nightly_rate >= 0.0))
        {
            return Err(ConfigError::Invalid(format!(
                "room {} has invalid nightly rate {}",
                room.number, room.nightly_rate
            )));
        }
        Ok(())
    }
}
