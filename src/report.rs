// Availability report: free rooms for a stay, grouped by room type, as XML or JSON

use crate::hotel::Hotel;
use crate::room::RoomType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("XML serialization error: {0}")]
    XmlError(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[serde(rename = "AvailRS")]
pub struct AvailabilityReport {
    pub hotel: String,
    pub check_in: String,
    pub check_out: String,
    pub nights: i64,
    pub room_types: ReportRoomTypes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ReportRoomTypes {
    #[serde(rename = "RoomType")]
    pub room_types: Vec<ReportRoomType>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ReportRoomType {
    pub code: String,
    pub available: usize,
    pub rooms: ReportRooms,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ReportRooms {
    #[serde(rename = "Room")]
    pub rooms: Vec<ReportRoom>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ReportRoom {
    pub number: u32,
    pub currency: String,
    pub nightly_rate: f64,
    pub total: f64,
}

impl AvailabilityReport {
    /// Snapshot of every room free over `[check_in, check_out]`. Types with
    /// no free room are left out; rooms keep inventory order.
    pub fn build(hotel: &Hotel, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        let nights = (check_out - check_in).num_days();
        let free = hotel.available_rooms(check_in, check_out, None);

        let room_types = RoomType::ALL
            .into_iter()
            .filter_map(|room_type| {
                let rooms: Vec<ReportRoom> = free
                    .iter()
                    .filter(|r| r.room_type() == room_type)
                    .map(|r| ReportRoom {
                        number: r.number(),
                        currency: r.nightly_rate().currency.clone(),
                        nightly_rate: r.nightly_rate().amount,
                        total: r.nightly_rate().times(nights).amount,
                    })
                    .collect();

                if rooms.is_empty() {
                    return None;
                }
                Some(ReportRoomType {
                    code: room_type.to_string(),
                    available: rooms.len(),
                    rooms: ReportRooms { rooms },
                })
            })
            .collect();

        AvailabilityReport {
            hotel: hotel.name().to_string(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            nights,
            room_types: ReportRoomTypes { room_types },
        }
    }

    pub fn total_available(&self) -> usize {
        self.room_types.room_types.iter().map(|t| t.available).sum()
    }

    pub fn to_xml(&self) -> Result<String, ReportError> {
        quick_xml::se::to_string(self).map_err(|e| ReportError::XmlError(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
