use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ClinicError;
use crate::ids;

/// Reorder threshold applied to every item created through the intake form
/// path; only seed data could in principle differ, and it uses the same
/// value.
pub const DEFAULT_REORDER_LEVEL: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Other,
}

impl Species {
    pub const ALL: [Self; 4] = [Self::Dog, Self::Cat, Self::Bird, Self::Other];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Bird => "Bird",
            Self::Other => "Other",
        }
    }
}

impl Display for Species {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Species {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            "bird" => Ok(Self::Bird),
            "other" => Ok(Self::Other),
            _ => Err(ClinicError::InvalidSpecies(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub age: u32,
    pub weight_kg: u32,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// `pet_ids` is a denormalized back-reference index; the pet record stays the
/// authority on species and breed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub pet_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pet and owner names are denormalized snapshots taken at creation time so
/// historical appointments keep displaying the names they were booked under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub pet_id: String,
    pub pet_name: String,
    pub owner_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Vaccine,
    Medicine,
    Food,
    Equipment,
}

impl ItemCategory {
    pub const ALL: [Self; 4] = [Self::Vaccine, Self::Medicine, Self::Food, Self::Equipment];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vaccine => "Vaccine",
            Self::Medicine => "Medicine",
            Self::Food => "Food",
            Self::Equipment => "Equipment",
        }
    }

    /// Stock-keeping unit label conventionally used for the category.
    #[must_use]
    pub const fn default_unit(&self) -> &'static str {
        match self {
            Self::Food => "kg",
            Self::Medicine => "tablet",
            Self::Vaccine | Self::Equipment => "piece",
        }
    }
}

impl Display for ItemCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ItemCategory {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vaccine" => Ok(Self::Vaccine),
            "medicine" => Ok(Self::Medicine),
            "food" => Ok(Self::Food),
            "equipment" => Ok(Self::Equipment),
            _ => Err(ClinicError::InvalidCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: ItemCategory,
    pub quantity: u32,
    pub unit: String,
    pub reorder_level: u32,
    /// Unit price in minor currency units.
    pub price: u32,
}

impl InventoryItem {
    /// Intake-form path: fresh id, category-conventional unit, default
    /// reorder threshold.
    #[must_use]
    pub fn new(name: impl Into<String>, category: ItemCategory, quantity: u32, price: u32) -> Self {
        Self {
            id: ids::new_id(ids::ITEM_PREFIX),
            name: name.into(),
            category,
            quantity,
            unit: category.default_unit().to_string(),
            reorder_level: DEFAULT_REORDER_LEVEL,
            price,
        }
    }
}

impl Owner {
    /// Registration path: owners always start with an empty pet list.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: ids::new_id(ids::OWNER_PREFIX),
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            pet_ids: Vec::new(),
        }
    }
}

impl Appointment {
    /// Booking-form path: always created as `Scheduled`. The form does not
    /// link a pet record, so `pet_id` may be absent.
    #[must_use]
    pub fn scheduled(
        pet_id: Option<String>,
        pet_name: impl Into<String>,
        owner_name: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: ids::new_id(ids::APPOINTMENT_PREFIX),
            pet_id: pet_id.unwrap_or_default(),
            pet_name: pet_name.into(),
            owner_name: owner_name.into(),
            date,
            time,
            reason: reason.into(),
            status: AppointmentStatus::Scheduled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Vaccination,
    Checkup,
    Surgery,
    Parasite,
}

impl RecordKind {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vaccination => "Vaccination",
            Self::Checkup => "Checkup",
            Self::Surgery => "Surgery",
            Self::Parasite => "Parasite",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: String,
    pub pet_id: String,
    pub date: NaiveDate,
    pub description: String,
    pub treatment: String,
    pub veterinarian: String,
    pub kind: RecordKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
