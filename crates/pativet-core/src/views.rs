use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClinicError;
use crate::models::{Appointment, AppointmentStatus, InventoryItem, Owner, Pet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Veterinarian,
    PetOwner,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Veterinarian => "veterinarian",
            Self::PetOwner => "pet_owner",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "veterinarian" | "vet" => Ok(Self::Veterinarian),
            "pet_owner" | "owner" => Ok(Self::PetOwner),
            _ => Err(ClinicError::InvalidRole(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Dashboard,
    Appointments,
    Inventory,
    Clients,
    AiChecker,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Appointments,
        Self::Inventory,
        Self::Clients,
        Self::AiChecker,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Appointments => "appointments",
            Self::Inventory => "inventory",
            Self::Clients => "clients",
            Self::AiChecker => "ai_checker",
        }
    }

    /// View-selection gate only; the data layer itself does not check roles.
    #[must_use]
    pub const fn allows(&self, role: Role) -> bool {
        match self {
            Self::Dashboard | Self::Appointments | Self::AiChecker => true,
            Self::Inventory | Self::Clients => matches!(role, Role::Veterinarian),
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Self::Dashboard),
            "appointments" => Ok(Self::Appointments),
            "inventory" => Ok(Self::Inventory),
            "clients" => Ok(Self::Clients),
            "ai_checker" | "ai-checker" => Ok(Self::AiChecker),
            _ => Err(ClinicError::InvalidSection(s.to_string())),
        }
    }
}

#[must_use]
pub fn visible_sections(role: Role) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|section| section.allows(role))
        .collect()
}

/// Critical stock: quantity at or below the configured reorder threshold.
#[must_use]
pub const fn is_critical(item: &InventoryItem) -> bool {
    item.quantity <= item.reorder_level
}

#[must_use]
pub fn critical_count(items: &[InventoryItem]) -> usize {
    items.iter().filter(|item| is_critical(item)).count()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardSummary {
    pub total_pets: usize,
    pub total_owners: usize,
    pub total_appointments: usize,
    pub scheduled_appointments: usize,
    pub critical_stock: usize,
}

#[must_use]
pub fn dashboard_summary(
    pets: &[Pet],
    owners: &[Owner],
    appointments: &[Appointment],
    inventory: &[InventoryItem],
) -> DashboardSummary {
    DashboardSummary {
        total_pets: pets.len(),
        total_owners: owners.len(),
        total_appointments: appointments.len(),
        scheduled_appointments: appointments
            .iter()
            .filter(|appointment| appointment.status == AppointmentStatus::Scheduled)
            .count(),
        critical_stock: critical_count(inventory),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::models::ItemCategory;

    fn item(id: &str, quantity: u32, reorder_level: u32) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            category: ItemCategory::Medicine,
            quantity,
            unit: "tablet".to_string(),
            reorder_level,
            price: 120,
        }
    }

    fn appointment(id: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: id.to_string(),
            pet_id: "p1".to_string(),
            pet_name: "Luna".to_string(),
            owner_name: "Ayşe Kaya".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 7).expect("date"),
            time: NaiveTime::from_hms_opt(9, 15, 0).expect("time"),
            reason: "Dental cleaning".to_string(),
            status,
        }
    }

    #[test]
    fn pet_owner_never_sees_inventory_or_clients() {
        let sections = visible_sections(Role::PetOwner);
        assert!(!sections.contains(&Section::Inventory));
        assert!(!sections.contains(&Section::Clients));
        assert_eq!(
            sections,
            vec![Section::Dashboard, Section::Appointments, Section::AiChecker]
        );
    }

    #[test]
    fn veterinarian_sees_every_section() {
        assert_eq!(visible_sections(Role::Veterinarian), Section::ALL.to_vec());
    }

    #[test]
    fn critical_predicate_includes_the_threshold_itself() {
        assert!(is_critical(&item("i1", 15, 15)));
        assert!(is_critical(&item("i2", 0, 15)));
        assert!(!is_critical(&item("i3", 16, 15)));
    }

    #[test]
    fn dashboard_summary_counts_scheduled_and_critical() {
        let appointments = vec![
            appointment("a1", AppointmentStatus::Scheduled),
            appointment("a2", AppointmentStatus::Completed),
            appointment("a3", AppointmentStatus::Scheduled),
        ];
        let inventory = vec![item("i1", 3, 15), item("i2", 40, 15)];
        let summary = dashboard_summary(&[], &[], &appointments, &inventory);
        assert_eq!(summary.total_appointments, 3);
        assert_eq!(summary.scheduled_appointments, 2);
        assert_eq!(summary.critical_stock, 1);
    }

    #[test]
    fn role_parses_short_aliases() {
        assert_eq!("vet".parse::<Role>().expect("parse"), Role::Veterinarian);
        assert_eq!("owner".parse::<Role>().expect("parse"), Role::PetOwner);
        assert!("admin".parse::<Role>().is_err());
    }
}
