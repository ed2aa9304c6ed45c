//! Immutable-update mutation operations over the entity collections.
//!
//! Every operation takes the current collection as a slice and returns a
//! fresh `Vec` plus an optional notification draft; the owning aggregate
//! swaps the collection wholesale. None of these operations fail: an unknown
//! mutation target is a silent no-op, and input validation stays at the
//! presentation boundary.

use crate::models::{Appointment, InventoryItem, MedicalRecord, Owner};
use crate::notify::NotificationDraft;

#[derive(Debug, Clone, PartialEq)]
pub struct StockAdjustment {
    pub items: Vec<InventoryItem>,
    /// False when the item id was not found and the collection is unchanged.
    pub changed: bool,
    pub draft: Option<NotificationDraft>,
}

/// Applies `delta` to the named item's quantity, saturating at zero.
///
/// A warning draft is produced only when a decrease lands the quantity at or
/// below the item's reorder level; at most one draft per call, no matter how
/// far below the threshold the quantity ends up.
#[must_use]
pub fn adjust_stock(items: &[InventoryItem], item_id: &str, delta: i64) -> StockAdjustment {
    let mut changed = false;
    let mut draft = None;

    let items = items
        .iter()
        .map(|item| {
            if item.id != item_id {
                return item.clone();
            }
            changed = true;
            let next = i64::from(item.quantity).saturating_add(delta).max(0);
            let new_quantity = u32::try_from(next).unwrap_or(u32::MAX);
            if new_quantity <= item.reorder_level && delta < 0 {
                draft = Some(NotificationDraft::warning(format!(
                    "{} stock dropped to a critical level!",
                    item.name
                )));
            }
            InventoryItem {
                quantity: new_quantity,
                ..item.clone()
            }
        })
        .collect();

    StockAdjustment {
        items,
        changed,
        draft,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prepended<T> {
    pub collection: Vec<T>,
    pub draft: NotificationDraft,
}

fn prepend<T: Clone>(collection: &[T], entity: T) -> Vec<T> {
    let mut next = Vec::with_capacity(collection.len() + 1);
    next.push(entity);
    next.extend_from_slice(collection);
    next
}

#[must_use]
pub fn add_inventory_item(items: &[InventoryItem], item: InventoryItem) -> Prepended<InventoryItem> {
    let draft = NotificationDraft::info(format!("{} added to the inventory.", item.name));
    Prepended {
        collection: prepend(items, item),
        draft,
    }
}

/// Owners are always registered with an empty pet list; no exposed path
/// attaches a pet to an existing owner afterwards.
#[must_use]
pub fn add_owner(owners: &[Owner], owner: Owner) -> Prepended<Owner> {
    let draft = NotificationDraft::info(format!("{} registered successfully.", owner.name));
    Prepended {
        collection: prepend(owners, owner),
        draft,
    }
}

/// No slot-collision check: any number of appointments may share a date and
/// time.
#[must_use]
pub fn add_appointment(
    appointments: &[Appointment],
    appointment: Appointment,
) -> Prepended<Appointment> {
    let draft = NotificationDraft::info(format!(
        "Appointment created for {}.",
        appointment.pet_name
    ));
    Prepended {
        collection: prepend(appointments, appointment),
        draft,
    }
}

#[must_use]
pub fn add_medical_record(
    records: &[MedicalRecord],
    record: MedicalRecord,
) -> Prepended<MedicalRecord> {
    let draft = NotificationDraft::info(format!("{} record saved.", record.kind.label()));
    Prepended {
        collection: prepend(records, record),
        draft,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::models::{AppointmentStatus, ItemCategory, RecordKind, Severity};

    fn sample_item(id: &str, quantity: u32, reorder_level: u32) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: format!("Rabies Vaccine {id}"),
            category: ItemCategory::Vaccine,
            quantity,
            unit: "piece".to_string(),
            reorder_level,
            price: 450,
        }
    }

    fn sample_owner(id: &str, name: &str) -> Owner {
        Owner {
            id: id.to_string(),
            name: name.to_string(),
            phone: "0555 123 45 67".to_string(),
            email: format!("{id}@example.com"),
            address: "Istanbul, Kadıköy".to_string(),
            pet_ids: Vec::new(),
        }
    }

    fn sample_appointment(id: &str, pet_name: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            pet_id: "p1".to_string(),
            pet_name: pet_name.to_string(),
            owner_name: "Ayşe Kaya".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 12).expect("date"),
            time: NaiveTime::from_hms_opt(10, 30, 0).expect("time"),
            reason: "Annual checkup".to_string(),
            status: AppointmentStatus::Scheduled,
        }
    }

    #[test]
    fn adjust_stock_applies_delta_and_never_goes_negative() {
        let items = vec![sample_item("i1", 10, 5)];

        let up = adjust_stock(&items, "i1", 3);
        assert!(up.changed);
        assert_eq!(up.items[0].quantity, 13);
        assert!(up.draft.is_none());

        let floor = adjust_stock(&items, "i1", -100);
        assert_eq!(floor.items[0].quantity, 0);
    }

    #[test]
    fn adjust_stock_unknown_id_is_a_silent_noop() {
        let items = vec![sample_item("i1", 10, 5)];
        let result = adjust_stock(&items, "missing", -3);
        assert!(!result.changed);
        assert_eq!(result.items, items);
        assert!(result.draft.is_none());
    }

    #[test]
    fn decrease_into_critical_zone_warns_exactly_once() {
        let items = vec![sample_item("i1", 16, 15)];

        let first = adjust_stock(&items, "i1", -1);
        assert_eq!(first.items[0].quantity, 15);
        let draft = first.draft.expect("warning at threshold");
        assert_eq!(draft.severity, Severity::Warning);
        assert!(draft.message.contains("Rabies Vaccine i1"));

        let second = adjust_stock(&first.items, "i1", -1);
        assert_eq!(second.items[0].quantity, 14);
        assert!(second.draft.is_some(), "still at or below threshold");
    }

    #[test]
    fn deep_undershoot_still_warns_exactly_once() {
        let items = vec![sample_item("i1", 10, 15)];
        let result = adjust_stock(&items, "i1", -100);
        assert_eq!(result.items[0].quantity, 0);
        assert!(result.draft.is_some());
    }

    #[test]
    fn extreme_deltas_saturate_instead_of_overflowing() {
        let items = vec![sample_item("i1", 10, 5)];

        let up = adjust_stock(&items, "i1", i64::MAX);
        assert!(up.changed);
        assert_eq!(up.items[0].quantity, u32::MAX);
        assert!(up.draft.is_none());

        let down = adjust_stock(&items, "i1", i64::MIN);
        assert_eq!(down.items[0].quantity, 0);
        assert!(down.draft.is_some());
    }

    #[test]
    fn decrease_staying_above_threshold_does_not_warn() {
        let items = vec![sample_item("i1", 40, 15)];
        let result = adjust_stock(&items, "i1", -5);
        assert_eq!(result.items[0].quantity, 35);
        assert!(result.draft.is_none());
    }

    #[test]
    fn increase_below_threshold_does_not_warn() {
        let items = vec![sample_item("i1", 3, 15)];
        let result = adjust_stock(&items, "i1", 2);
        assert_eq!(result.items[0].quantity, 5);
        assert!(result.draft.is_none(), "only decreases emit the warning");
    }

    #[test]
    fn add_inventory_item_prepends_and_keeps_tail_order() {
        let items = vec![sample_item("i1", 10, 5), sample_item("i2", 20, 5)];
        let result = add_inventory_item(&items, sample_item("i3", 7, 5));
        assert_eq!(result.collection.len(), 3);
        assert_eq!(result.collection[0].id, "i3");
        assert_eq!(result.collection[1].id, "i1");
        assert_eq!(result.collection[2].id, "i2");
        assert_eq!(result.draft.severity, Severity::Info);
    }

    #[test]
    fn add_owner_prepends_and_names_the_owner() {
        let owners = vec![sample_owner("o1", "Ayşe Kaya")];
        let result = add_owner(&owners, sample_owner("o2", "Mehmet Demir"));
        assert_eq!(result.collection.len(), 2);
        assert_eq!(result.collection[0].id, "o2");
        assert!(result.draft.message.contains("Mehmet Demir"));
    }

    #[test]
    fn add_appointment_allows_double_booking() {
        let first = sample_appointment("a1", "Pamuk");
        let second = sample_appointment("a2", "Duman");
        let appointments = vec![first.clone()];
        let result = add_appointment(&appointments, second.clone());
        assert_eq!(result.collection.len(), 2);
        assert_eq!(result.collection[0].date, result.collection[1].date);
        assert_eq!(result.collection[0].time, result.collection[1].time);
        assert!(result.draft.message.contains("Duman"));
    }

    #[test]
    fn add_medical_record_prepends_and_names_the_kind() {
        let record = MedicalRecord {
            id: "m1".to_string(),
            pet_id: "p1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 3).expect("date"),
            description: "Yearly rabies shot".to_string(),
            treatment: "Vaccine administered".to_string(),
            veterinarian: "Dr. Selin Demir".to_string(),
            kind: RecordKind::Vaccination,
        };
        let result = add_medical_record(&[], record);
        assert_eq!(result.collection.len(), 1);
        assert!(result.draft.message.contains("Vaccination"));
    }
}
