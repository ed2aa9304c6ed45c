//! The single owned application-state aggregate. All mutation funnels
//! through the named operations below, which call the pure store functions,
//! swap the affected collection wholesale, and enqueue the resulting
//! notification draft. Read access hands out slices only.

use chrono::{DateTime, Utc};

use crate::models::{
    Appointment, InventoryItem, MedicalRecord, Notification, Owner, Pet,
};
use crate::notify::NotificationQueue;
use crate::seed::{ClinicSnapshot, SeedProfile, generate};
use crate::store;

#[derive(Debug, Clone)]
pub struct ClinicState {
    pets: Vec<Pet>,
    owners: Vec<Owner>,
    appointments: Vec<Appointment>,
    inventory: Vec<InventoryItem>,
    records: Vec<MedicalRecord>,
    notifications: NotificationQueue,
}

impl ClinicState {
    #[must_use]
    pub fn new(notify_ttl_ms: u64) -> Self {
        Self {
            pets: Vec::new(),
            owners: Vec::new(),
            appointments: Vec::new(),
            inventory: Vec::new(),
            records: Vec::new(),
            notifications: NotificationQueue::new(notify_ttl_ms),
        }
    }

    #[must_use]
    pub fn seeded(profile: SeedProfile, notify_ttl_ms: u64) -> Self {
        Self::from_snapshot(generate(profile), notify_ttl_ms)
    }

    #[must_use]
    pub fn from_snapshot(snapshot: ClinicSnapshot, notify_ttl_ms: u64) -> Self {
        Self {
            pets: snapshot.pets,
            owners: snapshot.owners,
            appointments: snapshot.appointments,
            inventory: snapshot.inventory,
            records: Vec::new(),
            notifications: NotificationQueue::new(notify_ttl_ms),
        }
    }

    #[must_use]
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    #[must_use]
    pub fn owners(&self) -> &[Owner] {
        &self.owners
    }

    #[must_use]
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    #[must_use]
    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    #[must_use]
    pub fn records(&self) -> &[MedicalRecord] {
        &self.records
    }

    /// Unknown item ids are silent no-ops; the return value reports whether
    /// anything changed and carries the warning notification if the
    /// decrease crossed into the critical zone.
    pub fn adjust_stock(
        &mut self,
        item_id: &str,
        delta: i64,
        now: DateTime<Utc>,
    ) -> (bool, Option<Notification>) {
        let result = store::adjust_stock(&self.inventory, item_id, delta);
        self.inventory = result.items;
        let pushed = result
            .draft
            .map(|draft| self.notifications.push(draft, now));
        (result.changed, pushed)
    }

    pub fn add_inventory_item(&mut self, item: InventoryItem, now: DateTime<Utc>) -> Notification {
        let result = store::add_inventory_item(&self.inventory, item);
        self.inventory = result.collection;
        self.notifications.push(result.draft, now)
    }

    pub fn add_owner(&mut self, owner: Owner, now: DateTime<Utc>) -> Notification {
        let result = store::add_owner(&self.owners, owner);
        self.owners = result.collection;
        self.notifications.push(result.draft, now)
    }

    pub fn add_appointment(
        &mut self,
        appointment: Appointment,
        now: DateTime<Utc>,
    ) -> Notification {
        let result = store::add_appointment(&self.appointments, appointment);
        self.appointments = result.collection;
        self.notifications.push(result.draft, now)
    }

    pub fn add_medical_record(
        &mut self,
        record: MedicalRecord,
        now: DateTime<Utc>,
    ) -> Notification {
        let result = store::add_medical_record(&self.records, record);
        self.records = result.collection;
        self.notifications.push(result.draft, now)
    }

    #[must_use]
    pub fn notifications(&self, now: DateTime<Utc>) -> Vec<Notification> {
        self.notifications.active(now)
    }

    pub fn expire_notifications(&mut self, now: DateTime<Utc>) -> Vec<Notification> {
        self.notifications.expire(now)
    }

    pub fn dismiss_notification(&mut self, id: &str) -> bool {
        self.notifications.dismiss(id)
    }
}

impl Default for ClinicState {
    fn default() -> Self {
        Self::new(crate::notify::DEFAULT_NOTIFY_TTL_MS)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::{ItemCategory, Severity};

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
    }

    fn item(id: &str, quantity: u32) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: format!("Antibiotic {id}"),
            category: ItemCategory::Medicine,
            quantity,
            unit: "tablet".to_string(),
            reorder_level: 15,
            price: 200,
        }
    }

    #[test]
    fn seeded_state_loads_the_snapshot() {
        let state = ClinicState::seeded(SeedProfile::sample(), 4000);
        assert_eq!(state.owners().len(), 12);
        assert_eq!(state.pets().len(), 20);
        assert!(state.records().is_empty());
        assert!(state.notifications(at(0)).is_empty());
    }

    #[test]
    fn adjust_stock_enqueues_warning_on_critical_decrease() {
        let mut state = ClinicState::from_snapshot(
            ClinicSnapshot {
                inventory: vec![item("i1", 16)],
                ..ClinicSnapshot::default()
            },
            4000,
        );

        let (changed, warning) = state.adjust_stock("i1", -1, at(0));
        assert!(changed);
        let warning = warning.expect("crossed the threshold");
        assert_eq!(warning.severity, Severity::Warning);
        assert_eq!(state.inventory()[0].quantity, 15);
        assert_eq!(state.notifications(at(1)).len(), 1);
    }

    #[test]
    fn adjust_stock_unknown_id_changes_nothing() {
        let mut state = ClinicState::from_snapshot(
            ClinicSnapshot {
                inventory: vec![item("i1", 16)],
                ..ClinicSnapshot::default()
            },
            4000,
        );
        let before = state.inventory().to_vec();
        let (changed, warning) = state.adjust_stock("missing", -5, at(0));
        assert!(!changed);
        assert!(warning.is_none());
        assert_eq!(state.inventory(), before.as_slice());
        assert!(state.notifications(at(0)).is_empty());
    }

    #[test]
    fn add_operations_prepend_and_notify() {
        let mut state = ClinicState::new(4000);
        let info = state.add_inventory_item(item("i9", 30), at(0));
        assert_eq!(info.severity, Severity::Info);
        assert!(info.message.contains("Antibiotic i9"));
        assert_eq!(state.inventory().len(), 1);

        state.add_inventory_item(item("i10", 5), at(1));
        assert_eq!(state.inventory()[0].id, "i10");
        assert_eq!(state.inventory()[1].id, "i9");
        assert_eq!(state.notifications(at(2)).len(), 2);
    }

    #[test]
    fn notifications_expire_after_ttl() {
        let mut state = ClinicState::new(4000);
        state.add_inventory_item(item("i1", 30), at(0));
        assert_eq!(state.notifications(at(3)).len(), 1);

        let expired = state.expire_notifications(at(5));
        assert_eq!(expired.len(), 1);
        assert!(state.notifications(at(5)).is_empty());
    }

    #[test]
    fn dismissed_notification_is_gone_for_good() {
        let mut state = ClinicState::new(4000);
        let pushed = state.add_inventory_item(item("i1", 30), at(0));
        assert!(state.dismiss_notification(&pushed.id));
        assert!(state.notifications(at(1)).is_empty());
        assert!(state.expire_notifications(at(10)).is_empty());
    }
}
