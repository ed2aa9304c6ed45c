use crate::models::{InventoryItem, Owner};

/// Case-insensitive containment over one or more text fields. An empty or
/// blank query matches everything.
#[must_use]
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Owner search keys on the owner name only.
#[must_use]
pub fn filter_owners(owners: &[Owner], query: &str) -> Vec<Owner> {
    owners
        .iter()
        .filter(|owner| matches_query(&[&owner.name], query))
        .cloned()
        .collect()
}

/// Inventory search keys on the item name or its category label.
#[must_use]
pub fn filter_inventory(items: &[InventoryItem], query: &str) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|item| matches_query(&[&item.name, item.category.label()], query))
        .cloned()
        .collect()
}
