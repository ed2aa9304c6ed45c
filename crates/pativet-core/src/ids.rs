use uuid::Uuid;

pub const OWNER_PREFIX: char = 'o';
pub const APPOINTMENT_PREFIX: char = 'a';
pub const ITEM_PREFIX: char = 'i';
pub const NOTIFICATION_PREFIX: char = 'n';

/// Collision-resistant entity id with a single-letter type prefix.
#[must_use]
pub fn new_id(prefix: char) -> String {
    format!("{prefix}{}", Uuid::new_v4().simple())
}
