//! Deterministic bulk generation of the initial clinic snapshot.
//!
//! Owners are generated first with empty pet lists; each pet then picks an
//! owner and pushes its id into that owner's back-reference index, so the
//! owner/pet referential invariant holds by construction. The generator is
//! seeded, so a given profile always produces the same snapshot.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};

use crate::models::{
    Appointment, AppointmentStatus, DEFAULT_REORDER_LEVEL, InventoryItem, ItemCategory, Owner,
    Pet, Species,
};

const FIRST_NAMES: &[&str] = &[
    "Mehmet", "Ayşe", "Ali", "Fatma", "Can", "Zeynep", "Burak", "Elif", "Mert", "Selin", "Deniz",
    "Seda", "Onur", "Gizem", "Murat", "Ece",
];
const LAST_NAMES: &[&str] = &[
    "Yılmaz", "Kaya", "Demir", "Çelik", "Şahin", "Yıldız", "Öztürk", "Arslan", "Doğan", "Aydın",
    "Yavuz", "Kılıç", "Polat", "Özkan",
];
const PET_NAMES: &[&str] = &[
    "Buddy", "Luna", "Max", "Bella", "Charlie", "Molly", "Rocky", "Lucy", "Leo", "Daisy", "Milo",
    "Zoe", "Cooper", "Chloe", "Bentley", "Sophie", "Pamuk", "Duman", "Tarçın", "Gofret", "Boncuk",
    "Limon",
];
const CITIES: &[&str] = &["Istanbul", "Ankara", "Izmir", "Bursa"];
const DISTRICTS: &[&str] = &["Kadıköy", "Çankaya", "Konak", "Nilüfer"];
const REASONS: &[&str] = &[
    "Annual checkup",
    "Rabies vaccination",
    "Parasite treatment",
    "Lethargy complaint",
    "Nail trim",
    "Dental cleaning",
    "Neuter follow-up",
];

const DOG_BREEDS: &[&str] = &[
    "Golden Retriever",
    "Beagle",
    "Pug",
    "German Shepherd",
    "Bulldog",
    "Poodle",
    "Rottweiler",
];
const CAT_BREEDS: &[&str] = &[
    "Siamese",
    "Persian",
    "Maine Coon",
    "British Shorthair",
    "Bengal",
    "Sphynx",
];
const BIRD_BREEDS: &[&str] = &["Budgie", "Cockatiel", "Canary", "Parrot"];
const OTHER_BREEDS: &[&str] = &["Hamster", "Rabbit", "Turtle"];

const VACCINE_NAMES: &[&str] = &[
    "Rabies Vaccine",
    "Combo Vaccine",
    "Leukemia Vaccine",
    "Bronchitis Vaccine",
];
const MEDICINE_NAMES: &[&str] = &[
    "Antibiotic S",
    "Painkiller Plus",
    "Parasite Tablet X",
    "Vitamin Mix",
];
const FOOD_NAMES: &[&str] = &[
    "Premium Puppy 15kg",
    "Sterilized Cat Food 2kg",
    "Grain Free Diet",
];
const EQUIPMENT_NAMES: &[&str] = &[
    "Surgical Gloves",
    "Syringe 2ml",
    "Bandage Set",
    "Digital Thermometer",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedProfile {
    pub owners: usize,
    pub pets: usize,
    pub inventory: usize,
    pub appointments: usize,
    pub seed: u64,
}

impl Default for SeedProfile {
    fn default() -> Self {
        Self {
            owners: 1200,
            pets: 2200,
            inventory: 1050,
            appointments: 1100,
            seed: 0,
        }
    }
}

impl SeedProfile {
    /// Small snapshot for tests and CLI demos.
    #[must_use]
    pub const fn sample() -> Self {
        Self {
            owners: 12,
            pets: 20,
            inventory: 16,
            appointments: 10,
            seed: 7,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClinicSnapshot {
    pub pets: Vec<Pet>,
    pub owners: Vec<Owner>,
    pub appointments: Vec<Appointment>,
    pub inventory: Vec<InventoryItem>,
}

#[must_use]
pub fn generate(profile: SeedProfile) -> ClinicSnapshot {
    let mut rng = ChaCha8Rng::seed_from_u64(profile.seed);

    let mut owners: Vec<Owner> = (0..profile.owners)
        .map(|i| Owner {
            id: format!("o{i}"),
            name: format!("{} {}", pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES)),
            phone: format!(
                "05{} {} {} {}",
                range(&mut rng, 10, 99),
                range(&mut rng, 100, 999),
                range(&mut rng, 10, 99),
                range(&mut rng, 10, 99)
            ),
            email: format!("user{i}@example.com"),
            address: format!("{}, {}", pick(&mut rng, CITIES), pick(&mut rng, DISTRICTS)),
            pet_ids: Vec::new(),
        })
        .collect();

    // Pets need an owner to attach to and appointments need a pet to book;
    // a profile zeroing the upstream collection zeroes the dependents too.
    let pet_count = if owners.is_empty() { 0 } else { profile.pets };
    let pets: Vec<Pet> = (0..pet_count)
        .map(|i| {
            let species = Species::ALL[index(&mut rng, Species::ALL.len())];
            let owner_index = index(&mut rng, owners.len());
            let id = format!("p{i}");
            owners[owner_index].pet_ids.push(id.clone());

            Pet {
                id,
                name: pick(&mut rng, PET_NAMES).to_string(),
                species,
                breed: pick(&mut rng, breeds_for(species)).to_string(),
                age: range(&mut rng, 1, 15),
                weight_kg: range(&mut rng, 1, 30),
                owner_id: owners[owner_index].id.clone(),
                image_url: Some(format!("https://picsum.photos/seed/pet{i}/200")),
            }
        })
        .collect();

    let inventory: Vec<InventoryItem> = (0..profile.inventory)
        .map(|i| {
            let category = ItemCategory::ALL[index(&mut rng, ItemCategory::ALL.len())];
            InventoryItem {
                id: format!("i{i}"),
                name: format!("{} v{i}", pick(&mut rng, names_for(category))),
                category,
                quantity: range(&mut rng, 0, 199),
                unit: category.default_unit().to_string(),
                reorder_level: DEFAULT_REORDER_LEVEL,
                price: range(&mut rng, 50, 1549),
            }
        })
        .collect();

    let appointment_count = if pets.is_empty() {
        0
    } else {
        profile.appointments
    };
    let appointments: Vec<Appointment> = (0..appointment_count)
        .map(|i| {
            let pet = &pets[index(&mut rng, pets.len())];
            let owner_name = owners
                .iter()
                .find(|owner| owner.id == pet.owner_id)
                .map_or_else(|| "Unknown".to_string(), |owner| owner.name.clone());

            Appointment {
                id: format!("a{i}"),
                pet_id: pet.id.clone(),
                pet_name: pet.name.clone(),
                owner_name,
                date: chrono::NaiveDate::from_ymd_opt(2024, 5, range(&mut rng, 1, 28))
                    .expect("day within May"),
                time: chrono::NaiveTime::from_hms_opt(
                    range(&mut rng, 9, 17),
                    15 * range(&mut rng, 0, 3),
                    0,
                )
                .expect("time within working hours"),
                reason: pick(&mut rng, REASONS).to_string(),
                // Roughly 70% scheduled, matching the observed seed ratio.
                status: if index(&mut rng, 10) < 7 {
                    AppointmentStatus::Scheduled
                } else {
                    AppointmentStatus::Completed
                },
            }
        })
        .collect();

    ClinicSnapshot {
        pets,
        owners,
        appointments,
        inventory,
    }
}

const fn breeds_for(species: Species) -> &'static [&'static str] {
    match species {
        Species::Dog => DOG_BREEDS,
        Species::Cat => CAT_BREEDS,
        Species::Bird => BIRD_BREEDS,
        Species::Other => OTHER_BREEDS,
    }
}

const fn names_for(category: ItemCategory) -> &'static [&'static str] {
    match category {
        ItemCategory::Vaccine => VACCINE_NAMES,
        ItemCategory::Medicine => MEDICINE_NAMES,
        ItemCategory::Food => FOOD_NAMES,
        ItemCategory::Equipment => EQUIPMENT_NAMES,
    }
}

fn index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    (rng.next_u32() as usize) % len.max(1)
}

fn pick<'a>(rng: &mut ChaCha8Rng, pool: &'a [&'a str]) -> &'a str {
    pool[index(rng, pool.len())]
}

fn range(rng: &mut ChaCha8Rng, low: u32, high: u32) -> u32 {
    low + rng.next_u32() % (high - low + 1)
}
