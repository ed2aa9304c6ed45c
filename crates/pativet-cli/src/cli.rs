use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "pativet",
    version,
    about = "PatiVet veterinary clinic data runtime"
)]
pub struct Cli {
    /// Active role for view-selection gating (veterinarian or pet_owner).
    #[arg(long, global = true, default_value = "veterinarian")]
    pub role: String,
    /// Seed for the deterministic mock snapshot.
    #[arg(long, global = true, default_value_t = 0)]
    pub seed: u64,
    /// Use the small sample snapshot instead of the full-scale one.
    #[arg(long, global = true, default_value_t = false)]
    pub sample: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a snapshot and print its summary.
    Seed(SeedArgs),
    /// Clinic-wide dashboard stats over the current snapshot.
    Dashboard,
    /// Sections visible to the active role.
    Sections,
    #[command(subcommand)]
    Inventory(InventoryCommand),
    #[command(subcommand)]
    Clients(ClientsCommand),
    #[command(subcommand)]
    Appointments(AppointmentsCommand),
    /// One-shot AI symptom triage (falls back to a fixed advisory string
    /// when no endpoint is configured).
    Advisory(AdvisoryArgs),
}

#[derive(Debug, Subcommand)]
pub enum InventoryCommand {
    List(ListArgs),
    Search(SearchArgs),
    Add(AddItemArgs),
    /// Apply a stock delta to an item; unknown ids are a silent no-op.
    Adjust(AdjustArgs),
}

#[derive(Debug, Subcommand)]
pub enum ClientsCommand {
    List(ListArgs),
    Search(SearchArgs),
    Add(AddClientArgs),
}

#[derive(Debug, Subcommand)]
pub enum AppointmentsCommand {
    List(ListArgs),
    Add(AddAppointmentArgs),
}

/// Per-collection count overrides; unset counts fall back to the profile
/// selected by `--sample`.
#[derive(Debug, Args)]
pub struct SeedArgs {
    #[arg(long)]
    pub owners: Option<usize>,
    #[arg(long)]
    pub pets: Option<usize>,
    #[arg(long)]
    pub inventory: Option<usize>,
    #[arg(long)]
    pub appointments: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(allow_hyphen_values = true)]
    pub query: String,
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct AddItemArgs {
    pub name: String,
    /// vaccine, medicine, food or equipment.
    #[arg(long)]
    pub category: String,
    #[arg(long, default_value_t = 0)]
    pub quantity: u32,
    /// Unit price in minor currency units.
    #[arg(long, default_value_t = 0)]
    pub price: u32,
}

#[derive(Debug, Args)]
pub struct AdjustArgs {
    pub id: String,
    #[arg(allow_hyphen_values = true)]
    pub delta: i64,
}

#[derive(Debug, Args)]
pub struct AddClientArgs {
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub address: String,
}

#[derive(Debug, Args)]
pub struct AddAppointmentArgs {
    pub pet_name: String,
    #[arg(long)]
    pub owner_name: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[arg(long)]
    pub date: String,
    /// Time of day, `HH:MM` or `HH:MM:SS`.
    #[arg(long)]
    pub time: String,
    #[arg(long)]
    pub reason: String,
    /// Optional link to a pet record; the booking form leaves it empty.
    #[arg(long)]
    pub pet_id: Option<String>,
}

#[derive(Debug, Args)]
pub struct AdvisoryArgs {
    /// dog, cat, bird or other.
    pub species: String,
    /// Free-text symptom description.
    #[arg(required = true, num_args = 1..)]
    pub symptoms: Vec<String>,
}
