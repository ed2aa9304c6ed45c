use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime, Utc};
use pativet_core::config::AppConfig;
use pativet_core::models::{Appointment, InventoryItem, ItemCategory, Owner, Species};
use pativet_core::search::{filter_inventory, filter_owners};
use pativet_core::seed::SeedProfile;
use pativet_core::views::{Role, Section, dashboard_summary, visible_sections};
use pativet_core::Clinic;

use crate::cli::{
    AppointmentsCommand, Cli, ClientsCommand, Commands, InventoryCommand,
};

pub(crate) fn run(cli: Cli) -> Result<()> {
    let role = parse_role(&cli.role)?;
    let profile = seed_profile(&cli);

    match cli.command {
        Commands::Seed(args) => {
            let profile = SeedProfile {
                owners: args.owners.unwrap_or(profile.owners),
                pets: args.pets.unwrap_or(profile.pets),
                inventory: args.inventory.unwrap_or(profile.inventory),
                appointments: args.appointments.unwrap_or(profile.appointments),
                ..profile
            };
            let clinic = seeded_clinic(profile)?;
            let summary = dashboard_summary(
                clinic.state.pets(),
                clinic.state.owners(),
                clinic.state.appointments(),
                clinic.state.inventory(),
            );
            print_json(&serde_json::json!({
                "seed": profile.seed,
                "summary": summary,
            }))?;
        }
        Commands::Dashboard => {
            let clinic = seeded_clinic(profile)?;
            let summary = dashboard_summary(
                clinic.state.pets(),
                clinic.state.owners(),
                clinic.state.appointments(),
                clinic.state.inventory(),
            );
            print_json(&summary)?;
        }
        Commands::Sections => {
            print_json(&visible_sections(role))?;
        }
        Commands::Inventory(command) => {
            require_section(Section::Inventory, role)?;
            run_inventory(command, profile)?;
        }
        Commands::Clients(command) => {
            require_section(Section::Clients, role)?;
            run_clients(command, profile)?;
        }
        Commands::Appointments(command) => {
            run_appointments(command, profile)?;
        }
        Commands::Advisory(args) => {
            let species = parse_species(&args.species)?;
            let clinic = Clinic::from_env().context("failed to create clinic")?;
            let advice = clinic.analyze_symptoms(species.label(), &args.symptoms.join(" "));
            print_json(&serde_json::json!({
                "species": species,
                "endpoint_configured": clinic.has_advisory_endpoint(),
                "advice": advice,
            }))?;
        }
    }
    Ok(())
}

fn run_inventory(command: InventoryCommand, profile: SeedProfile) -> Result<()> {
    let mut clinic = seeded_clinic(profile)?;
    match command {
        InventoryCommand::List(args) => {
            print_json(&head(clinic.state.inventory(), args.limit))?;
        }
        InventoryCommand::Search(args) => {
            let hits = filter_inventory(clinic.state.inventory(), &args.query);
            print_json(&head(&hits, args.limit))?;
        }
        InventoryCommand::Add(args) => {
            let category = parse_category(&args.category)?;
            let item = InventoryItem::new(args.name, category, args.quantity, args.price);
            let item_id = item.id.clone();
            let notification = clinic.state.add_inventory_item(item, Utc::now());
            let stored = find_item(&clinic, &item_id);
            print_json(&serde_json::json!({
                "item": stored,
                "notification": notification,
            }))?;
        }
        InventoryCommand::Adjust(args) => {
            let (changed, notification) = clinic.state.adjust_stock(&args.id, args.delta, Utc::now());
            let item = find_item(&clinic, &args.id);
            print_json(&serde_json::json!({
                "changed": changed,
                "item": item,
                "notification": notification,
            }))?;
        }
    }
    Ok(())
}

fn run_clients(command: ClientsCommand, profile: SeedProfile) -> Result<()> {
    let mut clinic = seeded_clinic(profile)?;
    match command {
        ClientsCommand::List(args) => {
            print_json(&head(clinic.state.owners(), args.limit))?;
        }
        ClientsCommand::Search(args) => {
            let hits = filter_owners(clinic.state.owners(), &args.query);
            print_json(&head(&hits, args.limit))?;
        }
        ClientsCommand::Add(args) => {
            let owner = Owner::new(args.name, args.phone, args.email, args.address);
            let notification = clinic.state.add_owner(owner.clone(), Utc::now());
            print_json(&serde_json::json!({
                "owner": owner,
                "notification": notification,
            }))?;
        }
    }
    Ok(())
}

fn run_appointments(command: AppointmentsCommand, profile: SeedProfile) -> Result<()> {
    let mut clinic = seeded_clinic(profile)?;
    match command {
        AppointmentsCommand::List(args) => {
            print_json(&head(clinic.state.appointments(), args.limit))?;
        }
        AppointmentsCommand::Add(args) => {
            let date = parse_date(&args.date)?;
            let time = parse_time(&args.time)?;
            let appointment = Appointment::scheduled(
                args.pet_id,
                args.pet_name,
                args.owner_name,
                date,
                time,
                args.reason,
            );
            let notification = clinic.state.add_appointment(appointment.clone(), Utc::now());
            print_json(&serde_json::json!({
                "appointment": appointment,
                "notification": notification,
            }))?;
        }
    }
    Ok(())
}

fn seeded_clinic(profile: SeedProfile) -> Result<Clinic> {
    Clinic::seeded(profile, AppConfig::from_env()).context("failed to create clinic")
}

fn seed_profile(cli: &Cli) -> SeedProfile {
    let base = if cli.sample {
        SeedProfile::sample()
    } else {
        SeedProfile::default()
    };
    SeedProfile {
        seed: cli.seed,
        ..base
    }
}

fn require_section(section: Section, role: Role) -> Result<()> {
    if !section.allows(role) {
        anyhow::bail!("section '{section}' is not available for role '{role}'");
    }
    Ok(())
}

fn find_item(clinic: &Clinic, id: &str) -> Option<InventoryItem> {
    clinic
        .state
        .inventory()
        .iter()
        .find(|item| item.id == id)
        .cloned()
}

fn head<T: Clone>(collection: &[T], limit: usize) -> Vec<T> {
    collection.iter().take(limit).cloned().collect()
}

fn parse_role(raw: &str) -> Result<Role> {
    raw.parse::<Role>()
        .map_err(|e| anyhow::anyhow!("invalid --role value '{raw}': {e}"))
}

fn parse_species(raw: &str) -> Result<Species> {
    raw.parse::<Species>()
        .map_err(|e| anyhow::anyhow!("invalid species '{raw}': {e}"))
}

fn parse_category(raw: &str) -> Result<ItemCategory> {
    raw.parse::<ItemCategory>()
        .map_err(|e| anyhow::anyhow!("invalid --category value '{raw}': {e}"))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid --date value '{raw}': {e}"))
}

fn parse_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|e| anyhow::anyhow!("invalid --time value '{raw}': {e}"))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_accepts_minutes_and_seconds_forms() {
        assert_eq!(
            parse_time("10:30").expect("parse"),
            NaiveTime::from_hms_opt(10, 30, 0).expect("time")
        );
        assert_eq!(
            parse_time("10:30:15").expect("parse"),
            NaiveTime::from_hms_opt(10, 30, 15).expect("time")
        );
        assert!(parse_time("30:99").is_err());
    }

    #[test]
    fn parse_date_requires_iso_calendar_form() {
        assert_eq!(
            parse_date("2024-05-12").expect("parse"),
            NaiveDate::from_ymd_opt(2024, 5, 12).expect("date")
        );
        assert!(parse_date("12/05/2024").is_err());
    }

    #[test]
    fn pet_owner_role_is_refused_inventory_and_clients() {
        assert!(require_section(Section::Inventory, Role::PetOwner).is_err());
        assert!(require_section(Section::Clients, Role::PetOwner).is_err());
        assert!(require_section(Section::Inventory, Role::Veterinarian).is_ok());
        assert!(require_section(Section::Appointments, Role::PetOwner).is_ok());
    }

    #[test]
    fn seed_profile_honors_sample_and_seed_flags() {
        let cli = <Cli as clap::Parser>::try_parse_from([
            "pativet", "--sample", "--seed", "42", "seed",
        ])
        .expect("parse");
        let profile = seed_profile(&cli);
        assert_eq!(profile.seed, 42);
        assert_eq!(profile.owners, SeedProfile::sample().owners);
    }

    #[test]
    fn head_limits_without_reordering() {
        let values = vec![1, 2, 3, 4];
        assert_eq!(head(&values, 2), vec![1, 2]);
        assert_eq!(head(&values, 10), values);
    }
}
