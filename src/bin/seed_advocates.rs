//! One-shot loader that ingests a CSV of advocates into the directory
//! database. Expects the CSV path as its single argument; specialties are
//! `;`-separated within their field.

use std::env;

use config::Config;
use dotenvy::dotenv;
use serde::Deserialize;

use advocate_directory::db::establish_connection_pool;
use advocate_directory::domain::advocate::NewAdvocate;
use advocate_directory::models::config::ServerConfig;
use advocate_directory::repository::{AdvocateWriter, DieselRepository};

#[derive(Debug, Deserialize)]
struct AdvocateRow {
    first_name: String,
    last_name: String,
    city: String,
    degree: String,
    specialties: String,
    years_of_experience: i32,
    phone_number: i64,
}

impl From<AdvocateRow> for NewAdvocate {
    fn from(row: AdvocateRow) -> Self {
        let specialties = row
            .specialties
            .split(';')
            .map(|s| s.to_string())
            .collect();
        NewAdvocate::new(
            row.first_name,
            row.last_name,
            row.city,
            row.degree,
            specialties,
            row.years_of_experience,
            row.phone_number,
        )
    }
}

fn read_rows(path: &str) -> Result<Vec<NewAdvocate>, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut advocates = Vec::new();
    for result in reader.deserialize::<AdvocateRow>() {
        advocates.push(result?.into());
    }
    Ok(advocates)
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let csv_path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            log::error!("Usage: seed_advocates <advocates.csv>");
            std::process::exit(1);
        }
    };

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let advocates = match read_rows(&csv_path) {
        Ok(advocates) => advocates,
        Err(err) => {
            log::error!("Error parsing {csv_path}: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);

    match repo.create_advocates(&advocates) {
        Ok(inserted) => log::info!("Inserted {inserted} advocate records"),
        Err(e) => {
            log::error!("Failed to insert advocates: {e}");
            std::process::exit(1);
        }
    }
}
