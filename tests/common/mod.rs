use advocate_directory::db::{DbPool, establish_connection_pool};
use advocate_directory::domain::advocate::NewAdvocate;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A migrated SQLite database in a temporary directory. Dropping the harness
/// removes the database file and its WAL side files.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(db_name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = dir.path().join(db_name);
        let pool =
            establish_connection_pool(&db_path.to_string_lossy()).expect("failed to create pool");
        {
            let mut conn = pool.get().expect("failed to get connection");
            conn.run_pending_migrations(MIGRATIONS)
                .expect("failed to run migrations");
        }
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Directory fixture with varied names, cities, degrees, specialties, and
/// experience, including overlapping substrings ("10" in 100, the "San"
/// cities) that the search tests lean on.
#[allow(dead_code)]
pub fn seed_advocates() -> Vec<NewAdvocate> {
    [
        (
            "John", "Doe", "New York", "MD",
            vec!["Bipolar", "LGBTQ"],
            10, 5551234567_i64,
        ),
        (
            "Jane", "Smith", "Los Angeles", "PhD",
            vec!["ADHD", "Trauma"],
            8, 6669876543,
        ),
        (
            "Alice", "Johnson", "Chicago", "MSW",
            vec!["Substance use"],
            4, 7774567890,
        ),
        (
            "Michael", "Brown", "San Antonio", "PhD",
            vec!["Anxiety"],
            12, 8882223333,
        ),
        (
            "Emily", "Davis", "San Diego", "MD",
            vec!["Depression", "Grief"],
            3, 9197778888,
        ),
        (
            "Chris", "Martinez", "San Jose", "PhD",
            vec!["Sleep disorders"],
            15, 3121112222,
        ),
        (
            "Laura", "Garcia", "San Francisco", "MSW",
            vec!["Eating disorders"],
            100, 4243334444,
        ),
        (
            "Evelyn", "O'Neil", "Aurora", "PhD",
            vec!["Schizophrenia"],
            7, 2026665555,
        ),
    ]
    .into_iter()
    .map(|(first, last, city, degree, specialties, years, phone)| {
        NewAdvocate::new(
            first.to_string(),
            last.to_string(),
            city.to_string(),
            degree.to_string(),
            specialties.into_iter().map(String::from).collect(),
            years,
            phone,
        )
    })
    .collect()
}
