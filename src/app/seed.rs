use diesel_migrations::MigrationHarness;
use tracing::info;

use pizza_restaurants_service::{database_url, establish_pool, store, MIGRATIONS};

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pool = establish_pool(&database_url())?;
    let conn = &mut pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| format!("failed to run migrations: {err}"))?;

    store::seed(conn)?;
    info!("seeded sample restaurants, pizzas, and menu entries");

    Ok(())
}
