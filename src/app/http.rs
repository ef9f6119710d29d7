use diesel_migrations::MigrationHarness;
use tracing::info;

use pizza_restaurants_service::{database_url, establish_pool, handlers, MIGRATIONS};

pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pool = establish_pool(&database_url())?;

    {
        let conn = &mut pool.get()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|err| format!("failed to run migrations: {err}"))?;
    }

    let app = handlers::app(pool);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:5555").await?;
    info!("Pizza Restaurants API listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
