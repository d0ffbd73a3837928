//! Database maintenance handlers.

use std::path::Path;

pub(crate) async fn run_migrate(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let applied = nearvend_db::run_migrations(pool).await?;
    tracing::info!(applied, "migrations applied");
    println!("migrations up to date ({applied} applied)");
    Ok(())
}

pub(crate) async fn run_ping(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    nearvend_db::ping(pool)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "database ping failed"))?;
    println!("database reachable");
    Ok(())
}

/// Validate every entry in the seed file, then upsert them all in one
/// transaction.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, any entry fails
/// validation, or the database write fails. Nothing is written in those
/// cases.
pub(crate) async fn run_seed(pool: &sqlx::PgPool, path: &Path) -> anyhow::Result<()> {
    let entries = nearvend_core::load_seed_file(path).inspect_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "seed file rejected");
    })?;
    let with_cards = entries.iter().filter(|e| e.sale_card.is_some()).count();
    let seeded = nearvend_db::seed_vendors(pool, &entries).await?;
    tracing::info!(seeded, with_cards, path = %path.display(), "seed complete");
    println!(
        "seeded {seeded} vendors ({with_cards} with sale cards) from {}",
        path.display()
    );
    Ok(())
}
