//! Ad-hoc nearby search from the terminal, using the same executor as the
//! HTTP server.

use std::time::Duration;

use clap::Args;
use nearvend_core::limits::DEFAULT_SEARCH_DISTANCE_METERS;
use nearvend_core::model::format_time_of_day;
use nearvend_core::{AppConfig, NearbyQuery};
use nearvend_geo::GeoPoint;
use nearvend_search::{NearbySearch, PgCandidateStore};

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,
    /// Search radius in metres
    #[arg(long, default_value_t = DEFAULT_SEARCH_DISTANCE_METERS)]
    pub distance: u32,
    /// Only vendors that deliver
    #[arg(long)]
    pub has_delivery: bool,
    /// Only vendors open at `--time`
    #[arg(long)]
    pub open_now: bool,
    /// Time of day as HH:MM or HH:MM:SS (defaults to local time)
    #[arg(long)]
    pub time: Option<String>,
}

pub(crate) async fn run_search(
    pool: sqlx::PgPool,
    config: &AppConfig,
    args: &SearchArgs,
) -> anyhow::Result<()> {
    let request_time = match args.time.as_deref() {
        Some(raw) => nearvend_geo::parse_time_of_day(raw)
            .map_err(|e| anyhow::anyhow!("invalid --time '{raw}': {e}"))?,
        None => chrono::Local::now().time(),
    };
    let query = NearbyQuery::new(
        GeoPoint::new(args.lat, args.lng)?,
        args.distance,
        args.has_delivery,
        args.open_now,
        request_time,
    )?;

    let search = NearbySearch::new(
        PgCandidateStore::new(pool),
        Duration::from_millis(config.search_timeout_ms),
    );
    let vendors = search.execute(&query).await.inspect_err(|e| {
        tracing::warn!(error = %e, "nearby search failed");
    })?;
    tracing::info!(
        found = vendors.len(),
        distance_m = args.distance,
        "nearby search finished"
    );

    if vendors.is_empty() {
        println!("no vendors within {} m", args.distance);
        return Ok(());
    }

    println!(
        "{:<24}{:<28}{:>10}  {:<13}FLAGS",
        "VENDOR", "BUSINESS", "DISTANCE", "HOURS"
    );
    for vendor in &vendors {
        let Some(card) = vendor.sale_card.as_ref() else {
            continue;
        };
        let distance = card
            .distance_from_client
            .map_or_else(|| "-".to_string(), |d| format!("{d:.0} m"));
        let hours = format!(
            "{}-{}",
            format_time_of_day(card.start_time),
            format_time_of_day(card.end_time)
        );
        let mut flags = Vec::new();
        if card.has_delivery {
            flags.push("delivery");
        }
        if card.is_temporarily_closed {
            flags.push("closed");
        }
        println!(
            "{:<24}{:<28}{:>10}  {:<13}{}",
            vendor.id,
            card.business_name,
            distance,
            hours,
            flags.join(",")
        );
    }

    Ok(())
}
