//! Geohash inspection commands. Output is JSON so it can be piped.

use clap::Subcommand;
use nearvend_geo::{GeoPoint, MAX_PRECISION};

#[derive(Debug, Subcommand)]
pub enum GeoCommands {
    /// Encode a coordinate as a geohash
    Encode {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Number of symbols, 1 to 9
        #[arg(long, default_value_t = MAX_PRECISION)]
        precision: usize,
    },
    /// Show the prefixes a nearby search would scan
    Cover {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Search radius in metres
        #[arg(long)]
        radius: u32,
    },
}

pub(crate) fn run(command: &GeoCommands) -> anyhow::Result<()> {
    let output = match *command {
        GeoCommands::Encode {
            lat,
            lng,
            precision,
        } => {
            if !(1..=MAX_PRECISION).contains(&precision) {
                anyhow::bail!("precision must be between 1 and {MAX_PRECISION}, got {precision}");
            }
            let point = GeoPoint::new(lat, lng)?;
            serde_json::json!({
                "lat": point.latitude(),
                "lng": point.longitude(),
                "geoHash": nearvend_geo::encode(point, precision),
            })
        }
        GeoCommands::Cover { lat, lng, radius } => {
            let point = GeoPoint::new(lat, lng)?;
            let plan = nearvend_geo::plan(point, radius);
            serde_json::json!({
                "precision": plan.precision,
                "center": plan.center,
                "prefixes": plan.prefixes,
            })
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
