pub mod app_config;
pub mod config;
pub mod error;
pub mod input;
pub mod limits;
pub mod model;
mod parse;
pub mod query;
pub mod seed;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, InputError};
pub use input::{NewVendor, SaleCardDraft, SaleCardInput, VendorProfileUpdate};
pub use model::{LocationRecord, Picture, SaleCard, Vendor};
pub use query::{ClientLocationParams, NearbyParams, NearbyQuery};
pub use seed::{load_seed_file, SeedEntry};
