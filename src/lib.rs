pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::AssistantConfig;
pub use core::{AddressBook, Dispatcher, Reply, UpcomingBirthdays};
pub use domain::Record;
pub use utils::error::{ContactError, Result};
