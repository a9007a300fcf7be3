pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::validation::{parse_birthday, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "contact-book")]
#[command(about = "A console assistant for contacts and upcoming birthdays")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the prompt from the configuration file
    #[arg(long)]
    pub prompt: Option<String>,

    /// Reference date (DD.MM.YYYY) for the birthdays command instead of today
    #[arg(long)]
    pub today: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::Result<()> {
        if let Some(today) = &self.today {
            parse_birthday(today).map_err(|e| crate::ContactError::ConfigError {
                message: format!("--today: {}", e),
            })?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "contact-book",
            "--config",
            "assistant.toml",
            "--today",
            "12.06.2025",
            "-v",
        ]);
        assert_eq!(config.config.as_deref(), Some("assistant.toml"));
        assert!(config.verbose);
        assert!(!config.json_logs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_today_rejected() {
        let config = CliConfig::parse_from(["contact-book", "--today", "2025-06-12"]);
        assert!(config.validate().is_err());
    }
}
