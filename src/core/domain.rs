use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable {
    fn id(&self) -> String;
}

pub const DEFAULT_DISPLAY_DATE_FMT: &str = "%m/%d/%Y";

// Configuration abstracts config options for library catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub date_format: String,
    pub json_logs: bool,
    pub log_level: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            date_format: DEFAULT_DISPLAY_DATE_FMT.to_string(),
            json_logs: false,
            log_level: "info".to_string(),
        }
    }

    // from_env overrides defaults with CATALOG_* variables when they are set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new(
            lookup("CATALOG_BRANCH").unwrap_or_else(|| "main".to_string()).as_str());
        if let Some(date_format) = lookup("CATALOG_DATE_FMT") {
            config.date_format = date_format;
        }
        if let Some(json_logs) = lookup("CATALOG_JSON_LOGS") {
            config.json_logs = matches!(json_logs.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(log_level) = lookup("CATALOG_LOG_LEVEL") {
            config.log_level = log_level;
        }
        config
    }
}
