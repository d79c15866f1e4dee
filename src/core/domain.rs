use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
    fn version(&self) -> i64;
}

// ten years
pub const MAX_LOAN_DAYS: i64 = 3650;

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub book_loan_days: i64,
    pub preload_books: bool,
    pub publish_events: bool,
    pub clear_screen: bool,
    pub log_level: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            book_loan_days: 14,
            preload_books: true,
            publish_events: true,
            clear_screen: true,
            log_level: "INFO".to_string(),
        }
    }

    // overrides defaults from LIBSYS_* environment variables, ignoring values that don't parse
    pub fn from_env() -> Self {
        let vars = env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Configuration::from_vars(&vars)
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let mut config = Configuration::new(
            vars.get("LIBSYS_BRANCH").map(|s| s.as_str()).unwrap_or("main"));
        let loan_days = var_or(vars, "LIBSYS_LOAN_DAYS", config.book_loan_days);
        if (1..=MAX_LOAN_DAYS).contains(&loan_days) {
            config.book_loan_days = loan_days;
        }
        config.preload_books = var_or(vars, "LIBSYS_PRELOAD", config.preload_books);
        config.publish_events = var_or(vars, "LIBSYS_EVENTS", config.publish_events);
        config.clear_screen = var_or(vars, "LIBSYS_CLEAR_SCREEN", config.clear_screen);
        if let Some(level) = vars.get("LIBSYS_LOG_LEVEL") {
            if tracing::Level::from_str(level.trim()).is_ok() {
                config.log_level = level.trim().to_string();
            }
        }
        config
    }

    pub fn tracing_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

fn var_or<T: FromStr>(vars: &HashMap<String, String>, name: &str, default: T) -> T {
    vars.get(name)
        .and_then(|val| val.trim().parse::<T>().ok())
        .unwrap_or(default)
}
