use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

const DEFAULT_DATABASE: &str = "microcourses";
const ATLAS_KEYS: [&str; 4] = ["DB_USER", "DB_PASS", "DB_CLUSTER", "DB_NAME"];

#[derive(Debug, Clone)]
pub struct CourseConfig {
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Full connection string; may embed credentials.
    pub uri: Secret<String>,
    pub database: String,
}

impl CourseConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let mongodb = MongoConfig::from_lookup(|key| env::var(key).ok())?;

        Ok(CourseConfig { common, mongodb })
    }
}

impl MongoConfig {
    /// Resolves the connection target from a variable lookup.
    ///
    /// `MONGODB_URI` selects a direct (usually local) connection. Without it
    /// the Atlas form is assembled from `DB_USER`, `DB_PASS`, `DB_CLUSTER`
    /// and `DB_NAME`, all of which are then required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(uri) = get("MONGODB_URI") {
            let database = get("MONGODB_DATABASE")
                .or_else(|| get("DB_NAME"))
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
            return Ok(MongoConfig {
                uri: Secret::new(uri),
                database,
            });
        }

        let missing: Vec<&str> = ATLAS_KEYS
            .iter()
            .copied()
            .filter(|key| get(key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "Missing required MongoDB env variables: {} (or set MONGODB_URI)",
                missing.join(", ")
            )));
        }

        let user = get("DB_USER").unwrap_or_default();
        let pass = get("DB_PASS").unwrap_or_default();
        let cluster = get("DB_CLUSTER").unwrap_or_default();
        let database = get("DB_NAME").unwrap_or_default();

        Ok(MongoConfig {
            uri: Secret::new(format!(
                "mongodb+srv://{}:{}@{}.mongodb.net/{}?retryWrites=true&w=majority",
                user, pass, cluster, database
            )),
            database,
        })
    }
}
