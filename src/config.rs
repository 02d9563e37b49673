use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{config_error, Error};

pub const DEFAULT_ROUTING_BASE: &str = "https://router.project-osrm.org";
pub const DEFAULT_ROUTING_PROFILE: &str = "foot";

#[derive(Clone, Debug)]
pub struct Config {
    pub routing_base: String,
    pub routing_profile: String,
    pub routing_timeout: Duration,
    pub dataset_path: PathBuf,
    pub listen_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            routing_base: DEFAULT_ROUTING_BASE.into(),
            routing_profile: DEFAULT_ROUTING_PROFILE.into(),
            routing_timeout: Duration::from_secs(10),
            dataset_path: PathBuf::from("data.json"),
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl Config {
    /// Reads `PROMENADE_*` variables, keeping the default for any that are unset.
    #[tracing::instrument(name = "Config::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Self::default();

        let routing_base = var_or("PROMENADE_ROUTING_BASE", defaults.routing_base)?;
        let routing_profile = var_or("PROMENADE_ROUTING_PROFILE", defaults.routing_profile)?;
        let timeout_secs = parsed_var_or(
            "PROMENADE_ROUTING_TIMEOUT_SECS",
            defaults.routing_timeout.as_secs(),
        )?;
        let dataset_path = var_or(
            "PROMENADE_DATASET",
            defaults.dataset_path.to_string_lossy().into_owned(),
        )?;
        let listen_addr = parsed_var_or("PROMENADE_LISTEN_ADDR", defaults.listen_addr)?;

        Ok(Self {
            routing_base: routing_base.trim_end_matches('/').into(),
            routing_profile,
            routing_timeout: Duration::from_secs(timeout_secs),
            dataset_path: dataset_path.into(),
            listen_addr,
        })
    }
}

fn var_or(name: &str, default: String) -> Result<String, Error> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) | Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err.into()),
    }
}

fn parsed_var_or<T: FromStr + ToString>(name: &str, default: T) -> Result<T, Error> {
    let raw = var_or(name, default.to_string())?;
    raw.trim().parse().map_err(|_| config_error(name))
}
