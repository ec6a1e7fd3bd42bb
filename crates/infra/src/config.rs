//! Runtime configuration read from `HOTELMAN_*` environment variables.
//!
//! | variable | default | meaning |
//! |---|---|---|
//! | `HOTELMAN_RECENT_BOOKINGS` | `5` | length of the dashboard's recent list |
//! | `HOTELMAN_LOG` | `info` | tracing filter directive |
//! | `HOTELMAN_CAPACITY_<TYPE>` | built-in table | guests per room type, e.g. `HOTELMAN_CAPACITY_FAMILY=3` |

use thiserror::Error;

use hotelman_booking::{DashboardOptions, RoomType, RoomTypeCapacity, DEFAULT_RECENT_COUNT};

pub const RECENT_BOOKINGS_VAR: &str = "HOTELMAN_RECENT_BOOKINGS";
pub const LOG_VAR: &str = "HOTELMAN_LOG";
pub const CAPACITY_PREFIX: &str = "HOTELMAN_CAPACITY_";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelManagerConfig {
    pub recent_bookings: usize,
    pub log_filter: String,
    pub capacity: RoomTypeCapacity,
}

impl Default for HotelManagerConfig {
    fn default() -> Self {
        Self {
            recent_bookings: DEFAULT_RECENT_COUNT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            capacity: RoomTypeCapacity::standard(),
        }
    }
}

impl HotelManagerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Build from explicit `(name, value)` pairs; unrelated names are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        let mut recent_set = false;

        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            if key == RECENT_BOOKINGS_VAR {
                config.recent_bookings = parse_count(key, value)?;
                recent_set = true;
            } else if key == LOG_VAR {
                if !value.is_empty() {
                    config.log_filter = value.to_string();
                }
            } else if let Some(label) = key.strip_prefix(CAPACITY_PREFIX) {
                if label.is_empty() {
                    continue;
                }
                let guests = parse_count(key, value)?;
                let guests = u32::try_from(guests).map_err(|_| ConfigError::Invalid {
                    var: key.to_string(),
                    reason: "too large".to_string(),
                })?;
                config.capacity = config
                    .capacity
                    .with_capacity(&RoomType::from_label(label), guests);
            }
        }

        if !recent_set {
            tracing::debug!(
                default = DEFAULT_RECENT_COUNT,
                "{RECENT_BOOKINGS_VAR} not set; using default"
            );
        }
        Ok(config)
    }

    /// Install process-wide logging with the configured filter directive.
    pub fn init_logging(&self) {
        hotelman_observability::init_with_filter(&self.log_filter);
    }

    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            capacity: self.capacity.clone(),
            recent_count: self.recent_bookings,
        }
    }
}

fn parse_count(var: &str, value: &str) -> Result<usize, ConfigError> {
    if value.starts_with('-') {
        return Err(ConfigError::Invalid {
            var: var.to_string(),
            reason: format!("must not be negative, got {value}"),
        });
    }
    value.parse::<usize>().map_err(|e| ConfigError::Invalid {
        var: var.to_string(),
        reason: format!("{e} ({value:?})"),
    })
}
