use crate::tools::env_vars::retrieve_env_var_or;
use derive_getters::Getters;
use std::path::PathBuf;

pub const MEMBERS_FILE_VAR: &str = "ARCHIVO_CLIENTES";
const DEFAULT_MEMBERS_FILE: &str = "clientes.csv";
const DEFAULT_PLAN_DAYS: u64 = 30;
const DEFAULT_WARNING_DAYS: i64 = 5;
const DEFAULT_DISPLAY_DAYS: i64 = 7;

/// Settings shared by every action.
/// Built once at startup, then only read.
#[derive(Debug, Getters, Clone, PartialEq, Eq)]
pub struct GymConfig {
    /// CSV file listing members and their last payment date.
    members_file: PathBuf,
    /// How long a payment keeps a membership valid.
    plan_days: u64,
    /// Members whose membership ends within this many days, or is over, get a reminder.
    warning_days: i64,
    /// Members whose membership ends within this many days, or is over, are listed in the report.
    display_days: i64,
}

impl GymConfig {
    pub fn new(members_file: PathBuf, plan_days: u64, warning_days: i64, display_days: i64) -> Self {
        Self {
            members_file,
            plan_days,
            warning_days,
            display_days,
        }
    }

    /// Default settings, reading the members file location from the environment.
    pub fn from_env() -> Self {
        Self {
            members_file: PathBuf::from(retrieve_env_var_or(
                MEMBERS_FILE_VAR,
                DEFAULT_MEMBERS_FILE,
            )),
            ..Self::default()
        }
    }
}

impl Default for GymConfig {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_MEMBERS_FILE),
            DEFAULT_PLAN_DAYS,
            DEFAULT_WARNING_DAYS,
            DEFAULT_DISPLAY_DAYS,
        )
    }
}
