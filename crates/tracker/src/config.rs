use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use scoring::{DiagnosticWindow, PASSING_COMPOSITE, ScoringPolicy};

use crate::session::Session;
use crate::store::JsonFileStore;

pub const STORE_PATH_VAR: &str = "PFA_STORE_PATH";
pub const DIAGNOSTIC_START_VAR: &str = "PFA_DIAGNOSTIC_START";
pub const DIAGNOSTIC_END_VAR: &str = "PFA_DIAGNOSTIC_END";
pub const PASSING_COMPOSITE_VAR: &str = "PFA_PASSING_COMPOSITE";

const DEFAULT_STORE_PATH: &str = "pfa_tracker.json";

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub store_path: PathBuf,
    pub diagnostic_start: NaiveDate,
    pub diagnostic_end: NaiveDate,
    pub passing_composite: Decimal,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let window = DiagnosticWindow::default();
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            diagnostic_start: window.start,
            diagnostic_end: window.end,
            passing_composite: PASSING_COMPOSITE,
        }
    }
}

impl TrackerConfig {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Every variable is
    /// optional; unset or blank variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let config = Self {
            store_path: get(STORE_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            diagnostic_start: match get(DIAGNOSTIC_START_VAR) {
                Some(raw) => parse_date(&raw).context("PFA_DIAGNOSTIC_START must be YYYY-MM-DD")?,
                None => defaults.diagnostic_start,
            },
            diagnostic_end: match get(DIAGNOSTIC_END_VAR) {
                Some(raw) => parse_date(&raw).context("PFA_DIAGNOSTIC_END must be YYYY-MM-DD")?,
                None => defaults.diagnostic_end,
            },
            passing_composite: match get(PASSING_COMPOSITE_VAR) {
                Some(raw) => raw
                    .trim()
                    .parse::<Decimal>()
                    .context("PFA_PASSING_COMPOSITE must be a number")?,
                None => defaults.passing_composite,
            },
        };

        if config.diagnostic_start > config.diagnostic_end {
            bail!(
                "Diagnostic window starts ({}) after it ends ({})",
                config.diagnostic_start,
                config.diagnostic_end
            );
        }
        if config.passing_composite < Decimal::ZERO || config.passing_composite > Decimal::ONE_HUNDRED
        {
            bail!(
                "PFA_PASSING_COMPOSITE must be between 0 and 100, got {}",
                config.passing_composite
            );
        }

        Ok(config)
    }

    pub fn scoring_policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            passing_composite: self.passing_composite,
            diagnostic_window: DiagnosticWindow {
                start: self.diagnostic_start,
                end: self.diagnostic_end,
            },
            ..ScoringPolicy::default()
        }
    }

    /// Opens the configured store and loads a session from it.
    pub fn open_session(&self) -> Result<Session<JsonFileStore>> {
        let store = JsonFileStore::open(&self.store_path)
            .with_context(|| format!("Cannot open store at {}", self.store_path.display()))?;
        Session::load_with_policy(store, self.scoring_policy()).context("Cannot load session")
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.store_path, PathBuf::from("pfa_tracker.json"));
        assert_eq!(config.scoring_policy(), ScoringPolicy::default());
    }

    #[test]
    fn test_overrides() {
        let config = TrackerConfig::from_lookup(lookup(&[
            (STORE_PATH_VAR, "/tmp/pfa.json"),
            (DIAGNOSTIC_START_VAR, "2027-01-01"),
            (DIAGNOSTIC_END_VAR, "2027-03-31"),
            (PASSING_COMPOSITE_VAR, "80.5"),
        ]))
        .unwrap();

        assert_eq!(config.store_path, PathBuf::from("/tmp/pfa.json"));
        let policy = config.scoring_policy();
        assert_eq!(policy.passing_composite, Decimal::new(805, 1));
        assert!(policy.is_diagnostic_period(date(2027, 3, 31)));
        assert!(!policy.is_diagnostic_period(date(2026, 4, 1)));
        assert_eq!(policy.cardio_minimum, Decimal::from(60));
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config =
            TrackerConfig::from_lookup(lookup(&[(PASSING_COMPOSITE_VAR, "  ")])).unwrap();
        assert_eq!(config.passing_composite, Decimal::from(75));
    }

    #[test]
    fn test_invalid_values() {
        assert!(TrackerConfig::from_lookup(lookup(&[(DIAGNOSTIC_START_VAR, "March")])).is_err());
        assert!(TrackerConfig::from_lookup(lookup(&[(PASSING_COMPOSITE_VAR, "high")])).is_err());
        assert!(TrackerConfig::from_lookup(lookup(&[(PASSING_COMPOSITE_VAR, "101")])).is_err());
        assert!(
            TrackerConfig::from_lookup(lookup(&[
                (DIAGNOSTIC_START_VAR, "2027-05-01"),
                (DIAGNOSTIC_END_VAR, "2027-01-01"),
            ]))
            .is_err()
        );
    }

    #[test]
    fn test_open_session() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig {
            store_path: dir.path().join("store.json"),
            ..TrackerConfig::default()
        };

        let mut session = config.open_session().unwrap();
        session.complete_onboarding().unwrap();
        drop(session);

        let session = config.open_session().unwrap();
        assert!(!session.needs_onboarding());
    }
}
