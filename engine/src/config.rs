//! Pull options, from the CLI or the environment.
//!
//! Environment variables (a `.env` file is loaded first when present):
//!
//! - `LCA_FLOOR_AREA`: floor area in m²
//! - `LCA_BUILDING_LIFE_EXPECTANCY`: building life expectancy in years
//! - `LCA_DELIMITER`: export delimiter, skips detection
//! - `LCA_RICS_VERSION`: `1` or `2`, taxonomy of whole life carbon exports

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, AdapterResult};
use crate::models::ReportFragment;
use crate::transform::PopulateOptions;

pub const FLOOR_AREA_VAR: &str = "LCA_FLOOR_AREA";
pub const LIFE_EXPECTANCY_VAR: &str = "LCA_BUILDING_LIFE_EXPECTANCY";
pub const DELIMITER_VAR: &str = "LCA_DELIMITER";
pub const RICS_VERSION_VAR: &str = "LCA_RICS_VERSION";

/// Options of a `pull`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullOptions {
    /// Floor area in m², needed by area-normalised formats.
    pub floor_area: Option<f64>,
    /// Building life expectancy in years, needed by area-normalised formats.
    pub building_life_expectancy: Option<f64>,
    /// Export delimiter (auto-detect if not specified)
    pub delimiter: Option<char>,
    /// Classify whole life carbon exports against RICS v2.
    #[serde(default)]
    pub rics_v2: bool,
}

impl PullOptions {
    /// Options from the process environment, after loading `.env`.
    pub fn from_env() -> AdapterResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Options from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AdapterResult<Self> {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let number = |key: &str| -> AdapterResult<Option<f64>> {
            value(key)
                .map(|v| {
                    v.parse::<f64>()
                        .ok()
                        .filter(|n| n.is_finite())
                        .ok_or_else(|| AdapterError::InvalidRequest(format!("{} is not a number: '{}'", key, v)))
                })
                .transpose()
        };

        let delimiter = match value(DELIMITER_VAR) {
            None => None,
            Some(v) if v == "\\t" => Some('\t'),
            Some(v) => {
                let mut chars = v.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => {
                        return Err(AdapterError::InvalidRequest(format!(
                            "{} must be a single character: '{}'",
                            DELIMITER_VAR, v
                        )))
                    }
                }
            }
        };

        let rics_v2 = match value(RICS_VERSION_VAR).as_deref() {
            None | Some("1") => false,
            Some("2") => true,
            Some(other) => {
                return Err(AdapterError::InvalidRequest(format!(
                    "{} must be 1 or 2: '{}'",
                    RICS_VERSION_VAR, other
                )))
            }
        };

        Ok(Self {
            floor_area: number(FLOOR_AREA_VAR)?,
            building_life_expectancy: number(LIFE_EXPECTANCY_VAR)?,
            delimiter,
            rics_v2,
        })
    }

    /// Fill unset options from `fallback`.
    pub fn or(self, fallback: PullOptions) -> Self {
        Self {
            floor_area: self.floor_area.or(fallback.floor_area),
            building_life_expectancy: self
                .building_life_expectancy
                .or(fallback.building_life_expectancy),
            delimiter: self.delimiter.or(fallback.delimiter),
            rics_v2: self.rics_v2 || fallback.rics_v2,
        }
    }

    pub fn with_additional_inputs(mut self, floor_area: f64, building_life_expectancy: f64) -> Self {
        self.floor_area = Some(floor_area);
        self.building_life_expectancy = Some(building_life_expectancy);
        self
    }

    /// The `AdditionalInputs` fragment, when both values are set.
    pub fn additional_inputs(&self) -> Option<ReportFragment> {
        match (self.floor_area, self.building_life_expectancy) {
            (Some(floor_area), Some(building_life_expectancy)) => Some(ReportFragment::AdditionalInputs {
                floor_area,
                building_life_expectancy,
            }),
            _ => None,
        }
    }

    pub fn populate_options(&self) -> PopulateOptions {
        PopulateOptions { rics_v2: self.rics_v2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let options = PullOptions::from_lookup(lookup(&[
            (FLOOR_AREA_VAR, "1200"),
            (LIFE_EXPECTANCY_VAR, " 50 "),
            (DELIMITER_VAR, ";"),
            (RICS_VERSION_VAR, "2"),
        ]))
        .unwrap();

        assert_eq!(options.floor_area, Some(1200.0));
        assert_eq!(options.building_life_expectancy, Some(50.0));
        assert_eq!(options.delimiter, Some(';'));
        assert!(options.rics_v2);
        assert_eq!(
            options.additional_inputs(),
            Some(ReportFragment::AdditionalInputs {
                floor_area: 1200.0,
                building_life_expectancy: 50.0
            })
        );
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let options = PullOptions::from_lookup(lookup(&[(FLOOR_AREA_VAR, "")])).unwrap();
        assert_eq!(options, PullOptions::default());
        assert_eq!(options.additional_inputs(), None);
        assert!(!options.populate_options().rics_v2);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(PullOptions::from_lookup(lookup(&[(FLOOR_AREA_VAR, "big")])).is_err());
        assert!(PullOptions::from_lookup(lookup(&[(DELIMITER_VAR, ";;")])).is_err());
        assert!(PullOptions::from_lookup(lookup(&[(RICS_VERSION_VAR, "3")])).is_err());
        assert_eq!(
            PullOptions::from_lookup(lookup(&[(DELIMITER_VAR, "\\t")])).unwrap().delimiter,
            Some('\t')
        );
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        env::set_var(LIFE_EXPECTANCY_VAR, "60");
        let options = PullOptions::from_env().unwrap();
        env::remove_var(LIFE_EXPECTANCY_VAR);
        assert_eq!(options.building_life_expectancy, Some(60.0));
    }

    #[test]
    fn test_cli_values_win_over_environment() {
        let cli = PullOptions::default().with_additional_inputs(100.0, 60.0);
        let env = PullOptions {
            floor_area: Some(1.0),
            delimiter: Some(','),
            ..Default::default()
        };
        let merged = cli.or(env);
        assert_eq!(merged.floor_area, Some(100.0));
        assert_eq!(merged.building_life_expectancy, Some(60.0));
        assert_eq!(merged.delimiter, Some(','));
    }
}
