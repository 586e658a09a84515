//! Reporting standards ("indicators") an LCA export can be produced for.

use serde::{Deserialize, Serialize};

/// Assessment standard the export was produced for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[allow(non_camel_case_types)]
pub enum Indicator {
    #[default]
    Undefined,
    WholeLifeCarbonAssessment,
    BREEAM,
    DGNB,
    LEED_Intl,
    LEED_US,
    Levels_Assessment_A1,
    Levels_Assessment_A2,
    Levels_Assessment_A2_NewVersion,
    Levels_Carbon_A1,
    Levels_Carbon_A1A2,
}

impl Indicator {
    /// Every supported indicator (everything but `Undefined`).
    pub const SUPPORTED: [Indicator; 10] = [
        Indicator::WholeLifeCarbonAssessment,
        Indicator::BREEAM,
        Indicator::DGNB,
        Indicator::LEED_Intl,
        Indicator::LEED_US,
        Indicator::Levels_Assessment_A1,
        Indicator::Levels_Assessment_A2,
        Indicator::Levels_Assessment_A2_NewVersion,
        Indicator::Levels_Carbon_A1,
        Indicator::Levels_Carbon_A1A2,
    ];

    pub fn identifier(&self) -> &'static str {
        match self {
            Indicator::Undefined => "Undefined",
            Indicator::WholeLifeCarbonAssessment => "WholeLifeCarbonAssessment",
            Indicator::BREEAM => "BREEAM",
            Indicator::DGNB => "DGNB",
            Indicator::LEED_Intl => "LEED_Intl",
            Indicator::LEED_US => "LEED_US",
            Indicator::Levels_Assessment_A1 => "Levels_Assessment_A1",
            Indicator::Levels_Assessment_A2 => "Levels_Assessment_A2",
            Indicator::Levels_Assessment_A2_NewVersion => "Levels_Assessment_A2_NewVersion",
            Indicator::Levels_Carbon_A1 => "Levels_Carbon_A1",
            Indicator::Levels_Carbon_A1A2 => "Levels_Carbon_A1A2",
        }
    }

    /// Indicator name as written by One Click LCA in the export metadata.
    pub fn display_text(&self) -> &'static str {
        match self {
            Indicator::Undefined => "Undefined",
            Indicator::WholeLifeCarbonAssessment => {
                "Whole life carbon assessment, GLA / RICS / Green Mark"
            }
            Indicator::BREEAM => "LCA for BREEAM UK",
            Indicator::DGNB => "LCA for DGNB (DE)",
            Indicator::LEED_Intl => "LCA for LEED, Int´l (CML)",
            Indicator::LEED_US => "LCA for LEED, US (TRACI)",
            Indicator::Levels_Assessment_A1 => "Level(s) life-cycle assessment (EN15804 +A1)",
            Indicator::Levels_Assessment_A2 => "Level(s) life-cycle assessment (EN15804 +A2)",
            Indicator::Levels_Assessment_A2_NewVersion => {
                "Level(s) life-cycle assessment (EN15804 +A2) (new version available)"
            }
            Indicator::Levels_Carbon_A1 => "Level(s) life-cycle carbon (EN15804 +A1)",
            Indicator::Levels_Carbon_A1A2 => "Level(s) life-cycle carbon (EN15804 +A1/+A2)",
        }
    }

    /// Parse an indicator from its identifier or display text.
    ///
    /// Comparison ignores case, whitespace and punctuation. Unknown values
    /// give `Undefined`.
    pub fn parse(value: &str) -> Indicator {
        let key = normalize(value);
        if key.is_empty() {
            return Indicator::Undefined;
        }
        Indicator::SUPPORTED
            .into_iter()
            .find(|i| normalize(i.identifier()) == key || normalize(i.display_text()) == key)
            .unwrap_or(Indicator::Undefined)
    }

    /// Identifiers of every supported indicator.
    pub fn valid_names() -> Vec<String> {
        Indicator::SUPPORTED
            .iter()
            .map(|i| i.identifier().to_string())
            .collect()
    }
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifier_and_display_text() {
        assert_eq!(Indicator::parse("DGNB"), Indicator::DGNB);
        assert_eq!(Indicator::parse("leed_us"), Indicator::LEED_US);
        assert_eq!(Indicator::parse("LCA for BREEAM UK"), Indicator::BREEAM);
        assert_eq!(
            Indicator::parse("Level(s) life-cycle assessment (EN15804 +A2) (new version available)"),
            Indicator::Levels_Assessment_A2_NewVersion
        );
        assert_eq!(
            Indicator::parse("Whole life carbon assessment, GLA / RICS / Green Mark"),
            Indicator::WholeLifeCarbonAssessment
        );
    }

    #[test]
    fn test_parse_unknown_is_undefined() {
        assert_eq!(Indicator::parse(""), Indicator::Undefined);
        assert_eq!(Indicator::parse("Undefined"), Indicator::Undefined);
        assert_eq!(Indicator::parse("LCA for Mars"), Indicator::Undefined);
    }

    #[test]
    fn test_display_texts_are_distinct_after_normalization() {
        for a in Indicator::SUPPORTED {
            for b in Indicator::SUPPORTED {
                if a != b {
                    assert_ne!(normalize(a.display_text()), normalize(b.display_text()));
                }
            }
        }
        assert_eq!(Indicator::valid_names().len(), 10);
    }
}
