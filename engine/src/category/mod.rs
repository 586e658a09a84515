//! Category classification.
//!
//! Maps a raw category code from any supported source taxonomy onto the
//! canonical RICS v2 taxonomy. Classification never fails: blank codes are
//! `Undefined`, unknown codes land in [`CanonicalCategory::OTHERS`].

mod tables;

pub use tables::CanonicalCategory;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Source category-coding taxonomies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Taxonomy {
    RicsV1,
    RicsV2,
    /// DIN 276 cost groups (DGNB exports).
    Din276,
    OmniClass,
    LevelsBuildingParts,
}

impl Taxonomy {
    pub const ALL: [Taxonomy; 5] = [
        Taxonomy::RicsV1,
        Taxonomy::RicsV2,
        Taxonomy::Din276,
        Taxonomy::OmniClass,
        Taxonomy::LevelsBuildingParts,
    ];

    /// Parse a taxonomy name as typed on the command line.
    pub fn parse(name: &str) -> Option<Taxonomy> {
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "ricsv1" | "rics" => Some(Taxonomy::RicsV1),
            "ricsv2" => Some(Taxonomy::RicsV2),
            "din276" | "dgnb" => Some(Taxonomy::Din276),
            "omniclass" | "leed" => Some(Taxonomy::OmniClass),
            "levels" | "levelsbuildingparts" | "buildingparts" => {
                Some(Taxonomy::LevelsBuildingParts)
            }
            _ => None,
        }
    }

    fn table(&self) -> Option<&'static HashMap<&'static str, CanonicalCategory>> {
        match self {
            Taxonomy::RicsV1 => Some(&RICS_V1),
            Taxonomy::RicsV2 => None,
            Taxonomy::Din276 => Some(&DIN_276),
            Taxonomy::OmniClass => Some(&OMNICLASS),
            Taxonomy::LevelsBuildingParts => Some(&LEVELS_BUILDING_PARTS),
        }
    }
}

static RICS_V1: Lazy<HashMap<&'static str, CanonicalCategory>> =
    Lazy::new(|| tables::RICS_V1.iter().copied().collect());
static DIN_276: Lazy<HashMap<&'static str, CanonicalCategory>> =
    Lazy::new(|| tables::DIN_276.iter().copied().collect());
static OMNICLASS: Lazy<HashMap<&'static str, CanonicalCategory>> =
    Lazy::new(|| tables::OMNICLASS.iter().copied().collect());
static LEVELS_BUILDING_PARTS: Lazy<HashMap<&'static str, CanonicalCategory>> =
    Lazy::new(|| tables::LEVELS_BUILDING_PARTS.iter().copied().collect());

/// Strip the descriptive suffix from a raw category cell.
///
/// `"2.5.1 External walls"` becomes `"2.5.1"`. DIN 276 keeps its letter
/// suffixes (`"330B Außentüren"` becomes `"330B"`), so it takes the first
/// whitespace-delimited token instead.
pub fn clean_code(taxonomy: Taxonomy, raw: &str) -> String {
    let raw = raw.trim();
    if taxonomy == Taxonomy::Din276 {
        return raw.split_whitespace().next().unwrap_or_default().to_string();
    }
    // 'A'..='z' also spans `[\]^_` and the backtick.
    let end = raw.find(|c: char| ('A'..='z').contains(&c)).unwrap_or(raw.len());
    raw[..end].trim_matches(|c| c == ' ' || c == '.').to_string()
}

/// Classify a raw category code of the given taxonomy.
pub fn classify(taxonomy: Taxonomy, raw: &str) -> CanonicalCategory {
    if raw.trim().is_empty() {
        return CanonicalCategory::Undefined;
    }

    let code = clean_code(taxonomy, raw);
    let found = match taxonomy.table() {
        Some(table) => table.get(code.as_str()).copied(),
        None => CanonicalCategory::from_exact_code(&code)
            .or_else(|| CanonicalCategory::from_code(&code)),
    };
    found.unwrap_or(CanonicalCategory::OTHERS)
}

impl CanonicalCategory {
    /// Structural lookup: the first canonical category (declaration order)
    /// whose code starts with `code`.
    pub fn from_code(code: &str) -> Option<CanonicalCategory> {
        let code = code.trim_matches(|c| c == ' ' || c == '.' || c == '_');
        if code.is_empty() {
            return None;
        }
        let code = code.replace('_', ".");
        CanonicalCategory::ALL
            .iter()
            .copied()
            .find(|c| c.code().starts_with(code.as_str()))
    }

    /// Category one step up the code hierarchy (`"2.5.1"` -> `"2.5"`).
    pub fn parent(&self) -> Option<CanonicalCategory> {
        let code = self.code();
        let cut = code.rfind('.')?;
        // "0.1" has no "0" above it; the prefix lookup would return itself.
        CanonicalCategory::from_code(&code[..cut]).filter(|parent| parent != self)
    }

    /// Ancestor at the requested level.
    ///
    /// Walks up while the current level is deeper than `level`. Categories
    /// already at or above `level` are returned unchanged, as is `Undefined`.
    pub fn for_level(&self, level: u8) -> CanonicalCategory {
        let mut current = *self;
        while current.level() > level {
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_code_is_undefined() {
        for taxonomy in Taxonomy::ALL {
            assert_eq!(classify(taxonomy, ""), CanonicalCategory::Undefined);
            assert_eq!(classify(taxonomy, "   "), CanonicalCategory::Undefined);
        }
    }

    #[test]
    fn test_clean_code() {
        assert_eq!(clean_code(Taxonomy::RicsV1, "2.5.1 External walls"), "2.5.1");
        assert_eq!(clean_code(Taxonomy::RicsV1, "2.5. Windows"), "2.5");
        assert_eq!(clean_code(Taxonomy::OmniClass, "21-02 10 10 Exterior Walls"), "21-02 10 10");
        assert_eq!(clean_code(Taxonomy::RicsV1, "3.1"), "3.1");
        assert_eq!(clean_code(Taxonomy::Din276, "330B Außentüren"), "330B");
    }

    #[test]
    fn test_clean_code_cuts_at_ascii_punctuation_between_cases() {
        assert_eq!(clean_code(Taxonomy::RicsV1, "2.6_x"), "2.6");
        assert_eq!(clean_code(Taxonomy::OmniClass, "21-02 10[a]"), "21-02 10");
        assert_eq!(clean_code(Taxonomy::RicsV2, "2.5^1"), "2.5");
        assert_eq!(clean_code(Taxonomy::RicsV1, "3.1`note"), "3.1");
        assert_eq!(classify(Taxonomy::RicsV2, "2.6_x"), CanonicalCategory::C2_6);
    }

    #[test]
    fn test_dgnb_letter_suffix() {
        assert_eq!(classify(Taxonomy::Din276, "330B"), CanonicalCategory::C2_6);
        assert_eq!(classify(Taxonomy::Din276, "330B Außentüren"), CanonicalCategory::C2_6);
        assert_eq!(classify(Taxonomy::Din276, "330 Außenwände"), CanonicalCategory::C2_5);
        assert_eq!(classify(Taxonomy::Din276, "999"), CanonicalCategory::OTHERS);
    }

    #[test]
    fn test_unknown_code_is_others() {
        assert_eq!(classify(Taxonomy::RicsV1, "99.99 Nothing"), CanonicalCategory::C9);
        assert_eq!(classify(Taxonomy::OmniClass, "42 Unknown"), CanonicalCategory::C9);
        assert_eq!(classify(Taxonomy::LevelsBuildingParts, "Garden"), CanonicalCategory::C9);
    }

    #[test]
    fn test_table_keys_are_idempotent_under_cleaning() {
        let tables: [(Taxonomy, &[(&str, CanonicalCategory)]); 4] = [
            (Taxonomy::RicsV1, tables::RICS_V1),
            (Taxonomy::Din276, tables::DIN_276),
            (Taxonomy::OmniClass, tables::OMNICLASS),
            (Taxonomy::LevelsBuildingParts, tables::LEVELS_BUILDING_PARTS),
        ];
        for (taxonomy, table) in tables {
            for (key, category) in table {
                assert_eq!(clean_code(taxonomy, key), *key);
                assert_eq!(classify(taxonomy, key), *category, "{:?} {}", taxonomy, key);
                let with_suffix = format!("{} Some description", key);
                assert_eq!(classify(taxonomy, &with_suffix), *category);
            }
        }
    }

    #[test]
    fn test_rics_v2_exact_and_structural() {
        assert_eq!(classify(Taxonomy::RicsV2, "2.5.1 External - opaque envelope"), CanonicalCategory::C2_5_1);
        assert_eq!(classify(Taxonomy::RicsV2, "2.3. Roof"), CanonicalCategory::C2_3);
        // No "0" category: first code starting with "0" wins.
        assert_eq!(classify(Taxonomy::RicsV2, "0 Facilitating"), CanonicalCategory::C0_1);
        assert_eq!(classify(Taxonomy::RicsV2, "5.5.2.1 Unknown"), CanonicalCategory::OTHERS);
    }

    #[test]
    fn test_codes_and_levels() {
        let c = CanonicalCategory::C2_5_1;
        assert_eq!(c.code(), "2.5.1");
        assert_eq!(c.level(), 3);
        assert_eq!(c.display(), "2.5.1 External - opaque envelope");
        assert_eq!(CanonicalCategory::C5.level(), 0);
        assert_eq!(CanonicalCategory::C4_1.level(), 3);
        assert_eq!(CanonicalCategory::OTHERS.code(), "9");
    }

    #[test]
    fn test_parent_and_for_level() {
        assert_eq!(CanonicalCategory::C2_5_1.parent(), Some(CanonicalCategory::C2_5));
        assert_eq!(CanonicalCategory::C2.parent(), None);
        assert_eq!(CanonicalCategory::C2_5_1.for_level(1), CanonicalCategory::C2);
        assert_eq!(CanonicalCategory::C2_5_1.for_level(2), CanonicalCategory::C2_5);
        assert_eq!(CanonicalCategory::C2_5.for_level(3), CanonicalCategory::C2_5);
        assert_eq!(CanonicalCategory::C4_1.for_level(2), CanonicalCategory::C4);
        assert_eq!(CanonicalCategory::C5_1_2_1.for_level(1), CanonicalCategory::C5_1);
        assert_eq!(CanonicalCategory::Undefined.for_level(1), CanonicalCategory::Undefined);
    }

    #[test]
    fn test_every_parent_is_a_canonical_prefix() {
        for category in CanonicalCategory::ALL {
            if let Some(parent) = category.parent() {
                assert!(category.code().starts_with(parent.code()));
            }
        }
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&CanonicalCategory::C2_3).unwrap();
        assert_eq!(json, "\"2.3\"");
        let back: CanonicalCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CanonicalCategory::C2_3);
        let undefined: CanonicalCategory = serde_json::from_str("\"\"").unwrap();
        assert_eq!(undefined, CanonicalCategory::Undefined);
    }

    #[test]
    fn test_parse_taxonomy() {
        assert_eq!(Taxonomy::parse("din-276"), Some(Taxonomy::Din276));
        assert_eq!(Taxonomy::parse("RICS v2"), Some(Taxonomy::RicsV2));
        assert_eq!(Taxonomy::parse("nope"), None);
    }
}
