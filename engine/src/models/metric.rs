//! Life-cycle stages, impact kinds and per-stage metric records.

use serde::{Deserialize, Serialize};

/// A value for one life-cycle stage. `None` means "not computed", which is
/// distinct from a reported `Some(0.0)`.
pub type StageValue = Option<f64>;

// =============================================================================
// Stage
// =============================================================================

/// The 20 canonical EN 15804 stage slots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    A1,
    A2,
    A3,
    A1toA3,
    A4,
    A5,
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
    B7,
    B1toB7,
    C1,
    C2,
    C3,
    C4,
    C1toC4,
    D,
}

impl Stage {
    pub const ALL: [Stage; 20] = [
        Stage::A1,
        Stage::A2,
        Stage::A3,
        Stage::A1toA3,
        Stage::A4,
        Stage::A5,
        Stage::B1,
        Stage::B2,
        Stage::B3,
        Stage::B4,
        Stage::B5,
        Stage::B6,
        Stage::B7,
        Stage::B1toB7,
        Stage::C1,
        Stage::C2,
        Stage::C3,
        Stage::C4,
        Stage::C1toC4,
        Stage::D,
    ];

    /// Stages written to the per-metric output tables. The `B1toB7` aggregate
    /// is not part of that layout.
    pub const TABLE_COLUMNS: [Stage; 19] = [
        Stage::A1,
        Stage::A2,
        Stage::A3,
        Stage::A1toA3,
        Stage::A4,
        Stage::A5,
        Stage::B1,
        Stage::B2,
        Stage::B3,
        Stage::B4,
        Stage::B5,
        Stage::B6,
        Stage::B7,
        Stage::C1,
        Stage::C2,
        Stage::C3,
        Stage::C4,
        Stage::C1toC4,
        Stage::D,
    ];

    /// Section label as it appears in LCA exports (`"A1-A3"`).
    pub fn label(&self) -> &'static str {
        match self {
            Stage::A1 => "A1",
            Stage::A2 => "A2",
            Stage::A3 => "A3",
            Stage::A1toA3 => "A1-A3",
            Stage::A4 => "A4",
            Stage::A5 => "A5",
            Stage::B1 => "B1",
            Stage::B2 => "B2",
            Stage::B3 => "B3",
            Stage::B4 => "B4",
            Stage::B5 => "B5",
            Stage::B6 => "B6",
            Stage::B7 => "B7",
            Stage::B1toB7 => "B1-B7",
            Stage::C1 => "C1",
            Stage::C2 => "C2",
            Stage::C3 => "C3",
            Stage::C4 => "C4",
            Stage::C1toC4 => "C1-C4",
            Stage::D => "D",
        }
    }

    /// Column name in the normalized output (`"A1toA3"`).
    pub fn field_name(&self) -> &'static str {
        match self {
            Stage::A1toA3 => "A1toA3",
            Stage::B1toB7 => "B1toB7",
            Stage::C1toC4 => "C1toC4",
            other => other.label(),
        }
    }

    pub fn from_field_name(name: &str) -> Option<Stage> {
        Stage::ALL.into_iter().find(|s| s.field_name() == name)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

// =============================================================================
// Metric Kind
// =============================================================================

/// Closed set of environmental impact kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKind {
    ClimateChangeTotal,
    ClimateChangeTotalNoBiogenic,
    ClimateChangeBiogenic,
    ClimateChangeFossil,
    ClimateChangeLandUse,
    Acidification,
    EutrophicationCML,
    EutrophicationTRACI,
    EutrophicationAquaticFreshwater,
    EutrophicationAquaticMarine,
    EutrophicationTerrestrial,
    OzoneDepletion,
    PhotochemicalOzoneCreation,
    PhotochemicalOzoneCreationCML,
    PhotochemicalOzoneCreationTRACI,
    AbioticDepletionMineralsAndMetals,
    AbioticDepletionFossilResources,
}

impl MetricKind {
    pub const ALL: [MetricKind; 17] = [
        MetricKind::ClimateChangeTotal,
        MetricKind::ClimateChangeTotalNoBiogenic,
        MetricKind::ClimateChangeBiogenic,
        MetricKind::ClimateChangeFossil,
        MetricKind::ClimateChangeLandUse,
        MetricKind::Acidification,
        MetricKind::EutrophicationCML,
        MetricKind::EutrophicationTRACI,
        MetricKind::EutrophicationAquaticFreshwater,
        MetricKind::EutrophicationAquaticMarine,
        MetricKind::EutrophicationTerrestrial,
        MetricKind::OzoneDepletion,
        MetricKind::PhotochemicalOzoneCreation,
        MetricKind::PhotochemicalOzoneCreationCML,
        MetricKind::PhotochemicalOzoneCreationTRACI,
        MetricKind::AbioticDepletionMineralsAndMetals,
        MetricKind::AbioticDepletionFossilResources,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::ClimateChangeTotal => "ClimateChangeTotal",
            MetricKind::ClimateChangeTotalNoBiogenic => "ClimateChangeTotalNoBiogenic",
            MetricKind::ClimateChangeBiogenic => "ClimateChangeBiogenic",
            MetricKind::ClimateChangeFossil => "ClimateChangeFossil",
            MetricKind::ClimateChangeLandUse => "ClimateChangeLandUse",
            MetricKind::Acidification => "Acidification",
            MetricKind::EutrophicationCML => "EutrophicationCML",
            MetricKind::EutrophicationTRACI => "EutrophicationTRACI",
            MetricKind::EutrophicationAquaticFreshwater => "EutrophicationAquaticFreshwater",
            MetricKind::EutrophicationAquaticMarine => "EutrophicationAquaticMarine",
            MetricKind::EutrophicationTerrestrial => "EutrophicationTerrestrial",
            MetricKind::OzoneDepletion => "OzoneDepletion",
            MetricKind::PhotochemicalOzoneCreation => "PhotochemicalOzoneCreation",
            MetricKind::PhotochemicalOzoneCreationCML => "PhotochemicalOzoneCreationCML",
            MetricKind::PhotochemicalOzoneCreationTRACI => "PhotochemicalOzoneCreationTRACI",
            MetricKind::AbioticDepletionMineralsAndMetals => "AbioticDepletionMineralsAndMetals",
            MetricKind::AbioticDepletionFossilResources => "AbioticDepletionFossilResources",
        }
    }

    /// Table name, limited to 31 characters (spreadsheet sheet-name limit).
    pub fn table_name(&self) -> &'static str {
        let name = self.name();
        &name[..name.len().min(31)]
    }

    pub fn from_table_name(name: &str) -> Option<MetricKind> {
        MetricKind::ALL.into_iter().find(|k| k.table_name() == name)
    }
}

// =============================================================================
// Environmental Metric
// =============================================================================

/// One impact kind's values across all 20 stage slots for one entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentalMetric {
    pub kind: MetricKind,
    /// Material the values belong to.
    #[serde(default)]
    pub name: String,
    /// EPD / datasource the values were taken from.
    #[serde(default)]
    pub epd_name: String,
    values: [StageValue; 20],
}

impl EnvironmentalMetric {
    /// A metric with every stage "not computed".
    pub fn empty(kind: MetricKind) -> Self {
        Self {
            kind,
            name: String::new(),
            epd_name: String::new(),
            values: [None; 20],
        }
    }

    /// Build a metric by asking `value_of` for every stage.
    pub fn from_fn(kind: MetricKind, mut value_of: impl FnMut(Stage) -> StageValue) -> Self {
        let mut metric = Self::empty(kind);
        for stage in Stage::ALL {
            metric.values[stage.index()] = value_of(stage).filter(|v| v.is_finite());
        }
        metric
    }

    pub fn with_names(mut self, name: impl Into<String>, epd_name: impl Into<String>) -> Self {
        self.name = name.into();
        self.epd_name = epd_name.into();
        self
    }

    pub fn get(&self, stage: Stage) -> StageValue {
        self.values[stage.index()]
    }

    pub fn values(&self) -> impl Iterator<Item = (Stage, StageValue)> + '_ {
        Stage::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}
