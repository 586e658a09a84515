//! Per-indicator export profiles.
//!
//! Every supported indicator is described by a static [`IndicatorProfile`]:
//! which taxonomy its category column uses, how stages are remapped, which
//! columns hold which metric, and which extra columns are kept. Population
//! walks this table instead of carrying one code path per indicator.

use crate::category::Taxonomy;
use crate::models::{ExtrasFormat, Indicator, MetricKind};
use crate::transform::aggregate::Remap;

// =============================================================================
// Common columns
// =============================================================================

pub const RESOURCE: &str = "Resource";
pub const COMMENT: &str = "Comment";
pub const QUANTITY: &str = "User input";
pub const SECTION: &str = "Section";
pub const UNIT: &str = "Unit";
pub const QUESTION: &str = "Question";
pub const SERVICE_LIFE: &str = "Service life";
pub const RESOURCE_TYPE: &str = "Resource type";
pub const DATASOURCE: &str = "Datasource";
pub const YEARS_OF_REPLACEMENT: &str = "Years of replacement";
pub const MASS_OF_RAW_MATERIALS: &str = "Mass of raw materials kg";
pub const NAME: &str = "Name";

const MEGA: f64 = 1_000_000.0;
const KWH_TO_J: f64 = 3_600_000.0;
const KM_TO_M: f64 = 1000.0;
const L_TO_M3: f64 = 0.001;
const MM_TO_M: f64 = 0.001;
const IN_TO_M: f64 = 0.0254;

// =============================================================================
// Profile types
// =============================================================================

/// A metric read from one export column.
#[derive(Debug, Clone, Copy)]
pub struct MetricColumn {
    pub kind: MetricKind,
    pub column: &'static str,
    /// Unit conversion applied to every cell.
    pub scale: f64,
    /// Values are per m² per year and need the area factor.
    pub per_area: bool,
}

const fn metric(kind: MetricKind, column: &'static str) -> MetricColumn {
    MetricColumn { kind, column, scale: 1.0, per_area: false }
}

const fn metric_scaled(kind: MetricKind, column: &'static str, scale: f64) -> MetricColumn {
    MetricColumn { kind, column, scale, per_area: false }
}

const fn metric_per_area(kind: MetricKind, column: &'static str, scale: f64) -> MetricColumn {
    MetricColumn { kind, column, scale, per_area: true }
}

/// Metric computed from two already built metrics.
#[derive(Debug, Clone, Copy)]
pub struct DerivedMetric {
    pub kind: MetricKind,
    pub minuend: MetricKind,
    pub subtrahend: MetricKind,
}

/// How an extras field is read.
#[derive(Debug, Clone, Copy)]
pub enum ExtraKind {
    Text,
    Number { scale: f64, per_area: bool },
}

/// An extras field and the export column it comes from.
#[derive(Debug, Clone, Copy)]
pub struct ExtraColumn {
    pub field: &'static str,
    pub column: &'static str,
    pub kind: ExtraKind,
}

const fn text(field: &'static str, column: &'static str) -> ExtraColumn {
    ExtraColumn { field, column, kind: ExtraKind::Text }
}

const fn number(field: &'static str, column: &'static str, scale: f64) -> ExtraColumn {
    ExtraColumn { field, column, kind: ExtraKind::Number { scale, per_area: false } }
}

const fn number_per_area(field: &'static str, column: &'static str, scale: f64) -> ExtraColumn {
    ExtraColumn { field, column, kind: ExtraKind::Number { scale, per_area: true } }
}

/// Everything population needs to know about one export format.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorProfile {
    pub indicator: Indicator,
    pub taxonomy: Taxonomy,
    pub category_column: &'static str,
    /// Drop rows whose category does not start with a digit 1-9.
    pub require_category_code: bool,
    pub remap: Remap<'static>,
    pub metrics: &'static [MetricColumn],
    pub derived: Option<DerivedMetric>,
    pub extras_format: ExtrasFormat,
    pub extras: &'static [ExtraColumn],
    /// Thickness column and its conversion to metres.
    pub thickness: Option<(&'static str, f64)>,
    pub has_name: bool,
    /// Values are per m² per year: floor area and life expectancy are needed.
    pub needs_additional_inputs: bool,
}

impl IndicatorProfile {
    /// Whether any metric or extra of this profile needs the area factor.
    pub fn uses_area_factor(&self) -> bool {
        self.metrics.iter().any(|m| m.per_area)
            || self
                .extras
                .iter()
                .any(|e| matches!(e.kind, ExtraKind::Number { per_area: true, .. }))
    }
}

// =============================================================================
// Remaps
// =============================================================================

const B4_FROM_B4_B5: Remap<'static> = &[("B4", &["B4-B5"])];
const B4_WITH_WASTE: Remap<'static> = &[("B4", &["B4", "B4-Abfall"])];
const B6_FROM_B6A_B6B: Remap<'static> = &[("B6", &["B6a", "B6b"])];

// =============================================================================
// Metric columns
// =============================================================================

const GWP: &str = "Global warming kg CO₂e";
const BIOGENIC_STORAGE: &str = "Biogenic carbon storage kg CO₂e bio";
const ACIDIFICATION: &str = "Acidification kg SO₂e";
const EUTROPHICATION_CML: &str = "Eutrophication kg PO₄e";
const OZONE_DEPLETION: &str = "Ozone Depletion kg CFC11e";
const POCP_CML: &str = "Formation of ozone of lower atmosphere kg Ethenee";
const TOTAL_CO2: &str = "TOTAL kg CO₂e";
const GWP_TOTAL_A2: &str = "Global Warming Potential total kg CO₂e";
const GWP_BIOGENIC_A2: &str = "Global Warming Potential biogenic kg CO₂e";
const GWP_FOSSIL_A2: &str = "Global Warming Potential fossil kg CO₂e";
const GWP_LULUC_A2: &str = "Global Warming Potential, LULUC kg CO₂e";

const BREEAM_METRICS: &[MetricColumn] = &[
    metric(MetricKind::ClimateChangeTotalNoBiogenic, GWP),
    metric(MetricKind::ClimateChangeBiogenic, BIOGENIC_STORAGE),
    metric(MetricKind::Acidification, ACIDIFICATION),
    metric(MetricKind::EutrophicationCML, EUTROPHICATION_CML),
    metric(MetricKind::OzoneDepletion, OZONE_DEPLETION),
    metric(MetricKind::PhotochemicalOzoneCreationCML, POCP_CML),
];

const DGNB_METRICS: &[MetricColumn] = &[
    metric_per_area(MetricKind::ClimateChangeTotalNoBiogenic, "Global warming kg CO₂e/m²/a", 1.0),
    metric_per_area(MetricKind::Acidification, "Acidification kg SO₂e/m²/a", 1.0),
    metric_per_area(MetricKind::EutrophicationCML, "Eutrophication kg PO₄e/m²/a", 1.0),
    metric_per_area(MetricKind::OzoneDepletion, "Ozone Depletion kg CFC11e/m²/a", 1.0),
    metric_per_area(
        MetricKind::PhotochemicalOzoneCreationCML,
        "Formation of ozone of lower atmosphere kg Ethenee/m²/a",
        1.0,
    ),
    metric_per_area(
        MetricKind::AbioticDepletionFossilResources,
        "Abiotic depletion potential (ADP-fossil fuels) for fossil resources MJ/m²/a",
        MEGA,
    ),
    metric_per_area(
        MetricKind::AbioticDepletionMineralsAndMetals,
        "Abiotic depletion potential (ADP-elements) for non fossil resources kg Sbe/m²/a",
        1.0,
    ),
];

const LEED_INTL_METRICS: &[MetricColumn] = BREEAM_METRICS;

const LEED_US_METRICS: &[MetricColumn] = &[
    metric(MetricKind::ClimateChangeTotalNoBiogenic, GWP),
    metric(MetricKind::ClimateChangeBiogenic, BIOGENIC_STORAGE),
    metric(MetricKind::Acidification, ACIDIFICATION),
    metric(MetricKind::EutrophicationTRACI, "Eutrophication kg Ne"),
    metric(MetricKind::OzoneDepletion, OZONE_DEPLETION),
    metric(MetricKind::PhotochemicalOzoneCreationTRACI, "Formation of tropospheric ozone kg O3e"),
];

const CARBON_A1_METRICS: &[MetricColumn] = &[
    metric(MetricKind::ClimateChangeTotalNoBiogenic, TOTAL_CO2),
    metric(MetricKind::ClimateChangeBiogenic, BIOGENIC_STORAGE),
];

const WLCA_METRICS: &[MetricColumn] = CARBON_A1_METRICS;

const LEVELS_A1_METRICS: &[MetricColumn] = &[
    metric(MetricKind::ClimateChangeTotalNoBiogenic, TOTAL_CO2),
    metric(MetricKind::ClimateChangeBiogenic, BIOGENIC_STORAGE),
    metric(MetricKind::OzoneDepletion, OZONE_DEPLETION),
    metric(MetricKind::Acidification, ACIDIFICATION),
    metric(MetricKind::EutrophicationCML, EUTROPHICATION_CML),
    metric(MetricKind::PhotochemicalOzoneCreationCML, POCP_CML),
    metric(
        MetricKind::AbioticDepletionMineralsAndMetals,
        "Abiotic depletion potential (ADP-elements) for non fossil resources kg Sbe",
    ),
    metric_scaled(
        MetricKind::AbioticDepletionFossilResources,
        "Abiotic depletion potential (ADP-fossil fuels) for fossil resources MJ",
        MEGA,
    ),
];

const LEVELS_A2_METRICS: &[MetricColumn] = &[
    metric(MetricKind::ClimateChangeTotal, GWP_TOTAL_A2),
    metric(MetricKind::ClimateChangeBiogenic, GWP_BIOGENIC_A2),
    metric(MetricKind::ClimateChangeFossil, GWP_FOSSIL_A2),
    metric(MetricKind::ClimateChangeLandUse, GWP_LULUC_A2),
    metric(
        MetricKind::OzoneDepletion,
        "Depletion potential of the stratospheric ozone layer kg CFC11e",
    ),
    metric(
        MetricKind::Acidification,
        "Acidification potential, Accumulated Exceedance mol H+ eq.",
    ),
    metric(MetricKind::EutrophicationAquaticFreshwater, "Eutrophication fresh water kg P eq."),
    metric(MetricKind::EutrophicationAquaticMarine, "Eutrophication aquatic marine kg N eq."),
    metric(MetricKind::EutrophicationTerrestrial, "Eutrophication terrestrial mol N eq."),
    metric(
        MetricKind::PhotochemicalOzoneCreation,
        "Formation potential of tropospheric ozone kg NMVOC eq.",
    ),
    metric(
        MetricKind::AbioticDepletionMineralsAndMetals,
        "Abiotic depletion potential (ADP-elements) for non fossil resources (+A2) kg Sbe",
    ),
    metric_scaled(
        MetricKind::AbioticDepletionFossilResources,
        "Abiotic depletion potential (ADP-fossil fuels) for fossil resources (+A2) MJ",
        MEGA,
    ),
];

const CARBON_A1A2_METRICS: &[MetricColumn] = &[
    metric(MetricKind::ClimateChangeTotal, GWP_TOTAL_A2),
    metric(MetricKind::ClimateChangeBiogenic, GWP_BIOGENIC_A2),
    metric(MetricKind::ClimateChangeLandUse, GWP_LULUC_A2),
];

const TOTAL_NO_BIOGENIC: DerivedMetric = DerivedMetric {
    kind: MetricKind::ClimateChangeTotalNoBiogenic,
    minuend: MetricKind::ClimateChangeTotal,
    subtrahend: MetricKind::ClimateChangeBiogenic,
};

// =============================================================================
// Extras columns
// =============================================================================

const BREEAM_EXTRAS: &[ExtraColumn] = &[
    text("Construction", "Construction"),
    text("TransformationProcess", "Transformation process"),
    text("UniClass", "uniClass"),
    text("EOLProcess", "EOL Process"),
    number("NonHazardousWasteDisposed", "Non hazardous waste disposed kg", 1.0),
    number("Energy", "Energy kWh", KWH_TO_J),
    number("WaterConsumption", "Water consumption m³", 1.0),
    number("DistanceTraveled", "Distance traveled km", KM_TO_M),
    number("FuelConsumption", "Fuel consumption litres", L_TO_M3),
];

const DGNB_EXTRAS: &[ExtraColumn] = &[
    number_per_area(
        "NonRenewablePrimaryEnergyUse",
        "Total use of non renewable primary energy MJ/m²/a",
        MEGA,
    ),
    number_per_area(
        "RenewablePrimaryEnergyUse",
        "Total use of renewable primary energy MJ/m²/a",
        MEGA,
    ),
    number_per_area("PrimaryEnergyUse", "Total use of primary energy MJ/m²/a", MEGA),
    number_per_area("NetFreshWaterUse", "Use of net fresh water m³/m²/a", 1.0),
];

const LEED_US_EXTRAS: &[ExtraColumn] = &[
    text("Construction", "Construction"),
    text("TransformationProcess", "Transformation process"),
    text("UniClass", "uniClass"),
    number("NonRenewableEnergyDepletion", "Depletion of nonrenewable energy MJ", MEGA),
    text("CsiMasterFormat", "csiMasterformat"),
    text("Class", "class"),
    text("ImportedLabel", "Imported label"),
];

const LEED_INTL_EXTRAS: &[ExtraColumn] = &[
    text("Construction", "Construction"),
    text("TransformationProcess", "Transformation process"),
    text("UniClass", "uniClass"),
    number("NonRenewableEnergyDepletion", "Depletion of nonrenewable energy MJ", MEGA),
    text("Classification", "Classification"),
    text("CsiMasterFormat", "csiMasterformat"),
    text("Class", "class"),
    text("ImportedLabel", "Imported label"),
];

const WLCA_EXTRAS: &[ExtraColumn] = &[
    text("Construction", "Construction"),
    text("TransformationProcess", "Transformation process"),
    text("UniClass", "uniClass"),
    number("EstimatedReusableMaterials", "Estimated reusable materials kg", 1.0),
    number("EstimatedRecyclableMaterials", "Estimated recyclable materials kg", 1.0),
    text("EOLProcess", "EOL Process"),
];

const LEVELS_CARBON_EXTRAS: &[ExtraColumn] = &[
    text("Construction", "Construction"),
    text("TransformationProcess", "Transformation process"),
    text("UniClass", "uniClass"),
    text("CsiMasterFormat", "csiMasterformat"),
    text("Class", "class"),
    text("ImportedLabel", "Imported label"),
];

const LEVELS_A2_EXTRAS: &[ExtraColumn] = &[
    text("Construction", "Construction"),
    text("TransformationProcess", "Transformation process"),
    text("UniClass", "uniClass"),
    text("CsiMasterFormat", "csiMasterformat"),
    text("Class", "class"),
    text("ImportedLabel", "Imported label"),
    number("WaterConsumption", "Water use m³ deprived", 1.0),
];

const LEVELS_A1_EXTRAS: &[ExtraColumn] = &[
    text("Construction", "Construction"),
    text("TransformationProcess", "Transformation process"),
    text("UniClass", "uniClass"),
    text("CsiMasterFormat", "csiMasterformat"),
    text("Class", "class"),
    text("ImportedLabel", "Imported label"),
    number(
        "RenewablePrimaryEnergyUseAsRawmaterials",
        "Use of renewable primary energy resources as raw materials MJ",
        MEGA,
    ),
    number(
        "PrimaryEnergyUseExRawMaterials",
        "Total use of primary energy ex. raw materials MJ",
        MEGA,
    ),
    number("RenewablePrimaryEnergyUse", "Total use of renewable primary energy MJ", MEGA),
    number(
        "NonRenewablePrimaryEnergyUse",
        "Total use of non renewable primary energy MJ",
        MEGA,
    ),
    number("NetFreshWaterUse", "Use of net fresh water m³", 1.0),
    number("Energy", "Energy kWh", KWH_TO_J),
    number("WaterConsumption", "Water consumption m³", 1.0),
    number("DistanceTraveled", "Distance traveled km", KM_TO_M),
    number("FuelConsumption", "Fuel consumption litres", L_TO_M3),
];

// =============================================================================
// Profiles
// =============================================================================

const fn levels(
    indicator: Indicator,
    metrics: &'static [MetricColumn],
    derived: Option<DerivedMetric>,
    extras: &'static [ExtraColumn],
) -> IndicatorProfile {
    IndicatorProfile {
        indicator,
        taxonomy: Taxonomy::LevelsBuildingParts,
        category_column: "Building Parts",
        require_category_code: true,
        remap: B4_FROM_B4_B5,
        metrics,
        derived,
        extras_format: ExtrasFormat::Levels,
        extras,
        thickness: Some(("Thickness mm", MM_TO_M)),
        has_name: true,
        needs_additional_inputs: false,
    }
}

pub static PROFILES: [IndicatorProfile; 10] = [
    IndicatorProfile {
        indicator: Indicator::WholeLifeCarbonAssessment,
        taxonomy: Taxonomy::RicsV1,
        category_column: "RICS category",
        require_category_code: false,
        remap: B6_FROM_B6A_B6B,
        metrics: WLCA_METRICS,
        derived: None,
        extras_format: ExtrasFormat::Wlca,
        extras: WLCA_EXTRAS,
        thickness: None,
        has_name: false,
        needs_additional_inputs: false,
    },
    IndicatorProfile {
        indicator: Indicator::BREEAM,
        taxonomy: Taxonomy::RicsV1,
        category_column: "RICS category",
        require_category_code: true,
        remap: B4_FROM_B4_B5,
        metrics: BREEAM_METRICS,
        derived: None,
        extras_format: ExtrasFormat::Breeam,
        extras: BREEAM_EXTRAS,
        thickness: None,
        has_name: false,
        needs_additional_inputs: false,
    },
    IndicatorProfile {
        indicator: Indicator::DGNB,
        taxonomy: Taxonomy::Din276,
        category_column: "KG DIN 276",
        require_category_code: true,
        remap: B4_WITH_WASTE,
        metrics: DGNB_METRICS,
        derived: None,
        extras_format: ExtrasFormat::Dgnb,
        extras: DGNB_EXTRAS,
        thickness: None,
        has_name: false,
        needs_additional_inputs: true,
    },
    IndicatorProfile {
        indicator: Indicator::LEED_Intl,
        taxonomy: Taxonomy::OmniClass,
        category_column: "Omniclass",
        require_category_code: true,
        remap: B4_FROM_B4_B5,
        metrics: LEED_INTL_METRICS,
        derived: None,
        extras_format: ExtrasFormat::LeedIntl,
        extras: LEED_INTL_EXTRAS,
        thickness: Some(("Thickness mm", MM_TO_M)),
        has_name: true,
        needs_additional_inputs: false,
    },
    IndicatorProfile {
        indicator: Indicator::LEED_US,
        taxonomy: Taxonomy::OmniClass,
        category_column: "Omniclass",
        require_category_code: true,
        remap: B4_FROM_B4_B5,
        metrics: LEED_US_METRICS,
        derived: None,
        extras_format: ExtrasFormat::LeedUs,
        extras: LEED_US_EXTRAS,
        thickness: Some(("Thickness in", IN_TO_M)),
        has_name: true,
        needs_additional_inputs: false,
    },
    levels(
        Indicator::Levels_Assessment_A1,
        LEVELS_A1_METRICS,
        None,
        LEVELS_A1_EXTRAS,
    ),
    levels(
        Indicator::Levels_Assessment_A2,
        LEVELS_A2_METRICS,
        Some(TOTAL_NO_BIOGENIC),
        LEVELS_A2_EXTRAS,
    ),
    levels(
        Indicator::Levels_Assessment_A2_NewVersion,
        LEVELS_A2_METRICS,
        Some(TOTAL_NO_BIOGENIC),
        LEVELS_A2_EXTRAS,
    ),
    levels(
        Indicator::Levels_Carbon_A1,
        CARBON_A1_METRICS,
        None,
        LEVELS_CARBON_EXTRAS,
    ),
    levels(
        Indicator::Levels_Carbon_A1A2,
        CARBON_A1A2_METRICS,
        None,
        LEVELS_CARBON_EXTRAS,
    ),
];

/// Profile of a supported indicator, `None` for `Undefined`.
pub fn profile(indicator: Indicator) -> Option<&'static IndicatorProfile> {
    PROFILES.iter().find(|p| p.indicator == indicator)
}
