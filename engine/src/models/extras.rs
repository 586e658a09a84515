//! Format-specific extra columns kept per life-cycle section.
//!
//! Each export format carries a handful of columns that have no place in the
//! normalized model (construction names, energy use, transport distances...).
//! They are kept verbatim, one record per section, in the shape of the
//! format they came from.

use serde::{Deserialize, Serialize};

/// A single extras value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ExtraValue {
    Number(Option<f64>),
    Text(String),
}

impl ExtraValue {
    /// Cell text for tabular output. Missing numbers are blank.
    pub fn to_cell(&self) -> String {
        match self {
            ExtraValue::Text(text) => text.clone(),
            ExtraValue::Number(Some(value)) => value.to_string(),
            ExtraValue::Number(None) => String::new(),
        }
    }
}

macro_rules! extras_record {
    (
        $(#[$meta:meta])*
        $name:ident {
            text: [ $( $text:ident => $text_label:literal ),* $(,)? ],
            number: [ $( $num:ident => $num_label:literal ),* $(,)? ] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
        pub struct $name {
            $( pub $text: String, )*
            $( pub $num: Option<f64>, )*
        }

        impl $name {
            pub fn fields(&self) -> Vec<(&'static str, ExtraValue)> {
                vec![
                    $( ($text_label, ExtraValue::Text(self.$text.clone())), )*
                    $( ($num_label, ExtraValue::Number(self.$num)), )*
                ]
            }

            fn set(&mut self, field: &str, value: ExtraValue) -> bool {
                match (field, value) {
                    $( ($text_label, ExtraValue::Text(text)) => self.$text = text, )*
                    $( ($num_label, ExtraValue::Number(number)) => self.$num = number, )*
                    _ => return false,
                }
                true
            }
        }
    };
}

extras_record! {
    /// BREEAM UK exports.
    BreeamExtras {
        text: [
            construction => "Construction",
            transformation_process => "TransformationProcess",
            uniclass => "UniClass",
            eol_process => "EOLProcess",
        ],
        number: [
            non_hazardous_waste_disposed => "NonHazardousWasteDisposed",
            energy => "Energy",
            water_consumption => "WaterConsumption",
            distance_traveled => "DistanceTraveled",
            fuel_consumption => "FuelConsumption",
        ],
    }
}

extras_record! {
    /// DGNB exports. Values are scaled back from per m² per year.
    DgnbExtras {
        text: [],
        number: [
            non_renewable_primary_energy_use => "NonRenewablePrimaryEnergyUse",
            renewable_primary_energy_use => "RenewablePrimaryEnergyUse",
            primary_energy_use => "PrimaryEnergyUse",
            net_fresh_water_use => "NetFreshWaterUse",
        ],
    }
}

extras_record! {
    /// LEED international (CML) exports.
    LeedIntlExtras {
        text: [
            construction => "Construction",
            transformation_process => "TransformationProcess",
            uniclass => "UniClass",
            classification => "Classification",
            csi_masterformat => "CsiMasterFormat",
            class => "Class",
            imported_label => "ImportedLabel",
        ],
        number: [
            non_renewable_energy_depletion => "NonRenewableEnergyDepletion",
        ],
    }
}

extras_record! {
    /// LEED US (TRACI) exports.
    LeedUsExtras {
        text: [
            construction => "Construction",
            transformation_process => "TransformationProcess",
            uniclass => "UniClass",
            csi_masterformat => "CsiMasterFormat",
            class => "Class",
            imported_label => "ImportedLabel",
        ],
        number: [
            non_renewable_energy_depletion => "NonRenewableEnergyDepletion",
        ],
    }
}

extras_record! {
    /// Level(s) exports, all variants.
    LevelsExtras {
        text: [
            construction => "Construction",
            transformation_process => "TransformationProcess",
            uniclass => "UniClass",
            csi_masterformat => "CsiMasterFormat",
            class => "Class",
            imported_label => "ImportedLabel",
        ],
        number: [
            renewable_primary_energy_use_as_raw_materials => "RenewablePrimaryEnergyUseAsRawmaterials",
            primary_energy_use_ex_raw_materials => "PrimaryEnergyUseExRawMaterials",
            renewable_primary_energy_use => "RenewablePrimaryEnergyUse",
            non_renewable_primary_energy_use => "NonRenewablePrimaryEnergyUse",
            net_fresh_water_use => "NetFreshWaterUse",
            energy => "Energy",
            water_consumption => "WaterConsumption",
            distance_traveled => "DistanceTraveled",
            fuel_consumption => "FuelConsumption",
        ],
    }
}

extras_record! {
    /// Whole life carbon assessment exports.
    WlcaExtras {
        text: [
            construction => "Construction",
            transformation_process => "TransformationProcess",
            uniclass => "UniClass",
            eol_process => "EOLProcess",
        ],
        number: [
            estimated_reusable_materials => "EstimatedReusableMaterials",
            estimated_recyclable_materials => "EstimatedRecyclableMaterials",
        ],
    }
}

/// Extras of one section, tagged with the format they came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "format")]
pub enum OriginalExtras {
    Breeam(BreeamExtras),
    Dgnb(DgnbExtras),
    LeedIntl(LeedIntlExtras),
    LeedUs(LeedUsExtras),
    Levels(LevelsExtras),
    Wlca(WlcaExtras),
}

/// Which extras shape an indicator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtrasFormat {
    Breeam,
    Dgnb,
    LeedIntl,
    LeedUs,
    Levels,
    Wlca,
}

impl ExtrasFormat {
    /// An all-empty record of this shape.
    pub fn empty(&self) -> OriginalExtras {
        match self {
            ExtrasFormat::Breeam => OriginalExtras::Breeam(BreeamExtras::default()),
            ExtrasFormat::Dgnb => OriginalExtras::Dgnb(DgnbExtras::default()),
            ExtrasFormat::LeedIntl => OriginalExtras::LeedIntl(LeedIntlExtras::default()),
            ExtrasFormat::LeedUs => OriginalExtras::LeedUs(LeedUsExtras::default()),
            ExtrasFormat::Levels => OriginalExtras::Levels(LevelsExtras::default()),
            ExtrasFormat::Wlca => OriginalExtras::Wlca(WlcaExtras::default()),
        }
    }
}

impl OriginalExtras {
    /// Field name and value pairs, in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, ExtraValue)> {
        match self {
            OriginalExtras::Breeam(e) => e.fields(),
            OriginalExtras::Dgnb(e) => e.fields(),
            OriginalExtras::LeedIntl(e) => e.fields(),
            OriginalExtras::LeedUs(e) => e.fields(),
            OriginalExtras::Levels(e) => e.fields(),
            OriginalExtras::Wlca(e) => e.fields(),
        }
    }

    /// Set a field from a table cell. Returns `false` when this shape has no
    /// such field.
    pub fn set_from_cell(&mut self, field: &str, cell: &str) -> bool {
        let is_number = self
            .fields()
            .iter()
            .any(|(name, value)| *name == field && matches!(value, ExtraValue::Number(_)));
        let value = if is_number {
            let cell = cell.trim();
            ExtraValue::Number(cell.parse::<f64>().ok().filter(|v| v.is_finite()))
        } else {
            ExtraValue::Text(cell.to_string())
        };
        self.set(field, value)
    }

    /// Set a field. Returns `false` when this shape has no such field or the
    /// value kind does not match.
    pub fn set(&mut self, field: &str, value: ExtraValue) -> bool {
        match self {
            OriginalExtras::Breeam(e) => e.set(field, value),
            OriginalExtras::Dgnb(e) => e.set(field, value),
            OriginalExtras::LeedIntl(e) => e.set(field, value),
            OriginalExtras::LeedUs(e) => e.set(field, value),
            OriginalExtras::Levels(e) => e.set(field, value),
            OriginalExtras::Wlca(e) => e.set(field, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_in_declaration_order() {
        let extras = OriginalExtras::Wlca(WlcaExtras {
            construction: "Wall".into(),
            estimated_reusable_materials: Some(2.0),
            ..Default::default()
        });
        let fields = extras.fields();
        let names: Vec<_> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "Construction",
                "TransformationProcess",
                "UniClass",
                "EOLProcess",
                "EstimatedReusableMaterials",
                "EstimatedRecyclableMaterials"
            ]
        );
        assert_eq!(fields[0].1, ExtraValue::Text("Wall".into()));
        assert_eq!(fields[4].1.to_cell(), "2");
        assert_eq!(fields[5].1.to_cell(), "");
    }

    #[test]
    fn test_set_from_cell() {
        let mut extras = ExtrasFormat::Breeam.empty();
        assert!(extras.set_from_cell("Energy", "3600000"));
        assert!(extras.set_from_cell("UniClass", "Ss_25"));
        assert!(!extras.set_from_cell("Classification", "x"));
        match extras {
            OriginalExtras::Breeam(e) => {
                assert_eq!(e.energy, Some(3_600_000.0));
                assert_eq!(e.uniclass, "Ss_25");
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn test_levels_raw_material_energy_field_name() {
        let mut extras = ExtrasFormat::Levels.empty();
        assert!(extras.set_from_cell("RenewablePrimaryEnergyUseAsRawmaterials", "5"));
        let value = extras
            .fields()
            .into_iter()
            .find(|(name, _)| *name == "RenewablePrimaryEnergyUseAsRawmaterials")
            .map(|(_, v)| v.to_cell());
        assert_eq!(value, Some("5".to_string()));
        assert!(!extras.set_from_cell("RenewablePrimaryEnergyUseAsRawMaterials", "5"));
    }

    #[test]
    fn test_serde_is_tagged() {
        let extras = ExtrasFormat::Dgnb.empty();
        let json = serde_json::to_value(&extras).unwrap();
        assert_eq!(json["format"], "Dgnb");
        let back: OriginalExtras = serde_json::from_value(json).unwrap();
        assert_eq!(back, extras);
    }
}
