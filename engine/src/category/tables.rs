//! Static category tables.
//!
//! The canonical list is the RICS v2 (2023) building-element taxonomy. The
//! source taxonomies map their cleaned codes onto it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! canonical_categories {
    ($( $variant:ident => ($code:literal, $level:literal, $name:literal), )*) => {
        /// A building-element category of the canonical (RICS v2) taxonomy.
        ///
        /// Variants are named after their code (`C2_5_1` is `"2.5.1"`) and
        /// ordered as declared, which is also the roll-up output order.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub enum CanonicalCategory {
            #[default]
            Undefined,
            $( $variant, )*
        }

        impl CanonicalCategory {
            /// Every defined category, in declaration order. `Undefined` is not
            /// part of the list.
            pub const ALL: &'static [CanonicalCategory] = &[ $( CanonicalCategory::$variant, )* ];

            /// Dotted code, `""` for `Undefined`.
            pub fn code(&self) -> &'static str {
                match self {
                    CanonicalCategory::Undefined => "",
                    $( CanonicalCategory::$variant => $code, )*
                }
            }

            /// Level as listed in the taxonomy. Most codes sit at their
            /// dotted depth, a few do not (`"5"` is 0, `"4.1"` is 3).
            pub fn level(&self) -> u8 {
                match self {
                    CanonicalCategory::Undefined => 0,
                    $( CanonicalCategory::$variant => $level, )*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    CanonicalCategory::Undefined => "Undefined",
                    $( CanonicalCategory::$variant => $name, )*
                }
            }
        }
    };
}

canonical_categories! {
    C0_1 => ("0.1", 1, "Treatment, demolition and facilitating works"),
    C0_1_1 => ("0.1.1", 2, "Toxic/contaminated material treatment, Demolition works"),
    C0_1_1_1 => ("0.1.1.1", 3, "Toxic/contaminated material treatment"),
    C0_1_1_2 => ("0.1.1.2", 3, "Demolition works"),
    C0_1_2 => ("0.1.2", 2, "Facilitating works"),
    C0_1_2_1 => ("0.1.2.1", 3, "Temporary supports"),
    C0_1_2_2 => ("0.1.2.2", 3, "Facade retention"),
    C0_1_2_3 => ("0.1.2.3", 3, "Specialist groundworks"),
    C0_1_2_4 => ("0.1.2.4", 3, "Temporary diversion works"),
    C0_1_2_5 => ("0.1.2.5", 3, "Extraordinary site investigations"),
    C0_1_2_6 => ("0.1.2.6", 3, "Site preparation works"),
    C1 => ("1", 1, "Sub-structure"),
    C1_1 => ("1.1", 2, "Foundations and piling"),
    C1_2 => ("1.2", 2, "Basement retaining walls and lowest slab"),
    C1_2_1 => ("1.2.1", 3, "Lowest slab"),
    C1_2_2 => ("1.2.2", 3, "Suspended slabs"),
    C1_2_3 => ("1.2.3", 3, "Basement retaining walls"),
    C2 => ("2", 1, "Superstructure"),
    C2_1 => ("2.1", 2, "Frame"),
    C2_1_1 => ("2.1.1", 3, "Frame (vertical) - columns/ structural walls & braces"),
    C2_1_2 => ("2.1.2", 3, "Frame (Horizontal) - beams, joists & braces"),
    C2_2 => ("2.2", 2, "Upper floors"),
    C2_2_1 => ("2.2.1", 3, "Upper floor and roof - structural slabs"),
    C2_2_2 => ("2.2.2", 3, "Upper floor and roof - non-structural slabs"),
    C2_3 => ("2.3", 2, "Roof"),
    C2_4 => ("2.4", 2, "Stairs, ramps and safety guarding"),
    C2_4_1 => ("2.4.1", 3, "Stairs"),
    C2_4_2 => ("2.4.2", 3, "Ramps"),
    C2_4_3 => ("2.4.3", 3, "Safety and access ladders, chutes, slides and guarding"),
    C2_5 => ("2.5", 2, "External envelope including roof finishes"),
    C2_5_1 => ("2.5.1", 3, "External - opaque envelope"),
    C2_5_2 => ("2.5.2", 3, "External - full height glazing systems"),
    C2_5_3 => ("2.5.3", 3, "External - roof finishes/coverings"),
    C2_5_4 => ("2.5.4", 3, "External - safety systems"),
    C2_6 => ("2.6", 2, "Windows and ext doors"),
    C2_6_1 => ("2.6.1", 3, "Windows - vertical"),
    C2_6_2 => ("2.6.2", 3, "Windows - roof or horizontal"),
    C2_6_3 => ("2.6.3", 3, "External doors"),
    C2_7 => ("2.7", 2, "Internal walls"),
    C2_7_1 => ("2.7.1", 3, "Internal walls - solid"),
    C2_7_2 => ("2.7.2", 3, "Internal walls - non-structural glazed walls, windows and vision panels"),
    C2_8 => ("2.8", 2, "Internal doors"),
    C3 => ("3", 1, "Finishes"),
    C3_1 => ("3.1", 2, "Wall finishes"),
    C3_2 => ("3.2", 2, "Floor finishes"),
    C3_2_1 => ("3.2.1", 3, "Raised access floor or specialist sprung floors"),
    C3_2_2 => ("3.2.2", 3, "Non-structural screed"),
    C3_2_3 => ("3.2.3", 3, "Floor finishes"),
    C3_3 => ("3.3", 2, "Ceiling finishes"),
    C4 => ("4", 1, "FF&E"),
    C4_1 => ("4.1", 3, "General FF&E"),
    C4_2 => ("4.2", 3, "Kitchen equipment"),
    C4_3 => ("4.3", 3, "Special equipment"),
    C4_4 => ("4.4", 3, "Loose FF&E"),
    C4_5 => ("4.5", 3, "IT"),
    C4_6 => ("4.6", 3, "Audio and visual"),
    C5 => ("5", 0, "Services"),
    C5_1 => ("5.1", 1, "Public Health"),
    C5_1_1 => ("5.1.1", 2, "Sanitaryware"),
    C5_1_2 => ("5.1.2", 2, "Cold water systems"),
    C5_1_2_1 => ("5.1.2.1", 3, "Cold water systems"),
    C5_1_2_2 => ("5.1.2.2", 3, "Cold water storage"),
    C5_1_3 => ("5.1.3", 2, "Drainage and rainwater"),
    C5_1_3_1 => ("5.1.3.1", 3, "Surface water/rainwater/foul water drainage"),
    C5_1_3_2 => ("5.1.3.2", 3, "Water reuse systems"),
    C5_2 => ("5.2", 1, "Heating, Ventilation and Cooling (HVAC)"),
    C5_2_1 => ("5.2.1", 2, "Space heating and hot water"),
    C5_2_1_1 => ("5.2.1.1", 3, "Heat & Hot water generation equipment"),
    C5_2_1_2 => ("5.2.1.2", 3, "Heat & hot water distribution, control, ancillaries, emitters, exchangers/terminal units"),
    C5_2_1_3 => ("5.2.1.3", 3, "Heat storage equipment"),
    C5_2_2 => ("5.2.2", 2, "Dedicated cooling installations"),
    C5_2_2_1 => ("5.2.2.1", 3, "Cooling generation equipment"),
    C5_2_2_2 => ("5.2.2.2", 3, "Cooling emitter, exchangers/ terminal units, ancillaries and control, distribution, storage"),
    C5_2_3 => ("5.2.3", 2, "Air movement"),
    C5_2_4 => ("5.2.4", 2, "Ventilation air terminals, ductwork and ancillaries, control dampers, attenuation, fire safety related to ventilation equipment"),
    C5_2_4_1 => ("5.2.4.1", 3, "Air terminals"),
    C5_2_4_2 => ("5.2.4.2", 3, "Ductwork & ancilleries"),
    C5_2_4_3 => ("5.2.4.3", 3, "Control dampers, attenuation and fIre safety related to ventilation equipment"),
    C5_3 => ("5.3", 1, "Electrical installations"),
    C5_3_1 => ("5.3.1", 2, "Lighting"),
    C5_3_1_1 => ("5.3.1.1", 3, "Internal lighting"),
    C5_3_1_2 => ("5.3.1.2", 3, "External lighting (building mounted)"),
    C5_3_1_3 => ("5.3.1.3", 3, "Emergency lighting"),
    C5_3_1_4 => ("5.3.1.4", 3, "Other lighting"),
    C5_3_2 => ("5.3.2", 2, "Electrical services for power, communications, security, IT and fire detection"),
    C5_3_2_1 => ("5.3.2.1", 3, "Electrical power"),
    C5_3_2_2 => ("5.3.2.2", 3, "ELV/ Communications/Security"),
    C5_3_2_3 => ("5.3.2.3", 3, "IT & Data"),
    C5_3_2_4 => ("5.3.2.4", 3, "BMS"),
    C5_3_2_5 => ("5.3.2.5", 3, "Electricity back up generation"),
    C5_3_2_6 => ("5.3.2.6", 3, "Fire detection & alarm"),
    C5_4 => ("5.4", 1, "On site renewable energy generation"),
    C5_4_1 => ("5.4.1", 2, "On site renewable energy generation"),
    C5_4_1_1 => ("5.4.1.1", 3, "Renewable energy - electrical generation onsite and building mounted"),
    C5_4_1_2 => ("5.4.1.2", 3, "Renewable energy - storage onsite"),
    C5_5 => ("5.5", 1, "Systems including Life safety, Fuel installations, Lift and conveyor installations, Services equipment, Disposal installations, Specialist installations, Builders work in connection with services"),
    C5_5_1 => ("5.5.1", 2, "Life safety"),
    C5_5_1_1 => ("5.5.1.1", 3, "Sprinkler system"),
    C5_5_1_2 => ("5.5.1.2", 3, "Fire fighting systems"),
    C5_5_1_3 => ("5.5.1.3", 3, "Lightning protection/earth bonding"),
    C5_5_2 => ("5.5.2", 2, "Fuel installations"),
    C5_5_2_2 => ("5.5.2.2", 3, "Lift, stair lift, lifting platform"),
    C5_5_2_3 => ("5.5.2.3", 3, "Escalators and moving walkways"),
    C5_5_3 => ("5.5.3", 2, "Lift and conveyor installations"),
    C5_5_4 => ("5.5.4", 2, "Specialised and communal waste disposal"),
    C5_5_5 => ("5.5.5", 2, "Specialist installations & maintenance"),
    C5_5_6 => ("5.5.6", 2, "Builders work in connection with services"),
    C6 => ("6", 1, "Pre-fabricated buildings and building units"),
    C7 => ("7", 1, "Works to existing buildings"),
    C7_1 => ("7.1", 3, "Alterations"),
    C7_2 => ("7.2", 3, "Repairs to existing , Cleaning existing surfaces, General Renovation works"),
    C7_3 => ("7.3", 3, "Damp-proof courses/fungus and beetle eradication"),
    C8 => ("8", 1, "External work"),
    C8_1 => ("8.1", 2, "Roads, paths, pavings, surfaces, Fencing, railings, walls, External fixtures"),
    C8_1_1 => ("8.1.1", 3, "Roads, paths, pavings, surfaces"),
    C8_1_2 => ("8.1.2", 3, "Fencing, railings, walls"),
    C8_1_3 => ("8.1.3", 3, "External fixtures"),
    C8_2 => ("8.2", 2, "Soft landscape, planting, irrigation"),
    C8_3 => ("8.3", 2, "External drainage, External services, Minor building works"),
    C8_3_1 => ("8.3.1", 3, "External drainage"),
    C8_3_2 => ("8.3.2", 3, "External services"),
    C8_3_3 => ("8.3.3", 3, "Minor building works, ancillary"),
    C9 => ("9", 1, "Others"),
}

impl CanonicalCategory {
    /// Catch-all for codes no table knows about.
    pub const OTHERS: CanonicalCategory = CanonicalCategory::C9;

    /// `"2.5.1 External - opaque envelope"`.
    pub fn display(&self) -> String {
        match self {
            CanonicalCategory::Undefined => self.name().to_string(),
            _ => format!("{} {}", self.code(), self.name()),
        }
    }

    /// Exact lookup of a canonical code.
    pub fn from_exact_code(code: &str) -> Option<CanonicalCategory> {
        CanonicalCategory::ALL.iter().copied().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for CanonicalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

// Serialized as the dotted code so reports stay readable.
impl Serialize for CanonicalCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for CanonicalCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        let code = code.trim();
        if code.is_empty() {
            return Ok(CanonicalCategory::Undefined);
        }
        CanonicalCategory::from_exact_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown category code '{}'", code)))
    }
}

// =============================================================================
// Source taxonomy tables (cleaned code -> canonical category)
// =============================================================================

use CanonicalCategory::*;

/// RICS v1 (2017) codes.
pub(crate) static RICS_V1: &[(&str, CanonicalCategory)] = &[
    ("1", C1),
    ("1.1.1", C1_1),
    ("1.1.2", C1_1),
    ("1.1.3", C1_2),
    ("1.1.4", C1_1),
    ("1.1.5", C1_2_3),
    ("2", C2),
    ("2.1", C2_1),
    ("2.1.1", C2_1),
    ("2.1.2", C2_1),
    ("2.1.3", C2_1),
    ("2.1.4", C2_1),
    ("2.1.5", C2_1),
    ("2.1.6", C2_1),
    ("2.2", C2_2),
    ("2.2.1", C2_2),
    ("2.2.2", C2_2_1),
    ("2.2.3", C2_5_3),
    ("2.3", C2_3),
    ("2.3.1", C2_3),
    ("2.3.2", C2_5_3),
    ("2.3.3", C2_3),
    ("2.3.4", C2_5_3),
    ("2.3.5", C2_6_2),
    ("2.3.6", C2_5_4),
    ("2.4", C2_4),
    ("2.4.1", C2_4),
    ("2.4.2", C3_2_3),
    ("2.4.3", C2_4),
    ("2.4.4", C2_4_3),
    ("2.5", C2_5),
    ("2.5.1", C2_5_1),
    ("2.5.2", C2_5),
    ("2.5.3", C2_5_1),
    ("2.5.4", C2_5_1),
    ("2.5.5", C2_4_3),
    ("2.5.6", C2_5_4),
    ("2.6", C2_6),
    ("2.6.1", C2_6_1),
    ("2.6.2", C2_6_3),
    ("2.7", C2_7),
    ("2.7.1", C2_7_1),
    ("2.7.2", C2_7_1),
    ("2.7.3", C2_7),
    ("2.7.4", C2_7_1),
    ("2.8", C2_8),
    ("3", C3),
    ("3.1", C3_1),
    ("3.2", C3_2),
    ("3.2.1", C3_2_3),
    ("3.2.2", C3_2_1),
    ("3.3", C3_3),
    ("3.3.1", C3_3),
    ("3.3.2", C3_3),
    ("3.3.3", C3_3),
    ("4", C4),
    ("4.1.1", C4_1),
    ("4.1.2", C4_2),
    ("4.1.3", C4_3),
    ("4.1.4", C4_4),
    ("4.1.5", C4_5),
    ("4.1.6", C4),
    ("4.1.7", C4_1),
    ("4.1.8", C4_1),
    ("5", C5),
    ("5.1", C5_1),
    ("5.1.1", C5_1_1),
    ("5.1.2", C5_1_1),
    ("5.2", C5_5),
    ("5.3", C5_1),
    ("5.3.1", C5_1_3),
    ("5.3.2", C5_1_3),
    ("5.3.3", C5_5_4),
    ("5.4", C5_1),
    ("5.4.1", C5_1_2),
    ("5.4.2", C5_1_2),
    ("5.4.3", C5_2_1),
    ("5.4.4", C5_1_1),
    ("5.4.5", C5_1_3),
    ("5.5", C5_2),
    ("5.6", C5_2),
    ("5.6.1", C5_2_1),
    ("5.6.2", C5_2_1),
    ("5.6.3", C5_2_2),
    ("5.6.4", C5_2_2),
    ("5.6.5", C5_2_1),
    ("5.6.6", C5_2_4),
    ("5.6.7", C5_2_4),
    ("5.6.8", C5_2_4),
    ("5.7", C5_2),
    ("5.7.1", C5_2_3),
    ("5.7.2", C5_2_3),
    ("5.7.3", C5_2_4),
    ("5.8", C5_3),
    ("5.8.1", C5_3_2),
    ("5.8.2", C5_3_2),
    ("5.8.3", C5_3_1),
    ("5.8.4", C5_3_1),
    ("5.8.5", C5_4_1),
    ("5.8.6", C5_3_2),
    ("5.9", C5_5),
    ("5.9.1", C5_5_2),
    ("5.9.2", C5_5_2),
    ("5.10", C5_5),
    ("5.10.1", C5_5_3),
    ("5.10.2", C5_5_3),
    ("5.10.3", C5_5_3),
    ("5.10.4", C5_5_3),
    ("5.10.5", C5_5_3),
    ("5.10.6", C5_5_3),
    ("5.10.7", C5_5_3),
    ("5.10.8", C5_5_3),
    ("5.10.9", C5_5_3),
    ("5.10.10", C5_5_3),
    ("5.11", C5_5),
    ("5.11.1", C5_5_1),
    ("5.11.2", C5_5_1),
    ("5.11.3", C5_5_1),
    ("5.12", C5_3),
    ("5.12.1", C5_3_2),
    ("5.12.2", C5_3_2),
    ("5.12.3", C5_3_2),
    ("5.13", C5_5),
    ("5.13.1", C5_5_5),
    ("5.13.2", C5_5_5),
    ("5.13.3", C5_5_5),
    ("5.13.4", C5_5_5),
    ("5.13.5", C5_5_5),
    ("5.14", C5_5),
    ("6", C6),
    ("6.1", C6),
    ("6.1.1", C6),
    ("6.1.2", C6),
    ("6.1.3", C6),
    ("7", C7),
    ("7.1", C7_1),
    ("7.2", C7_2),
    ("7.3", C7_3),
    ("7.4", C7_2),
    ("7.5", C7_2),
    ("7.6", C7_2),
    ("8", C8),
    ("8.1.1", C8_1),
    ("8.1.2", C8_1),
    ("8.2.1", C8_1),
    ("8.2.2", C8_1),
    ("8.3.1", C8_2),
    ("8.3.2", C8_2),
    ("8.3.3", C8_2),
    ("8.4.1", C8_1),
    ("8.4.2", C8_1),
    ("8.4.3", C8_1),
    ("8.4.4", C8_1),
    ("8.5.1", C8_1),
    ("8.5.2", C8_1),
    ("8.6.1", C8_3),
    ("8.6.2", C8_3),
    ("8.6.3", C8_3),
    ("8.6.4", C8_3),
    ("8.7.1", C8_3),
    ("8.7.2", C8_3),
    ("8.7.3", C8_3),
    ("8.7.4", C8_3),
    ("8.7.5", C8_3),
    ("8.7.6", C8_3),
    ("8.7.7", C8_3),
    ("8.7.8", C8_3),
    ("8.7.9", C8_3),
    ("8.7.10", C8_3),
    ("8.7.11", C8_3),
    ("8.8.1", C8_3),
    ("8.8.2", C8_3),
    ("8.8.3", C8_3),
    ("9", C0_1),
    ("0.1", C0_1_1_1),
    ("0.2", C0_1_1_2),
    ("0.3", C0_1_2_1),
    ("0.4", C0_1_2_3),
    ("0.5", C0_1_2_4),
];

/// DIN 276 cost groups used by DGNB exports. Letter suffixes are part of the key.
pub(crate) static DIN_276: &[(&str, CanonicalCategory)] = &[
    ("310", C0_1_2),
    ("320", C1_1),
    ("330B", C2_6),
    ("330", C2_5),
    ("331", C2_1),
    ("332", C2_5),
    ("333", C2_1_1),
    ("334", C2_6),
    ("335", C2_5_1),
    ("336", C2_5_1),
    ("337", C2_5_1),
    ("338", C2_5_1),
    ("339", C2_5),
    ("340", C2_7),
    ("340B", C2_8),
    ("350", C2_2),
    ("350B", C1_2),
    ("360", C2_3),
    ("361", C2_2_1),
    ("362", C2_6_2),
    ("363", C2_5_3),
    ("364", C2_5_3),
    ("369", C2_5),
    ("370", C4),
    ("390", C0_1),
    ("400", C5_1),
    ("410", C5_1),
    ("420", C5_2_1),
    ("430", C5_2_3),
    ("440", C5_3),
    ("450", C5_3_2),
    ("460", C5_5),
    ("470", C5_5),
    ("480", C5_3),
    ("490", C5_3),
];

/// OmniClass Table 21 codes used by LEED exports.
pub(crate) static OMNICLASS: &[(&str, CanonicalCategory)] = &[
    ("21-01 10 10", C1_1),
    ("21-01 10 20", C1_1),
    ("21-01 20 10", C1_2_3),
    ("21-01 40 10", C1_2_1),
    ("21-01 40 20", C1_2_1),
    ("21-01 40 30", C1_2),
    ("21-01 40 40", C1_2),
    ("21-01 40 90", C1_2),
    ("21-01 60 10", C0_1_2),
    ("21-01 60 20", C0_1_2),
    ("21-01 90 10", C0_1_2),
    ("21-01 90 20", C0_1_2),
    ("21-01 90 30", C0_1_2),
    ("21-01 90 40", C0_1_2),
    ("21-02 10 10", C2_1),
    ("21-02 10 10 10", C2_1),
    ("21-02 10 10 10 01", C2_1_2),
    ("21-02 10 10 10 02", C2_1_1),
    ("21-02 10 10 20", C2_2_1),
    ("21-02 10 10 30", C2_2_2),
    ("21-02 10 10 40", C2_2_2),
    ("21-02 10 10 50", C2_4),
    ("21-02 10 10 90", C2_2_2),
    ("21-02 10 20", C2_3),
    ("21-02 10 20 10", C2_3),
    ("21-02 10 20 20", C2_3),
    ("21-02 10 20 30", C2_3),
    ("21-02 10 20 90", C2_3),
    ("21-02 10 80", C2_4),
    ("21-02 20 10", C2_5_1),
    ("21-02 20 20", C2_6_1),
    ("21-02 20 50", C2_6_3),
    ("21-02 20 70", C2_6),
    ("21-02 20 80", C2_6),
    ("21-02 20 90", C2_5_1),
    ("21-02 30 10", C2_5_3),
    ("21-02 30 20", C2_5),
    ("21-02 30 40", C2_5),
    ("21-02 30 60", C2_6_2),
    ("21-02 30 80", C2_5),
    ("21-03 10 10", C2_7_1),
    ("21-03 10 20", C2_7_2),
    ("21-03 10 30", C2_8),
    ("21-03 10 40", C2_8),
    ("21-03 10 60", C3_2_1),
    ("21-03 10 70", C3_3),
    ("21-03 10 90", C3_1),
    ("21-03 20 10", C3_1),
    ("21-03 20 20", C3_1),
    ("21-03 20 30", C3_2_3),
    ("21-03 20 40", C3_2),
    ("21-03 20 50", C3_3),
    ("21-04 10", C5_5_3),
    ("21-04 20", C5_1),
    ("21-04 20 10", C5_1_1),
    ("21-04 20 20", C5_1_1),
    ("21-04 20 30", C5_1_2_1),
    ("21-04 20 50", C5_1),
    ("21-04 20 60", C5_1_3_1),
    ("21-04 30", C5_2),
    ("21-04 30 10", C5_2),
    ("21-04 30 20", C5_2_1),
    ("21-04 30 30", C5_2_2),
    ("21-04 30 50", C5_2_3),
    ("21-04 30 60", C5_2_4),
    ("21-04 30 70", C5_2),
    ("21-04 40", C5_5_1),
    ("21-04 40 10", C5_5_1),
    ("21-04 40 30", C5_5_1),
    ("21-04 50", C5_3),
    ("21-04 50 10", C5_3_2_1),
    ("21-04 50 20", C5_3_2_1),
    ("21-04 50 30", C5_3_2_1),
    ("21-04 50 40", C5_3_1),
    ("21-04 50 80", C5_3_2_1),
    ("21-04 60", C5_3_2_2),
    ("21-04 60 10", C5_3_2_2),
    ("21-04 60 20", C5_3_2_2),
    ("21-04 60 30", C5_3_2_2),
    ("21-04 60 60", C5_3_2_2),
    ("21-04 60 90", C5_3_2_2),
    ("21-04 70", C5_3_2_2),
    ("21-04 70 10", C5_3_2_2),
    ("21-04 70 30", C5_3_2_2),
    ("21-04 70 50", C5_3_2_2),
    ("21-04 70 70", C5_3_2_2),
    ("21-04 70 90", C5_3_2_2),
    ("21-04 80", C5_3_2_2),
    ("21-05 20 10", C9),
    ("21-05 20 50", C9),
    ("21-07 10 70", C8_2),
    ("21-07 20 10", C8_1_1),
    ("21-07 20 20", C8_1_1),
    ("21-07 20 30", C8_1_1),
    ("21-07 20 40", C8_1_1),
    ("21-07 20 50", C8_2),
    ("21-07 20 60", C8_2),
    ("21-07 20 80", C8_2),
];

/// Level(s) building-part codes.
pub(crate) static LEVELS_BUILDING_PARTS: &[(&str, CanonicalCategory)] = &[
    ("1", C2),
    ("1.1", C1_1),
    ("1.1.1", C1_1),
    ("1.1.2", C1_2_3),
    ("1.1.3", C1_2_3),
    ("1.2", C2_1),
    ("1.2.1", C2_1),
    ("1.2.2", C2_2),
    ("1.2.3", C2_1_1),
    ("1.2.4", C2_2_1),
    ("1.3", C2_7_2),
    ("1.3.1", C1_2_1),
    ("1.3.2", C2_7_2),
    ("1.3.3", C2_4),
    ("1.4", C2_5_1),
    ("1.4.1", C2_5_1),
    ("1.4.2", C2_6),
    ("1.4.3", C2_5_1),
    ("1.5", C2_3),
    ("1.5.1", C2_2_1),
    ("1.5.2", C2_5_1),
    ("1.6", C8_1_1),
    ("1.6.1", C8_1_1),
    ("2", C5),
    ("2.1", C4_4),
    ("2.1.1", C5_1_1),
    ("2.1.2", C4_4),
    ("2.1.3", C3_3),
    ("2.1.4", C3_1),
    ("2.1.5", C3_2),
    ("2.2", C5_3_1),
    ("2.2.1", C5_3_1),
    ("2.2.2", C5_3_2),
    ("2.3", C5),
    ("2.3.1", C5_2_1),
    ("2.3.2", C5_2_2),
    ("2.3.3", C5_3_2),
    ("2.4", C5_2_4),
    ("2.4.1", C5_2_3),
    ("2.4.2", C5_2_4),
    ("2.5", C5_1),
    ("2.5.1", C5_1_2),
    ("2.5.2", C5_2_1),
    ("2.5.3", C5_1),
    ("2.5.4", C5_1_3),
    ("2.6", C5_5_5),
    ("2.6.1", C5_5_3),
    ("2.6.2", C5_5_1),
    ("2.6.3", C5_3_2),
    ("2.6.4", C5_3_2),
    ("3", C8_3),
    ("3.1", C8_3_2),
    ("3.1.1", C8_1_1),
    ("3.1.2", C8_1),
    ("3.2", C8_2),
    ("3.2.1", C8_1_1),
    ("3.2.2", C8_1),
    ("3.2.3", C8_3_1),
];
