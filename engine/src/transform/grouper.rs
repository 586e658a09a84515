//! Group flat export rows into one section map per report entry.
//!
//! An export has one row per material and life-cycle section. Rows sharing
//! the same (Resource, Category, Comment, Quantity) key describe one entry
//! and are pivoted into a `Section → row` map.
//!
//! # Architecture
//!
//! ```text
//! Export rows (flat)                      →  Section groups
//! ┌───────────────────────────────────┐     ┌──────────────────────────┐
//! │ Concrete, 2.1, 12 │ A1-A3 │ 100   │     │ Concrete, 2.1, 12        │
//! │ Concrete, 2.1, 12 │ A4    │ 3.5   │  →  │ A1-A3 → row, A4 → row    │
//! │ Steel,    2.1, 4  │ A1-A3 │ 80    │     ├──────────────────────────┤
//! └───────────────────────────────────┘     │ Steel, 2.1, 4            │
//!                                           │ A1-A3 → row              │
//!                                           └──────────────────────────┘
//! ```
//!
//! When a key group holds several rows for the same section, the n-th row of
//! that section goes into the n-th section group and a
//! [`PopulateError::DuplicateSection`] warning is reported.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PopulateError;
use crate::models::RawRow;

/// Category cells of real entries start with a non-zero digit. Other rows
/// (totals, headings) are administrative and skipped.
static CATEGORY_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9]").expect("Invalid embedded category pattern"));

/// Column names used for grouping.
#[derive(Debug, Clone, Copy)]
pub struct GroupColumns<'a> {
    pub resource: &'a str,
    pub category: &'a str,
    pub comment: &'a str,
    pub quantity: &'a str,
    pub section: &'a str,
}

/// Rows of one entry, keyed by section label in order of appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionGroup {
    sections: Vec<(String, RawRow)>,
}

impl SectionGroup {
    /// First row of the group. Entry-level columns are read from it.
    pub fn first(&self) -> Option<&RawRow> {
        self.sections.first().map(|(_, row)| row)
    }

    pub fn get(&self, section: &str) -> Option<&RawRow> {
        self.sections
            .iter()
            .find(|(label, _)| label == section)
            .map(|(_, row)| row)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawRow)> {
        self.sections.iter().map(|(label, row)| (label.as_str(), row))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn push(&mut self, section: String, row: RawRow) {
        self.sections.push((section, row));
    }
}

impl FromIterator<(String, RawRow)> for SectionGroup {
    fn from_iter<I: IntoIterator<Item = (String, RawRow)>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().collect(),
        }
    }
}

/// Output of [`group_rows`].
#[derive(Debug, Default)]
pub struct Grouping {
    pub groups: Vec<SectionGroup>,
    /// One `DuplicateSection` per (key group, section) seen more than once.
    pub warnings: Vec<PopulateError>,
}

/// Group export rows into section groups.
///
/// Rows with a blank resource are dropped, and so are rows whose category
/// does not start with a digit 1-9 when `require_category_code` is set.
/// Groups come out in order of first appearance.
pub fn group_rows(rows: Vec<RawRow>, columns: &GroupColumns<'_>, require_category_code: bool) -> Grouping {
    let mut index: HashMap<(String, String, String, String), usize> = HashMap::new();
    let mut builders: Vec<KeyGroupBuilder> = Vec::new();

    for row in rows {
        if row.text(columns.resource).trim().is_empty() {
            continue;
        }
        if require_category_code && !CATEGORY_CODE.is_match(row.text(columns.category)) {
            continue;
        }

        let key = (
            row.text(columns.resource).to_string(),
            row.text(columns.category).to_string(),
            row.text(columns.comment).to_string(),
            row.text(columns.quantity).to_string(),
        );
        let slot = *index.entry(key).or_insert_with(|| {
            builders.push(KeyGroupBuilder::new(row.text(columns.resource)));
            builders.len() - 1
        });
        builders[slot].add_row(row, columns.section);
    }

    let mut grouping = Grouping::default();
    for builder in builders {
        let (groups, warnings) = builder.build();
        grouping.groups.extend(groups);
        grouping.warnings.extend(warnings);
    }
    grouping
}

/// Accumulates the rows of one key group.
struct KeyGroupBuilder {
    resource: String,
    rows: Vec<(String, RawRow)>,
}

impl KeyGroupBuilder {
    fn new(resource: &str) -> Self {
        Self {
            resource: resource.to_string(),
            rows: Vec::new(),
        }
    }

    fn add_row(&mut self, row: RawRow, section_column: &str) {
        let section = row.text(section_column).trim().to_string();
        self.rows.push((section, row));
    }

    /// Pivot into section groups, pairing repeated sections by order.
    fn build(self) -> (Vec<SectionGroup>, Vec<PopulateError>) {
        let mut groups: Vec<SectionGroup> = Vec::new();
        let mut seen: Vec<(String, usize)> = Vec::new();

        for (section, row) in self.rows {
            let occurrence = match seen.iter_mut().find(|(label, _)| *label == section) {
                Some((_, count)) => {
                    *count += 1;
                    *count - 1
                }
                None => {
                    seen.push((section.clone(), 1));
                    0
                }
            };
            if groups.len() <= occurrence {
                groups.push(SectionGroup::default());
            }
            groups[occurrence].push(section, row);
        }

        let warnings = seen
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(section, count)| PopulateError::DuplicateSection {
                resource: self.resource.clone(),
                section,
                count,
            })
            .collect();

        (groups, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: GroupColumns<'static> = GroupColumns {
        resource: "Resource",
        category: "RICS category",
        comment: "Comment",
        quantity: "User input",
        section: "Section",
    };

    fn row(resource: &str, category: &str, quantity: &str, section: &str, value: &str) -> RawRow {
        RawRow::from_pairs([
            ("Resource", resource),
            ("RICS category", category),
            ("User input", quantity),
            ("Section", section),
            ("Value", value),
        ])
    }

    #[test]
    fn test_groups_by_key_in_first_appearance_order() {
        let rows = vec![
            row("Concrete", "2.1 Frame", "12", "A1-A3", "100"),
            row("Steel", "2.1 Frame", "4", "A1-A3", "80"),
            row("Concrete", "2.1 Frame", "12", "A4", "3.5"),
        ];
        let grouping = group_rows(rows, &COLUMNS, true);

        assert_eq!(grouping.groups.len(), 2);
        assert!(grouping.warnings.is_empty());
        let concrete = &grouping.groups[0];
        assert_eq!(concrete.labels().collect::<Vec<_>>(), vec!["A1-A3", "A4"]);
        assert_eq!(concrete.get("A4").map(|r| r.text("Value")), Some("3.5"));
        assert_eq!(grouping.groups[1].first().map(|r| r.text("Resource")), Some("Steel"));
    }

    #[test]
    fn test_key_includes_quantity() {
        let rows = vec![
            row("Concrete", "2.1", "12", "A1-A3", "1"),
            row("Concrete", "2.1", "13", "A1-A3", "2"),
        ];
        assert_eq!(group_rows(rows, &COLUMNS, true).groups.len(), 2);
    }

    #[test]
    fn test_filters_blank_resource_and_admin_rows() {
        let rows = vec![
            row("", "2.1", "1", "A1-A3", "1"),
            row("   ", "2.1", "1", "A1-A3", "1"),
            row("Total", "Total", "", "A1-A3", "1"),
            row("Foundation", "0.1 Demolition", "1", "A1-A3", "1"),
            row("Glass", "2.6", "1", "A1-A3", "1"),
        ];
        let grouping = group_rows(rows.clone(), &COLUMNS, true);
        assert_eq!(grouping.groups.len(), 1);

        // Without the category filter only blank resources are dropped.
        let grouping = group_rows(rows, &COLUMNS, false);
        assert_eq!(grouping.groups.len(), 3);
    }

    #[test]
    fn test_duplicate_sections_pair_by_order_and_warn() {
        let rows = vec![
            row("Concrete", "2.1", "12", "A1-A3", "1"),
            row("Concrete", "2.1", "12", "A4", "2"),
            row("Concrete", "2.1", "12", "A1-A3", "3"),
        ];
        let grouping = group_rows(rows, &COLUMNS, true);

        assert_eq!(grouping.groups.len(), 2);
        assert_eq!(grouping.groups[0].len(), 2);
        assert_eq!(grouping.groups[1].len(), 1);
        assert_eq!(grouping.groups[1].get("A1-A3").map(|r| r.text("Value")), Some("3"));
        assert_eq!(
            grouping.warnings,
            vec![PopulateError::DuplicateSection {
                resource: "Concrete".into(),
                section: "A1-A3".into(),
                count: 2,
            }]
        );
    }
}
