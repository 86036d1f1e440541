//! Raw upstream project records: validation and grouping by PIC.
//!
//! Records arrive as loosely-typed JSON from the project-tracking backend.
//! Date fields are strings in mixed formats and any field may be missing.
//! Validation is silent-drop: a record whose dates cannot be parsed, or
//! whose range is inverted, contributes no commitment, but its PIC still
//! appears in the grouping, so a PIC whose every record failed validation
//! shows up as fully available rather than vanishing.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::engine::Commitment;
use crate::parse::parse_date;

/// Sentinel owner name for records without an assigned PIC.
pub const NO_PIC: &str = "(No PIC)";

/// A raw project record as delivered by the upstream data source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(default)]
    pub pic_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl ProjectRecord {
    /// The record's PIC name, falling back to [`NO_PIC`] when absent or blank.
    pub fn pic(&self) -> &str {
        self.pic_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(NO_PIC)
    }

    /// Convert the record into a validated [`Commitment`], or `None` when
    /// either date is unparseable or the range is inverted.
    pub fn commitment(&self) -> Option<Commitment> {
        let start = parse_date(self.start_date.as_deref())?;
        let end = parse_date(self.end_date.as_deref())?;
        if start > end {
            return None;
        }
        Some(Commitment {
            owner: self.pic().to_string(),
            start,
            end,
        })
    }
}

/// Group records by PIC name, validating each record along the way.
///
/// Every record contributes its PIC key even when its dates are unusable.
/// The `BTreeMap` gives ascending case-sensitive owner order, which is the
/// cross-owner output order downstream.
pub fn group_by_pic(records: &[ProjectRecord]) -> BTreeMap<String, Vec<Commitment>> {
    let mut by_pic: BTreeMap<String, Vec<Commitment>> = BTreeMap::new();
    for record in records {
        let group = by_pic.entry(record.pic().to_string()).or_default();
        if let Some(commitment) = record.commitment() {
            group.push(commitment);
        }
    }
    by_pic
}
