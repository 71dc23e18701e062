//! Per-asset failure grouping.
//!
//! Assets appear in the order their identifier is first seen; rows without an
//! asset identifier are left out of every group.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::schema::{ASSET_ID, FAILURE_DESCRIPTION};
use crate::domain::{AppError, RowSlice};

/// Distinct failures of one asset within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFailures {
    #[serde(rename = "Asset ID")]
    pub asset_id: String,
    #[serde(rename = "Failures")]
    pub failures: Vec<String>,
}

/// Whole-table failure tally of one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFailureStat {
    #[serde(rename = "Asset ID")]
    pub asset_id: String,
    pub total_failures: usize,
    pub common_failures: Vec<String>,
}

/// Batch-scope grouping: distinct non-null failures per asset.
pub fn group_failures(rows: RowSlice<'_>) -> Result<Vec<AssetFailures>, AppError> {
    Ok(failures_by_asset(rows)?
        .into_iter()
        .map(|(asset_id, failures)| AssetFailures {
            asset_id: asset_id.to_string(),
            failures: distinct(&failures),
        })
        .collect())
}

/// Whole-table grouping: raw non-null failure count plus the distinct failures.
pub fn asset_failure_stats(rows: RowSlice<'_>) -> Result<Vec<AssetFailureStat>, AppError> {
    Ok(failures_by_asset(rows)?
        .into_iter()
        .map(|(asset_id, failures)| AssetFailureStat {
            asset_id: asset_id.to_string(),
            total_failures: failures.len(),
            common_failures: distinct(&failures),
        })
        .collect())
}

fn failures_by_asset<'a>(rows: RowSlice<'a>) -> Result<Vec<(&'a str, Vec<&'a str>)>, AppError> {
    let asset_index =
        rows.column_index(ASSET_ID).ok_or_else(|| AppError::MissingColumn(ASSET_ID.into()))?;
    let failure_index = rows
        .column_index(FAILURE_DESCRIPTION)
        .ok_or_else(|| AppError::MissingColumn(FAILURE_DESCRIPTION.into()))?;

    let mut groups: Vec<(&'a str, Vec<&'a str>)> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for row in rows.rows() {
        let Some(asset_id) = row[asset_index].as_deref() else {
            continue;
        };
        let position = *positions.entry(asset_id).or_insert_with(|| {
            groups.push((asset_id, Vec::new()));
            groups.len() - 1
        });
        if let Some(failure) = row[failure_index].as_deref() {
            groups[position].1.push(failure);
        }
    }

    Ok(groups)
}

fn distinct(values: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    values.iter().filter(|value| seen.insert(**value)).map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WorkOrderTable;
    use proptest::prelude::*;

    fn table(rows: &[(Option<&str>, Option<&str>)]) -> WorkOrderTable {
        WorkOrderTable::new(
            vec![ASSET_ID.to_string(), FAILURE_DESCRIPTION.to_string()],
            rows.iter()
                .map(|(asset, failure)| {
                    vec![asset.map(str::to_string), failure.map(str::to_string)]
                })
                .collect(),
        )
    }

    #[test]
    fn groups_in_first_seen_order_without_nulls_or_duplicates() {
        let table = table(&[
            (Some("P-200"), Some("Seal leak")),
            (Some("C-100"), Some("Overheating")),
            (Some("P-200"), None),
            (Some("P-200"), Some("Seal leak")),
            (Some("P-200"), Some("Cavitation")),
            (Some("C-100"), None),
        ]);

        let groups = group_failures(table.view()).unwrap();

        assert_eq!(
            groups,
            vec![
                AssetFailures {
                    asset_id: "P-200".into(),
                    failures: vec!["Seal leak".into(), "Cavitation".into()],
                },
                AssetFailures { asset_id: "C-100".into(), failures: vec!["Overheating".into()] },
            ]
        );
    }

    #[test]
    fn asset_with_only_null_failures_has_empty_list() {
        let table = table(&[(Some("V-7"), None)]);
        let groups = group_failures(table.view()).unwrap();
        assert_eq!(groups[0].failures, Vec::<String>::new());

        let stats = asset_failure_stats(table.view()).unwrap();
        assert_eq!(stats[0].total_failures, 0);
    }

    #[test]
    fn stats_count_duplicates_but_list_distinct() {
        let table = table(&[
            (Some("P-200"), Some("Seal leak")),
            (Some("P-200"), Some("Seal leak")),
            (Some("P-200"), None),
            (Some("P-200"), Some("Cavitation")),
        ]);

        let stats = asset_failure_stats(table.view()).unwrap();

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].total_failures, 3);
        assert_eq!(stats[0].common_failures, vec!["Seal leak", "Cavitation"]);
    }

    #[test]
    fn rows_without_asset_are_skipped() {
        let table = table(&[(None, Some("Orphan")), (Some("A"), Some("Leak"))]);
        let stats = asset_failure_stats(table.view()).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].asset_id, "A");
    }

    #[test]
    fn serializes_with_source_column_names() {
        let value = serde_json::to_value(AssetFailures {
            asset_id: "A".into(),
            failures: vec!["Leak".into()],
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({"Asset ID": "A", "Failures": ["Leak"]}));
    }

    #[test]
    fn requires_asset_column() {
        let table = WorkOrderTable::new(vec![FAILURE_DESCRIPTION.to_string()], vec![]);
        assert!(matches!(group_failures(table.view()), Err(AppError::MissingColumn(_))));
    }

    fn arb_rows() -> impl Strategy<Value = Vec<(Option<String>, Option<String>)>> {
        prop::collection::vec(
            (
                prop::option::of(prop::sample::select(vec!["A", "B", "C"]).prop_map(String::from)),
                prop::option::of(
                    prop::sample::select(vec!["leak", "noise", "trip"]).prop_map(String::from),
                ),
            ),
            0..60,
        )
    }

    proptest! {
        #[test]
        fn stats_agree_with_row_counts(rows in arb_rows()) {
            let table = WorkOrderTable::new(
                vec![ASSET_ID.to_string(), FAILURE_DESCRIPTION.to_string()],
                rows.iter().map(|(a, f)| vec![a.clone(), f.clone()]).collect(),
            );
            let stats = asset_failure_stats(table.view()).unwrap();
            let groups = group_failures(table.view()).unwrap();

            for stat in &stats {
                let expected = rows
                    .iter()
                    .filter(|(a, f)| a.as_deref() == Some(stat.asset_id.as_str()) && f.is_some())
                    .count();
                prop_assert_eq!(stat.total_failures, expected);
            }
            for group in &groups {
                let unique: HashSet<_> = group.failures.iter().collect();
                prop_assert_eq!(unique.len(), group.failures.len());
            }
        }
    }
}
