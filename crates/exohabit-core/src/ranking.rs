//! Pre-computed habitability ranking table.
//!
//! Loaded once from CSV at startup, then served read-only for the process
//! lifetime. The source table is written pre-sorted by rank ascending;
//! queries preserve that order and never re-sort.

use chrono::{DateTime, Utc};
use exohabit_common::error::{ExohabitError, Result};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// One ranked candidate.
///
/// The CSV comes out of a pandas export: booleans as `True`/`False` and
/// discovery years as floats or empty cells, so deserialization is tolerant
/// of both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: u32,
    pub planet_name: String,
    pub habitability_probability: f64,
    #[serde(deserialize_with = "de_flexible_bool")]
    pub predicted_habitable: bool,
    #[serde(
        rename(deserialize = "discovery_year", serialize = "disc_year"),
        deserialize_with = "de_optional_year",
        default
    )]
    pub disc_year: Option<i32>,
}

fn de_flexible_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(de::Error::custom(format!("invalid boolean value '{other}'"))),
    }
}

fn de_optional_year<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Ok(None),
    };
    raw.trim()
        .parse::<f64>()
        .map(|year| Some(year as i32))
        .map_err(|_| de::Error::custom(format!("invalid discovery year '{raw}'")))
}

/// In-memory ranking table.
#[derive(Debug, Clone)]
pub struct RankingTable {
    entries: Vec<RankingEntry>,
    loaded_at: DateTime<Utc>,
}

impl RankingTable {
    /// Load the table from a CSV file with columns
    /// {rank, planet_name, habitability_probability, predicted_habitable, discovery_year}.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExohabitError::Other(anyhow::anyhow!(
                "ranking file not found: {}",
                path.display()
            )));
        }
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            n_candidates = table.len(),
            "Loaded habitability ranking table"
        );
        Ok(table)
    }

    /// Parse the table from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut entries = Vec::new();
        for row in csv_reader.deserialize() {
            let entry: RankingEntry = row?;
            entries.push(entry);
        }
        Ok(Self { entries, loaded_at: Utc::now() })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Top candidates at or above a probability threshold, in stored rank
    /// order, truncated to `top_n`.
    pub fn rank(&self, top_n: usize, threshold: f64, max_top: usize) -> Result<Vec<RankingEntry>> {
        if top_n < 1 || top_n > max_top {
            return Err(ExohabitError::ParameterRange(format!(
                "top must be between 1 and {max_top}"
            )));
        }
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ExohabitError::ParameterRange(
                "threshold must be between 0.0 and 1.0".into(),
            ));
        }

        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.habitability_probability >= threshold)
            .take(top_n)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
rank,planet_name,habitability_probability,predicted_habitable,discovery_year
1,Kepler-442b,0.91,True,2015.0
2,Proxima Centauri b,0.84,True,2016
3,TRAPPIST-1e,0.79,True,2017.0
4,Kepler-22b,0.41,False,
5,HD 209458 b,0.02,False,1999
";

    fn table() -> RankingTable {
        RankingTable::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
    }

    #[test]
    fn test_pandas_style_cells_parse() {
        let t = table();
        assert_eq!(t.len(), 5);
        let top = t.rank(5, 0.0, 100).unwrap();
        assert_eq!(top[0].planet_name, "Kepler-442b");
        assert!(top[0].predicted_habitable);
        assert_eq!(top[0].disc_year, Some(2015));
        assert_eq!(top[3].disc_year, None);
        assert!(!top[3].predicted_habitable);
    }

    #[test]
    fn test_rank_truncates_in_stored_order() {
        let top = table().rank(2, 0.0, 100).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[1].rank, 2);
    }

    #[test]
    fn test_threshold_filters() {
        let top = table().rank(10, 0.5, 100).unwrap();
        assert_eq!(top.len(), 3);
        assert!(top.iter().all(|e| e.habitability_probability >= 0.5));
        // Rank order survives filtering.
        let ranks: Vec<u32> = top.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_threshold_one_matches_only_certainties() {
        let top = table().rank(10, 1.0, 100).unwrap();
        assert!(top.is_empty());
    }

    #[test]
    fn test_parameter_bounds() {
        let t = table();
        assert!(matches!(t.rank(0, 0.0, 100), Err(ExohabitError::ParameterRange(_))));
        assert!(matches!(t.rank(101, 0.0, 100), Err(ExohabitError::ParameterRange(_))));
        assert!(matches!(t.rank(10, -0.1, 100), Err(ExohabitError::ParameterRange(_))));
        assert!(matches!(t.rank(10, 1.5, 100), Err(ExohabitError::ParameterRange(_))));
        assert!(t.rank(100, 1.0, 100).is_ok());
    }

    #[test]
    fn test_serialized_entry_uses_disc_year() {
        let top = table().rank(1, 0.0, 100).unwrap();
        let json = serde_json::to_value(&top[0]).unwrap();
        assert_eq!(json["disc_year"], 2015);
        assert!(json.get("discovery_year").is_none());
    }

    #[test]
    fn test_garbage_boolean_rejected() {
        let bad = "\
rank,planet_name,habitability_probability,predicted_habitable,discovery_year
1,X,0.5,maybe,2000
";
        assert!(RankingTable::from_reader(bad.as_bytes()).is_err());
    }
}
