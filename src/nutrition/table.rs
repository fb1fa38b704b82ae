use csv::ReaderBuilder;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{ArchiveError, Result};
use crate::nutrition::data::NUTRITION_ROWS;

const ITEM_COL: &str = "item";
const PER_COL: &str = "per";
const CAL_COL: &str = "cal";
const FAT_COL: &str = "fat";
const PROTEIN_COL: &str = "protein";
const CARBS_COL: &str = "carbs";

/// Macros for one reference serving of an ingredient (`per`, e.g. `"1 cup"`).
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionFacts {
    pub per: String,
    pub calories: f64,
    pub fat_g: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
}

impl NutritionFacts {
    pub fn new(per: &str, calories: f64, fat_g: f64, protein_g: f64, carbs_g: f64) -> Self {
        Self {
            per: per.to_string(),
            calories,
            fat_g,
            protein_g,
            carbs_g,
        }
    }
}

/// Ingredient name -> nutrition facts, in insertion order.
///
/// Keys are lowercase. Order matters only as the tie-break between keys of
/// equal length during substring matching.
#[derive(Debug, Clone, Default)]
pub struct NutritionTable {
    entries: Vec<(String, NutritionFacts)>,
    index: HashMap<String, usize>,
}

impl NutritionTable {
    pub fn builtin() -> Self {
        NUTRITION_ROWS
            .iter()
            .map(|&(item, per, cal, fat, protein, carbs)| {
                (item, NutritionFacts::new(per, cal, fat, protein, carbs))
            })
            .collect()
    }

    /// Adds or replaces an entry. A replaced key keeps its original position.
    pub fn insert(&mut self, item: &str, facts: NutritionFacts) {
        let key = item.trim().to_lowercase();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = facts,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, facts));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&NutritionFacts> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads a replacement table from a CSV with columns
    /// `item,per,cal,fat,protein,carbs`.
    ///
    /// Rows with an empty item are skipped; unparseable numbers count as 0.
    pub fn from_csv(csv_path: &Path) -> Result<Self> {
        if !csv_path.exists() {
            return Err(ArchiveError::TableNotFound(csv_path.to_path_buf()));
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(csv_path)?;
        let headers = rdr.headers()?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or(ArchiveError::MissingColumn(name))
        };

        let item_idx = column(ITEM_COL)?;
        let per_idx = column(PER_COL)?;
        let cal_idx = column(CAL_COL)?;
        let fat_idx = column(FAT_COL)?;
        let protein_idx = column(PROTEIN_COL)?;
        let carbs_idx = column(CARBS_COL)?;

        let mut table = NutritionTable::default();
        for result in rdr.records() {
            let record = result?;
            let item = record.get(item_idx).unwrap_or_default();
            if item.is_empty() {
                continue;
            }
            let number = |idx: usize| {
                record
                    .get(idx)
                    .and_then(|s| s.parse::<f64>().ok())
                    .unwrap_or(0.0)
            };
            table.insert(
                item,
                NutritionFacts::new(
                    record.get(per_idx).unwrap_or_default(),
                    number(cal_idx),
                    number(fat_idx),
                    number(protein_idx),
                    number(carbs_idx),
                ),
            );
        }

        if table.is_empty() {
            return Err(ArchiveError::EmptyTable(csv_path.to_path_buf()));
        }
        Ok(table)
    }
}

impl<'a> FromIterator<(&'a str, NutritionFacts)> for NutritionTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, NutritionFacts)>>(iter: I) -> Self {
        let mut table = NutritionTable::default();
        for (item, facts) in iter {
            table.insert(item, facts);
        }
        table
    }
}
