use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use crate::document::RecipeDocument;
use crate::error::Result;
use crate::nutrition::data::DEFAULT_QUANTITIES;
use crate::nutrition::matcher::IngredientMatcher;
use crate::nutrition::table::NutritionTable;
use crate::nutrition::units::UnitNormalizer;
use crate::quantity::{extract_leading_quantity, parse_quantity, quantity_text};
use crate::recipe::{recipe_id, IngredientLine, NutritionEstimate, NutritionStatus, PerServing};

/// Categories that hold tips and reference pages rather than dishes.
pub const NON_FOOD_CATEGORIES: &[&str] = &["tips", "basics", "reference"];

const MAX_MISSING_PARTIAL: usize = 3;
const MAX_MISSING_INSUFFICIENT: usize = 5;
const MAX_ASSUMPTIONS: usize = 5;
const SERVINGS_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// Serving-count guesses by total calories, checked top-down with `>`.
/// A placeholder policy: the boundaries have no deeper meaning.
const CALORIE_SERVING_BUCKETS: &[(f64, u32)] = &[(4000.0, 12), (2000.0, 8), (1000.0, 6)];
const FALLBACK_SERVINGS: u32 = 4;

static FIRST_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("integer pattern is valid"));

/// What happened to one recipe during a batch run.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateOutcome {
    /// Entry in the `recipes` array that is not an object.
    SkippedInvalid,
    SkippedNonFood,
    /// Already carries authoritative `complete` nutrition.
    SkippedComplete,
    Estimated(NutritionEstimate),
}

/// Counts reported at the end of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EstimationSummary {
    pub updated: usize,
    pub insufficient: usize,
    pub skipped_invalid: usize,
    pub skipped_non_food: usize,
    pub skipped_complete: usize,
}

#[derive(Debug, Default)]
struct Totals {
    calories: f64,
    fat_g: f64,
    protein_g: f64,
    carbs_g: f64,
}

/// Best-effort per-serving macros from a recipe's ingredient list.
///
/// Never fails on messy input: unknown ingredients and unreadable
/// quantities become `missing_inputs` or `assumptions` on the result.
pub struct NutritionEstimator<'a> {
    matcher: IngredientMatcher<'a>,
    units: &'a UnitNormalizer,
}

impl<'a> NutritionEstimator<'a> {
    pub fn new(table: &'a NutritionTable, units: &'a UnitNormalizer) -> Self {
        Self {
            matcher: IngredientMatcher::new(table),
            units,
        }
    }

    /// Decides whether a recipe gets estimated and, if so, computes it.
    pub fn plan(&self, recipe: &Value) -> EstimateOutcome {
        if !recipe.is_object() {
            return EstimateOutcome::SkippedInvalid;
        }
        let category = recipe.get("category").and_then(Value::as_str);
        if category.is_some_and(|c| NON_FOOD_CATEGORIES.contains(&c)) {
            return EstimateOutcome::SkippedNonFood;
        }
        if NutritionStatus::of_recipe(recipe) == Some(NutritionStatus::Complete) {
            return EstimateOutcome::SkippedComplete;
        }
        EstimateOutcome::Estimated(self.estimate(recipe))
    }

    /// Plans one recipe and writes the resulting `nutrition` block into it.
    /// Skipped recipes are left exactly as they were.
    pub fn apply(&self, recipe: &mut Value) -> EstimateOutcome {
        let outcome = self.plan(recipe);
        if let EstimateOutcome::Estimated(estimate) = &outcome {
            match serde_json::to_value(estimate) {
                Ok(block) => {
                    if let Some(fields) = recipe.as_object_mut() {
                        fields.insert("nutrition".to_string(), block);
                    }
                }
                Err(e) => warn!("Could not serialize estimate for {}: {}", recipe_id(recipe), e),
            }
        }
        outcome
    }

    /// Runs every recipe in the document. Nothing is persisted here.
    pub fn estimate_document(&self, document: &mut RecipeDocument) -> Result<EstimationSummary> {
        let mut summary = EstimationSummary::default();
        for recipe in document.recipes_mut()? {
            match self.apply(recipe) {
                EstimateOutcome::SkippedInvalid => {
                    warn!("Skipping non-object recipe entry");
                    summary.skipped_invalid += 1;
                }
                EstimateOutcome::SkippedNonFood => summary.skipped_non_food += 1,
                EstimateOutcome::SkippedComplete => summary.skipped_complete += 1,
                EstimateOutcome::Estimated(estimate) => match estimate.status() {
                    NutritionStatus::Partial => summary.updated += 1,
                    _ => summary.insufficient += 1,
                },
            }
        }
        info!(
            updated = summary.updated,
            insufficient = summary.insufficient,
            skipped_invalid = summary.skipped_invalid,
            skipped_non_food = summary.skipped_non_food,
            skipped_complete = summary.skipped_complete,
            "Nutrition estimation pass finished"
        );
        Ok(summary)
    }

    /// Computes an estimate for one recipe, ignoring the skip rules.
    pub fn estimate(&self, recipe: &Value) -> NutritionEstimate {
        let id = recipe_id(recipe);
        let lines: Vec<IngredientLine> = recipe
            .get("ingredients")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(IngredientLine::from_value).collect())
            .unwrap_or_default();

        if lines.is_empty() {
            debug!(recipe = %id, "No ingredients listed");
            return insufficient(vec!["No ingredients listed".to_string()]);
        }

        let mut totals = Totals::default();
        let mut matched = 0usize;
        let mut missing = Vec::new();
        let mut assumptions = Vec::new();

        for line in &lines {
            if line.is_unclear() {
                missing.push(format!("Unclear: {}", line.item));
                continue;
            }
            let Some(key) = self.matcher.find_match(&line.item) else {
                missing.push(format!("Not in database: {}", line.item));
                continue;
            };
            let Some(facts) = self.matcher.table().get(key) else {
                missing.push(format!("Not in database: {}", line.item));
                continue;
            };

            let quantity = resolve_quantity(line, &mut assumptions);
            let scaled = self.units.scale(key, &line.item, quantity, &line.unit);
            if let Some(assumption) = scaled.assumption {
                assumptions.push(assumption);
            }

            totals.calories += facts.calories * scaled.multiplier;
            totals.fat_g += facts.fat_g * scaled.multiplier;
            totals.protein_g += facts.protein_g * scaled.multiplier;
            totals.carbs_g += facts.carbs_g * scaled.multiplier;
            matched += 1;
            debug!(recipe = %id, item = %line.item, key, multiplier = scaled.multiplier, "Matched ingredient");
        }

        if matched == 0 {
            debug!(recipe = %id, "No ingredient matched the nutrition table");
            return insufficient(missing);
        }

        let (servings, servings_note) = match servings_from_yield(recipe) {
            Some(servings) => (servings, None),
            None => {
                let guess = servings_from_calories(totals.calories);
                let note = format!("Estimated {} servings based on total calories", guess);
                (guess, Some(note))
            }
        };
        let divisor = f64::from(servings);

        // the servings guess and the coverage line are always reported
        let reserved = 1 + usize::from(servings_note.is_some());
        assumptions.truncate(MAX_ASSUMPTIONS - reserved);
        assumptions.extend(servings_note);
        let coverage = matched as f64 / lines.len() as f64 * 100.0;
        assumptions.push(format!(
            "Based on {}/{} ingredients ({:.0}% coverage)",
            matched,
            lines.len(),
            coverage
        ));
        missing.truncate(MAX_MISSING_PARTIAL);

        NutritionEstimate::Partial {
            per_serving: PerServing {
                calories: round_half_even(totals.calories / divisor, 0) as i64,
                fat_g: round_half_even(totals.fat_g / divisor, 1),
                protein_g: round_half_even(totals.protein_g / divisor, 1),
                carbs_g: round_half_even(totals.carbs_g / divisor, 1),
            },
            missing_inputs: missing,
            assumptions,
        }
    }
}

fn insufficient(mut missing: Vec<String>) -> NutritionEstimate {
    missing.truncate(MAX_MISSING_INSUFFICIENT);
    NutritionEstimate::InsufficientData {
        per_serving: Map::new(),
        missing_inputs: missing,
        assumptions: Vec::new(),
    }
}

/// Quantity for a matched line, falling back through a numeric prefix, the
/// usual amount for that ingredient, and finally 1.
fn resolve_quantity(line: &IngredientLine, assumptions: &mut Vec<String>) -> f64 {
    if let Some(quantity) =
        parse_quantity(&line.quantity).or_else(|| extract_leading_quantity(&line.quantity))
    {
        return quantity;
    }

    let item_lower = line.item.to_lowercase();
    let default = DEFAULT_QUANTITIES
        .iter()
        .find(|(name, _)| item_lower.contains(name) || name.contains(item_lower.as_str()));
    match default {
        Some(&(_, quantity)) => {
            assumptions.push(format!(
                "Inferred {} for {} (standard quantity)",
                quantity, line.item
            ));
            quantity
        }
        None => {
            assumptions.push(format!("Assumed 1 unit for {}", line.item));
            1.0
        }
    }
}

/// First integer in `servings_yield`, if it is a plausible serving count.
pub fn servings_from_yield(recipe: &Value) -> Option<u32> {
    let yield_text = quantity_text(recipe.get("servings_yield"));
    let digits = FIRST_INTEGER.find(&yield_text)?;
    let servings: u32 = digits.as_str().parse().ok()?;
    SERVINGS_RANGE.contains(&servings).then_some(servings)
}

/// Rough serving count when the recipe does not state one.
pub fn servings_from_calories(total_calories: f64) -> u32 {
    CALORIE_SERVING_BUCKETS
        .iter()
        .find(|(threshold, _)| total_calories > *threshold)
        .map(|(_, servings)| *servings)
        .unwrap_or(FALLBACK_SERVINGS)
}

/// Rounds to `places` decimals on the exact binary value, ties to even
/// (210.5 -> 210, 3.25 -> 3.2, and 0.15 -> 0.1 since 0.15 is stored just
/// below the tie).
pub fn round_half_even(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
