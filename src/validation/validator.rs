use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use crate::quantity::quantity_text;
use crate::recipe::{is_truthy, recipe_id, truthy_field, NutritionStatus, UNKNOWN_ID};
use crate::validation::assets::AssetStore;
use crate::validation::report::ValidationReport;
use crate::validation::sanity::SanityChecker;

pub const REQUIRED_FIELDS: &[&str] = &["id", "title", "ingredients", "instructions", "category"];

pub const VALID_CATEGORIES: &[&str] = &[
    "appetizers",
    "beverages",
    "breads",
    "breakfast",
    "desserts",
    "mains",
    "salads",
    "sides",
    "soups",
    "snacks",
];

pub const VALID_CONFIDENCE: &[&str] = &["high", "medium", "low"];

/// Plausible oven temperatures, Fahrenheit.
pub const TEMP_MIN_F: u64 = 200;
pub const TEMP_MAX_F: u64 = 550;

const GLOBAL_ID: &str = "GLOBAL";

static ID_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("id pattern is valid"));
static FAHRENHEIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*°?F").expect("temperature pattern is valid"));

/// Checks a whole recipe collection and reports every problem at once.
///
/// Schema breakage (missing fields, bad ids, duplicate or dangling ids) is
/// an error; things that may simply be unfinished (new categories, pending
/// images, sparse nutrition) are warnings. The input is never modified.
pub struct RecipeValidator<'a, A: AssetStore> {
    assets: &'a A,
    sanity: &'a SanityChecker,
}

impl<'a, A: AssetStore> RecipeValidator<'a, A> {
    pub fn new(assets: &'a A, sanity: &'a SanityChecker) -> Self {
        Self { assets, sanity }
    }

    /// Validates a parsed document (`{"meta": ..., "recipes": [...]}`).
    pub fn validate_document(&self, root: &Value) -> ValidationReport {
        let mut report = ValidationReport::default();
        match root.get("recipes").and_then(Value::as_array) {
            Some(recipes) => {
                report.total_recipes = recipes.len();
                self.validate_all(recipes, &mut report);
            }
            None => report.error(GLOBAL_ID, "Missing 'recipes' array in JSON"),
        }
        debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "Validation pass finished"
        );
        report
    }

    /// Per-record checks plus the collection-level duplicate and
    /// dangling-reference passes.
    pub fn validate_all(&self, recipes: &[Value], report: &mut ValidationReport) {
        let mut ids_seen: HashSet<&str> = HashSet::new();

        for (index, recipe) in recipes.iter().enumerate() {
            if !recipe.is_object() {
                report.error(UNKNOWN_ID, format!("Recipe entry {} must be an object", index));
                continue;
            }
            if let Some(id) = recipe.get("id").and_then(Value::as_str) {
                if !ids_seen.insert(id) {
                    report.error(id, "Duplicate recipe ID");
                }
            }
            self.validate_recipe(recipe, report);
        }

        for recipe in recipes {
            let Some(target) = truthy_field(recipe, "variant_of") else {
                continue;
            };
            let known = target.as_str().is_some_and(|t| ids_seen.contains(t));
            if !known {
                report.error(
                    &recipe_id(recipe),
                    format!(
                        "variant_of references non-existent recipe: {}",
                        target.as_str().map_or_else(|| target.to_string(), str::to_string)
                    ),
                );
            }
        }
    }

    pub fn validate_recipe(&self, recipe: &Value, report: &mut ValidationReport) {
        let id = recipe_id(recipe);

        for field in REQUIRED_FIELDS {
            if truthy_field(recipe, field).is_none() {
                report.error(&id, format!("Missing required field: {}", field));
            }
        }

        if let Some(raw_id) = recipe.get("id") {
            let well_formed = raw_id.as_str().is_some_and(|s| ID_FORMAT.is_match(s));
            if !well_formed {
                report.error(&id, format!("Invalid ID format (should be lowercase slug): {}", id));
            }
        }

        if let Some(category) = recipe.get("category") {
            let known = category
                .as_str()
                .is_some_and(|c| VALID_CATEGORIES.contains(&c));
            if !known {
                let shown = category.as_str().map_or_else(|| category.to_string(), str::to_string);
                report.warn(&id, format!("Unknown category: {}", shown));
            }
        }

        if let Some(confidence) = truthy_field(recipe, "confidence") {
            self.validate_confidence(&id, confidence, report);
        }
        if let Some(ingredients) = recipe.get("ingredients") {
            self.validate_ingredients(&id, ingredients, report);
        }
        if let Some(instructions) = recipe.get("instructions") {
            self.validate_instructions(&id, instructions, report);
        }
        if let Some(temperature) = truthy_field(recipe, "temperature") {
            self.validate_temperature(&id, temperature, report);
        }
        if let Some(image_refs) = recipe.get("image_refs") {
            self.validate_image_refs(&id, image_refs, report);
        }
        if let Some(nutrition) = truthy_field(recipe, "nutrition") {
            self.validate_nutrition(&id, nutrition, report);
        }
        if let Some(conversions) = truthy_field(recipe, "conversions") {
            self.validate_conversions(&id, conversions, report);
        }
    }

    fn validate_confidence(&self, id: &str, confidence: &Value, report: &mut ValidationReport) {
        if !confidence.is_object() {
            report.error(id, "confidence must be an object");
            return;
        }
        let Some(overall) = truthy_field(confidence, "overall") else {
            return;
        };
        let valid = overall
            .as_str()
            .is_some_and(|o| VALID_CONFIDENCE.contains(&o));
        if !valid {
            let shown = overall.as_str().map_or_else(|| overall.to_string(), str::to_string);
            report.error(id, format!("Invalid confidence level: {}", shown));
        }
    }

    fn validate_ingredients(&self, id: &str, ingredients: &Value, report: &mut ValidationReport) {
        let Some(ingredients) = ingredients.as_array() else {
            report.error(id, "Ingredients must be a list");
            return;
        };

        for (i, ingredient) in ingredients.iter().enumerate() {
            if !ingredient.is_object() {
                report.error(id, format!("Ingredient {} must be an object", i));
                continue;
            }
            if ingredient.get("item").is_none() {
                report.error(id, format!("Ingredient {} missing 'item' field", i));
            }

            let item = ingredient.get("item").and_then(Value::as_str).unwrap_or_default();
            let quantity = quantity_text(ingredient.get("quantity"));
            let unit = ingredient.get("unit").and_then(Value::as_str).unwrap_or_default();
            for warning in self.sanity.check(item, &quantity, unit) {
                report.warn(id, warning);
            }
        }
    }

    fn validate_instructions(&self, id: &str, instructions: &Value, report: &mut ValidationReport) {
        let Some(instructions) = instructions.as_array() else {
            report.error(id, "Instructions must be a list");
            return;
        };
        if instructions.is_empty() {
            report.error(id, "Instructions list is empty");
            return;
        }

        for (i, instruction) in instructions.iter().enumerate() {
            if !instruction.is_object() {
                report.error(id, format!("Instruction {} must be an object", i));
                continue;
            }
            if instruction.get("text").is_none() {
                report.error(id, format!("Instruction {} missing 'text' field", i));
            }
        }
    }

    fn validate_temperature(&self, id: &str, temperature: &Value, report: &mut ValidationReport) {
        let Some(text) = temperature.as_str() else {
            return;
        };
        let Some(caps) = FAHRENHEIT.captures(text) else {
            return;
        };
        let degrees = &caps[1];
        // readings too long to parse count as out of range
        let plausible = degrees
            .parse::<u64>()
            .is_ok_and(|d| (TEMP_MIN_F..=TEMP_MAX_F).contains(&d));
        if !plausible {
            report.warn(
                id,
                format!(
                    "Temperature {}°F outside typical range ({}-{}°F)",
                    degrees, TEMP_MIN_F, TEMP_MAX_F
                ),
            );
        }
    }

    fn validate_image_refs(&self, id: &str, image_refs: &Value, report: &mut ValidationReport) {
        let Some(image_refs) = image_refs.as_array() else {
            report.error(id, "image_refs must be a list");
            return;
        };
        for image_ref in image_refs {
            let found = image_ref.as_str().is_some_and(|path| self.assets.exists(path));
            if !found {
                let shown = image_ref.as_str().map_or_else(|| image_ref.to_string(), str::to_string);
                report.warn(id, format!("Referenced image not found: {}", shown));
            }
        }
    }

    fn validate_nutrition(&self, id: &str, nutrition: &Value, report: &mut ValidationReport) {
        let status = nutrition
            .get("status")
            .and_then(Value::as_str)
            .and_then(NutritionStatus::parse);
        match status {
            Some(NutritionStatus::InsufficientData) => {
                if truthy_field(nutrition, "missing_inputs").is_none() {
                    report.warn(
                        id,
                        "Nutrition status is 'insufficient_data' but missing_inputs is empty",
                    );
                }
            }
            Some(status @ (NutritionStatus::Complete | NutritionStatus::Partial)) => {
                let has_values = nutrition
                    .get("per_serving")
                    .and_then(Value::as_object)
                    .is_some_and(|values| values.values().any(|v| !v.is_null()));
                if !has_values {
                    let name = match status {
                        NutritionStatus::Complete => "complete",
                        _ => "partial",
                    };
                    report.warn(
                        id,
                        format!("Nutrition status is '{}' but no nutrition values provided", name),
                    );
                }
            }
            None => {}
        }
    }

    fn validate_conversions(&self, id: &str, conversions: &Value, report: &mut ValidationReport) {
        let flagged = conversions.get("has_conversions").is_some_and(is_truthy);
        if flagged && truthy_field(conversions, "ingredients_metric").is_none() {
            report.warn(id, "has_conversions is true but ingredients_metric is empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_recipe(id: &str) -> Value {
        json!({
            "id": id,
            "title": "Buttermilk Biscuits",
            "category": "breads",
            "ingredients": [
                {"item": "flour", "quantity": "2", "unit": "cups"},
                {"item": "buttermilk", "quantity": "3/4", "unit": "cup"}
            ],
            "instructions": [{"step": 1, "text": "Mix and bake."}],
            "confidence": {"overall": "high", "flags": []}
        })
    }

    fn validate(root: &Value) -> ValidationReport {
        let assets: HashSet<String> = ["images/biscuits.jpeg".to_string()].into_iter().collect();
        let sanity = SanityChecker::builtin();
        RecipeValidator::new(&assets, &sanity).validate_document(root)
    }

    #[test]
    fn test_minimal_collection_is_clean() {
        let report = validate(&json!({"meta": {}, "recipes": [minimal_recipe("biscuits")]}));
        assert!(report.is_clean(), "unexpected findings: {:?}", report);
        assert_eq!(report.total_recipes, 1);
    }

    #[test]
    fn test_missing_recipes_array() {
        let report = validate(&json!({"meta": {}}));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].recipe_id, "GLOBAL");
    }

    #[test]
    fn test_duplicate_ids_once_per_repeat() {
        let recipes: Vec<Value> = (0..3).map(|_| minimal_recipe("biscuits")).collect();
        let report = validate(&json!({"recipes": recipes}));
        let duplicates: Vec<_> = report
            .errors
            .iter()
            .filter(|f| f.message == "Duplicate recipe ID")
            .collect();
        assert_eq!(duplicates.len(), 2);
        assert!(duplicates.iter().all(|f| f.recipe_id == "biscuits"));
    }

    #[test]
    fn test_dangling_variant_reference() {
        let mut variant = minimal_recipe("cheese-biscuits");
        variant["variant_of"] = json!("nonexistent-id");
        let report = validate(&json!({"recipes": [minimal_recipe("biscuits"), variant]}));

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].recipe_id, "cheese-biscuits");
        assert_eq!(
            report.errors[0].message,
            "variant_of references non-existent recipe: nonexistent-id"
        );
    }

    #[test]
    fn test_variant_reference_may_point_forward() {
        let mut variant = minimal_recipe("cheese-biscuits");
        variant["variant_of"] = json!("biscuits");
        let report = validate(&json!({"recipes": [variant, minimal_recipe("biscuits")]}));
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_required_fields_and_id_format() {
        let report = validate(&json!({"recipes": [{"id": "Apple_Pie", "title": ""}]}));
        let messages: Vec<&str> = report.errors.iter().map(|f| f.message.as_str()).collect();
        assert!(messages.contains(&"Missing required field: title"));
        assert!(messages.contains(&"Missing required field: ingredients"));
        assert!(messages.contains(&"Missing required field: instructions"));
        assert!(messages.contains(&"Missing required field: category"));
        assert!(messages.contains(&"Invalid ID format (should be lowercase slug): Apple_Pie"));
        assert!(report.errors.iter().all(|f| f.recipe_id == "Apple_Pie"));
    }

    #[test]
    fn test_unknown_category_is_only_a_warning() {
        let mut recipe = minimal_recipe("scuppernong-jelly");
        recipe["category"] = json!("preserves");
        let report = validate(&json!({"recipes": [recipe]}));
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings[0].message, "Unknown category: preserves");
        assert!(report.passed(false));
        assert!(!report.passed(true));
    }

    #[test]
    fn test_invalid_confidence() {
        let mut recipe = minimal_recipe("biscuits");
        recipe["confidence"] = json!({"overall": "certain"});
        let report = validate(&json!({"recipes": [recipe]}));
        assert_eq!(report.errors[0].message, "Invalid confidence level: certain");
    }

    #[test]
    fn test_shape_errors() {
        let mut recipe = minimal_recipe("biscuits");
        recipe["ingredients"] = json!([{"quantity": "1"}, "salt"]);
        recipe["instructions"] = json!([{"step": 1}]);
        let report = validate(&json!({"recipes": [recipe]}));
        let messages: Vec<&str> = report.errors.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Ingredient 0 missing 'item' field",
                "Ingredient 1 must be an object",
                "Instruction 0 missing 'text' field",
            ]
        );
    }

    #[test]
    fn test_wrong_container_types() {
        let mut recipe = minimal_recipe("biscuits");
        recipe["ingredients"] = json!("flour, buttermilk");
        recipe["instructions"] = json!("Mix and bake.");
        recipe["image_refs"] = json!("images/biscuits.jpeg");
        recipe["confidence"] = json!("high");
        let report = validate(&json!({"recipes": [recipe]}));

        let messages: Vec<&str> = report
            .errors_for("biscuits")
            .map(|f| f.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "confidence must be an object",
                "Ingredients must be a list",
                "Instructions must be a list",
                "image_refs must be a list",
            ]
        );
        assert_eq!(report.errors.len(), 4);
    }

    #[test]
    fn test_empty_instructions() {
        let mut recipe = minimal_recipe("biscuits");
        recipe["instructions"] = json!([]);
        let report = validate(&json!({"recipes": [recipe]}));
        let messages: Vec<&str> = report.errors.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Missing required field: instructions", "Instructions list is empty"]
        );
    }

    #[test]
    fn test_temperature_range() {
        let mut cold = minimal_recipe("cold-oven");
        cold["temperature"] = json!("35°F");
        let mut fine = minimal_recipe("fine-oven");
        fine["temperature"] = json!("350 F (175 C)");
        let report = validate(&json!({"recipes": [cold, fine]}));

        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].recipe_id, "cold-oven");
        assert_eq!(
            report.warnings[0].message,
            "Temperature 35°F outside typical range (200-550°F)"
        );
    }

    #[test]
    fn test_unparseable_temperature_is_out_of_range() {
        let mut garbled = minimal_recipe("garbled-oven");
        garbled["temperature"] = json!("99999999999°F");
        let report = validate(&json!({"recipes": [garbled]}));

        assert_eq!(
            report.warnings_for("garbled-oven").next().map(|f| f.message.as_str()),
            Some("Temperature 99999999999°F outside typical range (200-550°F)")
        );
    }

    #[test]
    fn test_missing_image_is_a_warning() {
        let mut recipe = minimal_recipe("biscuits");
        recipe["image_refs"] = json!(["images/biscuits.jpeg", "images/missing.jpeg"]);
        let report = validate(&json!({"recipes": [recipe]}));
        assert!(report.errors.is_empty());
        assert_eq!(
            report.warnings[0].message,
            "Referenced image not found: images/missing.jpeg"
        );
    }

    #[test]
    fn test_nutrition_consistency() {
        let mut insufficient = minimal_recipe("a");
        insufficient["nutrition"] = json!({"status": "insufficient_data", "missing_inputs": []});
        let mut partial = minimal_recipe("b");
        partial["nutrition"] = json!({"status": "partial", "per_serving": {"calories": null}});
        let mut complete = minimal_recipe("c");
        complete["nutrition"] = json!({"status": "complete", "per_serving": {"calories": 95}});
        let report = validate(&json!({"recipes": [insufficient, partial, complete]}));

        assert!(report.errors.is_empty());
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.warnings_for("a").count(), 1);
        assert_eq!(
            report.warnings_for("b").next().map(|f| f.message.as_str()),
            Some("Nutrition status is 'partial' but no nutrition values provided")
        );
    }

    #[test]
    fn test_sanity_warnings_are_attributed() {
        let mut recipe = minimal_recipe("salty");
        recipe["ingredients"] = json!([{"item": "Salt", "quantity": "1", "unit": "Cup"}]);
        let report = validate(&json!({"recipes": [recipe]}));
        assert!(report.errors.is_empty());
        assert_eq!(
            report.warnings_for("salty").next().map(|f| f.message.as_str()),
            Some("Suspicious: 1 cup salt (max expected: 0.5 cups)")
        );
    }

    #[test]
    fn test_conversions_flag() {
        let mut recipe = minimal_recipe("biscuits");
        recipe["conversions"] = json!({"has_conversions": true, "ingredients_metric": []});
        let report = validate(&json!({"recipes": [recipe]}));
        assert_eq!(
            report.warnings[0].message,
            "has_conversions is true but ingredients_metric is empty"
        );
    }

    #[test]
    fn test_non_object_entry() {
        let report = validate(&json!({"recipes": ["oops", minimal_recipe("biscuits")]}));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].recipe_id, "UNKNOWN");
    }
}
