use serde::Serialize;
use serde_json::{Map, Value};

use crate::quantity::quantity_text;

/// Marker importers put in place of text they could not read.
pub const UNCLEAR_MARKER: &str = "[UNCLEAR]";

/// Id used in findings when a record has no usable `id`.
pub const UNKNOWN_ID: &str = "UNKNOWN";

/// One ingredient row, read leniently: absent or non-string fields become
/// empty strings so a malformed line degrades instead of failing the run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientLine {
    pub item: String,
    pub quantity: String,
    pub unit: String,
    pub prep_note: Option<String>,
}

impl IngredientLine {
    pub fn new(item: &str, quantity: &str, unit: &str) -> Self {
        Self {
            item: item.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            prep_note: None,
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let text = |field: &str| match value.get(field) {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        };
        Self {
            item: text("item"),
            quantity: quantity_text(value.get("quantity")),
            unit: text("unit"),
            prep_note: value
                .get("prep_note")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    pub fn is_unclear(&self) -> bool {
        self.item.contains(UNCLEAR_MARKER) || self.quantity.contains(UNCLEAR_MARKER)
    }
}

/// The `nutrition.status` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutritionStatus {
    /// Sourced from a cookbook's own analysis; never overwritten.
    Complete,
    Partial,
    InsufficientData,
}

impl NutritionStatus {
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "complete" => Some(Self::Complete),
            "partial" => Some(Self::Partial),
            "insufficient_data" => Some(Self::InsufficientData),
            _ => None,
        }
    }

    /// Status of a recipe's existing nutrition block, if it has one.
    pub fn of_recipe(recipe: &Value) -> Option<Self> {
        recipe
            .get("nutrition")
            .and_then(|n| n.get("status"))
            .and_then(Value::as_str)
            .and_then(Self::parse)
    }
}

/// Rounded per-serving macros written by the estimator.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct PerServing {
    pub calories: i64,
    pub fat_g: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
}

/// A nutrition block the estimator produces.
///
/// `complete` blocks come from outside and keep whatever shape they were
/// imported with, so they are never built from this type.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NutritionEstimate {
    Partial {
        per_serving: PerServing,
        missing_inputs: Vec<String>,
        assumptions: Vec<String>,
    },
    InsufficientData {
        /// Always an empty object.
        per_serving: Map<String, Value>,
        missing_inputs: Vec<String>,
        assumptions: Vec<String>,
    },
}

impl NutritionEstimate {
    pub fn status(&self) -> NutritionStatus {
        match self {
            NutritionEstimate::Partial { .. } => NutritionStatus::Partial,
            NutritionEstimate::InsufficientData { .. } => NutritionStatus::InsufficientData,
        }
    }

    pub fn missing_inputs(&self) -> &[String] {
        match self {
            NutritionEstimate::Partial { missing_inputs, .. }
            | NutritionEstimate::InsufficientData { missing_inputs, .. } => missing_inputs,
        }
    }

    pub fn assumptions(&self) -> &[String] {
        match self {
            NutritionEstimate::Partial { assumptions, .. }
            | NutritionEstimate::InsufficientData { assumptions, .. } => assumptions,
        }
    }

    pub fn per_serving(&self) -> Option<&PerServing> {
        match self {
            NutritionEstimate::Partial { per_serving, .. } => Some(per_serving),
            NutritionEstimate::InsufficientData { .. } => None,
        }
    }
}

/// The id a finding is attributed to.
pub fn recipe_id(recipe: &Value) -> String {
    match recipe.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Null) | None => UNKNOWN_ID.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Whether a field counts as filled in: not null, false, zero, or empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// `recipe[field]` if present and truthy.
pub fn truthy_field<'a>(recipe: &'a Value, field: &str) -> Option<&'a Value> {
    recipe.get(field).filter(|v| is_truthy(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ingredient_line_is_lenient() {
        let line = IngredientLine::from_value(&json!({"item": "sugar", "quantity": 2}));
        assert_eq!(line, IngredientLine::new("sugar", "2", ""));

        let empty = IngredientLine::from_value(&json!("not an object"));
        assert_eq!(empty, IngredientLine::default());
    }

    #[test]
    fn test_unclear_marker() {
        assert!(IngredientLine::new("[UNCLEAR] spice", "1", "tsp").is_unclear());
        assert!(IngredientLine::new("flour", "[UNCLEAR]", "cup").is_unclear());
        assert!(!IngredientLine::new("flour", "2", "cups").is_unclear());
    }

    #[test]
    fn test_estimate_serializes_with_status_tag() {
        let estimate = NutritionEstimate::InsufficientData {
            per_serving: Map::new(),
            missing_inputs: vec!["Not in database: ramps".to_string()],
            assumptions: vec![],
        };
        assert_eq!(
            serde_json::to_value(&estimate).unwrap(),
            json!({
                "status": "insufficient_data",
                "per_serving": {},
                "missing_inputs": ["Not in database: ramps"],
                "assumptions": []
            })
        );
    }

    #[test]
    fn test_status_of_recipe() {
        let recipe = json!({"nutrition": {"status": "complete", "per_serving": {"calories": 100}}});
        assert_eq!(NutritionStatus::of_recipe(&recipe), Some(NutritionStatus::Complete));
        assert_eq!(NutritionStatus::of_recipe(&json!({})), None);
        assert_eq!(NutritionStatus::parse("verified"), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(!is_truthy(&json!(0)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([1])));
    }

    #[test]
    fn test_recipe_id_fallbacks() {
        assert_eq!(recipe_id(&json!({"id": "apple-pie"})), "apple-pie");
        assert_eq!(recipe_id(&json!({"title": "No id"})), UNKNOWN_ID);
        assert_eq!(recipe_id(&json!({"id": 42})), "42");
    }
}
