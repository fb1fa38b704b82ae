use std::collections::HashMap;

use crate::nutrition::data::{
    CAN_SIZES_CUPS, DEFAULT_CAN_CUPS, DEFAULT_JAR_CUPS, JAR_SIZES_CUPS, UNIT_SCALES,
};

const TBSP_PER_STICK: f64 = 8.0;

/// How much of an ingredient's reference serving a recipe line uses.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledQuantity {
    pub multiplier: f64,
    /// Set when a container size had to be guessed.
    pub assumption: Option<String>,
}

impl ScaledQuantity {
    fn exact(multiplier: f64) -> Self {
        Self {
            multiplier,
            assumption: None,
        }
    }

    fn assumed(multiplier: f64, assumption: String) -> Self {
        Self {
            multiplier,
            assumption: Some(assumption),
        }
    }
}

/// Turns `quantity + unit` into a multiplier on a table entry's macros.
///
/// Deliberately coarse: the table mixes cup, tablespoon, ounce and per-item
/// servings, and the scale factors are cup-relative. Results are only ever
/// published as a `partial` estimate.
#[derive(Debug, Clone)]
pub struct UnitNormalizer {
    unit_scales: HashMap<String, f64>,
    can_sizes: Vec<(String, f64)>,
    jar_sizes: Vec<(String, f64)>,
}

impl Default for UnitNormalizer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl UnitNormalizer {
    pub fn builtin() -> Self {
        let owned = |rows: &[(&str, f64)]| -> Vec<(String, f64)> {
            rows.iter().map(|&(k, v)| (k.to_string(), v)).collect()
        };
        Self {
            unit_scales: owned(UNIT_SCALES).into_iter().collect(),
            can_sizes: owned(CAN_SIZES_CUPS),
            jar_sizes: owned(JAR_SIZES_CUPS),
        }
    }

    pub fn with_unit_scale(mut self, unit: &str, scale: f64) -> Self {
        self.unit_scales.insert(unit.to_lowercase(), scale);
        self
    }

    /// Scale factor for a bare unit; unknown units count as whole items.
    pub fn unit_scale(&self, unit: &str) -> f64 {
        self.unit_scales
            .get(unit.trim().to_lowercase().as_str())
            .copied()
            .unwrap_or(1.0)
    }

    /// Computes the multiplier for one ingredient line.
    ///
    /// # Arguments
    /// * `matched_key`: the nutrition table key the line resolved to.
    /// * `item`: the line's original item text (used for container sizes).
    /// * `quantity`: the parsed (or assumed) quantity.
    /// * `unit`: the line's unit text, any case.
    pub fn scale(&self, matched_key: &str, item: &str, quantity: f64, unit: &str) -> ScaledQuantity {
        let unit_lower = unit.trim().to_lowercase();
        let item_lower = item.to_lowercase();

        match unit_lower.as_str() {
            "can" | "cans" => {
                return match container_size(&self.can_sizes, &item_lower) {
                    Some(size) => ScaledQuantity::assumed(
                        quantity * size,
                        format!("Used standard can size ({} cups) for {}", size, item),
                    ),
                    None => ScaledQuantity::assumed(
                        quantity * DEFAULT_CAN_CUPS,
                        format!("Assumed {} cup can for {}", DEFAULT_CAN_CUPS, item),
                    ),
                };
            }
            "jar" | "jars" => {
                return match container_size(&self.jar_sizes, &item_lower) {
                    Some(size) => ScaledQuantity::assumed(
                        quantity * size,
                        format!("Used standard jar size ({} cups) for {}", size, item),
                    ),
                    None => ScaledQuantity::assumed(
                        quantity * DEFAULT_JAR_CUPS,
                        format!("Assumed {} cup jar for {}", DEFAULT_JAR_CUPS, item),
                    ),
                };
            }
            _ => {}
        }

        let is_stick = matches!(unit_lower.as_str(), "stick" | "sticks");
        if is_stick && matches!(matched_key, "butter" | "margarine") {
            return ScaledQuantity::exact(quantity * TBSP_PER_STICK);
        }
        if matches!(matched_key, "egg" | "eggs") {
            // one table entry per egg, whatever the unit says ("large", "whole")
            return ScaledQuantity::exact(quantity);
        }

        ScaledQuantity::exact(quantity * self.unit_scale(&unit_lower))
    }
}

fn container_size(sizes: &[(String, f64)], item_lower: &str) -> Option<f64> {
    sizes
        .iter()
        .find(|(name, _)| item_lower.contains(name.as_str()) || name.contains(item_lower))
        .map(|(_, size)| *size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_units() {
        let units = UnitNormalizer::builtin();
        assert_eq!(units.scale("sugar", "sugar", 1.0, "cup").multiplier, 1.0);
        assert_eq!(units.scale("flour", "flour", 2.0, "Cups").multiplier, 2.0);
        assert_eq!(units.scale("flour", "flour", 4.0, "tbsp").multiplier, 0.25);
        assert_eq!(units.scale("milk", "milk", 1.0, "pint").multiplier, 2.0);
    }

    #[test]
    fn test_unknown_unit_counts_whole_items() {
        let units = UnitNormalizer::builtin();
        assert_eq!(units.unit_scale("handful"), 1.0);
        assert_eq!(units.unit_scale(""), 1.0);
        let scaled = units.scale("apple", "apples", 3.0, "");
        assert_eq!(scaled.multiplier, 3.0);
        assert_eq!(scaled.assumption, None);
    }

    #[test]
    fn test_butter_sticks() {
        let units = UnitNormalizer::builtin();
        assert_eq!(units.scale("butter", "butter", 2.0, "sticks").multiplier, 16.0);
        assert_eq!(units.scale("margarine", "margarine", 0.5, "stick").multiplier, 4.0);
    }

    #[test]
    fn test_eggs_ignore_unit() {
        let units = UnitNormalizer::builtin();
        assert_eq!(units.scale("eggs", "eggs", 3.0, "large").multiplier, 3.0);
        assert_eq!(units.scale("egg", "egg whites", 2.0, "cup").multiplier, 2.0);
    }

    #[test]
    fn test_known_can_size() {
        let units = UnitNormalizer::builtin();
        let scaled = units.scale(
            "cream of mushroom soup",
            "cream of mushroom soup",
            2.0,
            "cans",
        );
        assert_eq!(scaled.multiplier, 2.5);
        assert_eq!(
            scaled.assumption.as_deref(),
            Some("Used standard can size (1.25 cups) for cream of mushroom soup")
        );
    }

    #[test]
    fn test_unknown_can_and_jar_defaults() {
        let units = UnitNormalizer::builtin();
        let can = units.scale("cherries", "sour cherries", 1.0, "can");
        assert_eq!(can.multiplier, 1.5);
        assert!(can.assumption.is_some());

        let jar = units.scale("honey", "honey", 1.0, "jar");
        assert_eq!(jar.multiplier, 2.0);
        assert_eq!(jar.assumption.as_deref(), Some("Assumed 2 cup jar for honey"));
    }

    #[test]
    fn test_custom_unit_scale() {
        let units = UnitNormalizer::builtin().with_unit_scale("Dash", 0.01);
        assert_eq!(units.scale("salt", "salt", 2.0, "dash").multiplier, 0.02);
    }
}
