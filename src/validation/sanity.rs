use crate::quantity::parse_quantity;
use crate::recipe::UNCLEAR_MARKER;

/// Measuring units the sanity table distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    Cups,
    Tablespoons,
    Teaspoons,
}

impl UnitCategory {
    const ALL: [UnitCategory; 3] = [Self::Cups, Self::Tablespoons, Self::Teaspoons];

    fn matches(self, unit_lower: &str) -> bool {
        match self {
            Self::Cups => unit_lower.contains("cup"),
            Self::Tablespoons => unit_lower.contains("tbsp") || unit_lower.contains("tablespoon"),
            Self::Teaspoons => unit_lower.contains("tsp") || unit_lower.contains("teaspoon"),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Cups => "cups",
            Self::Tablespoons => "tbsp",
            Self::Teaspoons => "tsp",
        }
    }
}

/// Per-unit ceilings for one sensitive ingredient. `None` means unchecked.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuantityLimits {
    pub max_cups: Option<f64>,
    pub max_tbsp: Option<f64>,
    pub max_tsp: Option<f64>,
}

impl QuantityLimits {
    fn ceiling(&self, category: UnitCategory) -> Option<f64> {
        match category {
            UnitCategory::Cups => self.max_cups,
            UnitCategory::Tablespoons => self.max_tbsp,
            UnitCategory::Teaspoons => self.max_tsp,
        }
    }
}

/// Flags implausibly large amounts of salt, sugar, flour, butter and
/// leaveners. Advisory only: big-batch recipes legitimately exceed these.
#[derive(Debug, Clone)]
pub struct SanityChecker {
    limits: Vec<(String, QuantityLimits)>,
}

impl Default for SanityChecker {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SanityChecker {
    pub fn builtin() -> Self {
        let limit = |cups, tbsp, tsp| QuantityLimits {
            max_cups: cups,
            max_tbsp: tbsp,
            max_tsp: tsp,
        };
        Self::with_limits(vec![
            ("salt", limit(Some(0.5), Some(3.0), Some(6.0))),
            ("sugar", limit(Some(6.0), None, None)),
            ("flour", limit(Some(10.0), None, None)),
            ("butter", limit(Some(4.0), None, None)),
            ("baking soda", limit(None, None, Some(4.0))),
            ("baking powder", limit(None, Some(4.0), None)),
        ])
    }

    pub fn with_limits(limits: Vec<(&str, QuantityLimits)>) -> Self {
        Self {
            limits: limits
                .into_iter()
                .map(|(item, l)| (item.to_lowercase(), l))
                .collect(),
        }
    }

    /// Returns one warning message per exceeded ceiling.
    ///
    /// Empty, `[UNCLEAR]` and unparseable quantities are skipped silently:
    /// bad source data is reported elsewhere, not penalized twice.
    pub fn check(&self, item: &str, quantity: &str, unit: &str) -> Vec<String> {
        if quantity.trim().is_empty() || quantity.contains(UNCLEAR_MARKER) {
            return Vec::new();
        }
        let Some(amount) = parse_quantity(quantity) else {
            return Vec::new();
        };

        let item_lower = item.to_lowercase();
        let unit_lower = unit.to_lowercase();
        let mut warnings = Vec::new();

        for (name, limits) in &self.limits {
            if !item_lower.contains(name.as_str()) {
                continue;
            }
            for category in UnitCategory::ALL {
                let Some(ceiling) = limits.ceiling(category) else {
                    continue;
                };
                if category.matches(&unit_lower) && amount > ceiling {
                    warnings.push(format!(
                        "Suspicious: {} {} {} (max expected: {} {})",
                        quantity,
                        unit_lower,
                        item_lower,
                        ceiling,
                        category.label()
                    ));
                }
            }
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_excess_salt() {
        let checker = SanityChecker::builtin();
        let warnings = checker.check("Salt", "1", "cup");
        assert_eq!(
            warnings,
            vec!["Suspicious: 1 cup salt (max expected: 0.5 cups)".to_string()]
        );
        assert_eq!(checker.check("salt", "2", "tbsp"), Vec::<String>::new());
        assert_eq!(checker.check("salt", "8", "teaspoons").len(), 1);
    }

    #[test]
    fn test_unit_must_have_a_ceiling() {
        let checker = SanityChecker::builtin();
        // sugar only has a cup ceiling
        assert!(checker.check("sugar", "20", "tbsp").is_empty());
        assert_eq!(checker.check("brown sugar", "7", "cups").len(), 1);
    }

    #[test]
    fn test_skips_unevaluable_quantities() {
        let checker = SanityChecker::builtin();
        assert!(checker.check("salt", "", "cup").is_empty());
        assert!(checker.check("salt", "[UNCLEAR]", "cup").is_empty());
        assert!(checker.check("salt", "a handful", "cup").is_empty());
    }

    #[test]
    fn test_mixed_fraction_quantities() {
        let checker = SanityChecker::builtin();
        assert_eq!(checker.check("baking soda", "4 1/2", "tsp").len(), 1);
        assert!(checker.check("baking soda", "3 1/2", "tsp").is_empty());
    }

    #[test]
    fn test_custom_limits() {
        let checker = SanityChecker::with_limits(vec![(
            "Cayenne",
            QuantityLimits {
                max_tsp: Some(2.0),
                ..Default::default()
            },
        )]);
        assert_eq!(checker.check("ground cayenne", "3", "tsp").len(), 1);
        assert!(checker.check("salt", "10", "cups").is_empty());
    }
}
