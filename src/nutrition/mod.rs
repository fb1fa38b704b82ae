mod data;
pub mod estimator;
pub mod matcher;
pub mod table;
pub mod units;

pub use estimator::{EstimateOutcome, EstimationSummary, NutritionEstimator};
pub use matcher::IngredientMatcher;
pub use table::{NutritionFacts, NutritionTable};
pub use units::{ScaledQuantity, UnitNormalizer};
