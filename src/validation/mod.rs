pub mod assets;
pub mod report;
pub mod sanity;
pub mod validator;

pub use assets::{AssetStore, DirectoryAssets};
pub use report::{Finding, Severity, ValidationReport};
pub use sanity::{QuantityLimits, SanityChecker};
pub use validator::RecipeValidator;
