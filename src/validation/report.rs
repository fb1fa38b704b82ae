use std::fmt;

const RULE: &str = "============================================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Schema breakage; always fails the run.
    Error,
    /// Data-quality smell; fails the run only in strict mode.
    Warning,
}

/// One problem, attributed to a recipe id or `GLOBAL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub recipe_id: String,
    pub message: String,
}

impl Finding {
    pub fn new(recipe_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            message: message.into(),
        }
    }
}

/// Everything one validation pass found, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub total_recipes: usize,
}

impl ValidationReport {
    pub fn push(&mut self, severity: Severity, recipe_id: &str, message: impl Into<String>) {
        let finding = Finding::new(recipe_id, message);
        match severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
    }

    pub fn error(&mut self, recipe_id: &str, message: impl Into<String>) {
        self.push(Severity::Error, recipe_id, message);
    }

    pub fn warn(&mut self, recipe_id: &str, message: impl Into<String>) {
        self.push(Severity::Warning, recipe_id, message);
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Errors always fail; warnings fail only when `strict`.
    pub fn passed(&self, strict: bool) -> bool {
        self.errors.is_empty() && (!strict || self.warnings.is_empty())
    }

    pub fn errors_for<'a>(&'a self, recipe_id: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.errors.iter().filter(move |f| f.recipe_id == recipe_id)
    }

    pub fn warnings_for<'a>(&'a self, recipe_id: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.warnings.iter().filter(move |f| f.recipe_id == recipe_id)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "RECIPE VALIDATION REPORT")?;
        writeln!(f, "{}", RULE)?;

        if self.errors.is_empty() {
            writeln!(f, "\nNo errors found.")?;
        } else {
            writeln!(f, "\n{} ERROR(S):", self.errors.len())?;
            for err in &self.errors {
                writeln!(f, "  ERROR [{}]: {}", err.recipe_id, err.message)?;
            }
        }

        if self.warnings.is_empty() {
            writeln!(f, "\nNo warnings.")?;
        } else {
            writeln!(f, "\n{} WARNING(S):", self.warnings.len())?;
            for warning in &self.warnings {
                writeln!(f, "  WARNING [{}]: {}", warning.recipe_id, warning.message)?;
            }
        }

        writeln!(f, "\n{}", RULE)?;
        write!(f, "\nTotal recipes: {}", self.total_recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_policy() {
        let mut report = ValidationReport::default();
        assert!(report.passed(true));

        report.warn("apple-pie", "Unknown category: pies");
        assert!(report.passed(false));
        assert!(!report.passed(true));

        report.error("apple-pie", "Duplicate recipe ID");
        assert!(!report.passed(false));
    }

    #[test]
    fn test_display_lists_errors_then_warnings() {
        let mut report = ValidationReport {
            total_recipes: 2,
            ..Default::default()
        };
        report.warn("b", "Unknown category: pies");
        report.error("a", "Missing required field: title");

        let text = report.to_string();
        let error_at = text.find("ERROR [a]: Missing required field: title").unwrap();
        let warning_at = text.find("WARNING [b]: Unknown category: pies").unwrap();
        assert!(error_at < warning_at);
        assert!(text.contains("1 ERROR(S):"));
        assert!(text.ends_with("Total recipes: 2"));
    }

    #[test]
    fn test_clean_report_text() {
        let text = ValidationReport::default().to_string();
        assert!(text.contains("No errors found."));
        assert!(text.contains("No warnings."));
    }
}
