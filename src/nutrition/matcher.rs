use crate::nutrition::table::NutritionTable;

/// Resolves free-text ingredient names to nutrition table keys.
///
/// Exact (lowercased) lookup first, then the longest table key contained in
/// the name, so "cream of mushroom soup" beats "mushrooms" and "cream".
pub struct IngredientMatcher<'a> {
    table: &'a NutritionTable,
    keys_longest_first: Vec<&'a str>,
}

impl<'a> IngredientMatcher<'a> {
    pub fn new(table: &'a NutritionTable) -> Self {
        let mut keys_longest_first: Vec<&str> = table.keys().collect();
        // stable sort: equal-length keys keep table order
        keys_longest_first.sort_by(|a, b| b.len().cmp(&a.len()));
        Self {
            table,
            keys_longest_first,
        }
    }

    pub fn table(&self) -> &'a NutritionTable {
        self.table
    }

    /// Returns the matching table key, or `None` when nothing fits. A miss
    /// is routine and gets recorded as a missing input by the caller.
    pub fn find_match(&self, item: &str) -> Option<&'a str> {
        let item_lower = item.to_lowercase();
        if item_lower.is_empty() {
            return None;
        }

        if self.table.contains(&item_lower) {
            return self.keys_longest_first.iter().copied().find(|k| *k == item_lower);
        }

        self.keys_longest_first
            .iter()
            .copied()
            .find(|key| item_lower.contains(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::table::NutritionFacts;

    #[test]
    fn test_substring_fallback() {
        let table = NutritionTable::builtin();
        let matcher = IngredientMatcher::new(&table);
        assert_eq!(matcher.find_match("2% milk"), Some("milk"));
        assert_eq!(matcher.find_match("Sifted FLOUR"), Some("flour"));
    }

    #[test]
    fn test_longest_key_wins() {
        let table = NutritionTable::builtin();
        let matcher = IngredientMatcher::new(&table);
        assert_eq!(
            matcher.find_match("cream of mushroom soup"),
            Some("cream of mushroom soup")
        );
        assert_eq!(
            matcher.find_match("1 can condensed cream of mushroom soup"),
            Some("cream of mushroom soup")
        );
        assert_eq!(matcher.find_match("light brown sugar"), Some("brown sugar"));
    }

    #[test]
    fn test_no_match() {
        let table = NutritionTable::builtin();
        let matcher = IngredientMatcher::new(&table);
        assert_eq!(matcher.find_match("unobtainium"), None);
        assert_eq!(matcher.find_match(""), None);
    }

    #[test]
    fn test_custom_table_is_honoured() {
        let table: NutritionTable = [
            ("cream", NutritionFacts::new("1 cup", 820.0, 88.0, 5.0, 7.0)),
            ("mushroom", NutritionFacts::new("1 cup", 15.0, 0.2, 2.0, 2.0)),
        ]
        .into_iter()
        .collect();
        let matcher = IngredientMatcher::new(&table);

        assert_eq!(matcher.find_match("cream of mushroom soup"), Some("mushroom"));
        assert_eq!(matcher.find_match("whipped cream"), Some("cream"));
        assert_eq!(matcher.find_match("sugar"), None);
    }
}
