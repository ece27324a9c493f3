//! The categories offered by the transaction forms.

/// Categories offered on the add-transaction form before any are stored.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Bills",
    "Shopping",
    "Entertainment",
    "Health",
    "Education",
];

/// The add-transaction option that stores the custom category field instead.
pub const OTHER_CATEGORY: &str = "Others";

/// Merge the default categories with the stored ones, sorted and without duplicates.
pub fn category_options(stored_categories: &[String]) -> Vec<String> {
    let mut options: Vec<String> = DEFAULT_CATEGORIES
        .iter()
        .map(|category| (*category).to_owned())
        .chain(stored_categories.iter().cloned())
        .collect();

    options.sort();
    options.dedup();
    options
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_CATEGORIES, category_options};

    #[test]
    fn options_include_defaults() {
        let options = category_options(&[]);

        assert_eq!(options.len(), DEFAULT_CATEGORIES.len());
        assert!(options.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn options_add_stored_categories_once() {
        let options = category_options(&["Food".to_owned(), "Pets".to_owned()]);

        assert_eq!(options.len(), DEFAULT_CATEGORIES.len() + 1);
        assert_eq!(
            options.iter().filter(|category| *category == "Food").count(),
            1
        );
        assert!(options.contains(&"Pets".to_owned()));
    }
}
