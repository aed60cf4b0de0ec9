//! Name-based bucketing of functions.
//!
//! Rules are evaluated top to bottom and the first match wins, so a
//! function lands in at most one bucket. Functions matching no rule are
//! left out entirely.

use crate::parser::schema::FunctionRecord;
use crate::utils::config::{CONFIGURATION_MARKER, JSON_KEYWORDS, STRING_KEYWORDS};
use std::fmt;

/// Function bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Configuration,
    Json,
    String,
}

impl Category {
    /// All buckets in precedence order
    pub const ALL: [Category; 3] = [Category::Configuration, Category::Json, Category::String];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Configuration => "configuration",
            Category::Json => "json",
            Category::String => "string",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct CategoryRule {
    category: Category,
    matches: fn(&str) -> bool,
}

const RULES: [CategoryRule; 3] = [
    CategoryRule {
        category: Category::Configuration,
        matches: is_configuration,
    },
    CategoryRule {
        category: Category::Json,
        matches: is_json,
    },
    CategoryRule {
        category: Category::String,
        matches: is_string,
    },
];

fn is_configuration(name: &str) -> bool {
    name.contains(CONFIGURATION_MARKER)
}

fn is_json(name: &str) -> bool {
    contains_any_lowercase(name, JSON_KEYWORDS)
}

fn is_string(name: &str) -> bool {
    contains_any_lowercase(name, STRING_KEYWORDS)
}

fn contains_any_lowercase(name: &str, keywords: &[&str]) -> bool {
    let lower = name.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword))
}

/// Bucket for a function name, or `None` if no rule matches
pub fn classify(name: &str) -> Option<Category> {
    RULES
        .iter()
        .find(|rule| (rule.matches)(name))
        .map(|rule| rule.category)
}

/// Functions grouped by bucket, each bucket in first-seen order
#[derive(Debug, Clone, Default)]
pub struct CategorizedFunctions<'a> {
    pub configuration: Vec<&'a FunctionRecord>,
    pub json: Vec<&'a FunctionRecord>,
    pub string: Vec<&'a FunctionRecord>,
}

impl<'a> CategorizedFunctions<'a> {
    pub fn bucket(&self, category: Category) -> &[&'a FunctionRecord] {
        match category {
            Category::Configuration => &self.configuration,
            Category::Json => &self.json,
            Category::String => &self.string,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<&'a FunctionRecord> {
        match category {
            Category::Configuration => &mut self.configuration,
            Category::Json => &mut self.json,
            Category::String => &mut self.string,
        }
    }
}

/// Partition records into buckets
pub fn categorize(functions: &[FunctionRecord]) -> CategorizedFunctions<'_> {
    let mut buckets = CategorizedFunctions::default();

    for record in functions {
        if let Some(category) = classify(&record.name) {
            buckets.bucket_mut(category).push(record);
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_is_case_sensitive() {
        assert_eq!(
            classify("Cloudinary\\Configuration\\Configuration->init"),
            Some(Category::Configuration)
        );
        assert_eq!(classify("loadconfiguration"), None);
    }

    #[test]
    fn test_keyword_buckets_ignore_case() {
        assert_eq!(classify("json_encode"), Some(Category::Json));
        assert_eq!(classify("JsonSerializable->jsonSerialize"), Some(Category::Json));
        assert_eq!(classify("Unserialize"), Some(Category::Json));
        assert_eq!(classify("StringUtils::camelCase"), Some(Category::String));
        assert_eq!(classify("SNAKE"), Some(Category::String));
        assert_eq!(classify("str_replace"), None);
    }

    #[test]
    fn test_first_match_wins() {
        // Matches all three rules
        assert_eq!(
            classify("ConfigurationJsonStringCase"),
            Some(Category::Configuration)
        );
        // Matches json and string
        assert_eq!(classify("jsonToString"), Some(Category::Json));
    }

    #[test]
    fn test_categorize_keeps_order_and_skips_unmatched() {
        let functions = vec![
            FunctionRecord::new("b_string"),
            FunctionRecord::new("main"),
            FunctionRecord::new("a_string"),
            FunctionRecord::new("Configuration::get"),
        ];

        let buckets = categorize(&functions);

        let names: Vec<&str> = buckets.string.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b_string", "a_string"]);
        assert_eq!(buckets.configuration.len(), 1);
        assert!(buckets.json.is_empty());
        assert_eq!(buckets.bucket(Category::String).len(), 2);
    }
}
