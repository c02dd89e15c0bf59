//! Validation results and rule descriptions consumed by rendering.
//!
//! Rules are not executed here: a form model reports which rules apply to an
//! attribute so a theme can mirror them as HTML attributes, and reports the
//! messages produced by whatever ran the validation.

use std::collections::HashMap;
use std::fmt;

/// A validation rule attached to an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationRule {
    /// The value must not be empty.
    Required,
    /// The value must have at least this many characters.
    MinLength(usize),
    /// The value must have at most this many characters.
    MaxLength(usize),
    /// The value must match a regular expression.
    Pattern(String),
    /// The value must be an email address.
    Email,
    /// The value must be an absolute http(s) URL.
    Url,
    /// The value must be a number within bounds.
    Range { min: Option<f64>, max: Option<f64> },
}

/// Outcome of validating a form model, keyed by attribute path.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    errors: HashMap<String, Vec<String>>,
    validated: bool,
}

impl ValidationResult {
    /// Creates an empty result for a model that has not been validated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty result for a model that has been validated.
    pub fn validated() -> Self {
        Self {
            errors: HashMap::new(),
            validated: true,
        }
    }

    /// Adds an error for an attribute and marks the result as validated.
    pub fn add(&mut self, attribute: &str, message: impl Into<String>) {
        self.validated = true;
        self.errors
            .entry(attribute.to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder form of [`ValidationResult::add`].
    #[must_use]
    pub fn with_error(mut self, attribute: &str, message: impl Into<String>) -> Self {
        self.add(attribute, message);
        self
    }

    /// Returns whether validation has run.
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns whether an attribute has errors.
    pub fn has_errors(&self, attribute: &str) -> bool {
        self.errors.get(attribute).is_some_and(|e| !e.is_empty())
    }

    /// Returns the errors for an attribute, in the order they were added.
    pub fn errors(&self, attribute: &str) -> &[String] {
        self.errors.get(attribute).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the first error for an attribute.
    pub fn first_error(&self, attribute: &str) -> Option<&str> {
        self.errors(attribute).first().map(String::as_str)
    }

    /// Returns all errors as a flat list sorted by attribute.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        let mut attributes: Vec<&String> = self.errors.keys().collect();
        attributes.sort();
        attributes
            .into_iter()
            .flat_map(|attribute| {
                self.errors(attribute)
                    .iter()
                    .map(move |msg| (attribute.as_str(), msg.as_str()))
            })
            .collect()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (attribute, message) in self.all_errors() {
            writeln!(f, "{attribute}: {message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_not_validated() {
        let result = ValidationResult::new();
        assert!(!result.is_validated());
        assert!(result.is_empty());
        assert!(result.errors("name").is_empty());
    }

    #[test]
    fn test_add_marks_validated() {
        let result = ValidationResult::new()
            .with_error("name", "Too short.")
            .with_error("name", "Not unique.");
        assert!(result.is_validated());
        assert!(result.has_errors("name"));
        assert!(!result.has_errors("email"));
        assert_eq!(result.errors("name"), ["Too short.", "Not unique."]);
        assert_eq!(result.first_error("name"), Some("Too short."));
    }

    #[test]
    fn test_all_errors_sorted_by_attribute() {
        let result = ValidationResult::validated()
            .with_error("title", "Required.")
            .with_error("body", "Too long.");
        assert_eq!(
            result.all_errors(),
            vec![("body", "Too long."), ("title", "Required.")]
        );
        assert_eq!(result.to_string(), "body: Too long.\ntitle: Required.\n");
    }
}
