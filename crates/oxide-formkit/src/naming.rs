//! Input `name` and `id` generation.
//!
//! Attribute expressions follow the `[prefix]key[suffix]` grammar used for
//! tabular input: `[0]content` is the `content` attribute of row 0,
//! `dates[0]` is the first element of `dates`. Keys and bracket contents
//! use the property path character set, so every accepted expression also
//! resolves as a path.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FormError, Result};

static ATTRIBUTE_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:\[[A-Za-z0-9_.]*\])*)([A-Za-z0-9_.]+)((?:\[[A-Za-z0-9_.]*\])*)$")
        .expect("valid attribute expression regex")
});

/// An attribute expression split into its three parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeExpression {
    /// Leading bracket groups, e.g. `[0]`.
    pub prefix: String,
    /// The attribute name.
    pub key: String,
    /// Trailing bracket groups, e.g. `[0]` or `[]`.
    pub suffix: String,
}

impl AttributeExpression {
    /// Splits an expression into prefix, key and suffix.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_formkit::AttributeExpression;
    ///
    /// let expr = AttributeExpression::parse("[0]dates[1]").unwrap();
    /// assert_eq!(expr.prefix, "[0]");
    /// assert_eq!(expr.key, "dates");
    /// assert_eq!(expr.suffix, "[1]");
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        let caps = ATTRIBUTE_EXPRESSION
            .captures(expression)
            .ok_or_else(|| FormError::InvalidAttributeExpression(expression.to_string()))?;

        let part = |i| caps.get(i).map_or("", |m| m.as_str()).to_string();

        Ok(Self {
            prefix: part(1),
            key: part(2),
            suffix: part(3),
        })
    }

    /// Returns the key followed by the suffix, a property path into the
    /// model's data.
    pub fn property_path(&self) -> String {
        format!("{}{}", self.key, self.suffix)
    }
}

/// How an input name is lower-cased to form its id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseFold {
    /// Full Unicode lower-casing.
    #[default]
    Unicode,
    /// Lower-case ASCII letters only, leaving other characters as-is.
    Ascii,
}

impl CaseFold {
    fn apply(self, s: &str) -> String {
        match self {
            Self::Unicode => s.to_lowercase(),
            Self::Ascii => s.to_ascii_lowercase(),
        }
    }
}

/// Returns the attribute name of an expression without prefix or suffix.
pub fn attribute_name(expression: &str) -> Result<String> {
    AttributeExpression::parse(expression).map(|e| e.key)
}

/// Computes the `name` attribute for an input.
///
/// With a form name the attribute is grouped under it:
/// `Post` + `[0]content` gives `Post[0][content]`. Without one the
/// expression is used as-is, which is only allowed when there is no
/// tabular prefix.
pub fn input_name(form_name: &str, expression: &str) -> Result<String> {
    let expr = AttributeExpression::parse(expression)?;

    if !form_name.is_empty() {
        return Ok(format!(
            "{form_name}{}[{}]{}",
            expr.prefix, expr.key, expr.suffix
        ));
    }

    if expr.prefix.is_empty() {
        Ok(format!("{}{}", expr.key, expr.suffix))
    } else {
        Err(FormError::EmptyFormNameForTabularInput(
            expression.to_string(),
        ))
    }
}

/// Computes the `id` attribute for an input from its name.
///
/// `Post[content]` gives `post-content`.
pub fn input_id(form_name: &str, expression: &str, case_fold: CaseFold) -> Result<String> {
    let name = input_name(form_name, expression)?;
    Ok(id_from_name(&case_fold.apply(&name)))
}

fn id_from_name(name: &str) -> String {
    name.replace("[]", "")
        .replace("][", "-")
        .replace('[', "-")
        .replace(']', "")
        .replace(' ', "-")
        .replace('.', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_key() {
        let expr = AttributeExpression::parse("content").unwrap();
        assert_eq!(expr.prefix, "");
        assert_eq!(expr.key, "content");
        assert_eq!(expr.suffix, "");
    }

    #[test]
    fn test_parse_prefix_and_suffix() {
        let expr = AttributeExpression::parse("[0]content").unwrap();
        assert_eq!(expr.prefix, "[0]");
        assert_eq!(expr.key, "content");

        let expr = AttributeExpression::parse("dates[0]").unwrap();
        assert_eq!(expr.key, "dates");
        assert_eq!(expr.suffix, "[0]");
        assert_eq!(expr.property_path(), "dates[0]");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for expression in ["", "content body", "[0]", "a]b", "<script>"] {
            assert!(
                matches!(
                    AttributeExpression::parse(expression),
                    Err(FormError::InvalidAttributeExpression(_))
                ),
                "{expression:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_characters_outside_path_set() {
        for expression in ["first-name", "a+b", "dates[a-b]", "[x y]content", "prénom"] {
            assert!(
                matches!(
                    AttributeExpression::parse(expression),
                    Err(FormError::InvalidAttributeExpression(_))
                ),
                "{expression:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_name_with_form() {
        assert_eq!(input_name("Post", "content").unwrap(), "Post[content]");
        assert_eq!(input_name("Post", "[0]content").unwrap(), "Post[0][content]");
        assert_eq!(input_name("Post", "dates[0]").unwrap(), "Post[dates][0]");
    }

    #[test]
    fn test_name_without_form() {
        assert_eq!(input_name("", "content").unwrap(), "content");
        assert_eq!(input_name("", "dates[0]").unwrap(), "dates[0]");
    }

    #[test]
    fn test_tabular_requires_form_name() {
        let err = input_name("", "[0]content").unwrap_err();
        assert!(matches!(err, FormError::EmptyFormNameForTabularInput(_)));
    }

    #[test]
    fn test_id() {
        assert_eq!(
            input_id("Post", "content", CaseFold::Unicode).unwrap(),
            "post-content"
        );
        assert_eq!(
            input_id("Post", "[0]content", CaseFold::Unicode).unwrap(),
            "post-0-content"
        );
        assert_eq!(
            input_id("Post", "tags[]", CaseFold::Unicode).unwrap(),
            "post-tags"
        );
        assert_eq!(
            input_id("", "user.login", CaseFold::Unicode).unwrap(),
            "user-login"
        );
    }

    #[test]
    fn test_id_case_fold() {
        assert_eq!(
            input_id("Ärger", "name", CaseFold::Unicode).unwrap(),
            "ärger-name"
        );
        assert_eq!(
            input_id("Ärger", "name", CaseFold::Ascii).unwrap(),
            "Ärger-name"
        );
    }
}
