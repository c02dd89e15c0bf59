//! Form models and the per-input data derived from them.

use crate::error::{FormError, Result};
use crate::naming::{input_id, input_name, AttributeExpression, CaseFold};
use crate::path::PropertyPath;
use crate::validation::{ValidationResult, ValidationRule};
use crate::value::Value;

/// A form model: the data behind a form plus its presentation metadata.
pub trait FormModel {
    /// Name used to group input names, e.g. `Post` in `Post[title]`.
    ///
    /// An empty name leaves input names ungrouped.
    fn form_name(&self) -> &str;

    /// The model's data, used as the root for property paths.
    fn data(&self) -> Value;

    /// Result of the last validation run.
    fn validation_result(&self) -> &ValidationResult;

    /// Label for an attribute. Defaults to the humanized attribute name.
    fn attribute_label(&self, attribute: &str) -> String {
        humanize(attribute)
    }

    /// Hint for an attribute.
    fn attribute_hint(&self, _attribute: &str) -> String {
        String::new()
    }

    /// Placeholder for an attribute.
    fn attribute_placeholder(&self, _attribute: &str) -> String {
        String::new()
    }

    /// Validation rules attached to an attribute.
    fn rules(&self, _attribute: &str) -> Vec<ValidationRule> {
        Vec::new()
    }
}

/// Everything a renderer needs to draw one input.
#[derive(Debug, Clone, PartialEq)]
pub struct InputData {
    pub name: String,
    pub id: String,
    pub value: Value,
    pub label: String,
    pub hint: String,
    pub placeholder: String,
    pub errors: Vec<String>,
    /// Whether validation has run for the model.
    pub validated: bool,
    pub rules: Vec<ValidationRule>,
}

impl InputData {
    /// Collects input data for an attribute expression of `model`.
    ///
    /// A missing nested element or a path running past a scalar yields a
    /// null value, so optional nested attributes render empty. Every other
    /// error is returned.
    pub fn new(model: &dyn FormModel, expression: &str, case_fold: CaseFold) -> Result<Self> {
        let expr = AttributeExpression::parse(expression)?;
        let name = input_name(model.form_name(), expression)?;
        let id = input_id(model.form_name(), expression, case_fold)?;

        let path = expr.property_path();
        let value = match PropertyPath::parse(&path.replace("[]", ""))?.resolve(&model.data()) {
            Ok(value) => value,
            Err(FormError::UndefinedElement { .. } | FormError::NotNestable { .. }) => Value::Null,
            Err(err) => return Err(err),
        };

        let result = model.validation_result();

        Ok(Self {
            name,
            id,
            value,
            label: model.attribute_label(&expr.key),
            hint: model.attribute_hint(&expr.key),
            placeholder: model.attribute_placeholder(&expr.key),
            errors: result.errors(&path).to_vec(),
            validated: result.is_validated(),
            rules: model.rules(&expr.key),
        })
    }

    /// Returns whether the input has validation errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Turns `first_name` or `firstName` into `First Name`.
pub fn humanize(attribute: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in attribute.chars() {
        if matches!(c, '_' | '-' | '.' | ' ') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if c.is_uppercase() && current.chars().last().is_some_and(char::is_lowercase) {
            words.push(std::mem::take(&mut current));
            current.push(c);
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Login {
        result: ValidationResult,
    }

    impl FormModel for Login {
        fn form_name(&self) -> &str {
            "Login"
        }

        fn data(&self) -> Value {
            Value::map([
                ("username", Value::from("admin")),
                ("profile", Value::map([("city", "Kyiv")])),
            ])
        }

        fn validation_result(&self) -> &ValidationResult {
            &self.result
        }

        fn attribute_placeholder(&self, attribute: &str) -> String {
            if attribute == "username" {
                "Your login".to_string()
            } else {
                String::new()
            }
        }
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("first_name"), "First Name");
        assert_eq!(humanize("firstName"), "First Name");
        assert_eq!(humanize("email"), "Email");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_input_data() {
        let model = Login {
            result: ValidationResult::new().with_error("username", "Already taken."),
        };
        let data = InputData::new(&model, "username", CaseFold::Unicode).unwrap();
        assert_eq!(data.name, "Login[username]");
        assert_eq!(data.id, "login-username");
        assert_eq!(data.value, Value::from("admin"));
        assert_eq!(data.label, "Username");
        assert_eq!(data.placeholder, "Your login");
        assert_eq!(data.errors, ["Already taken."]);
        assert!(data.validated);
    }

    #[test]
    fn test_optional_nested_value_is_null() {
        let model = Login {
            result: ValidationResult::new(),
        };
        let data = InputData::new(&model, "profile[zip]", CaseFold::Unicode).unwrap();
        assert_eq!(data.name, "Login[profile][zip]");
        assert!(data.value.is_null());

        let data = InputData::new(&model, "username[first]", CaseFold::Unicode).unwrap();
        assert!(data.value.is_null());
    }

    #[test]
    fn test_invalid_expression_propagates() {
        let model = Login {
            result: ValidationResult::new(),
        };
        let err = InputData::new(&model, "user name", CaseFold::Unicode).unwrap_err();
        assert!(matches!(err, FormError::InvalidAttributeExpression(_)));
    }

    #[test]
    fn test_dashed_key_rejected_before_resolution() {
        let model = Login {
            result: ValidationResult::new(),
        };
        let err = InputData::new(&model, "first-name", CaseFold::Unicode).unwrap_err();
        assert!(matches!(err, FormError::InvalidAttributeExpression(ref e) if e == "first-name"));
        assert!(input_name("Login", "first-name").is_err());
    }
}
