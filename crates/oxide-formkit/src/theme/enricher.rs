//! Mirroring validation rules as HTML attributes.

use std::fmt;

use super::directive::{Capability, FieldType};
use crate::html::Attributes;
use crate::validation::ValidationRule;

/// Turns an attribute's validation rules into input attributes.
pub trait ValidationRulesEnricher: fmt::Debug + Send + Sync {
    /// Returns the attributes to add to a field of type `field`.
    fn enrich(&self, field: &FieldType, rules: &[ValidationRule]) -> Attributes;
}

/// Maps rules onto the HTML5 constraint attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlAttributeEnricher;

impl ValidationRulesEnricher for HtmlAttributeEnricher {
    fn enrich(&self, field: &FieldType, rules: &[ValidationRule]) -> Attributes {
        let mut attrs = Attributes::new();
        if !field.has(Capability::IsInputField) {
            return attrs;
        }

        for rule in rules {
            match rule {
                ValidationRule::Required => attrs.set("required", "required"),
                ValidationRule::MinLength(n) => attrs.set("minlength", n.to_string()),
                ValidationRule::MaxLength(n) => attrs.set("maxlength", n.to_string()),
                ValidationRule::Pattern(pattern) => attrs.set("pattern", pattern.as_str()),
                ValidationRule::Email => attrs.set("type", "email"),
                ValidationRule::Url => attrs.set("type", "url"),
                ValidationRule::Range { min, max } => {
                    attrs.set("type", "number");
                    if let Some(min) = min {
                        attrs.set("min", min.to_string());
                    }
                    if let Some(max) = max {
                        attrs.set("max", max.to_string());
                    }
                }
            }
        }
        attrs
    }
}
