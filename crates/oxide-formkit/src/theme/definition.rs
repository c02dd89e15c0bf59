//! Theme parameters and the directives they produce.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::directive::{Capability, Classes, Directive, FieldType, PartConfig};
use crate::html::Attributes;

/// Raw theme settings as supplied by the application.
///
/// Every setting is optional; unset settings produce no directive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeParams {
    pub container_tag: Option<String>,
    pub container_attributes: Attributes,
    pub container_class: Classes,
    pub use_container: Option<bool>,
    pub template: Option<String>,
    pub template_begin: Option<String>,
    pub template_end: Option<String>,
    pub input_container_tag: Option<String>,
    pub input_container_attributes: Attributes,
    pub input_container_class: Classes,
    pub label: PartConfig,
    pub hint: PartConfig,
    pub error: PartConfig,
    pub set_input_id: Option<bool>,
    pub input_attributes: Attributes,
    pub input_class: Classes,
    pub use_placeholder: Option<bool>,
    pub enrich_from_validation_rules: Option<bool>,
    pub valid_class: Classes,
    pub invalid_class: Classes,
    pub input_valid_class: Classes,
    pub input_invalid_class: Classes,
    /// Extra directives appended for one field type, keyed by type name.
    pub field_configs: BTreeMap<String, Vec<Directive>>,
}

/// An instantiated, immutable theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDefinition {
    params: ThemeParams,
}

impl ThemeDefinition {
    /// Builds a definition, dropping empty tags and templates.
    pub fn new(mut params: ThemeParams) -> Self {
        for tag in [
            &mut params.container_tag,
            &mut params.input_container_tag,
            &mut params.label.tag,
            &mut params.hint.tag,
            &mut params.error.tag,
        ] {
            if tag.as_deref().is_some_and(str::is_empty) {
                *tag = None;
            }
        }
        Self { params }
    }

    /// Returns the settings this theme was built from.
    pub fn params(&self) -> &ThemeParams {
        &self.params
    }

    /// Returns the directives to apply to a field of the given type, in
    /// application order.
    ///
    /// Settings are only emitted when set and when the field type declares
    /// the capability that governs them. Per-field-type overrides come last.
    pub fn directives_for(&self, field: &FieldType) -> Vec<Directive> {
        let p = &self.params;
        let mut directives = Vec::new();

        push_text(&mut directives, &p.container_tag, Directive::ContainerTag);
        push_attrs(&mut directives, &p.container_attributes, Directive::ContainerAttributes);
        push_classes(&mut directives, &p.container_class, Directive::ContainerClass);
        push_flag(&mut directives, p.use_container, Directive::UseContainer);

        if field.has(Capability::HasParts) {
            push_text(&mut directives, &p.template, Directive::Template);
            push_text(&mut directives, &p.template_begin, Directive::TemplateBegin);
            push_text(&mut directives, &p.template_end, Directive::TemplateEnd);
            push_text(&mut directives, &p.input_container_tag, Directive::InputContainerTag);
            push_attrs(
                &mut directives,
                &p.input_container_attributes,
                Directive::InputContainerAttributes,
            );
            push_classes(
                &mut directives,
                &p.input_container_class,
                Directive::InputContainerClass,
            );
            push_part(&mut directives, &p.label, Directive::LabelConfig);
            push_part(&mut directives, &p.hint, Directive::HintConfig);
            push_part(&mut directives, &p.error, Directive::ErrorConfig);
        }

        if field.has(Capability::IsInputField) {
            push_flag(&mut directives, p.set_input_id, Directive::SetInputId);
            push_attrs(&mut directives, &p.input_attributes, Directive::InputAttributes);
            push_classes(&mut directives, &p.input_class, Directive::InputClass);
        }

        if field.has(Capability::HasPlaceholder) {
            push_flag(&mut directives, p.use_placeholder, Directive::UsePlaceholder);
        }

        if field.has(Capability::EnrichableFromValidationRules) {
            push_flag(
                &mut directives,
                p.enrich_from_validation_rules,
                Directive::EnrichFromValidationRules,
            );
        }

        if field.has(Capability::HasValidationClass) {
            push_classes(&mut directives, &p.valid_class, Directive::ValidClass);
            push_classes(&mut directives, &p.invalid_class, Directive::InvalidClass);
            push_classes(&mut directives, &p.input_valid_class, Directive::InputValidClass);
            push_classes(&mut directives, &p.input_invalid_class, Directive::InputInvalidClass);
        }

        if let Some(overrides) = p.field_configs.get(field.name) {
            directives.extend(overrides.iter().cloned());
        }

        trace!(field = field.name, count = directives.len(), "Theme directives");
        directives
    }
}

fn push_text(out: &mut Vec<Directive>, value: &Option<String>, make: fn(String) -> Directive) {
    if let Some(value) = value.as_ref().filter(|v| !v.is_empty()) {
        out.push(make(value.clone()));
    }
}

fn push_attrs(out: &mut Vec<Directive>, value: &Attributes, make: fn(Attributes) -> Directive) {
    if !value.is_empty() {
        out.push(make(value.clone()));
    }
}

fn push_classes(out: &mut Vec<Directive>, value: &Classes, make: fn(Classes) -> Directive) {
    if !value.is_empty() {
        out.push(make(value.clone()));
    }
}

fn push_part(out: &mut Vec<Directive>, value: &PartConfig, make: fn(PartConfig) -> Directive) {
    if !value.is_empty() {
        out.push(make(value.clone()));
    }
}

fn push_flag(out: &mut Vec<Directive>, value: Option<bool>, make: fn(bool) -> Directive) {
    if let Some(value) = value {
        out.push(make(value));
    }
}
