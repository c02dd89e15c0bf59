//! Configuration directives a theme applies to a field.

use serde::{Deserialize, Serialize};

use crate::html::Attributes;

/// A list of CSS classes.
///
/// Configuration may give a single string or a list; a single string is
/// split on whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ClassesRepr", into = "Vec<String>")]
pub struct Classes(pub Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum ClassesRepr {
    One(String),
    Many(Vec<String>),
}

impl From<ClassesRepr> for Classes {
    fn from(repr: ClassesRepr) -> Self {
        match repr {
            ClassesRepr::One(s) => Self::from(s.as_str()),
            ClassesRepr::Many(list) => Self(list.into_iter().filter(|c| !c.is_empty()).collect()),
        }
    }
}

impl From<Classes> for Vec<String> {
    fn from(classes: Classes) -> Self {
        classes.0
    }
}

impl From<&str> for Classes {
    fn from(s: &str) -> Self {
        Self(s.split_whitespace().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Classes {
    fn from(list: [&str; N]) -> Self {
        Self(list.iter().map(|c| (*c).to_string()).collect())
    }
}

impl Classes {
    /// Returns whether there is no class.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the classes as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Settings for a label, hint or error part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartConfig {
    /// Tag name replacing the part's default tag.
    pub tag: Option<String>,
    /// Extra attributes.
    pub attributes: Attributes,
    /// CSS classes.
    pub class: Classes,
    /// For labels: whether `for` points at the input id. Unset follows the
    /// field's own id setting.
    pub use_input_id: Option<bool>,
}

impl PartConfig {
    /// Returns whether nothing is configured.
    pub fn is_empty(&self) -> bool {
        self.tag.is_none()
            && self.attributes.is_empty()
            && self.class.is_empty()
            && self.use_input_id.is_none()
    }

    /// Overlays `other` on this config: tag, `use_input_id` and non-empty
    /// classes replace, attributes merge.
    pub fn merge(&mut self, other: &Self) {
        if other.tag.is_some() {
            self.tag.clone_from(&other.tag);
        }
        self.attributes.merge(&other.attributes);
        if !other.class.is_empty() {
            self.class = other.class.clone();
        }
        if other.use_input_id.is_some() {
            self.use_input_id = other.use_input_id;
        }
    }
}

/// A single configuration instruction for a field.
///
/// Serialized as `{"name": "input-class", "args": ["form-control"]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "args", rename_all = "kebab-case")]
pub enum Directive {
    ContainerTag(String),
    ContainerAttributes(Attributes),
    ContainerClass(Classes),
    UseContainer(bool),
    Template(String),
    TemplateBegin(String),
    TemplateEnd(String),
    InputContainerTag(String),
    InputContainerAttributes(Attributes),
    InputContainerClass(Classes),
    LabelConfig(PartConfig),
    HintConfig(PartConfig),
    ErrorConfig(PartConfig),
    SetInputId(bool),
    InputAttributes(Attributes),
    InputClass(Classes),
    UsePlaceholder(bool),
    EnrichFromValidationRules(bool),
    ValidClass(Classes),
    InvalidClass(Classes),
    InputValidClass(Classes),
    InputInvalidClass(Classes),
}

impl Directive {
    /// Returns the directive name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ContainerTag(_) => "container-tag",
            Self::ContainerAttributes(_) => "container-attributes",
            Self::ContainerClass(_) => "container-class",
            Self::UseContainer(_) => "use-container",
            Self::Template(_) => "template",
            Self::TemplateBegin(_) => "template-begin",
            Self::TemplateEnd(_) => "template-end",
            Self::InputContainerTag(_) => "input-container-tag",
            Self::InputContainerAttributes(_) => "input-container-attributes",
            Self::InputContainerClass(_) => "input-container-class",
            Self::LabelConfig(_) => "label-config",
            Self::HintConfig(_) => "hint-config",
            Self::ErrorConfig(_) => "error-config",
            Self::SetInputId(_) => "set-input-id",
            Self::InputAttributes(_) => "input-attributes",
            Self::InputClass(_) => "input-class",
            Self::UsePlaceholder(_) => "use-placeholder",
            Self::EnrichFromValidationRules(_) => "enrich-from-validation-rules",
            Self::ValidClass(_) => "valid-class",
            Self::InvalidClass(_) => "invalid-class",
            Self::InputValidClass(_) => "input-valid-class",
            Self::InputInvalidClass(_) => "input-invalid-class",
        }
    }
}

/// A capability a field type declares, gating which directives it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Rendered from a template with label, input, hint and error parts.
    HasParts,
    /// Renders a form input element.
    IsInputField,
    /// Supports a placeholder.
    HasPlaceholder,
    /// Can mirror validation rules as HTML attributes.
    EnrichableFromValidationRules,
    /// Receives valid/invalid CSS classes after validation.
    HasValidationClass,
}

/// A field type as seen by a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldType {
    /// Type name matched against per-field-type overrides.
    pub name: &'static str,
    /// Declared capabilities.
    pub capabilities: &'static [Capability],
}

impl FieldType {
    /// Returns whether the type declares a capability.
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}
