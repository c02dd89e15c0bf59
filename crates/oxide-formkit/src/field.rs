//! Themed text-input field.

use std::sync::Arc;

use crate::html::{Attributes, Tag};
use crate::model::InputData;
use crate::theme::{
    Capability, Directive, FieldType, PartConfig, ThemeRegistry, ValidationRulesEnricher,
};

const DEFAULT_TEMPLATE: &str = "{label}\n{input}\n{hint}\n{error}";

/// A field made of a container, label, input, hint and error message.
#[derive(Debug, Clone)]
pub struct Field {
    input_type: String,
    container_tag: String,
    container_attributes: Attributes,
    container_class: Vec<String>,
    use_container: bool,
    template: String,
    template_begin: String,
    template_end: String,
    input_container_tag: Option<String>,
    input_container_attributes: Attributes,
    input_container_class: Vec<String>,
    label: PartConfig,
    hint: PartConfig,
    error: PartConfig,
    set_input_id: bool,
    input_attributes: Attributes,
    input_class: Vec<String>,
    use_placeholder: bool,
    enrich_from_validation_rules: bool,
    enricher: Option<Arc<dyn ValidationRulesEnricher>>,
    valid_class: Vec<String>,
    invalid_class: Vec<String>,
    input_valid_class: Vec<String>,
    input_invalid_class: Vec<String>,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            container_tag: "div".to_string(),
            container_attributes: Attributes::new(),
            container_class: Vec::new(),
            use_container: true,
            template: DEFAULT_TEMPLATE.to_string(),
            template_begin: String::new(),
            template_end: String::new(),
            input_container_tag: None,
            input_container_attributes: Attributes::new(),
            input_container_class: Vec::new(),
            label: PartConfig::default(),
            hint: PartConfig::default(),
            error: PartConfig::default(),
            set_input_id: true,
            input_attributes: Attributes::new(),
            input_class: Vec::new(),
            use_placeholder: true,
            enrich_from_validation_rules: false,
            enricher: None,
            valid_class: Vec::new(),
            invalid_class: Vec::new(),
            input_valid_class: Vec::new(),
            input_invalid_class: Vec::new(),
        }
    }
}

impl Field {
    /// How themes see this field.
    pub const FIELD_TYPE: FieldType = FieldType {
        name: "Field",
        capabilities: &[
            Capability::HasParts,
            Capability::IsInputField,
            Capability::HasPlaceholder,
            Capability::EnrichableFromValidationRules,
            Capability::HasValidationClass,
        ],
    };

    /// Creates an unthemed text field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field configured by a theme.
    ///
    /// `theme` falls back to the registry's default theme. An unknown theme
    /// leaves the field unthemed.
    pub fn themed(registry: &ThemeRegistry, theme: Option<&str>) -> Self {
        let mut field = Self {
            enricher: registry.enricher(),
            ..Self::default()
        };
        if let Some(definition) = registry.lookup(theme) {
            for directive in definition.directives_for(&Self::FIELD_TYPE) {
                field = field.apply(directive);
            }
        }
        field
    }

    /// Applies one directive. Later directives override earlier ones.
    #[must_use]
    pub fn apply(mut self, directive: Directive) -> Self {
        match directive {
            Directive::ContainerTag(tag) => self.container_tag = tag,
            Directive::ContainerAttributes(attrs) => self.container_attributes = attrs,
            Directive::ContainerClass(classes) => self.container_class = classes.0,
            Directive::UseContainer(on) => self.use_container = on,
            Directive::Template(template) => self.template = template,
            Directive::TemplateBegin(begin) => self.template_begin = begin,
            Directive::TemplateEnd(end) => self.template_end = end,
            Directive::InputContainerTag(tag) => self.input_container_tag = Some(tag),
            Directive::InputContainerAttributes(attrs) => self.input_container_attributes = attrs,
            Directive::InputContainerClass(classes) => self.input_container_class = classes.0,
            Directive::LabelConfig(config) => self.label.merge(&config),
            Directive::HintConfig(config) => self.hint.merge(&config),
            Directive::ErrorConfig(config) => self.error.merge(&config),
            Directive::SetInputId(on) => self.set_input_id = on,
            Directive::InputAttributes(attrs) => self.input_attributes = attrs,
            Directive::InputClass(classes) => self.input_class = classes.0,
            Directive::UsePlaceholder(on) => self.use_placeholder = on,
            Directive::EnrichFromValidationRules(on) => self.enrich_from_validation_rules = on,
            Directive::ValidClass(classes) => self.valid_class = classes.0,
            Directive::InvalidClass(classes) => self.invalid_class = classes.0,
            Directive::InputValidClass(classes) => self.input_valid_class = classes.0,
            Directive::InputInvalidClass(classes) => self.input_invalid_class = classes.0,
        }
        self
    }

    /// Sets the input type (`text`, `email`, `password`...).
    #[must_use]
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    /// Sets an input attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.input_attributes.set(key, value);
        self
    }

    /// Sets the enricher used when enrichment is enabled.
    #[must_use]
    pub fn enricher(mut self, enricher: Arc<dyn ValidationRulesEnricher>) -> Self {
        self.enricher = Some(enricher);
        self
    }

    /// Renders the field.
    pub fn render(&self, data: &InputData) -> String {
        let parts = [
            ("{label}", self.render_label(data)),
            ("{input}", self.render_input(data)),
            ("{hint}", self.render_hint(data)),
            ("{error}", self.render_error(data)),
        ];
        let body = fill_template(&self.template, &parts);
        let content = format!("{}{}{}", self.template_begin, body, self.template_end);

        if !self.use_container {
            return content;
        }

        let mut attrs = self.container_attributes.clone();
        attrs.add_class(&self.container_class);
        if data.validated {
            if data.has_errors() {
                attrs.add_class(&self.invalid_class);
            } else {
                attrs.add_class(&self.valid_class);
            }
        }
        Tag::new(&self.container_tag)
            .attrs(attrs)
            .raw(format!("\n{content}\n"))
            .render()
    }

    fn render_input(&self, data: &InputData) -> String {
        let mut attrs = Attributes::new().with("type", &self.input_type);

        if self.enrich_from_validation_rules {
            if let Some(enricher) = &self.enricher {
                attrs.merge(&enricher.enrich(&Self::FIELD_TYPE, &data.rules));
            }
        }
        attrs.merge(&self.input_attributes);

        attrs.set("name", &data.name);
        if self.set_input_id {
            attrs.set("id", &data.id);
        }
        if let Some(value) = data.value.to_input_value() {
            attrs.set("value", value);
        }
        if self.use_placeholder && !data.placeholder.is_empty() {
            attrs.set("placeholder", &data.placeholder);
        }

        attrs.add_class(&self.input_class);
        if data.validated {
            if data.has_errors() {
                attrs.add_class(&self.input_invalid_class);
            } else {
                attrs.add_class(&self.input_valid_class);
            }
        }

        let input = Tag::new("input").attrs(attrs).render();
        match &self.input_container_tag {
            Some(tag) => {
                let mut container = self.input_container_attributes.clone();
                container.add_class(&self.input_container_class);
                Tag::new(tag).attrs(container).raw(input).render()
            }
            None => input,
        }
    }

    fn render_label(&self, data: &InputData) -> String {
        if data.label.is_empty() {
            return String::new();
        }
        let mut attrs = self.label.attributes.clone();
        attrs.add_class(self.label.class.as_slice());
        if self.label.use_input_id.unwrap_or(self.set_input_id) {
            attrs.set("for", &data.id);
        }
        part_tag(&self.label, "label")
            .attrs(attrs)
            .text(&data.label)
            .render()
    }

    fn render_hint(&self, data: &InputData) -> String {
        if data.hint.is_empty() {
            return String::new();
        }
        let mut attrs = self.hint.attributes.clone();
        attrs.add_class(self.hint.class.as_slice());
        part_tag(&self.hint, "div")
            .attrs(attrs)
            .text(&data.hint)
            .render()
    }

    fn render_error(&self, data: &InputData) -> String {
        let Some(message) = data.errors.first() else {
            return String::new();
        };
        let mut attrs = self.error.attributes.clone();
        attrs.add_class(self.error.class.as_slice());
        part_tag(&self.error, "div")
            .attrs(attrs)
            .text(message)
            .render()
    }
}

fn part_tag(config: &PartConfig, default: &str) -> Tag {
    Tag::new(config.tag.as_deref().unwrap_or(default))
}

/// Replaces `{token}` placeholders in one pass and drops template lines
/// that expand to nothing. Inserted parts are kept as-is.
fn fill_template(template: &str, parts: &[(&str, String)]) -> String {
    template
        .lines()
        .map(|line| fill_line(line, parts))
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn fill_line(line: &str, parts: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    'scan: while !rest.is_empty() {
        for (token, html) in parts {
            if let Some(after) = rest.strip_prefix(token) {
                out.push_str(html);
                rest = after;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}
