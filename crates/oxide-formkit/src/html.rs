//! Minimal markup helpers for tags whose name comes from configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// HTML attributes, rendered in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    /// Attribute values by name.
    pub attrs: BTreeMap<String, String>,
}

impl Attributes {
    /// Creates new empty attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Returns whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Copies every attribute of `other` over this one.
    pub fn merge(&mut self, other: &Self) {
        for (k, v) in &other.attrs {
            self.attrs.insert(k.clone(), v.clone());
        }
    }

    /// Appends classes to the `class` attribute, skipping duplicates.
    pub fn add_class<I>(&mut self, classes: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut current: Vec<String> = self
            .get("class")
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        for class in classes {
            let class = class.as_ref();
            if !class.is_empty() && !current.iter().any(|c| c == class) {
                current.push(class.to_string());
            }
        }
        if !current.is_empty() {
            self.set("class", current.join(" "));
        }
    }

    /// Renders attributes as an HTML attribute string with a leading space.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

const VOID_ELEMENTS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

/// An element with a runtime tag name.
#[derive(Debug, Clone)]
pub struct Tag {
    name: String,
    attrs: Attributes,
    content: String,
}

impl Tag {
    /// Creates an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Attributes::new(),
            content: String::new(),
        }
    }

    /// Replaces the attributes.
    #[must_use]
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    /// Sets already-rendered inner markup.
    #[must_use]
    pub fn raw(mut self, html: impl Into<String>) -> Self {
        self.content = html.into();
        self
    }

    /// Sets escaped text content.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.content = html_escape(text);
        self
    }

    /// Renders the opening tag.
    pub fn open(&self) -> String {
        format!("<{}{}>", self.name, self.attrs.to_html())
    }

    /// Renders the closing tag.
    pub fn close(&self) -> String {
        if self.is_void() {
            String::new()
        } else {
            format!("</{}>", self.name)
        }
    }

    /// Renders the whole element.
    pub fn render(&self) -> String {
        if self.is_void() {
            self.open()
        } else {
            format!("{}{}{}", self.open(), self.content, self.close())
        }
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
