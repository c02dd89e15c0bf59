//! Property path parsing and resolution.
//!
//! A property path names a nested value with dots, brackets or both:
//! `user.address.city`, `coordinates[latitude]`, `dates[0]`.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FormError, Result};
use crate::value::{FieldLookup, Shape, Value};

static PATH_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\[\]]+$").expect("valid path regex"));

/// Diagnostic path of a walk that stopped before its first segment.
const ROOT: &str = "<root>";

/// A parsed property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    segments: Vec<String>,
}

impl PropertyPath {
    /// Parses a dotted or bracketed expression.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_formkit::PropertyPath;
    ///
    /// let path = PropertyPath::parse("array[nested][value]").unwrap();
    /// assert_eq!(path.segments(), ["array", "nested", "value"]);
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        if !PATH_CHARS.is_match(expression) {
            return Err(FormError::InvalidPath(expression.to_string()));
        }

        let normalized = expression
            .replace("][", ".")
            .replace("].", ".")
            .replace('[', ".");
        let normalized = normalized.strip_suffix(']').unwrap_or(&normalized);

        let segments: Vec<String> = normalized.split('.').map(str::to_string).collect();
        let malformed = segments
            .iter()
            .any(|s| s.is_empty() || s.contains(['[', ']']));
        if malformed {
            return Err(FormError::InvalidPath(expression.to_string()));
        }

        Ok(Self { segments })
    }

    /// Returns the path segments in walk order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Reads the value at this path.
    pub fn resolve(&self, root: &Value) -> Result<Value> {
        let mut trail = Trail::default();
        walk(root, &self.segments, &mut trail).map(Cow::into_owned)
    }

    /// Renders the path as it is walked over `root`.
    ///
    /// Segments read from a record render as `::field`, segments read from
    /// a map or list as `[key]`.
    pub fn describe(&self, root: &Value) -> Result<String> {
        let mut trail = Trail::default();
        walk(root, &self.segments, &mut trail)?;
        Ok(trail.rendered)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Reads the value named by `expression` from `root`.
pub fn resolve(root: &Value, expression: &str) -> Result<Value> {
    PropertyPath::parse(expression)?.resolve(root)
}

/// Renders the diagnostic trail for `expression` walked over `root`.
pub fn describe(root: &Value, expression: &str) -> Result<String> {
    PropertyPath::parse(expression)?.describe(root)
}

/// How a segment was reached.
#[derive(Clone, Copy)]
enum Via {
    Element,
    Field,
}

#[derive(Default)]
struct Trail {
    rendered: String,
}

impl Trail {
    fn push(&mut self, segment: &str, via: Via) {
        if self.rendered.is_empty() {
            self.rendered.push_str(segment);
            return;
        }
        match via {
            Via::Field => {
                self.rendered.push_str("::");
                self.rendered.push_str(segment);
            }
            Via::Element => {
                self.rendered.push('[');
                self.rendered.push_str(segment);
                self.rendered.push(']');
            }
        }
    }
}

fn walk<'a>(root: &'a Value, segments: &[String], trail: &mut Trail) -> Result<Cow<'a, Value>> {
    let mut current = Cow::Borrowed(root);
    for segment in segments {
        current = match current {
            Cow::Borrowed(value) => step(value, segment, trail)?,
            Cow::Owned(value) => Cow::Owned(step(&value, segment, trail)?.into_owned()),
        };
    }
    Ok(current)
}

fn step<'v>(value: &'v Value, segment: &str, trail: &mut Trail) -> Result<Cow<'v, Value>> {
    match value.shape() {
        Shape::Keyed(container) => {
            trail.push(segment, Via::Element);
            container
                .element(segment)
                .map(Cow::Borrowed)
                .ok_or_else(|| FormError::UndefinedElement {
                    path: trail.rendered.clone(),
                })
        }
        Shape::Record(record) => {
            trail.push(segment, Via::Field);
            match record.field(segment) {
                FieldLookup::Instance(field) => Ok(Cow::Owned(field)),
                FieldLookup::Static => Err(FormError::StaticField {
                    path: trail.rendered.clone(),
                    type_name: record.type_name().to_string(),
                }),
                FieldLookup::Missing => Err(FormError::UndefinedField {
                    path: trail.rendered.clone(),
                    type_name: record.type_name().to_string(),
                }),
            }
        }
        Shape::Scalar => Err(FormError::NotNestable {
            path: if trail.rendered.is_empty() {
                ROOT.to_string()
            } else {
                trail.rendered.clone()
            },
            segment: segment.to_string(),
            kind: value.kind(),
        }),
    }
}
