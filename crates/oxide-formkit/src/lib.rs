//! # oxide-formkit
//!
//! Input naming, property-path resolution and themed field rendering for
//! server-side HTML forms.
//!
//! This crate provides:
//! - Property paths (`user.address.city`, `coordinates[latitude]`) resolved
//!   against form model data
//! - Input `name`/`id` generation with tabular (`[0]content`) support
//! - Themes: named rendering defaults applied to fields as directives
//! - A themed text field and a form wrapper
//!
//! ## Naming inputs
//!
//! ```rust
//! use oxide_formkit::{input_id, input_name, CaseFold};
//!
//! let name = input_name("FormWithNestedStructures", "coordinates[latitude]").unwrap();
//! assert_eq!(name, "FormWithNestedStructures[coordinates][latitude]");
//!
//! let id = input_id("Post", "[0]content", CaseFold::Unicode).unwrap();
//! assert_eq!(id, "post-0-content");
//! ```
//!
//! ## Resolving values
//!
//! ```rust
//! use oxide_formkit::{describe, resolve, Value};
//!
//! let root = Value::map([("dates", Value::from(vec!["2024-01-15"]))]);
//! assert_eq!(resolve(&root, "dates[0]").unwrap(), Value::from("2024-01-15"));
//! assert_eq!(describe(&root, "dates.0").unwrap(), "dates[0]");
//! ```
//!
//! ## Themes
//!
//! ```rust
//! use oxide_formkit::theme::{Capability, Classes, Directive, FieldType, ThemeParams, ThemeRegistry};
//!
//! let mut registry = ThemeRegistry::new();
//! registry.initialize(
//!     [("bulma", ThemeParams {
//!         container_class: Classes::from("field"),
//!         input_class: Classes::from("input"),
//!         ..ThemeParams::default()
//!     })],
//!     Some("bulma"),
//!     None,
//! );
//!
//! const TEXT: FieldType = FieldType {
//!     name: "Text",
//!     capabilities: &[Capability::IsInputField],
//! };
//! let directives = registry.lookup(None).unwrap().directives_for(&TEXT);
//! assert!(directives.contains(&Directive::InputClass(Classes::from("input"))));
//! ```
//!
//! ## Rendering a field
//!
//! ```rust
//! use oxide_formkit::theme::{ThemeParams, ThemeRegistry};
//! use oxide_formkit::{CaseFold, Field, FormModel, InputData, ValidationResult, Value};
//!
//! struct Post {
//!     result: ValidationResult,
//! }
//!
//! impl FormModel for Post {
//!     fn form_name(&self) -> &str {
//!         "Post"
//!     }
//!
//!     fn data(&self) -> Value {
//!         Value::map([("title", "Hello")])
//!     }
//!
//!     fn validation_result(&self) -> &ValidationResult {
//!         &self.result
//!     }
//! }
//!
//! let mut registry = ThemeRegistry::new();
//! registry.initialize([("bootstrap5", ThemeParams::bootstrap5())], Some("bootstrap5"), None);
//!
//! let post = Post { result: ValidationResult::new() };
//! let data = InputData::new(&post, "title", CaseFold::Unicode).unwrap();
//! let html = Field::themed(&registry, None).render(&data);
//! assert!(html.contains(r#"class="form-control""#));
//! assert!(html.contains(r#"name="Post[title]""#));
//! ```

mod error;
mod field;
mod form;
pub mod html;
mod model;
mod naming;
mod path;
pub mod theme;
pub mod validation;
mod value;

pub use error::{FormError, Result};
pub use field::Field;
pub use form::{error_summary, render_form};
pub use model::{humanize, FormModel, InputData};
pub use naming::{attribute_name, input_id, input_name, AttributeExpression, CaseFold};
pub use path::{describe, resolve, PropertyPath};
pub use validation::{ValidationResult, ValidationRule};
pub use value::{FieldLookup, Record, Shape, Value, ValueKind};
