//! Themes: named rendering defaults applied to fields as directives.

mod definition;
mod directive;
mod enricher;
mod presets;
mod registry;

pub use definition::{ThemeDefinition, ThemeParams};
pub use directive::{Capability, Classes, Directive, FieldType, PartConfig};
pub use enricher::{HtmlAttributeEnricher, ValidationRulesEnricher};
pub use registry::ThemeRegistry;
