//! Built-in theme parameter sets.

use super::definition::ThemeParams;
use super::directive::{Classes, PartConfig};

impl ThemeParams {
    /// Bootstrap 5 form layout.
    pub fn bootstrap5() -> Self {
        Self {
            container_class: Classes::from("mb-3"),
            template: Some("{label}\n{input}\n{hint}\n{error}".to_string()),
            label: PartConfig {
                class: Classes::from("form-label"),
                ..PartConfig::default()
            },
            hint: PartConfig {
                tag: Some("div".to_string()),
                class: Classes::from("form-text"),
                ..PartConfig::default()
            },
            error: PartConfig {
                tag: Some("div".to_string()),
                class: Classes::from("invalid-feedback"),
                ..PartConfig::default()
            },
            set_input_id: Some(true),
            input_class: Classes::from("form-control"),
            input_valid_class: Classes::from("is-valid"),
            input_invalid_class: Classes::from("is-invalid"),
            ..Self::default()
        }
    }

    /// Bulma form layout.
    pub fn bulma() -> Self {
        Self {
            container_class: Classes::from("field"),
            template: Some("{label}\n{input}\n{hint}\n{error}".to_string()),
            input_container_tag: Some("div".to_string()),
            input_container_class: Classes::from("control"),
            label: PartConfig {
                class: Classes::from("label"),
                ..PartConfig::default()
            },
            hint: PartConfig {
                tag: Some("p".to_string()),
                class: Classes::from("help"),
                ..PartConfig::default()
            },
            error: PartConfig {
                tag: Some("p".to_string()),
                class: Classes::from("help is-danger"),
                ..PartConfig::default()
            },
            input_class: Classes::from("input"),
            input_valid_class: Classes::from("is-success"),
            input_invalid_class: Classes::from("is-danger"),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_differ() {
        assert_ne!(ThemeParams::bootstrap5(), ThemeParams::bulma());
        assert_eq!(
            ThemeParams::bulma().error.class.as_slice(),
            ["help", "is-danger"]
        );
    }
}
