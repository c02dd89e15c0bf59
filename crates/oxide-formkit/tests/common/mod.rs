#![allow(dead_code)]

use oxide_formkit::theme::{Capability, FieldType};
use oxide_formkit::{FieldLookup, FormModel, Record, ValidationResult, ValidationRule, Value};

/// A record with one per-instance field and one type-level field.
#[derive(Debug)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Record for Coordinates {
    fn type_name(&self) -> &str {
        "Coordinates"
    }

    fn field(&self, name: &str) -> FieldLookup {
        match name {
            "latitude" => FieldLookup::Instance(Value::Float(self.latitude)),
            "longitude" => FieldLookup::Instance(Value::Float(self.longitude)),
            "precision" => FieldLookup::Static,
            _ => FieldLookup::Missing,
        }
    }
}

/// Form model with nested maps, lists and a record.
#[derive(Debug)]
pub struct FormWithNestedStructures {
    pub result: ValidationResult,
}

impl FormWithNestedStructures {
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
        }
    }

    pub fn with_result(result: ValidationResult) -> Self {
        Self { result }
    }
}

impl Record for FormWithNestedStructures {
    fn type_name(&self) -> &str {
        "FormWithNestedStructures"
    }

    fn field(&self, name: &str) -> FieldLookup {
        match name {
            "array" => FieldLookup::Instance(Value::map([(
                "nested",
                Value::map([("value", "x"), ("other", "y")]),
            )])),
            "coordinates" => FieldLookup::Instance(Value::record(Coordinates {
                latitude: 50.45,
                longitude: 30.52,
            })),
            "dates" => FieldLookup::Instance(Value::from(vec!["2024-01-15", "2024-02-01"])),
            "title" => FieldLookup::Instance(Value::from("Nested")),
            "formName" => FieldLookup::Static,
            _ => FieldLookup::Missing,
        }
    }
}

impl FormModel for FormWithNestedStructures {
    fn form_name(&self) -> &str {
        "FormWithNestedStructures"
    }

    fn data(&self) -> Value {
        Value::record(Self::with_result(self.result.clone()))
    }

    fn validation_result(&self) -> &ValidationResult {
        &self.result
    }

    fn attribute_hint(&self, attribute: &str) -> String {
        match attribute {
            "title" => "Shown on the listing page".to_string(),
            _ => String::new(),
        }
    }

    fn attribute_placeholder(&self, attribute: &str) -> String {
        match attribute {
            "title" => "Type a title".to_string(),
            _ => String::new(),
        }
    }

    fn rules(&self, attribute: &str) -> Vec<ValidationRule> {
        match attribute {
            "title" => vec![ValidationRule::Required, ValidationRule::MaxLength(100)],
            _ => Vec::new(),
        }
    }
}

pub const TEXT_INPUT: FieldType = FieldType {
    name: "TextInput",
    capabilities: &[
        Capability::IsInputField,
        Capability::HasPlaceholder,
        Capability::EnrichableFromValidationRules,
        Capability::HasValidationClass,
    ],
};

pub const PARTS_ONLY: FieldType = FieldType {
    name: "Fieldset",
    capabilities: &[Capability::HasParts],
};

pub const INPUT_ONLY: FieldType = FieldType {
    name: "Hidden",
    capabilities: &[Capability::IsInputField],
};
