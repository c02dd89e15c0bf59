//! Tests for input name and id generation.

use oxide_formkit::{attribute_name, input_id, input_name, CaseFold, FormError};

#[test]
fn flat_key_with_form_name() {
    assert_eq!(input_name("Post", "title").unwrap(), "Post[title]");
}

#[test]
fn flat_key_without_form_name() {
    assert_eq!(input_name("", "title").unwrap(), "title");
}

#[test]
fn id_is_derived_from_name() {
    assert_eq!(input_name("Post", "content").unwrap(), "Post[content]");
    assert_eq!(
        input_id("Post", "content", CaseFold::Unicode).unwrap(),
        "post-content"
    );
}

#[test]
fn nested_structure_scenario() {
    let form = "FormWithNestedStructures";
    assert_eq!(
        input_name(form, "coordinates[latitude]").unwrap(),
        "FormWithNestedStructures[coordinates][latitude]"
    );
    assert_eq!(
        input_id(form, "coordinates[latitude]", CaseFold::Unicode).unwrap(),
        "formwithnestedstructures-coordinates-latitude"
    );
}

#[test]
fn tabular_prefix() {
    assert_eq!(input_name("Post", "[0]content").unwrap(), "Post[0][content]");
    assert_eq!(
        input_name("Post", "[1][author]name[first]").unwrap(),
        "Post[1][author][name][first]"
    );
}

#[test]
fn tabular_prefix_requires_form_name() {
    for expression in ["[0]content", "[a]b", "[]items"] {
        assert!(
            matches!(
                input_name("", expression),
                Err(FormError::EmptyFormNameForTabularInput(_))
            ),
            "{expression:?} should need a form name"
        );
    }
    assert!(input_id("", "[0]content", CaseFold::Unicode).is_err());
}

#[test]
fn multiple_value_suffix() {
    assert_eq!(input_name("Post", "tags[]").unwrap(), "Post[tags][]");
    assert_eq!(
        input_id("Post", "tags[]", CaseFold::Unicode).unwrap(),
        "post-tags"
    );
}

#[test]
fn dotted_key_and_spaces() {
    assert_eq!(input_name("", "user.login").unwrap(), "user.login");
    assert_eq!(
        input_id("My Form", "user.login", CaseFold::Ascii).unwrap(),
        "my-form-user-login"
    );
}

#[test]
fn invalid_expression() {
    for expression in ["", "two words", "bad]", "[0]", "name[0"] {
        assert!(
            matches!(
                input_name("Post", expression),
                Err(FormError::InvalidAttributeExpression(_))
            ),
            "{expression:?} should be rejected"
        );
    }
}

#[test]
fn attribute_name_strips_prefix_and_suffix() {
    assert_eq!(attribute_name("[0]dates[1]").unwrap(), "dates");
    assert_eq!(attribute_name("title").unwrap(), "title");
}
