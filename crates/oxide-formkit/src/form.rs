//! Form wrapper and error summary.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Div, Li, Ul};

use crate::validation::ValidationResult;

/// Renders a list of every validation error, or nothing when there are none.
pub fn error_summary(result: &ValidationResult, header: &str) -> String {
    let messages: Vec<String> = result
        .all_errors()
        .into_iter()
        .map(|(_, message)| message.to_string())
        .collect();

    if messages.is_empty() {
        return String::new();
    }

    html! { div.class("alert alert-danger") }
        .attr("role", "alert")
        .when(!header.is_empty(), |d| {
            d.child::<Div, _>(|h| h.class("fw-bold").text(header))
        })
        .child::<Ul, _>(|ul| {
            ul.class("mb-0")
                .children(messages.iter(), |message, li: Element<Li>| li.text(message))
        })
        .render()
}

/// Renders a complete form around already-rendered fields.
///
/// The error summary is placed before the fields and the submit button
/// after them. Each piece is wrapped in its own `<div>`.
pub fn render_form(
    action: &str,
    method: &str,
    fields: &[String],
    result: &ValidationResult,
    submit_label: &str,
) -> String {
    let mut form = html! {
        form.action(#action).method(#method)
    };

    let summary = error_summary(result, "");
    if !summary.is_empty() {
        form = form.child::<Div, _>(|d| d.raw(&summary));
    }

    for field_html in fields {
        form = form.child::<Div, _>(|d| d.raw(field_html));
    }

    let button = html! {
        button.type_("submit").class("btn btn-primary") {
            #submit_label
        }
    };
    form = form.child::<Div, _>(|d| d.raw(button.render()));

    form.render()
}
