//! Submitted field set.

use serde::Serialize;

use crate::element::Element;
use crate::types::InputType;

/// One `name=value` pair of a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Collect the fields `form` would submit, in document order.
///
/// A control contributes when it has a non-empty name and is not disabled.
/// Radios and checkboxes contribute only while checked; submit inputs never do.
pub fn form_data(form: &Element) -> Vec<FormField> {
    let mut fields = Vec::new();
    collect(form, &mut fields);
    fields
}

fn collect(element: &Element, out: &mut Vec<FormField>) {
    if let Some(field) = successful_field(element) {
        out.push(field);
    }
    for child in element.child_elements() {
        collect(child, out);
    }
}

fn successful_field(element: &Element) -> Option<FormField> {
    let kind = element.input_type()?;
    let name = element.name.as_deref().filter(|n| !n.is_empty())?;

    if element.disabled || kind == InputType::Submit {
        return None;
    }
    if kind.is_checkable() && !element.checked {
        return None;
    }

    // Checkable controls without a value attribute submit "on".
    let default = if kind.is_checkable() { "on" } else { "" };
    let value = element.value.as_deref().unwrap_or(default);
    Some(FormField::new(name, value))
}
