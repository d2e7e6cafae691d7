//! Radio group checking.
//!
//! Radios sharing a `name` inside one form are mutually exclusive: checking one
//! unchecks the rest of its group.

use crate::element::{Content, Element};

/// Check the radio `id` inside `form` and uncheck the other members of its group.
///
/// Returns true if any checked state changed. Returns false when `id` is not a
/// named radio inside `form`.
pub fn check_radio(form: &mut Element, id: &str) -> bool {
    let Some(group) = crate::element::find_element(form, id)
        .filter(|e| e.is_radio())
        .and_then(|e| e.name.clone())
    else {
        return false;
    };

    let changed = set_group(form, &group, id);
    log::debug!("[check_radio] id={id} group={group} changed={changed}");
    changed
}

fn set_group(element: &mut Element, group: &str, id: &str) -> bool {
    let mut changed = false;

    if element.is_radio() && element.name.as_deref() == Some(group) {
        let checked = element.id == id;
        if element.checked != checked {
            element.checked = checked;
            changed = true;
        }
    }

    if let Content::Children(children) = &mut element.content {
        for child in children {
            changed |= set_group(child, group, id);
        }
    }
    changed
}
