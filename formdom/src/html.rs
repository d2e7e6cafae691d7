//! HTML serialization.

use std::fmt::Write;

use crate::element::{Content, Element};

/// Escapes a string for use in HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Serialize `element` and its subtree as compact HTML.
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    let tag = element.tag.as_str();
    out.push('<');
    out.push_str(tag);

    if let Some(id) = element.html_id() {
        write_attr(out, "id", id);
    }
    if let Some(kind) = element.input_type() {
        write_attr(out, "type", kind.as_str());
    }
    if let Some(name) = &element.name {
        write_attr(out, "name", name);
    }
    if let Some(value) = &element.value {
        write_attr(out, "value", value);
    }
    if element.checked {
        out.push_str(" checked");
    }
    if element.disabled {
        out.push_str(" disabled");
    }

    let mut data: Vec<_> = element.data.iter().collect();
    data.sort();
    for (key, value) in data {
        write_attr(out, &format!("data-{key}"), value);
    }
    out.push('>');

    if element.tag.is_void() {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_html(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    let _ = write!(out, "</{tag}>");
}

fn write_attr(out: &mut String, key: &str, value: &str) {
    let _ = write!(out, r#" {}="{}""#, key, escape_html(value));
}
