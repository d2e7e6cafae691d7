//! Demo page construction from command-line groups.

use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use formdom::Element;

/// A radio group: its name and the values offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub values: Vec<String>,
}

/// Parse `name=v1,v2,...`.
pub fn parse_group(spec: &str) -> Result<Group> {
    let (name, values) = spec
        .split_once('=')
        .with_context(|| format!("group '{spec}' must look like name=value1,value2"))?;
    let name = name.trim();
    if name.is_empty() {
        bail!("group '{spec}' has an empty name");
    }

    let values: Vec<String> = values
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect();
    if values.is_empty() {
        bail!("group '{name}' offers no values");
    }

    let mut seen = HashSet::new();
    if let Some(dup) = values.iter().find(|v| !seen.insert(v.as_str())) {
        bail!("group '{name}' offers '{dup}' twice");
    }

    Ok(Group {
        name: name.to_string(),
        values,
    })
}

/// Parse every `--group`, rejecting a name given twice.
pub fn parse_groups<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Group>> {
    let mut groups: Vec<Group> = Vec::with_capacity(specs.len());
    for spec in specs {
        let group = parse_group(spec.as_ref())?;
        if groups.iter().any(|g| g.name == group.name) {
            bail!("group '{}' is defined twice", group.name);
        }
        groups.push(group);
    }
    Ok(groups)
}

/// Parse `name=value` against the known groups. Returns (group, value).
pub fn parse_selection<'a>(spec: &'a str, groups: &[Group]) -> Result<(&'a str, &'a str)> {
    let (name, value) = spec
        .split_once('=')
        .with_context(|| format!("selection '{spec}' must look like name=value"))?;

    let group = groups
        .iter()
        .find(|g| g.name == name)
        .with_context(|| format!("selection '{spec}' names an unknown group '{name}'"))?;
    if !group.values.iter().any(|v| v == value) {
        bail!("group '{name}' has no value '{value}'");
    }

    Ok((name, value))
}

/// One fieldset of radios per group, followed by the hidden-field container.
///
/// Radios keep generated ids. They are addressed through [`find_radio`] and
/// never compete with the container in id-prefix lookups.
pub fn build_form(groups: &[Group], container_id: &str) -> Element {
    let fieldsets = groups.iter().map(|group| {
        Element::fieldset()
            .child(Element::label(group.name.clone()))
            .children(
                group
                    .values
                    .iter()
                    .map(|value| Element::radio(&group.name, value)),
            )
    });

    Element::form()
        .id("order")
        .children(fieldsets)
        .child(Element::div().id(container_id))
        .child(Element::submit("Order"))
}

/// Id of the radio with this name and value, first in document order.
pub fn find_radio(root: &Element, group: &str, value: &str) -> Option<String> {
    if root.is_radio()
        && root.name.as_deref() == Some(group)
        && root.value.as_deref() == Some(value)
    {
        return Some(root.id.clone());
    }
    root.child_elements()
        .iter()
        .find_map(|child| find_radio(child, group, value))
}
