//! Typed tree queries.
//!
//! All searches walk the tree in document order (pre-order, children left to
//! right), so "first match" always means first in document order.

use crate::element::Element;

/// Find the first descendant of `container` whose page-visible id starts with
/// `prefix`. The container itself is not a candidate.
pub fn find_by_id_prefix<'a>(container: &'a Element, prefix: &str) -> Option<&'a Element> {
    find_by_id_prefix_path(container, prefix).and_then(|path| container.at_path(&path))
}

/// Like [`find_by_id_prefix`], but returns the child-index path from `container`.
pub fn find_by_id_prefix_path(container: &Element, prefix: &str) -> Option<Vec<usize>> {
    let mut path = Vec::new();
    if search_prefix(container, prefix, &mut path) {
        log::trace!("[find_by_id_prefix] prefix={prefix:?} path={path:?}");
        Some(path)
    } else {
        None
    }
}

fn search_prefix(element: &Element, prefix: &str, path: &mut Vec<usize>) -> bool {
    for (index, child) in element.child_elements().iter().enumerate() {
        path.push(index);
        if child.html_id().is_some_and(|id| id.starts_with(prefix)) {
            return true;
        }
        if search_prefix(child, prefix, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// Collect every descendant of `container` whose data marker `key` equals `value` exactly.
pub fn find_all_by_data<'a>(container: &'a Element, key: &str, value: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_data(container, key, value, &mut found);
    found
}

fn collect_by_data<'a>(element: &'a Element, key: &str, value: &str, out: &mut Vec<&'a Element>) {
    for child in element.child_elements() {
        if child.get_data(key).is_some_and(|v| v == value) {
            out.push(child);
        }
        collect_by_data(child, key, value, out);
    }
}

/// Child-index path from `root` to the element with `id`. The root itself has
/// an empty path.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<usize>> {
    let mut path = Vec::new();
    if search_id(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn search_id(element: &Element, id: &str, path: &mut Vec<usize>) -> bool {
    if element.id == id {
        return true;
    }
    for (index, child) in element.child_elements().iter().enumerate() {
        path.push(index);
        if search_id(child, id, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// Path to the nearest ancestor-or-self of `id` that satisfies `predicate`.
///
/// Returns None if `id` is not in the tree or no element on the way up to
/// `root` matches.
pub fn closest<F>(root: &Element, id: &str, predicate: F) -> Option<Vec<usize>>
where
    F: Fn(&Element) -> bool,
{
    let path = path_to(root, id)?;
    (0..=path.len())
        .rev()
        .find(|&len| root.at_path(&path[..len]).is_some_and(|e| predicate(e)))
        .map(|len| path[..len].to_vec())
}
