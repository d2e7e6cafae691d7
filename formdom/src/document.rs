use crate::element::{find_element, find_element_mut, Element};
use crate::query;

/// An owned page tree.
///
/// Everything that reads or mutates the page takes a `Document` explicitly;
/// there is no ambient global document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn path_to(&self, id: &str) -> Option<Vec<usize>> {
        query::path_to(&self.root, id)
    }

    pub fn at_path(&self, path: &[usize]) -> Option<&Element> {
        self.root.at_path(path)
    }

    pub fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        self.root.at_path_mut(path)
    }

    /// Path to the nearest form that owns the element `id` (ancestor-or-self).
    pub fn closest_form(&self, id: &str) -> Option<Vec<usize>> {
        query::closest(&self.root, id, Element::is_form)
    }
}

impl From<Element> for Document {
    fn from(root: Element) -> Self {
        Self::new(root)
    }
}
