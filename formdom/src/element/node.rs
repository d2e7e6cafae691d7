use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{InputType, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    /// True while `id` is a generated address rather than a page-visible id.
    /// Generated ids never match id-prefix queries and are not rendered.
    pub auto_id: bool,

    pub tag: Tag,

    // Form attributes
    pub name: Option<String>,
    pub value: Option<String>,
    pub checked: bool,
    pub disabled: bool,

    // Dataset (`data-*` markers)
    pub data: HashMap<String, String>,

    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self::with_tag("el", Tag::Div)
    }
}

impl Element {
    fn with_tag(prefix: &str, tag: Tag) -> Self {
        Self {
            id: generate_id(prefix),
            auto_id: true,
            tag,
            name: None,
            value: None,
            checked: false,
            disabled: false,
            data: HashMap::new(),
            content: Content::None,
        }
    }

    pub fn form() -> Self {
        Self::with_tag("form", Tag::Form)
    }

    pub fn div() -> Self {
        Self::with_tag("div", Tag::Div)
    }

    pub fn fieldset() -> Self {
        Self::with_tag("fieldset", Tag::Fieldset)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::with_tag("label", Tag::Label)
        }
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::with_tag("span", Tag::Span)
        }
    }

    /// Create an input of the given kind with name and value attributes.
    pub fn input(kind: InputType, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Self::with_tag("input", Tag::Input(kind))
        }
    }

    pub fn text_input(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::input(InputType::Text, name, value)
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::input(InputType::Radio, name, value)
    }

    pub fn checkbox(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::input(InputType::Checkbox, name, value)
    }

    pub fn hidden_input(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::input(InputType::Hidden, name, value)
    }

    /// A submit button. Submit inputs never contribute to the submitted field set.
    pub fn submit(label: impl Into<String>) -> Self {
        Self {
            value: Some(label.into()),
            ..Self::with_tag("input", Tag::Input(InputType::Submit))
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self.auto_id = false;
        self
    }

    /// The id as the page sees it. Generated ids are not visible.
    pub fn html_id(&self) -> Option<&str> {
        if self.auto_id {
            None
        } else {
            Some(&self.id)
        }
    }

    // Attributes
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn input_type(&self) -> Option<InputType> {
        self.tag.input_type()
    }

    pub fn is_form(&self) -> bool {
        self.tag == Tag::Form
    }

    pub fn is_radio(&self) -> bool {
        self.input_type() == Some(InputType::Radio)
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Direct children, empty for text or childless elements.
    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    /// Append `child` as the last child. Text content is replaced.
    pub fn append_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Remove every descendant matching `predicate`, at any depth.
    ///
    /// A matching element is removed together with its subtree. Survivors keep
    /// their relative order. Returns the number of removed elements (subtrees
    /// count once).
    pub fn remove_descendants_where<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&Element) -> bool,
    {
        remove_matching(self, &predicate)
    }

    /// Follow a child-index path from this element.
    pub fn at_path(&self, path: &[usize]) -> Option<&Element> {
        let mut current = self;
        for &index in path {
            current = current.child_elements().get(index)?;
        }
        Some(current)
    }

    pub fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        let mut current = self;
        for &index in path {
            current = match &mut current.content {
                Content::Children(children) => children.get_mut(index)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

fn remove_matching(element: &mut Element, predicate: &dyn Fn(&Element) -> bool) -> usize {
    let Content::Children(children) = &mut element.content else {
        return 0;
    };

    let before = children.len();
    children.retain(|child| !predicate(child));
    let mut removed = before - children.len();

    for child in children.iter_mut() {
        removed += remove_matching(child, predicate);
    }
    removed
}
