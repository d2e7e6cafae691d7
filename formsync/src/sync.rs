use formdom::query::find_by_id_prefix_path;
use formdom::{Document, Element};

use crate::{SelectionSource, StructureError, SyncConfig};

/// Rewrites a form's hidden-field container after a radio selection.
///
/// For the selected category the container ends up holding exactly one hidden
/// field whose value is the selected item. Fields of other categories keep
/// their relative order; the new field is always appended last.
///
/// # Example
///
/// ```
/// use formdom::{form_data, Document, Element, FormField};
/// use formsync::Synchronizer;
///
/// let mut doc = Document::new(
///     Element::form()
///         .child(Element::radio("size", "M").id("size-M"))
///         .child(Element::div().id("selected_items")),
/// );
///
/// Synchronizer::default().synchronize(&mut doc, "size-M", "M").unwrap();
/// let items = form_data(doc.root());
/// assert_eq!(items, vec![FormField::new("items", "M")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Synchronizer {
    config: SyncConfig,
}

impl Synchronizer {
    pub fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Record `item_id` as the selection for the category of `control_id`.
    ///
    /// The category is the control's name. The container is the first element
    /// in document order, inside the control's nearest form, whose id starts
    /// with the configured prefix. All lookups happen before the first
    /// mutation, so on error the document is unchanged.
    pub fn synchronize(
        &self,
        doc: &mut Document,
        control_id: &str,
        item_id: &str,
    ) -> Result<(), StructureError> {
        let control = doc
            .get(control_id)
            .ok_or_else(|| StructureError::ControlNotFound {
                control: control_id.to_string(),
            })?;

        let form_path = doc
            .closest_form(control_id)
            .ok_or_else(|| StructureError::NoEnclosingForm {
                control: control_id.to_string(),
            })?;
        let form = doc
            .at_path(&form_path)
            .ok_or_else(|| StructureError::NoEnclosingForm {
                control: control_id.to_string(),
            })?;

        let container_path = self.container_path(form)?;
        let source = SelectionSource::from_control_with_item(control, item_id)?;
        let form_id = form.id.clone();

        log::debug!(
            "[synchronize] control={} form={} category={} item={}",
            control_id,
            form_id,
            source.group_name,
            source.selected_value
        );

        let path: Vec<usize> = form_path.into_iter().chain(container_path).collect();
        let container = doc
            .at_path_mut(&path)
            .ok_or_else(|| StructureError::MissingContainer {
                form: form_id,
                prefix: self.config.container_prefix.clone(),
            })?;
        self.replace(container, &source);
        Ok(())
    }

    /// Record `source` inside `form` without going through a control.
    pub fn apply(&self, form: &mut Element, source: &SelectionSource) -> Result<(), StructureError> {
        let container_path = self.container_path(form)?;
        let form_id = form.id.clone();
        let container = form
            .at_path_mut(&container_path)
            .ok_or_else(|| StructureError::MissingContainer {
                form: form_id,
                prefix: self.config.container_prefix.clone(),
            })?;
        self.replace(container, source);
        Ok(())
    }

    fn container_path(&self, form: &Element) -> Result<Vec<usize>, StructureError> {
        find_by_id_prefix_path(form, &self.config.container_prefix).ok_or_else(|| {
            StructureError::MissingContainer {
                form: form.id.clone(),
                prefix: self.config.container_prefix.clone(),
            }
        })
    }

    /// Clear-then-insert: drop every input of the category, append the new one.
    ///
    /// Only input elements are removed. A wrapper carrying the marker stays,
    /// together with whatever fields of other categories it holds.
    fn replace(&self, container: &mut Element, source: &SelectionSource) {
        let key = self.config.category_key.as_str();
        let category = source.group_name.as_str();

        let removed = container.remove_descendants_where(|e| {
            e.input_type().is_some() && e.get_data(key).is_some_and(|marker| marker == category)
        });

        container.append_child(
            Element::hidden_input(&self.config.field_name, &source.selected_value)
                .data(key, category),
        );

        log::trace!(
            "[synchronize] container={} category={} removed={} now={}",
            container.id,
            category,
            removed,
            container.child_elements().len()
        );
    }
}
