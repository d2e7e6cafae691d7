//! Synchronizer configuration.

/// Names the synchronizer uses to find the container and tag hidden fields.
///
/// The defaults match the page contract: a container whose id starts with
/// `selected_items`, hidden fields named `items`, and a `data-category` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Id prefix of the hidden-field container.
    pub container_prefix: String,

    /// Field name of every generated hidden input.
    pub field_name: String,

    /// Data marker key holding the category on generated inputs.
    pub category_key: String,

    /// Data key on radio controls that holds the item id.
    /// When unset (or absent on a control) the control's value is used.
    pub item_data_key: Option<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            container_prefix: "selected_items".to_string(),
            field_name: "items".to_string(),
            category_key: "category".to_string(),
            item_data_key: None,
        }
    }
}

impl SyncConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container id prefix.
    pub fn container_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.container_prefix = prefix.into();
        self
    }

    /// Set the hidden field name.
    pub fn field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = name.into();
        self
    }

    /// Set the category marker key.
    pub fn category_key(mut self, key: impl Into<String>) -> Self {
        self.category_key = key.into();
        self
    }

    /// Read item ids from this data key on the selected control.
    pub fn item_data_key(mut self, key: impl Into<String>) -> Self {
        self.item_data_key = Some(key.into());
        self
    }
}
