use formdom::Element;
use serde::{Deserialize, Serialize};

use crate::StructureError;

/// The selection that triggered a synchronization: which group, which item.
///
/// Call sites build this from whatever native event their runtime delivers, so
/// the synchronizer never sees the event itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionSource {
    pub group_name: String,
    pub selected_value: String,
}

impl SelectionSource {
    pub fn new(group_name: impl Into<String>, selected_value: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            selected_value: selected_value.into(),
        }
    }

    /// Use the control's name as the group and its value as the item id.
    pub fn from_control(control: &Element) -> Result<Self, StructureError> {
        let value = control.value.clone().unwrap_or_default();
        Self::from_control_with_item(control, value)
    }

    /// Use the control's name as the group with a caller-supplied item id.
    pub fn from_control_with_item(
        control: &Element,
        item_id: impl Into<String>,
    ) -> Result<Self, StructureError> {
        let group = control
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| StructureError::MissingGroupName {
                control: control.id.clone(),
            })?;
        Ok(Self::new(group, item_id))
    }
}
