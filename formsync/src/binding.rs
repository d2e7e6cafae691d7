use formdom::{check_radio, Document, Event};

use crate::{StructureError, SyncConfig, Synchronizer};

/// Event glue between a page and the [`Synchronizer`].
///
/// Change events on radio inputs are turned into a synchronize call followed by
/// the radio group's exclusive check. Everything else passes through untouched.
#[derive(Debug, Clone, Default)]
pub struct SelectionBinding {
    synchronizer: Synchronizer,
}

impl SelectionBinding {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            synchronizer: Synchronizer::new(config),
        }
    }

    pub fn synchronizer(&self) -> &Synchronizer {
        &self.synchronizer
    }

    /// Dispatch one event. Returns true if the event was a radio selection and
    /// the document was updated.
    ///
    /// Events are applied in the order they are handed in; the last selection
    /// per category wins.
    pub fn handle(&self, doc: &mut Document, event: &Event) -> Result<bool, StructureError> {
        let Event::Change { target } = event else {
            return Ok(false);
        };

        let control = doc
            .get(target)
            .ok_or_else(|| StructureError::ControlNotFound {
                control: target.clone(),
            })?;
        if !control.is_radio() {
            log::trace!("[binding] ignoring change on non-radio {target}");
            return Ok(false);
        }

        let item_id = self
            .synchronizer
            .config()
            .item_data_key
            .as_deref()
            .and_then(|key| control.get_data(key))
            .or(control.value.as_ref())
            .cloned()
            .unwrap_or_default();

        self.synchronizer.synchronize(doc, target, &item_id)?;

        // synchronize succeeded, so the form exists.
        if let Some(path) = doc.closest_form(target) {
            if let Some(form) = doc.at_path_mut(&path) {
                check_radio(form, target);
            }
        }
        Ok(true)
    }
}
