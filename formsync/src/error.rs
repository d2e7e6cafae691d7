//! Page structure errors.

use thiserror::Error;

/// The page does not have the shape the synchronizer needs.
///
/// This always points at a page construction defect, so it is never retried.
/// The tree is left untouched whenever it is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("control '{control}' is not in the document")]
    ControlNotFound { control: String },

    #[error("control '{control}' has no enclosing form")]
    NoEnclosingForm { control: String },

    #[error("form '{form}' has no element with an id starting with '{prefix}'")]
    MissingContainer { form: String, prefix: String },

    #[error("control '{control}' has no group name")]
    MissingGroupName { control: String },
}
