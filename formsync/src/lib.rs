//! Radio selection to hidden field synchronization.
//!
//! Keeps exactly one hidden `items` field per radio category inside a form's
//! `selected_items` container, so a submission carries one value per category.

mod binding;
mod config;
mod error;
mod source;
mod sync;

pub use binding::SelectionBinding;
pub use config::SyncConfig;
pub use error::StructureError;
pub use source::SelectionSource;
pub use sync::Synchronizer;
