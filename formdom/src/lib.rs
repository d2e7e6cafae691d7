pub mod document;
pub mod element;
pub mod event;
pub mod form;
pub mod html;
pub mod query;
pub mod radio;
pub mod types;

pub use document::Document;
pub use element::Element;
pub use event::Event;
pub use form::{form_data, FormField};
pub use html::to_html;
pub use query::{closest, find_all_by_data, find_by_id_prefix, path_to};
pub use radio::check_radio;
pub use types::*;
