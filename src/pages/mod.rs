//! Built-in settings pages.

mod colors;
mod fields;
mod general;
mod source;

pub use colors::ColorsPage;
pub use fields::{Field, FieldKind, FieldList};
pub use general::GeneralPage;
pub use source::SourcePage;

use crate::config::ConfigStore;
use crate::dialog::ConfigPage;

/// Pages in navigator order.
pub fn default_pages(store: &ConfigStore) -> Vec<Box<dyn ConfigPage>> {
    vec![
        Box::new(GeneralPage::new(store.clone())),
        Box::new(SourcePage::new(store.clone())),
        Box::new(ColorsPage::new(store.clone())),
    ]
}
