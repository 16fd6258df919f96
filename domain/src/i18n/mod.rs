//! Internationalization: locales, the translation schema and the catalog.
//!
//! Components receive a [`CatalogEntry`] for the active locale and treat
//! every leaf as an opaque localized string. The only locale-dependent
//! decision outside the catalog is layout [`Direction`].

mod ar;
pub mod catalog;
mod de;
mod en;
pub mod locale;
pub mod schema;

pub use catalog::{CatalogEntry, ChoiceOption, FeatureListItem, TranslationCatalog};
pub use locale::{Direction, Locale};
pub use schema::TranslationSchema;
