//! Card system: identifiers, definitions, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Client identifier of a card definition
//! - `CardSet`, `CardClass`: Opaque set and class identifiers
//! - `CardDefinition`: Static card data
//! - `CardCatalog`: Read-only lookup trait the engine consumes
//! - `CardRegistry`: In-memory `CardCatalog`

pub mod definition;
pub mod registry;

pub use definition::{CardClass, CardDefinition, CardId, CardSet};
pub use registry::{CardCatalog, CardRegistry};
