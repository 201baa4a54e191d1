//! Static catalogue of rice pest & disease risk models.
//!
//! The catalogue is compiled-in constant data: one [`CatalogEntry`] per
//! pest or disease, holding the display record for its risk model (name,
//! scientific name, category, description, formula pseudo-code, variable
//! glossary, citation). Entries register into a distributed slice at link
//! time; [`Catalog::load`] validates the registry once at startup and hands
//! out a cheap copyable handle for lookup.
//!
//! No risk computation happens here. The formula content is a sequence of
//! typed tokens ([`formula::Token`]) describing the model's pseudo-code;
//! frontends style tokens by kind and render them verbatim.

pub mod entry;
pub mod formula;
pub mod store;

mod entries;

pub use entry::{CatalogEntry, Category, Summary, Variable};
pub use formula::{FormulaLine, Token, TokenKind};
pub use store::{Catalog, CatalogError, DEFAULT_ID, ENTRIES, ORDER, partition};
