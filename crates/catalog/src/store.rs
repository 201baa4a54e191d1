//! Catalogue registry, validation, and lookup.

use linkme::distributed_slice;
use thiserror::Error;

use crate::entry::{CatalogEntry, Category, Summary};

/// All registered catalogue entries.
///
/// Registration order is link-dependent and carries no meaning; display
/// order comes from [`ORDER`].
#[distributed_slice]
pub static ENTRIES: [CatalogEntry] = [..];

/// Canonical display order: pests first, then diseases.
///
/// This list is the source of truth for ordering. [`Catalog::load`] checks
/// it is in bijection with [`ENTRIES`], so summaries derived from it can
/// never disagree with the store on membership or category.
pub static ORDER: &[&str] = &[
	"brown_planthopper",
	"yellow_stem_borer",
	"rice_leaf_folder",
	"rice_bug",
	"field_rat",
	"golden_snail",
	"rice_blast",
	"bacterial_leaf_blight",
	"sheath_blight",
	"brown_spot",
	"tungro",
];

/// Entry rendered when a requested id is not in the catalogue.
pub const DEFAULT_ID: &str = "brown_planthopper";

/// Catalogue validation failures.
///
/// Any of these means the static dataset is corrupt; they abort startup
/// rather than being handled per lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("duplicate catalogue id: {0}")]
	DuplicateId(&'static str),

	#[error("id in display order but not registered: {0}")]
	Unregistered(&'static str),

	#[error("registered entry missing from display order: {0}")]
	Unordered(&'static str),

	#[error("default entry '{0}' is not in the catalogue")]
	MissingDefault(&'static str),
}

/// Validated handle over the static catalogue.
///
/// [`Catalog::load`] checks the registry invariants once and captures the
/// default entry; after that, [`Catalog::resolve`] is total and
/// [`Catalog::get`]'s only failure mode is absence.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
	default: &'static CatalogEntry,
}

impl Catalog {
	/// Validate the registry and capture the default entry.
	pub fn load() -> Result<Self, CatalogError> {
		for (i, entry) in ENTRIES.iter().enumerate() {
			if ENTRIES[..i].iter().any(|e| e.id == entry.id) {
				return Err(CatalogError::DuplicateId(entry.id));
			}
			if !ORDER.contains(&entry.id) {
				return Err(CatalogError::Unordered(entry.id));
			}
		}
		for id in ORDER {
			if lookup(id).is_none() {
				return Err(CatalogError::Unregistered(*id));
			}
		}

		let default = lookup(DEFAULT_ID).ok_or(CatalogError::MissingDefault(DEFAULT_ID))?;
		Ok(Self { default })
	}

	/// Look up an entry by id.
	pub fn get(&self, id: &str) -> Option<&'static CatalogEntry> {
		lookup(id)
	}

	/// Resolve an id, substituting the default entry when absent.
	///
	/// Unknown ids are legal input (a stale or mistyped selection); they
	/// resolve silently rather than surfacing an error.
	pub fn resolve(&self, id: &str) -> &'static CatalogEntry {
		lookup(id).unwrap_or(self.default)
	}

	pub fn default_entry(&self) -> &'static CatalogEntry {
		self.default
	}

	/// All entries as summaries, in canonical display order.
	pub fn summaries(&self) -> Vec<Summary> {
		ORDER
			.iter()
			.filter_map(|id| lookup(id))
			.map(CatalogEntry::summary)
			.collect()
	}
}

fn lookup(id: &str) -> Option<&'static CatalogEntry> {
	ENTRIES.iter().find(|e| e.id == id)
}

/// Stable partition of summaries into (pests, diseases).
///
/// Relative order within each half matches the input; no entry is
/// duplicated or dropped.
pub fn partition(items: &[Summary]) -> (Vec<Summary>, Vec<Summary>) {
	let mut pests = Vec::new();
	let mut diseases = Vec::new();
	for item in items {
		match item.category {
			Category::Pest => pests.push(*item),
			Category::Disease => diseases.push(*item),
		}
	}
	(pests, diseases)
}
