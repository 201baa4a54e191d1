//! Catalogue registry and lookup properties.

use pretty_assertions::assert_eq;
use sawah_catalog::{Catalog, Category, DEFAULT_ID, ENTRIES, ORDER, partition};

fn catalog() -> Catalog {
	Catalog::load().expect("built-in catalogue must validate")
}

#[test]
fn load_succeeds_on_builtin_data() {
	let catalog = catalog();
	assert_eq!(catalog.default_entry().id, DEFAULT_ID);
}

#[test]
fn every_registered_id_resolves_to_itself() {
	let catalog = catalog();
	for entry in ENTRIES {
		assert_eq!(catalog.resolve(entry.id).id, entry.id);
		assert_eq!(catalog.get(entry.id).map(|e| e.id), Some(entry.id));
	}
}

#[test]
fn absent_ids_resolve_to_the_default() {
	let catalog = catalog();
	for id in ["", "nonexistent", "BROWN_PLANTHOPPER", "rice blast"] {
		assert_eq!(catalog.resolve(id).id, DEFAULT_ID);
		assert!(catalog.get(id).is_none());
	}
}

#[test]
fn resolving_the_default_is_idempotent() {
	let catalog = catalog();
	let first = catalog.resolve(DEFAULT_ID);
	let again = catalog.resolve(first.id);
	assert_eq!(first.id, again.id);
	assert_eq!(first.id, DEFAULT_ID);
}

#[test]
fn summaries_follow_canonical_order() {
	let catalog = catalog();
	let ids: Vec<&str> = catalog.summaries().iter().map(|s| s.id).collect();
	assert_eq!(ids, ORDER.to_vec());
}

#[test]
fn summaries_agree_with_store_categories() {
	let catalog = catalog();
	for summary in catalog.summaries() {
		let entry = catalog.get(summary.id).expect("summary id must resolve");
		assert_eq!(summary.category, entry.category);
		assert_eq!(summary.name, entry.name);
	}
}

#[test]
fn partition_is_stable_and_lossless() {
	let catalog = catalog();
	let items = catalog.summaries();
	let (pests, diseases) = partition(&items);

	assert_eq!(pests.len() + diseases.len(), items.len());
	assert!(pests.iter().all(|s| s.category == Category::Pest));
	assert!(diseases.iter().all(|s| s.category == Category::Disease));

	// Relative order within each half matches the input.
	let index_of = |id: &str| items.iter().position(|s| s.id == id).unwrap();
	for half in [&pests, &diseases] {
		let positions: Vec<usize> = half.iter().map(|s| index_of(s.id)).collect();
		assert!(positions.windows(2).all(|w| w[0] < w[1]));
	}

	// A stable merge by original index reproduces the input.
	let mut merged: Vec<(usize, &str)> = pests
		.iter()
		.chain(diseases.iter())
		.map(|s| (index_of(s.id), s.id))
		.collect();
	merged.sort_by_key(|(i, _)| *i);
	let merged_ids: Vec<&str> = merged.into_iter().map(|(_, id)| id).collect();
	let original_ids: Vec<&str> = items.iter().map(|s| s.id).collect();
	assert_eq!(merged_ids, original_ids);
}

#[test]
fn partition_of_empty_input_is_empty() {
	let (pests, diseases) = partition(&[]);
	assert!(pests.is_empty());
	assert!(diseases.is_empty());
}

#[test]
fn default_entry_is_the_brown_planthopper() {
	let catalog = catalog();
	let entry = catalog.default_entry();
	assert_eq!(entry.id, "brown_planthopper");
	assert_eq!(entry.name, "Brown Planthopper");
	assert_eq!(entry.scientific_name, "Nilaparvata lugens");
	assert_eq!(entry.category, Category::Pest);
}

#[test]
fn rice_blast_glossary_keeps_declaration_order() {
	let catalog = catalog();
	let entry = catalog.resolve("rice_blast");
	let names: Vec<&str> = entry.variables.iter().map(|v| v.name).collect();
	assert_eq!(
		names,
		vec!["lwd_norm", "vpd_index", "n_factor", "seasonal_mult", "ADPI"]
	);
}

#[test]
fn tungro_record_matches_the_source_model() {
	let catalog = catalog();
	let entry = catalog.resolve("tungro");
	assert_eq!(entry.category, Category::Disease);
	assert_eq!(entry.scientific_name, "RTBV + RTSV (via Green Leafhopper)");
	assert_eq!(entry.variables.len(), 2);
	assert_eq!(entry.variables[0].name, "vector_gen_progress");
	assert_eq!(entry.variables[1].name, "transmission_window");
}

#[test]
fn every_entry_has_content() {
	for entry in ENTRIES {
		assert!(!entry.name.is_empty(), "{}: empty name", entry.id);
		assert!(
			!entry.scientific_name.is_empty(),
			"{}: empty scientific name",
			entry.id
		);
		assert!(!entry.description.is_empty(), "{}: empty description", entry.id);
		assert!(!entry.formula.is_empty(), "{}: empty formula", entry.id);
		assert!(!entry.variables.is_empty(), "{}: empty glossary", entry.id);
		assert!(!entry.citation.is_empty(), "{}: empty citation", entry.id);
	}
}

#[test]
fn formula_lines_have_no_embedded_newlines() {
	// Line structure is carried by the outer slice, never by token text.
	for entry in ENTRIES {
		for line in entry.formula {
			for token in *line {
				assert!(
					!token.text.contains('\n'),
					"{}: newline inside token {:?}",
					entry.id,
					token.text
				);
			}
		}
	}
}
