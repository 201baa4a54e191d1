//! Plain-text catalogue listing for `--list`.

use std::io::{self, Write};

use sawah_catalog::{Catalog, partition};

/// Print the grouped catalogue, one entry per line.
pub fn print_catalogue(catalog: &Catalog, out: &mut impl Write) -> io::Result<()> {
	let items = catalog.summaries();
	let (pests, diseases) = partition(&items);

	for (index, group) in [pests, diseases].iter().enumerate() {
		if index > 0 {
			writeln!(out)?;
		}
		let Some(first) = group.first() else {
			continue;
		};
		writeln!(out, "{}:", first.category.label())?;
		for summary in group {
			let entry = catalog.resolve(summary.id);
			writeln!(
				out,
				"  {:<24} {:<24} {}",
				summary.id, summary.name, entry.scientific_name
			)?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use sawah_catalog::Catalog;

	use super::print_catalogue;

	#[test]
	fn lists_every_entry_grouped() {
		let catalog = Catalog::load().unwrap();
		let mut out = Vec::new();
		print_catalogue(&catalog, &mut out).unwrap();
		let text = String::from_utf8(out).unwrap();

		assert!(text.starts_with("Pests:"));
		assert!(text.contains("Diseases:"));
		for summary in catalog.summaries() {
			assert!(text.contains(summary.id), "missing {}", summary.id);
		}
		// Pests come before diseases.
		assert!(text.find("brown_planthopper").unwrap() < text.find("rice_blast").unwrap());
	}
}
