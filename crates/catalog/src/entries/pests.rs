//! Pest risk model records.
//!
//! The pest models share a three-step shape: suitability factors in
//! 0.0-1.0, a weighted base risk, then the seasonal multiplier.

use linkme::distributed_slice;

use crate::entry::{CatalogEntry, Category, Variable};
use crate::formula::{comment, lit, op, out, plain, var};
use crate::store::ENTRIES;

#[distributed_slice(ENTRIES)]
pub static BROWN_PLANTHOPPER: CatalogEntry = CatalogEntry {
	id: "brown_planthopper",
	name: "Brown Planthopper",
	scientific_name: "Nilaparvata lugens",
	category: Category::Pest,
	description: "Risk is computed from environmental suitability, crop growth stage, and \
		GDD-based generation progress. Risk increases during the wet season.",
	formula: &[
		&[comment("// 1. Compute suitability factors (0.0 - 1.0)")],
		&[
			var("temp_suit"),
			plain(" = (IF "),
			var("temp"),
			plain(" 24-32°C THEN "),
			lit("1.0"),
			plain(" ELSE "),
			lit("0.3"),
			plain(")"),
		],
		&[
			var("humidity_suit"),
			plain(" = (IF "),
			var("humidity"),
			plain(" > 80% THEN "),
			lit("1.0"),
			plain(" ELSE "),
			lit("0.5"),
			plain(")"),
		],
		&[
			var("stage_suit"),
			plain(" = (IF "),
			var("stage"),
			plain(" is 'Vegetative' or 'Reproductive' THEN "),
			lit("1.0"),
			plain(" ELSE "),
			lit("0.3"),
			plain(")"),
		],
		&[
			var("gen_progress"),
			plain(" = min("),
			var("bph_gen_progress"),
			plain(" / "),
			lit("100"),
			plain(", "),
			lit("1.0"),
			plain(")"),
		],
		&[],
		&[comment("// 2. Compute the weighted base risk")],
		&[
			var("base_risk"),
			plain(" = ("),
			var("temp_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.35"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("humidity_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.30"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("stage_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.20"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("gen_progress"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.15"),
			plain(")"),
		],
		&[],
		&[comment("// 3. Apply the seasonal multiplier")],
		&[
			out("FINAL_RISK_PCT"),
			plain(" = ("),
			var("base_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("100"),
			plain(") "),
			op("*"),
			plain(" "),
			var("seasonal_mult"),
		],
	],
	variables: &[
		Variable {
			name: "temp",
			description: "Average daily temperature (°C).",
		},
		Variable {
			name: "humidity",
			description: "Average daily relative humidity (%).",
		},
		Variable {
			name: "stage",
			description: "Current rice growth stage.",
		},
		Variable {
			name: "bph_gen_progress",
			description: "Seasonal GDD accumulation % for the Brown Planthopper (reset each season).",
		},
		Variable {
			name: "seasonal_mult",
			description: "Wet-season factor (1.3 in the wet season, 0.6 in the dry season).",
		},
	],
	citation: "Model derived from the calculate_bph_risk() logic, integrating GDD principles \
		from thermal_params.",
};

#[distributed_slice(ENTRIES)]
pub static YELLOW_STEM_BORER: CatalogEntry = CatalogEntry {
	id: "yellow_stem_borer",
	name: "Yellow Stem Borer",
	scientific_name: "Scirpophaga incertulas",
	category: Category::Pest,
	description: "Risk is driven by temperature, rainfall (the borer prefers light rain), crop \
		growth stage, and GDD-based generation progress.",
	formula: &[
		&[comment("// 1. Compute suitability factors (0.0 - 1.0)")],
		&[
			var("temp_suit"),
			plain(" = (IF "),
			var("temp"),
			plain(" 20-30°C THEN "),
			lit("1.0"),
			plain(" ELSE "),
			lit("0.4"),
			plain(")"),
		],
		&[
			var("precip_suit"),
			plain(" = (IF "),
			var("precip"),
			plain(" > 30mm THEN "),
			lit("0.3"),
			plain(" ELSE "),
			lit("1.0"),
			plain(")"),
		],
		&[
			var("stage_suit"),
			plain(" = (IF "),
			var("stage"),
			plain(" is 'Vegetative' or 'Reproductive' THEN "),
			lit("1.0"),
			plain(" ELSE "),
			lit("0.3"),
			plain(")"),
		],
		&[
			var("gen_progress"),
			plain(" = min("),
			var("ysb_gen_progress"),
			plain(" / "),
			lit("100"),
			plain(", "),
			lit("1.0"),
			plain(")"),
		],
		&[],
		&[comment("// 2. Compute the weighted base risk")],
		&[
			var("base_risk"),
			plain(" = ("),
			var("temp_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.30"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("precip_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.30"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("stage_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.25"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("gen_progress"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.15"),
			plain(")"),
		],
		&[],
		&[comment("// 3. Apply the seasonal multiplier")],
		&[
			out("FINAL_RISK_PCT"),
			plain(" = ("),
			var("base_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("100"),
			plain(") "),
			op("*"),
			plain(" "),
			var("seasonal_mult"),
		],
	],
	variables: &[
		Variable {
			name: "temp",
			description: "Average daily temperature (°C).",
		},
		Variable {
			name: "precip",
			description: "Daily rainfall (mm).",
		},
		Variable {
			name: "stage",
			description: "Current rice growth stage.",
		},
		Variable {
			name: "ysb_gen_progress",
			description: "Seasonal GDD accumulation % for the Yellow Stem Borer (reset each season).",
		},
		Variable {
			name: "seasonal_mult",
			description: "Wet-season factor (1.3 in the wet season, 0.6 in the dry season).",
		},
	],
	citation: "Model derived from the calculate_ysb_risk() logic.",
};

#[distributed_slice(ENTRIES)]
pub static RICE_LEAF_FOLDER: CatalogEntry = CatalogEntry {
	id: "rice_leaf_folder",
	name: "Rice Leaf Folder",
	scientific_name: "Cnaphalocrocis medinalis",
	category: Category::Pest,
	description: "Risk peaks during the vegetative stage, favored by high humidity and moderate \
		temperatures.",
	formula: &[
		&[comment("// 1. Compute suitability factors (0.0 - 1.0)")],
		&[
			var("temp_suit"),
			plain(" = (IF "),
			var("temp"),
			plain(" 24-28°C THEN "),
			lit("1.0"),
			plain(" ELSE "),
			lit("0.5"),
			plain(")"),
		],
		&[
			var("humidity_suit"),
			plain(" = (IF "),
			var("humidity"),
			plain(" > 85% THEN "),
			lit("1.0"),
			plain(" ELSE "),
			lit("0.6"),
			plain(")"),
		],
		&[
			var("stage_suit"),
			plain(" = (IF "),
			var("stage"),
			plain(" is 'Vegetative' THEN "),
			lit("1.0"),
			plain(" ELSE "),
			lit("0.7"),
			plain(")"),
		],
		&[],
		&[comment("// 2. Compute the weighted base risk")],
		&[
			var("base_risk"),
			plain(" = ("),
			var("temp_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.35"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("humidity_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.35"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("stage_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.30"),
			plain(")"),
		],
		&[],
		&[comment("// 3. Apply the seasonal multiplier")],
		&[
			out("FINAL_RISK_PCT"),
			plain(" = ("),
			var("base_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("100"),
			plain(") "),
			op("*"),
			plain(" "),
			var("seasonal_mult"),
		],
	],
	variables: &[
		Variable {
			name: "temp",
			description: "Average daily temperature (°C).",
		},
		Variable {
			name: "humidity",
			description: "Average daily relative humidity (%).",
		},
		Variable {
			name: "stage",
			description: "Current rice growth stage.",
		},
		Variable {
			name: "seasonal_mult",
			description: "Wet-season factor (1.3 in the wet season, 0.6 in the dry season).",
		},
	],
	citation: "Model derived from the calculate_rlf_risk() logic.",
};

#[distributed_slice(ENTRIES)]
pub static RICE_BUG: CatalogEntry = CatalogEntry {
	id: "rice_bug",
	name: "Rice Bug",
	scientific_name: "Leptocorisa oratorius",
	category: Category::Pest,
	description: "Risk peaks during the reproductive and ripening stages (grain filling), as \
		the bug feeds on developing grains.",
	formula: &[
		&[comment("// 1. Compute suitability factors (0.0 - 1.0)")],
		&[
			var("temp_suit"),
			plain(" = (IF "),
			var("temp"),
			plain(" 24-32°C THEN "),
			lit("1.0"),
			plain(" ELSE "),
			lit("0.3"),
			plain(")"),
		],
		&[
			var("stage_suit"),
			plain(" = (IF "),
			var("stage"),
			plain(" is 'Reproductive' or 'Ripening' THEN "),
			lit("1.0"),
			plain(" ELSE "),
			lit("0.1"),
			plain(")"),
		],
		&[
			var("gen_progress"),
			plain(" = min("),
			var("wst_gen_progress"),
			plain(" / "),
			lit("100"),
			plain(", "),
			lit("1.0"),
			plain(")"),
		],
		&[],
		&[comment("// 2. Compute the weighted base risk")],
		&[
			var("base_risk"),
			plain(" = ("),
			var("temp_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.40"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("stage_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.40"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("gen_progress"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.20"),
			plain(")"),
		],
		&[],
		&[comment("// 3. Apply the seasonal multiplier")],
		&[
			out("FINAL_RISK_PCT"),
			plain(" = ("),
			var("base_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("100"),
			plain(") "),
			op("*"),
			plain(" "),
			var("seasonal_mult"),
		],
	],
	variables: &[
		Variable {
			name: "temp",
			description: "Average daily temperature (°C).",
		},
		Variable {
			name: "stage",
			description: "Current rice growth stage.",
		},
		Variable {
			name: "wst_gen_progress",
			description: "Seasonal GDD accumulation % for the Rice Bug (reset each season).",
		},
		Variable {
			name: "seasonal_mult",
			description: "Wet-season factor (1.3 in the wet season, 0.6 in the dry season).",
		},
	],
	citation: "Model derived from the calculate_rice_bug_risk() logic.",
};

#[distributed_slice(ENTRIES)]
pub static FIELD_RAT: CatalogEntry = CatalogEntry {
	id: "field_rat",
	name: "Field Rat",
	scientific_name: "Rattus argentiventer",
	category: Category::Pest,
	description: "Risk is based on crop age (habitat cover) and growth stage. It does not \
		depend on daily weather but on seasonal patterns.",
	formula: &[
		&[comment("// 1. Compute suitability factors (0.0 - 1.0)")],
		&[
			var("age_factor"),
			plain(" = min("),
			var("days_since_planting"),
			plain(" / "),
			lit("100"),
			plain(", "),
			lit("1.0"),
			plain(")"),
		],
		&[
			var("habitat_score"),
			plain(" = (IF "),
			var("stage"),
			plain(" is 'Vegetative' or 'Reproductive' THEN "),
			lit("0.7"),
			plain(" ELSE "),
			lit("0.4"),
			plain(")"),
		],
		&[],
		&[comment("// 2. Compute the weighted base risk")],
		&[
			var("base_risk"),
			plain(" = ("),
			var("age_factor"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.5"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("habitat_score"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.5"),
			plain(")"),
		],
		&[],
		&[comment("// 3. Apply the seasonal multiplier")],
		&[
			out("FINAL_RISK_PCT"),
			plain(" = ("),
			var("base_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("100"),
			plain(") "),
			op("*"),
			plain(" "),
			var("seasonal_mult"),
		],
	],
	variables: &[
		Variable {
			name: "days_since_planting",
			description: "Days since the current planting season began.",
		},
		Variable {
			name: "stage",
			description: "Current rice growth stage (provides cover).",
		},
		Variable {
			name: "seasonal_mult",
			description: "Wet-season factor (1.3 in the wet season, 0.6 in the dry season).",
		},
	],
	citation: "Model derived from the calculate_field_rat_risk() logic.",
};

#[distributed_slice(ENTRIES)]
pub static GOLDEN_SNAIL: CatalogEntry = CatalogEntry {
	id: "golden_snail",
	name: "Golden Apple Snail",
	scientific_name: "Pomacea canaliculata",
	category: Category::Pest,
	description: "Risk is highest in young crops (day < 30) and in paddies with standing water \
		(3-10 cm).",
	formula: &[
		&[comment("// 1. Compute suitability factors (0.0 - 1.0)")],
		&[
			var("stage_suit"),
			plain(" = (IF "),
			var("days_since_planting"),
			plain(" < 30 THEN "),
			lit("1.0"),
			plain(" ELSE "),
			lit("0.1"),
			plain(")"),
		],
		&[
			var("water_suit"),
			plain(" = (IF "),
			var("water_depth_cm"),
			plain(" 3-10cm THEN "),
			lit("1.0"),
			plain(" ELSE "),
			lit("0.4"),
			plain(")"),
		],
		&[],
		&[comment("// 2. Compute the weighted base risk")],
		&[
			var("base_risk"),
			plain(" = ("),
			var("stage_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.6"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("water_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.4"),
			plain(")"),
		],
		&[],
		&[comment("// 3. Apply the seasonal multiplier")],
		&[
			out("FINAL_RISK_PCT"),
			plain(" = ("),
			var("base_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("100"),
			plain(") "),
			op("*"),
			plain(" "),
			var("seasonal_mult"),
		],
	],
	variables: &[
		Variable {
			name: "days_since_planting",
			description: "Days since the current planting season began.",
		},
		Variable {
			name: "water_depth_cm",
			description: "Simulated water depth (assumed 5 cm in this model).",
		},
		Variable {
			name: "seasonal_mult",
			description: "Wet-season factor (1.3 in the wet season, 0.6 in the dry season).",
		},
	],
	citation: "Model derived from the calculate_golden_snail_risk() logic.",
};
