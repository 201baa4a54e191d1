//! Disease risk model records.
//!
//! The fungal and bacterial models accumulate an ADPI (Accumulated Disease
//! Pressure Index) from daily risk scores; tungro follows its vector's
//! generation progress instead.

use linkme::distributed_slice;

use crate::entry::{CatalogEntry, Category, Variable};
use crate::formula::{comment, lit, op, out, plain, var};
use crate::store::ENTRIES;

#[distributed_slice(ENTRIES)]
pub static RICE_BLAST: CatalogEntry = CatalogEntry {
	id: "rice_blast",
	name: "Rice Blast",
	scientific_name: "Pyricularia oryzae",
	category: Category::Disease,
	description: "Disease pressure (ADPI) accumulates from daily risk scores. Daily risk is \
		driven by leaf wetness duration, temperature, and nitrogen level.",
	formula: &[
		&[comment("// 1. Compute the daily risk score (0.0 - 1.0)")],
		&[var("temp_suit"), plain(" = (peak suitability at 18-28°C)")],
		&[
			var("daily_risk"),
			plain(" = ("),
			var("lwd_norm"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.35"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("temp_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.25"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("vpd_index"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.20"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("n_factor"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.15"),
			plain(")"),
		],
		&[
			var("daily_risk"),
			plain(" = "),
			var("daily_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			var("seasonal_mult"),
		],
		&[],
		&[comment("// 2. Compute ADPI (Accumulated Disease Pressure Index, 0-100)")],
		&[
			plain("IF "),
			var("daily_risk"),
			plain(" > "),
			lit("0.25"),
			plain(": "),
			out("ADPI"),
			plain(" "),
			op("+="),
			plain(" ("),
			var("daily_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("40"),
			plain(")"),
		],
		&[
			plain("IF "),
			var("daily_risk"),
			plain(" < "),
			lit("0.15"),
			plain(": "),
			out("ADPI"),
			plain(" "),
			op("-="),
			plain(" "),
			lit("3"),
			plain(" (decay)"),
		],
		&[
			plain("ELSE: "),
			out("ADPI"),
			plain(" "),
			op("-="),
			plain(" "),
			lit("5"),
			plain(" (decay)"),
		],
		&[comment("// ADPI is capped at 100 and reset to 0 during the fallow season")],
	],
	variables: &[
		Variable {
			name: "lwd_norm",
			description: "Normalized Leaf Wetness Duration (0.0 - 1.0).",
		},
		Variable {
			name: "vpd_index",
			description: "Vapor Pressure Deficit suitability.",
		},
		Variable {
			name: "n_factor",
			description: "Nitrogen susceptibility factor.",
		},
		Variable {
			name: "seasonal_mult",
			description: "Wet-season factor (1.3 in the wet season, 0.6 in the dry season).",
		},
		Variable {
			name: "ADPI",
			description: "Accumulated Disease Pressure Index. Rises on high-risk days, decays \
				on low-risk days.",
		},
	],
	citation: "Model derived from the calculate_daily_disease_risk() and \
		calculate_adpi_realistic() logic.",
};

#[distributed_slice(ENTRIES)]
pub static BACTERIAL_LEAF_BLIGHT: CatalogEntry = CatalogEntry {
	id: "bacterial_leaf_blight",
	name: "Bacterial Leaf Blight",
	scientific_name: "Xanthomonas oryzae pv. oryzae",
	category: Category::Disease,
	description: "Disease pressure (ADPI) accumulates from daily risk. Daily risk is driven by \
		recent rainfall (spread), temperature, and humidity.",
	formula: &[
		&[comment("// 1. Compute the daily risk score (0.0 - 1.0)")],
		&[var("temp_suit"), plain(" = (peak suitability at 25-30°C)")],
		&[
			var("daily_risk"),
			plain(" = ("),
			var("rainfall_events_7d"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.35"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("temp_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.25"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("humidity_norm"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.20"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("n_factor"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.15"),
			plain(")"),
		],
		&[
			var("daily_risk"),
			plain(" = "),
			var("daily_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			var("seasonal_mult"),
		],
		&[],
		&[comment("// 2. Compute ADPI (Accumulated Disease Pressure Index, 0-100)")],
		&[
			plain("IF "),
			var("daily_risk"),
			plain(" > "),
			lit("0.25"),
			plain(": "),
			out("ADPI"),
			plain(" "),
			op("+="),
			plain(" ("),
			var("daily_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("40"),
			plain(")"),
		],
		&[
			plain("IF "),
			var("daily_risk"),
			plain(" < "),
			lit("0.15"),
			plain(": "),
			out("ADPI"),
			plain(" "),
			op("-="),
			plain(" "),
			lit("3"),
			plain(" (decay)"),
		],
		&[
			plain("ELSE: "),
			out("ADPI"),
			plain(" "),
			op("-="),
			plain(" "),
			lit("5"),
			plain(" (decay)"),
		],
	],
	variables: &[
		Variable {
			name: "rainfall_events_7d",
			description: "Normalized count of rain days in the last 7 days.",
		},
		Variable {
			name: "humidity_norm",
			description: "Normalized humidity (0.0 - 1.0).",
		},
		Variable {
			name: "n_factor",
			description: "Nitrogen susceptibility factor.",
		},
		Variable {
			name: "seasonal_mult",
			description: "Wet-season factor (1.3 in the wet season, 0.6 in the dry season).",
		},
		Variable {
			name: "ADPI",
			description: "Accumulated Disease Pressure Index. Rises on high-risk days, decays \
				on low-risk days.",
		},
	],
	citation: "Model derived from the calculate_daily_disease_risk() and \
		calculate_adpi_realistic() logic.",
};

#[distributed_slice(ENTRIES)]
pub static SHEATH_BLIGHT: CatalogEntry = CatalogEntry {
	id: "sheath_blight",
	name: "Sheath Blight",
	scientific_name: "Rhizoctonia solani",
	category: Category::Disease,
	description: "Disease pressure (ADPI) accumulates from daily risk. Daily risk is strongly \
		influenced by soil moisture, dense planting, and temperature.",
	formula: &[
		&[comment("// 1. Compute the daily risk score (0.0 - 1.0)")],
		&[var("temp_suit"), plain(" = (peak suitability at 25-32°C)")],
		&[
			var("daily_risk"),
			plain(" = ("),
			var("soil_moisture_norm"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.40"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("temp_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.25"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("plant_density_norm"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.20"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("humidity_norm"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.15"),
			plain(")"),
		],
		&[
			var("daily_risk"),
			plain(" = "),
			var("daily_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			var("seasonal_mult"),
		],
		&[],
		&[comment("// 2. Compute ADPI (Accumulated Disease Pressure Index, 0-100)")],
		&[
			plain("IF "),
			var("daily_risk"),
			plain(" > "),
			lit("0.25"),
			plain(": "),
			out("ADPI"),
			plain(" "),
			op("+="),
			plain(" ("),
			var("daily_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("40"),
			plain(")"),
		],
		&[
			plain("IF "),
			var("daily_risk"),
			plain(" < "),
			lit("0.15"),
			plain(": "),
			out("ADPI"),
			plain(" "),
			op("-="),
			plain(" "),
			lit("3"),
			plain(" (decay)"),
		],
		&[
			plain("ELSE: "),
			out("ADPI"),
			plain(" "),
			op("-="),
			plain(" "),
			lit("5"),
			plain(" (decay)"),
		],
	],
	variables: &[
		Variable {
			name: "soil_moisture_norm",
			description: "Normalized soil moisture (simulated from humidity).",
		},
		Variable {
			name: "plant_density_norm",
			description: "Normalized plant density (simulated; higher = less air circulation).",
		},
		Variable {
			name: "humidity_norm",
			description: "Normalized humidity (0.0 - 1.0).",
		},
		Variable {
			name: "seasonal_mult",
			description: "Wet-season factor (1.3 in the wet season, 0.6 in the dry season).",
		},
		Variable {
			name: "ADPI",
			description: "Accumulated Disease Pressure Index. Rises on high-risk days, decays \
				on low-risk days.",
		},
	],
	citation: "Model derived from the calculate_daily_disease_risk() and \
		calculate_adpi_realistic() logic.",
};

#[distributed_slice(ENTRIES)]
pub static BROWN_SPOT: CatalogEntry = CatalogEntry {
	id: "brown_spot",
	name: "Brown Spot",
	scientific_name: "Helminthosporium oryzae",
	category: Category::Disease,
	description: "Disease pressure (ADPI) accumulates from daily risk. The disease is often \
		associated with older crops and nutrient stress (low potassium).",
	formula: &[
		&[comment("// 1. Compute the daily risk score (0.0 - 1.0)")],
		&[var("temp_suit"), plain(" = (peak suitability at 25-28°C)")],
		&[
			var("daily_risk"),
			plain(" = ("),
			var("plant_age_factor"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.30"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("lwd_norm"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.25"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("temp_suit"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.20"),
			plain(") "),
			op("+"),
			plain(" ("),
			var("fertility_factor"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("0.15"),
			plain(")"),
		],
		&[
			var("daily_risk"),
			plain(" = "),
			var("daily_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			var("seasonal_mult"),
		],
		&[],
		&[comment("// 2. Compute ADPI (Accumulated Disease Pressure Index, 0-100)")],
		&[
			plain("IF "),
			var("daily_risk"),
			plain(" > "),
			lit("0.25"),
			plain(": "),
			out("ADPI"),
			plain(" "),
			op("+="),
			plain(" ("),
			var("daily_risk"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("40"),
			plain(")"),
		],
		&[
			plain("IF "),
			var("daily_risk"),
			plain(" < "),
			lit("0.15"),
			plain(": "),
			out("ADPI"),
			plain(" "),
			op("-="),
			plain(" "),
			lit("3"),
			plain(" (decay)"),
		],
		&[
			plain("ELSE: "),
			out("ADPI"),
			plain(" "),
			op("-="),
			plain(" "),
			lit("5"),
			plain(" (decay)"),
		],
	],
	variables: &[
		Variable {
			name: "plant_age_factor",
			description: "Normalized crop age (older crops are more susceptible).",
		},
		Variable {
			name: "lwd_norm",
			description: "Normalized Leaf Wetness Duration (0.0 - 1.0).",
		},
		Variable {
			name: "fertility_factor",
			description: "Nutrient stress factor (simulated, based on low potassium).",
		},
		Variable {
			name: "seasonal_mult",
			description: "Wet-season factor (1.3 in the wet season, 0.6 in the dry season).",
		},
		Variable {
			name: "ADPI",
			description: "Accumulated Disease Pressure Index. Rises on high-risk days, decays \
				on low-risk days.",
		},
	],
	citation: "Model derived from the calculate_daily_disease_risk() and \
		calculate_adpi_realistic() logic.",
};

#[distributed_slice(ENTRIES)]
pub static TUNGRO: CatalogEntry = CatalogEntry {
	id: "tungro",
	name: "Tungro Virus",
	scientific_name: "RTBV + RTSV (via Green Leafhopper)",
	category: Category::Disease,
	description: "Tungro risk is computed from vector (Green Leafhopper) generation progress \
		and the crop's high-risk transmission window (20-60 days).",
	formula: &[
		&[comment("// 1. Compute vector (GLH) generation progress (0-200%)")],
		&[var("glh_daily_gdd"), plain(" = (GDD computed daily for the vector)")],
		&[
			var("glh_gdd_cumulative"),
			plain(" = (accumulated seasonally, as for the pests)"),
		],
		&[
			var("vector_gen_progress"),
			plain(" = ("),
			var("glh_gdd_cumulative"),
			plain(" / "),
			lit("240"),
			plain(") "),
			op("*"),
			plain(" "),
			lit("100"),
		],
		&[],
		&[comment("// 2. Compute crop susceptibility (0.0 - 1.0)")],
		&[
			var("transmission_window"),
			plain(" = (IF "),
			var("days_since_planting"),
			plain(" 20-60 THEN "),
			lit("1.0"),
			plain(" ELSE "),
			lit("0.1"),
			plain(")"),
		],
		&[],
		&[comment("// 3. Compute the final risk")],
		&[
			out("FINAL_RISK_PCT"),
			plain(" = ("),
			var("vector_gen_progress"),
			plain(" / "),
			lit("100"),
			plain(") "),
			op("*"),
			plain(" "),
			var("transmission_window"),
			plain(" "),
			op("*"),
			plain(" "),
			lit("100"),
		],
	],
	variables: &[
		Variable {
			name: "vector_gen_progress",
			description: "GDD-based generation progress of the Green Leafhopper vector.",
		},
		Variable {
			name: "transmission_window",
			description: "Crop susceptibility factor, peaking 20-60 days after planting.",
		},
	],
	citation: "Model derived from the tungro risk calculation logic, using GDD principles for \
		the vector.",
};
