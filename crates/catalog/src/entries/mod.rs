//! Built-in catalogue records (English locale).
//!
//! One registration module per category. Display text lives here, keyed by
//! entry id; swapping locales means swapping these modules, not the
//! structural model.

mod diseases;
mod pests;
