//! Categorical encoding tables matching the training-time label codes.
//!
//! Each field has its own fixed table; lookups are exact, case-sensitive
//! string matches. Values outside a table encode to [`UNKNOWN_CODE`]
//! rather than failing, so out-of-vocabulary input reaches the model as
//! out-of-distribution instead of aborting the request.

/// Code for any value not present in a field's table.
pub const UNKNOWN_CODE: i64 = -1;

/// Gender codes.
pub const GENDER: &[(&str, i64)] = &[("Male", 0), ("Female", 1)];

/// Alcohol-frequency codes (CALC).
pub const CALC: &[(&str, i64)] = &[
    ("no", 0),
    ("Sometimes", 1),
    ("Frequently", 2),
    ("Always", 3),
];

/// High-calorie-food codes (FAVC).
pub const FAVC: &[(&str, i64)] = &[("no", 0), ("yes", 1)];

/// Smoking-status codes.
pub const SMOKE: &[(&str, i64)] = &[("no", 0), ("yes", 1)];

/// Calorie-tracking codes (SCC).
pub const SCC: &[(&str, i64)] = &[("no", 0), ("yes", 1)];

/// Family-obesity-history codes.
pub const FAMILY_HISTORY: &[(&str, i64)] = &[("no", 0), ("yes", 1)];

/// Snacking-frequency codes (CAEC).
///
/// The ordinals differ from [`CALC`] even though the label text
/// overlaps; this is the assignment the model was trained with and must
/// not be unified with the alcohol table.
pub const CAEC: &[(&str, i64)] = &[
    ("Sometimes", 0),
    ("Frequently", 1),
    ("Always", 2),
    ("no", 3),
];

/// Transportation codes (MTRANS).
pub const MTRANS: &[(&str, i64)] = &[
    ("Public_Transportation", 0),
    ("Automobile", 1),
    ("Walking", 2),
    ("Motorbike", 3),
    ("Bike", 4),
];

/// Look up a value's integer code in a field table.
///
/// Anything not in the table maps to [`UNKNOWN_CODE`]; this never fails.
pub fn encode(table: &[(&str, i64)], value: &str) -> i64 {
    table
        .iter()
        .find(|(label, _)| *label == value)
        .map(|&(_, code)| code)
        .unwrap_or(UNKNOWN_CODE)
}
