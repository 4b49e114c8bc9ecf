//! Arrow schema for the encoded feature record.

use arrow::datatypes::{DataType, Field, Schema};

/// Column names in the exact order the classifier was trained on.
pub const EXPECTED_COLUMNS: [&str; 16] = [
    "Age",
    "Gender",
    "Height",
    "Weight",
    "CALC",
    "FAVC",
    "FCVC",
    "NCP",
    "SCC",
    "SMOKE",
    "CH2O",
    "family_history_with_overweight",
    "FAF",
    "TUE",
    "CAEC",
    "MTRANS",
];

/// Schema for the single-row record fed to the scaler.
///
/// Originally-numeric fields are `Float64`; categorical fields carry
/// their `Int64` codes, which may be -1 for out-of-vocabulary values.
pub fn encoded_record_schema() -> Schema {
    Schema::new(vec![
        Field::new("Age", DataType::Float64, false),
        Field::new("Gender", DataType::Int64, false),
        Field::new("Height", DataType::Float64, false),
        Field::new("Weight", DataType::Float64, false),
        Field::new("CALC", DataType::Int64, false),
        Field::new("FAVC", DataType::Int64, false),
        Field::new("FCVC", DataType::Float64, false),
        Field::new("NCP", DataType::Float64, false),
        Field::new("SCC", DataType::Int64, false),
        Field::new("SMOKE", DataType::Int64, false),
        Field::new("CH2O", DataType::Float64, false),
        Field::new("family_history_with_overweight", DataType::Int64, false),
        Field::new("FAF", DataType::Float64, false),
        Field::new("TUE", DataType::Float64, false),
        Field::new("CAEC", DataType::Int64, false),
        Field::new("MTRANS", DataType::Int64, false),
    ])
}
