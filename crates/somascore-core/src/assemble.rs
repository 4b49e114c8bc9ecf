//! Builds the single-row encoded record from a raw submission.
//!
//! The record is an Arrow [`RecordBatch`] with columns in the exact
//! order the classifier was trained on; every categorical field is
//! replaced by its integer code during assembly.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, Int64Array};
use arrow::record_batch::RecordBatch;

use crate::encode::{self, encode};
use crate::input::RawInput;
use crate::schema::{EXPECTED_COLUMNS, encoded_record_schema};
use crate::PredictError;

/// Assemble one submission into a single-row record in training column
/// order, encoding each categorical field.
pub fn assemble(input: &RawInput) -> Result<RecordBatch, PredictError> {
    let schema = Arc::new(encoded_record_schema());

    let columns: Vec<ArrayRef> = vec![
        float_col(f64::from(input.age)),
        int_col(encode(encode::GENDER, &input.gender)),
        float_col(input.height_m),
        float_col(input.weight_kg),
        int_col(encode(encode::CALC, &input.calc)),
        int_col(encode(encode::FAVC, &input.favc)),
        float_col(f64::from(input.fcvc)),
        float_col(f64::from(input.ncp)),
        int_col(encode(encode::SCC, &input.scc)),
        int_col(encode(encode::SMOKE, &input.smoke)),
        float_col(f64::from(input.ch2o)),
        int_col(encode(encode::FAMILY_HISTORY, &input.family_history)),
        float_col(f64::from(input.faf)),
        float_col(f64::from(input.tue)),
        int_col(encode(encode::CAEC, &input.caec)),
        int_col(encode(encode::MTRANS, &input.mtrans)),
    ];

    let batch = RecordBatch::try_new(schema, columns)?;
    check_columns(&batch)?;
    Ok(batch)
}

/// Defensive check that a record's columns equal the training schema.
///
/// Not expected to trigger for records produced by [`assemble`].
pub fn check_columns(batch: &RecordBatch) -> Result<(), PredictError> {
    let actual: Vec<String> = batch
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();

    let matches = actual.len() == EXPECTED_COLUMNS.len()
        && actual
            .iter()
            .zip(EXPECTED_COLUMNS)
            .all(|(a, e)| a.as_str() == e);

    if !matches {
        return Err(PredictError::ColumnMismatch {
            expected: EXPECTED_COLUMNS.iter().map(|s| s.to_string()).collect(),
            actual,
        });
    }
    Ok(())
}

/// Flatten the single-row record into one f64 per column, schema order.
pub fn row_values(batch: &RecordBatch) -> Result<Vec<f64>, PredictError> {
    let mut row = Vec::with_capacity(batch.num_columns());
    for (i, col) in batch.columns().iter().enumerate() {
        if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
            row.push(arr.value(0));
        } else if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
            row.push(arr.value(0) as f64);
        } else {
            let name = batch.schema().field(i).name().clone();
            return Err(PredictError::Inference(format!(
                "unsupported column type for '{name}': {:?}",
                col.data_type()
            )));
        }
    }
    Ok(row)
}

fn float_col(value: f64) -> ArrayRef {
    Arc::new(Float64Array::from(vec![value]))
}

fn int_col(code: i64) -> ArrayRef {
    Arc::new(Int64Array::from(vec![code]))
}
