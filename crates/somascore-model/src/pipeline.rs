//! The prediction pipeline: assemble → normalize → infer → resolve.
//!
//! Each call runs synchronously to completion or to its first error and
//! carries no state into the next one.

use arrow::record_batch::RecordBatch;
use tracing::debug;

use somascore_core::assemble::{assemble, row_values};
use somascore_core::category::{self, ObesityCategory};
use somascore_core::{PredictError, RawInput};

use crate::classifier::LinearClassifier;
use crate::scaler::StandardScaler;

/// Loaded model state injected into every prediction.
///
/// Constructed once, normally via
/// [`ModelArtifact::into_context`](crate::ModelArtifact::into_context),
/// and shared read-only across requests. The parts are optional so a
/// context with a missing scaler or model reports the matching
/// precondition failure instead of being unrepresentable.
pub struct PredictContext {
    pub model: Option<LinearClassifier>,
    pub scaler: Option<StandardScaler>,
    pub feature_names: Option<Vec<String>>,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub class_index: i64,
    /// `None` when the classifier yields an index outside the table.
    pub category: Option<ObesityCategory>,
}

impl Prediction {
    /// Human-readable category label; "Unknown" outside the table.
    pub fn label(&self) -> &'static str {
        category::label_for(self.class_index)
    }
}

/// Run one submission through the full pipeline.
///
/// Validates numeric bounds, assembles the encoded record in training
/// column order, normalizes the full row with the fitted scaler, runs
/// inference, and resolves the class index to a category.
pub fn predict(ctx: &PredictContext, input: &RawInput) -> Result<Prediction, PredictError> {
    input.validate()?;

    let record = assemble(input)?;
    check_feature_names(ctx, &record)?;

    let row = row_values(&record)?;
    debug!(?row, "assembled encoded record");

    let normalized = normalize(ctx, &row)?;
    let class_index = infer(ctx, &normalized)? as i64;

    Ok(Prediction {
        class_index,
        category: ObesityCategory::from_class_index(class_index),
    })
}

/// Assemble the encoded single-row record without running inference.
///
/// This is the exact vector the predictor sees before normalization;
/// the shell uses it for its record display.
pub fn encoded_row(input: &RawInput) -> Result<Vec<f64>, PredictError> {
    input.validate()?;
    let record = assemble(input)?;
    row_values(&record)
}

/// Cross-check the artifact's recorded feature ordering, when present.
fn check_feature_names(ctx: &PredictContext, record: &RecordBatch) -> Result<(), PredictError> {
    let Some(names) = &ctx.feature_names else {
        return Ok(());
    };

    let actual: Vec<String> = record
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();

    if names != &actual {
        return Err(PredictError::ColumnMismatch {
            expected: names.clone(),
            actual,
        });
    }
    Ok(())
}

/// Apply the fitted scaler to the full encoded row.
fn normalize(ctx: &PredictContext, row: &[f64]) -> Result<Vec<f64>, PredictError> {
    let scaler = ctx.scaler.as_ref().ok_or(PredictError::ScalerUnavailable)?;
    Ok(scaler.transform(row))
}

/// Invoke the classifier on the normalized vector.
fn infer(ctx: &PredictContext, normalized: &[f64]) -> Result<usize, PredictError> {
    let model = ctx
        .model
        .as_ref()
        .ok_or_else(|| PredictError::Inference("no model loaded".into()))?;
    model.predict(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use somascore_core::schema::EXPECTED_COLUMNS;

    const FEATURES: usize = EXPECTED_COLUMNS.len();

    fn sample_input() -> RawInput {
        RawInput {
            age: 25,
            height_m: 1.7,
            weight_kg: 70.0,
            fcvc: 2,
            ncp: 3,
            ch2o: 2,
            faf: 2,
            tue: 2,
            gender: "Male".into(),
            favc: "no".into(),
            smoke: "no".into(),
            calc: "no".into(),
            caec: "Sometimes".into(),
            mtrans: "Public_Transportation".into(),
            family_history: "no".into(),
            scc: "no".into(),
        }
    }

    /// Classifier whose score for class k is x[k]: the winning class is
    /// the argmax of the normalized row, which makes the inference
    /// outcome easy to steer from a test.
    fn probe_classifier(classes: usize) -> LinearClassifier {
        let coefficients = (0..classes)
            .map(|k| {
                let mut row = vec![0.0; FEATURES];
                row[k] = 1.0;
                row
            })
            .collect();
        LinearClassifier {
            coefficients,
            intercepts: vec![0.0; classes],
        }
    }

    fn identity_context(classes: usize) -> PredictContext {
        PredictContext {
            model: Some(probe_classifier(classes)),
            scaler: Some(StandardScaler::identity(FEATURES)),
            feature_names: None,
        }
    }

    #[test]
    fn encoded_row_matches_documented_vector() {
        // All categorical fields in the sample encode to 0.
        let row = encoded_row(&sample_input()).unwrap();
        let expected = [
            25.0, 0.0, 1.7, 70.0, 0.0, 0.0, 2.0, 3.0, 0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 0.0,
        ];
        assert_eq!(row, expected);
    }

    #[test]
    fn unknown_transport_completes_through_inference() {
        let mut input = sample_input();
        input.mtrans = "Teleport".into();

        let row = encoded_row(&input).unwrap();
        assert_eq!(row[15], -1.0);

        let ctx = identity_context(7);
        let prediction = predict(&ctx, &input).unwrap();
        assert!(prediction.category.is_some());
    }

    #[test]
    fn out_of_bounds_input_never_starts_the_pipeline() {
        let mut input = sample_input();
        input.weight_kg = 500.0;

        let ctx = identity_context(7);
        assert!(matches!(
            predict(&ctx, &input),
            Err(PredictError::Validation(_))
        ));
    }

    #[test]
    fn missing_scaler_reports_unavailable() {
        let ctx = PredictContext {
            model: Some(probe_classifier(7)),
            scaler: None,
            feature_names: None,
        };
        assert!(matches!(
            predict(&ctx, &sample_input()),
            Err(PredictError::ScalerUnavailable)
        ));
    }

    #[test]
    fn missing_model_reports_inference_failure() {
        let ctx = PredictContext {
            model: None,
            scaler: Some(StandardScaler::identity(FEATURES)),
            feature_names: None,
        };
        assert!(matches!(
            predict(&ctx, &sample_input()),
            Err(PredictError::Inference(_))
        ));
    }

    #[test]
    fn feature_name_mismatch_is_a_column_mismatch() {
        let mut ctx = identity_context(7);
        ctx.feature_names = Some(vec!["Age".into(), "BMI".into()]);

        assert!(matches!(
            predict(&ctx, &sample_input()),
            Err(PredictError::ColumnMismatch { .. })
        ));
    }

    #[test]
    fn matching_feature_names_pass() {
        let mut ctx = identity_context(7);
        ctx.feature_names = Some(EXPECTED_COLUMNS.iter().map(|s| s.to_string()).collect());

        assert!(predict(&ctx, &sample_input()).is_ok());
    }

    #[test]
    fn class_index_resolves_to_category() {
        // Weight sits at index 3; with one-hot probes and 70kg in that
        // column, class 3 dominates.
        let ctx = identity_context(7);
        let prediction = predict(&ctx, &sample_input()).unwrap();
        assert_eq!(prediction.class_index, 3);
        assert_eq!(prediction.category, Some(ObesityCategory::OverweightLevelII));
        assert_eq!(prediction.label(), "Overweight Level II");
    }

    #[test]
    fn out_of_table_class_resolves_to_unknown_label() {
        // Eight probe classes; a large intercept forces class 7, which
        // has no entry in the category table.
        let mut ctx = identity_context(8);
        if let Some(model) = ctx.model.as_mut() {
            model.intercepts[7] = 1000.0;
        }

        let prediction = predict(&ctx, &sample_input()).unwrap();
        assert_eq!(prediction.class_index, 7);
        assert_eq!(prediction.category, None);
        assert_eq!(prediction.label(), "Unknown");
    }

    #[test]
    fn identical_inputs_yield_identical_predictions() {
        let ctx = identity_context(7);
        let input = sample_input();

        let first = predict(&ctx, &input).unwrap();
        let second = predict(&ctx, &input).unwrap();
        assert_eq!(first, second);
    }
}
