//! Dense linear classifier over the normalized feature row.

use serde::{Deserialize, Serialize};

use somascore_core::PredictError;

/// A pre-trained multinomial linear classifier.
///
/// One coefficient row and one intercept per class; prediction is the
/// argmax of the per-class decision scores. The weights are part of the
/// opaque training artifact and are never recomputed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    /// Per-class coefficient rows, in training column order.
    pub coefficients: Vec<Vec<f64>>,
    /// Per-class intercepts.
    pub intercepts: Vec<f64>,
}

impl LinearClassifier {
    /// Number of output classes.
    pub fn class_count(&self) -> usize {
        self.coefficients.len()
    }

    /// Predict the class index for a single normalized row.
    ///
    /// Shape mismatches and non-finite scores fail the current request
    /// only; the classifier itself stays usable.
    pub fn predict(&self, x: &[f64]) -> Result<usize, PredictError> {
        if self.coefficients.is_empty() {
            return Err(PredictError::Inference("classifier has no classes".into()));
        }
        if self.intercepts.len() != self.coefficients.len() {
            return Err(PredictError::Inference(format!(
                "{} coefficient rows but {} intercepts",
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }

        let mut best_class = 0usize;
        let mut best_score = f64::NEG_INFINITY;

        for (class, row) in self.coefficients.iter().enumerate() {
            if row.len() != x.len() {
                return Err(PredictError::Inference(format!(
                    "class {class} expects {} features, got {}",
                    row.len(),
                    x.len()
                )));
            }

            let dot: f64 = row.iter().zip(x).map(|(w, v)| w * v).sum();
            let score = dot + self.intercepts[class];
            if !score.is_finite() {
                return Err(PredictError::Inference(format!(
                    "non-finite decision score for class {class}"
                )));
            }

            if score > best_score {
                best_score = score;
                best_class = class;
            }
        }

        Ok(best_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One-hot rows: class k scores x[k], so argmax(x) wins.
    fn one_hot(classes: usize, features: usize) -> LinearClassifier {
        let coefficients = (0..classes)
            .map(|k| {
                let mut row = vec![0.0; features];
                row[k] = 1.0;
                row
            })
            .collect();
        LinearClassifier {
            coefficients,
            intercepts: vec![0.0; classes],
        }
    }

    #[test]
    fn picks_argmax_class() {
        let clf = one_hot(3, 3);
        assert_eq!(clf.predict(&[0.1, 5.0, 2.0]).unwrap(), 1);
        assert_eq!(clf.predict(&[9.0, 5.0, 2.0]).unwrap(), 0);
        assert_eq!(clf.predict(&[0.0, 0.0, 0.5]).unwrap(), 2);
    }

    #[test]
    fn intercepts_shift_scores() {
        let clf = LinearClassifier {
            coefficients: vec![vec![0.0], vec![0.0]],
            intercepts: vec![0.5, 1.5],
        };
        assert_eq!(clf.predict(&[0.0]).unwrap(), 1);
    }

    #[test]
    fn feature_count_mismatch_is_an_inference_error() {
        let clf = one_hot(2, 4);
        assert!(matches!(
            clf.predict(&[1.0, 2.0]),
            Err(PredictError::Inference(_))
        ));
    }

    #[test]
    fn empty_classifier_is_an_inference_error() {
        let clf = LinearClassifier {
            coefficients: vec![],
            intercepts: vec![],
        };
        assert!(matches!(
            clf.predict(&[1.0]),
            Err(PredictError::Inference(_))
        ));
    }

    #[test]
    fn non_finite_score_is_an_inference_error() {
        let clf = LinearClassifier {
            coefficients: vec![vec![1.0]],
            intercepts: vec![0.0],
        };
        assert!(matches!(
            clf.predict(&[f64::INFINITY]),
            Err(PredictError::Inference(_))
        ));
    }

    #[test]
    fn classifier_survives_a_failed_request() {
        let clf = one_hot(2, 2);
        assert!(clf.predict(&[1.0]).is_err());
        assert_eq!(clf.predict(&[0.0, 1.0]).unwrap(), 1);
    }
}
