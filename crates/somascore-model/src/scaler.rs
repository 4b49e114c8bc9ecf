//! Pre-fitted standardization transform.

use serde::{Deserialize, Serialize};

/// A fitted standard scaler: per-column mean and scale.
///
/// Fitted at training time over the complete 16-column encoded matrix,
/// integer-coded categorical columns included. The transform must cover
/// the full row to reproduce the training-time preprocessing; scaling
/// only the originally-numeric columns would change every prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Apply `(x - mean) / scale` per column.
    ///
    /// The scaler is an opaque pre-fitted transform and performs no
    /// validation of its own: sentinel and out-of-range values pass
    /// through the linear map unchanged, and columns beyond the fitted
    /// length are left as-is. Degenerate fitted parameters surface
    /// downstream as non-finite decision scores.
    pub fn transform(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .enumerate()
            .map(|(i, &x)| match (self.mean.get(i), self.scale.get(i)) {
                (Some(&mean), Some(&scale)) => (x - mean) / scale,
                _ => x,
            })
            .collect()
    }

    /// Identity scaler over `n` columns: mean 0, scale 1.
    pub fn identity(n: usize) -> Self {
        Self {
            mean: vec![0.0; n],
            scale: vec![1.0; n],
        }
    }
}
