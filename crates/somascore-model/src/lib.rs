//! Model layer: artifact loading, the fitted scaler, linear inference,
//! and the prediction pipeline tying them together.

mod artifact;
mod classifier;
mod pipeline;
mod scaler;

pub use artifact::ModelArtifact;
pub use classifier::LinearClassifier;
pub use pipeline::{PredictContext, Prediction, encoded_row, predict};
pub use scaler::StandardScaler;
