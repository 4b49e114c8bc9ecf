//! Model artifact loading.
//!
//! The artifact is a JSON bundle on disk. A composite bundle carries
//! `model`, `scaler`, and optionally `feature_names` keys; a bare
//! bundle is just the model object, in which case the scaler is read
//! from a sibling `scaler.json`.

use std::path::Path;

use serde_json::Value;
use tracing::info;

use somascore_core::PredictError;

use crate::classifier::LinearClassifier;
use crate::pipeline::PredictContext;
use crate::scaler::StandardScaler;

/// File consulted for the scaler when the main artifact is a bare model.
const SCALER_FILE: &str = "scaler.json";

/// The loaded model bundle: classifier, fitted scaler, and the feature
/// ordering recorded at training time when the bundle carries one.
///
/// Load once at startup and share read-only; nothing mutates it after
/// load, so concurrent readers need no lock. A load failure is terminal
/// for the process's ability to predict — there is no retry.
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    pub model: LinearClassifier,
    pub scaler: StandardScaler,
    pub feature_names: Option<Vec<String>>,
}

impl ModelArtifact {
    /// Load the artifact bundle from disk.
    ///
    /// Fails when the file is missing, the JSON is malformed, or either
    /// the model or the scaler cannot be obtained from it.
    pub fn load(path: &Path) -> Result<Self, PredictError> {
        if !path.exists() {
            return Err(PredictError::ArtifactNotFound(path.to_path_buf()));
        }

        let value = read_json(path)?;
        let artifact = if value.get("model").is_some() {
            Self::from_composite(&value)?
        } else {
            Self::from_bare(&value, path)?
        };

        info!(
            classes = artifact.model.class_count(),
            features = artifact.scaler.mean.len(),
            path = %path.display(),
            "model artifact loaded"
        );
        Ok(artifact)
    }

    /// Composite bundle: `{"model": …, "scaler": …, "feature_names": …}`.
    fn from_composite(value: &Value) -> Result<Self, PredictError> {
        let model = component(value, "model")?;
        let scaler = component(value, "scaler")?;

        let feature_names = match value.get("feature_names") {
            None | Some(Value::Null) => None,
            Some(names) => Some(serde_json::from_value(names.clone()).map_err(|e| {
                PredictError::ArtifactLoad(format!("feature_names: {e}"))
            })?),
        };

        Ok(Self {
            model,
            scaler,
            feature_names,
        })
    }

    /// Bare bundle: the model object alone, scaler in a sibling file.
    fn from_bare(value: &Value, model_path: &Path) -> Result<Self, PredictError> {
        let model: LinearClassifier = serde_json::from_value(value.clone())
            .map_err(|e| PredictError::ArtifactLoad(format!("model: {e}")))?;

        let scaler_path = model_path.with_file_name(SCALER_FILE);
        if !scaler_path.exists() {
            return Err(PredictError::ArtifactNotFound(scaler_path));
        }
        let scaler: StandardScaler = serde_json::from_value(read_json(&scaler_path)?)
            .map_err(|e| PredictError::ArtifactLoad(format!("scaler: {e}")))?;

        Ok(Self {
            model,
            scaler,
            feature_names: None,
        })
    }

    /// Hand the loaded parts to a prediction context.
    pub fn into_context(self) -> PredictContext {
        PredictContext {
            model: Some(self.model),
            scaler: Some(self.scaler),
            feature_names: self.feature_names,
        }
    }
}

fn read_json(path: &Path) -> Result<Value, PredictError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| PredictError::ArtifactLoad(format!("read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| PredictError::ArtifactLoad(format!("parse {}: {e}", path.display())))
}

/// Extract and deserialize a required bundle component.
///
/// A missing key and an explicit `null` both count as "not obtained".
fn component<T: serde::de::DeserializeOwned>(value: &Value, key: &str) -> Result<T, PredictError> {
    match value.get(key) {
        None | Some(Value::Null) => Err(PredictError::ArtifactLoad(format!(
            "bundle is missing its '{key}' entry"
        ))),
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|e| PredictError::ArtifactLoad(format!("{key}: {e}"))),
    }
}
