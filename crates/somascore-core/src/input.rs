//! Raw questionnaire record and numeric bounds validation.

use serde::{Deserialize, Serialize};

use crate::PredictError;

/// One unencoded questionnaire submission.
///
/// Categorical fields are free strings so that values outside the known
/// options still flow through encoding to the -1 sentinel instead of
/// being rejected up front. Created fresh per prediction and never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInput {
    /// Age in years.
    pub age: u32,
    /// Height in meters.
    pub height_m: f64,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Vegetable-eating frequency per week.
    pub fcvc: u32,
    /// Main meals per day.
    pub ncp: u32,
    /// Daily water intake in litres.
    pub ch2o: u32,
    /// Physical-activity frequency per week.
    pub faf: u32,
    /// Daily screen time in hours.
    pub tue: u32,
    pub gender: String,
    /// Frequently eats high-calorie food ("yes"/"no").
    pub favc: String,
    pub smoke: String,
    /// Alcohol frequency.
    pub calc: String,
    /// Snacking between meals.
    pub caec: String,
    /// Usual transportation mode.
    pub mtrans: String,
    pub family_history: String,
    /// Tracks calorie intake ("yes"/"no").
    pub scc: String,
}

impl RawInput {
    /// Check every numeric field against its documented bounds.
    ///
    /// Categorical fields are not checked here: unknown values are the
    /// encoder's business and map to the sentinel code.
    pub fn validate(&self) -> Result<(), PredictError> {
        range_check("age", f64::from(self.age), 1.0, 120.0)?;
        range_check("height", self.height_m, 0.5, 2.5)?;
        range_check("weight", self.weight_kg, 20.0, 200.0)?;
        range_check("vegetable frequency", f64::from(self.fcvc), 0.0, 10.0)?;
        range_check("meals per day", f64::from(self.ncp), 1.0, 10.0)?;
        range_check("water intake", f64::from(self.ch2o), 0.0, 5.0)?;
        range_check("activity frequency", f64::from(self.faf), 0.0, 7.0)?;
        range_check("screen time", f64::from(self.tue), 0.0, 5.0)?;
        Ok(())
    }
}

fn range_check(field: &str, value: f64, min: f64, max: f64) -> Result<(), PredictError> {
    if !value.is_finite() || value < min || value > max {
        return Err(PredictError::Validation(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}
