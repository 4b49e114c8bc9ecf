//! Obesity category labels keyed by classifier output index.

/// Label shown when the classifier yields an index outside the table.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// The seven obesity categories, in classifier output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObesityCategory {
    Underweight,
    NormalWeight,
    OverweightLevelI,
    OverweightLevelII,
    ObesityTypeI,
    ObesityTypeII,
    ObesityTypeIII,
}

impl ObesityCategory {
    /// Resolve a classifier output index; `None` outside 0–6.
    pub fn from_class_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Underweight),
            1 => Some(Self::NormalWeight),
            2 => Some(Self::OverweightLevelI),
            3 => Some(Self::OverweightLevelII),
            4 => Some(Self::ObesityTypeI),
            5 => Some(Self::ObesityTypeII),
            6 => Some(Self::ObesityTypeIII),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal Weight",
            Self::OverweightLevelI => "Overweight Level I",
            Self::OverweightLevelII => "Overweight Level II",
            Self::ObesityTypeI => "Obesity Type I",
            Self::ObesityTypeII => "Obesity Type II",
            Self::ObesityTypeIII => "Obesity Type III",
        }
    }
}

/// Human-readable label for a classifier output index.
///
/// Total over all integers: indices outside the table get
/// [`UNKNOWN_LABEL`], never an error.
pub fn label_for(index: i64) -> &'static str {
    ObesityCategory::from_class_index(index)
        .map(|c| c.as_str())
        .unwrap_or(UNKNOWN_LABEL)
}
