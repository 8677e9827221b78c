use serde::{Deserialize, Serialize};

/// A measurement recorded for one exercise set.
///
/// The serialized name doubles as the BSON map key inside a set document,
/// so renames here change the stored document shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Reps,
    Weight,
    Thigh2Floor,
    Knee2Floor,
    Feet2Floor,
    Time,
}

impl Metric {
    /// Name as stored in documents and shown in prompts.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Reps => "reps",
            Metric::Weight => "weight",
            Metric::Thigh2Floor => "thigh2floor",
            Metric::Knee2Floor => "knee2floor",
            Metric::Feet2Floor => "feet2floor",
            Metric::Time => "time",
        }
    }

    /// Unit displayed next to values, empty for bare counts.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Reps => "",
            Metric::Weight => "kg",
            Metric::Thigh2Floor | Metric::Knee2Floor | Metric::Feet2Floor => "cm",
            Metric::Time => "s",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_serialized_names() {
        assert_eq!(serde_yaml::to_string(&Metric::Reps).unwrap().trim(), "reps");
        assert_eq!(
            serde_yaml::to_string(&Metric::Thigh2Floor).unwrap().trim(),
            "thigh2floor"
        );
    }

    #[test]
    fn test_metric_units() {
        assert_eq!(Metric::Reps.unit(), "");
        assert_eq!(Metric::Weight.unit(), "kg");
        assert_eq!(Metric::Knee2Floor.unit(), "cm");
        assert_eq!(Metric::Time.unit(), "s");
    }
}
