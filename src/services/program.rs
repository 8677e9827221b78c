use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::database::models::Metric;

/// One exercise as configured in the program file.
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseConfig {
    pub name: String,
    pub metrics: Vec<Metric>,
    /// Whether the bot should ask for the rest time before the sets.
    #[serde(default)]
    pub track_rest: bool,
}

/// A named workout: an ordered list of exercises.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutConfig {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseConfig>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProgramConfig {
    workouts: Vec<WorkoutConfig>,
}

/// Loads and provides access to the workout program catalog.
///
/// The program file alone defines which workouts exist and which metrics
/// each exercise tracks; handlers validate user selections against it.
pub struct ProgramService {
    config: ProgramConfig,
}

impl ProgramService {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read program file {}", path.display()))?;
        let config: ProgramConfig = serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse program file {}", path.display()))?;

        if config.workouts.is_empty() {
            return Err(anyhow!("Program file {} defines no workouts", path.display()));
        }

        info!(
            "Loaded workout program with {} workouts from {}",
            config.workouts.len(),
            path.display()
        );
        Ok(Self { config })
    }

    pub fn workout_names(&self) -> Vec<&str> {
        self.config.workouts.iter().map(|w| w.name.as_str()).collect()
    }

    pub fn workout(&self, name: &str) -> Option<&WorkoutConfig> {
        self.config.workouts.iter().find(|w| w.name == name)
    }
}
