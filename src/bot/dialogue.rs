//! Dialogue state for the /add conversation. The whole in-progress
//! session lives inside the state enum, so there is no shared mutable
//! session map; cancelling or finishing simply resets the dialogue.

use chrono::{DateTime, Utc};
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::Dialogue;

use crate::database::models::{ExerciseEntry, SetEntry, Training, WorkoutEntry};
use crate::services::program::{ExerciseConfig, WorkoutConfig};

pub type TrainingDialogue = Dialogue<State, InMemStorage<State>>;
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// The training session being assembled, one workout at a time.
#[derive(Debug, Clone)]
pub struct TrainingDraft {
    pub user_id: i64,
    pub date: DateTime<Utc>,
    pub duration_minutes: i64,
    pub workouts: Vec<WorkoutEntry>,
}

impl TrainingDraft {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            date: Utc::now(),
            duration_minutes: 0,
            workouts: Vec::new(),
        }
    }

    pub fn has_workouts(&self) -> bool {
        !self.workouts.is_empty()
    }

    pub fn into_training(self) -> Training {
        Training {
            id: None,
            user_id: self.user_id,
            date: self.date,
            duration_minutes: self.duration_minutes,
            workouts: self.workouts,
        }
    }
}

/// Position within the workout currently being logged.
#[derive(Debug, Clone)]
pub struct WorkoutProgress {
    pub config: WorkoutConfig,
    pub workout: WorkoutEntry,
    pub exercise_index: usize,
    pub current: ExerciseEntry,
    pub last_set: Option<SetEntry>,
}

impl WorkoutProgress {
    /// Returns None when the workout has no exercises configured.
    pub fn new(config: WorkoutConfig) -> Option<Self> {
        let first = config.exercises.first()?;
        Some(Self {
            workout: WorkoutEntry::new(&config.name),
            current: ExerciseEntry::new(&first.name),
            exercise_index: 0,
            last_set: None,
            config,
        })
    }

    pub fn current_config(&self) -> Option<&ExerciseConfig> {
        self.config.exercises.get(self.exercise_index)
    }

    /// Records a set against the current exercise and remembers it for
    /// repeating. Returns the set count.
    pub fn log_set(&mut self, set: SetEntry) -> usize {
        self.last_set = Some(set.clone());
        self.current.sets.push(set);
        self.current.sets.len()
    }

    /// Logs the previous set again. None when no set has been logged for
    /// the current exercise yet.
    pub fn repeat_last(&mut self) -> Option<usize> {
        let set = self.last_set.clone()?;
        self.current.sets.push(set);
        Some(self.current.sets.len())
    }

    /// Closes the current exercise and moves to the next one. An exercise
    /// with no logged sets is dropped from the record. Returns false when
    /// the workout has no exercises left.
    pub fn advance(&mut self) -> bool {
        let finished = std::mem::replace(&mut self.current, ExerciseEntry::new(""));
        if !finished.sets.is_empty() {
            self.workout.exercises.push(finished);
        }
        self.exercise_index += 1;
        self.last_set = None;

        match self.config.exercises.get(self.exercise_index) {
            Some(next) => {
                self.current = ExerciseEntry::new(&next.name);
                true
            }
            None => false,
        }
    }

    /// The finished workout, once `advance` has consumed every exercise.
    pub fn into_workout(self) -> WorkoutEntry {
        self.workout
    }
}

#[derive(Debug, Clone, Default)]
pub enum State {
    #[default]
    Idle,
    AwaitingDate {
        draft: TrainingDraft,
    },
    AwaitingDuration {
        draft: TrainingDraft,
    },
    SelectingWorkout {
        draft: TrainingDraft,
    },
    AwaitingRestTime {
        draft: TrainingDraft,
        progress: WorkoutProgress,
    },
    AwaitingSets {
        draft: TrainingDraft,
        progress: WorkoutProgress,
    },
}
