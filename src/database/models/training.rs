use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use futures::stream::TryStreamExt;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use crate::database::models::metric::Metric;
use crate::utils::datetime::month_range;

/// One performed set: metric name to recorded value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub metrics: BTreeMap<Metric, f64>,
}

/// An exercise performed within a workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_time_seconds: Option<i64>,
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

impl ExerciseEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest_time_seconds: None,
            sets: Vec::new(),
        }
    }
}

/// A workout performed within a training session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub name: String,
    pub completed: bool,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

impl WorkoutEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: true,
            exercises: Vec::new(),
        }
    }
}

/// The top-level document for a completed training session.
///
/// Stored in the `trainings` collection; all read paths filter on
/// `user_id` plus a `date` range, served by the compound index created in
/// [`crate::database::connection::DatabaseManager::ensure_indexes`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Training {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: i64,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    pub duration_minutes: i64,
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
}

impl Training {
    pub async fn insert(&self, collection: &Collection<Training>) -> Result<ObjectId> {
        let result = collection.insert_one(self, None).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| anyhow!("insert did not return an ObjectId"))
    }

    pub async fn find_by_id(
        collection: &Collection<Training>,
        id: ObjectId,
    ) -> Result<Option<Training>> {
        Ok(collection.find_one(doc! { "_id": id }, None).await?)
    }

    /// All trainings for a user with `date` in `[from, to]`, oldest first.
    pub async fn find_between(
        collection: &Collection<Training>,
        user_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Training>> {
        let filter = doc! {
            "user_id": user_id,
            "date": {
                "$gte": mongodb::bson::DateTime::from_chrono(from),
                "$lte": mongodb::bson::DateTime::from_chrono(to),
            },
        };
        let options = FindOptions::builder().sort(doc! { "date": 1 }).build();
        let cursor = collection.find(filter, options).await?;
        Ok(cursor.try_collect().await?)
    }

    /// The most recent `n` trainings for a user, newest first.
    pub async fn find_last_n(
        collection: &Collection<Training>,
        user_id: i64,
        n: i64,
    ) -> Result<Vec<Training>> {
        let options = FindOptions::builder()
            .sort(doc! { "date": -1 })
            .limit(n)
            .build();
        let cursor = collection.find(doc! { "user_id": user_id }, options).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Session dates for a user within one calendar month.
    pub async fn dates_for_month(
        collection: &Collection<Training>,
        user_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<DateTime<Utc>>> {
        let (from, to) = month_range(year, month)?;
        let trainings = Self::find_between(collection, user_id, from, to).await?;
        Ok(trainings.into_iter().map(|t| t.date).collect())
    }
}
