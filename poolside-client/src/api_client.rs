//! HTTP implementation of the catalog API.

use crate::config::ClientConfig;
use async_trait::async_trait;
use poolside_core::api::CatalogApi;
use poolside_core::error::{CatalogError, CatalogResult};
use poolside_model::{
    Exercise, ExerciseId, Page, Plan, PlanDraft, PlanId, SwimSet, Upload,
    Workout, WorkoutId,
};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Reqwest client for the Poolside backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the configured base URL.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        debug!(base_url = %config.base_url, "creating API client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a full API URL from a path.
    pub fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/api/{}", self.base_url, path)
    }

    /// Execute a request expecting a JSON body back.
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> CatalogResult<T> {
        let response = request
            .send()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|err| CatalogError::Decode(err.to_string()));
        }

        let message = response.text().await.unwrap_or_default();
        Err(map_status(status.as_u16(), context, message))
    }

    /// Execute a request where only the status matters (joins, deletions).
    async fn execute_empty(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> CatalogResult<()> {
        let response = request
            .send()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(map_status(status.as_u16(), context, message))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> CatalogResult<T> {
        let url = self.build_url(path);
        self.execute_request(self.client.get(&url), path).await
    }
}

/// Translate a non-success HTTP status into the catalog error taxonomy.
fn map_status(status: u16, context: &str, message: String) -> CatalogError {
    match StatusCode::from_u16(status) {
        Ok(StatusCode::NOT_FOUND) => CatalogError::NotFound(context.to_string()),
        Ok(StatusCode::UNAUTHORIZED) => CatalogError::Unauthorized,
        _ => CatalogError::Server {
            status,
            message: if message.is_empty() {
                "Unknown error".to_string()
            } else {
                message
            },
        },
    }
}

#[async_trait]
impl CatalogApi for ApiClient {
    async fn fetch_workouts(&self) -> CatalogResult<Vec<Workout>> {
        self.get_json("workouts").await
    }

    async fn fetch_exercises(&self) -> CatalogResult<Vec<Exercise>> {
        self.get_json("exercises").await
    }

    async fn fetch_plans(&self) -> CatalogResult<Vec<Plan>> {
        self.get_json("plans").await
    }

    async fn fetch_pages(&self) -> CatalogResult<Vec<Page>> {
        self.get_json("pages").await
    }

    async fn fetch_uploads(&self) -> CatalogResult<Vec<Upload>> {
        self.get_json("uploads").await
    }

    async fn fetch_workout_exercises(
        &self,
        workout: WorkoutId,
    ) -> CatalogResult<Vec<Exercise>> {
        self.get_json(&format!("workouts/{workout}/exercises")).await
    }

    async fn fetch_workout_swim_sets(
        &self,
        workout: WorkoutId,
    ) -> CatalogResult<Vec<SwimSet>> {
        self.get_json(&format!("workouts/{workout}/swim-sets")).await
    }

    async fn fetch_plan_workouts(
        &self,
        plan: PlanId,
    ) -> CatalogResult<Vec<Workout>> {
        self.get_json(&format!("plans/{plan}/workouts")).await
    }

    async fn create_plan(&self, draft: &PlanDraft) -> CatalogResult<Plan> {
        let url = self.build_url("plans");
        self.execute_request(self.client.post(&url).json(draft), "plans")
            .await
    }

    async fn update_plan(
        &self,
        plan: PlanId,
        draft: &PlanDraft,
    ) -> CatalogResult<Plan> {
        let path = format!("plans/{plan}");
        let url = self.build_url(&path);
        self.execute_request(self.client.put(&url).json(draft), &path)
            .await
    }

    async fn add_workout_to_plan(
        &self,
        plan: PlanId,
        workout: WorkoutId,
    ) -> CatalogResult<()> {
        let path = format!("plans/{plan}/workouts/{workout}");
        let url = self.build_url(&path);
        self.execute_empty(self.client.post(&url), &path).await
    }

    async fn remove_workout_from_plan(
        &self,
        plan: PlanId,
        workout: WorkoutId,
    ) -> CatalogResult<()> {
        let path = format!("plans/{plan}/workouts/{workout}");
        let url = self.build_url(&path);
        self.execute_empty(self.client.delete(&url), &path).await
    }

    async fn add_exercise_to_workout(
        &self,
        workout: WorkoutId,
        exercise: ExerciseId,
    ) -> CatalogResult<()> {
        let path = format!("workouts/{workout}/exercises/{exercise}");
        let url = self.build_url(&path);
        self.execute_empty(self.client.post(&url), &path).await
    }

    async fn remove_exercise_from_workout(
        &self,
        workout: WorkoutId,
        exercise: ExerciseId,
    ) -> CatalogResult<()> {
        let path = format!("workouts/{workout}/exercises/{exercise}");
        let url = self.build_url(&path);
        self.execute_empty(self.client.delete(&url), &path).await
    }
}
