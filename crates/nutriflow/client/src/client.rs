//! HTTP client for the NutriFlow backend

use crate::catalog::FoodCatalog;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use nutriflow_types::{FoodItem, UserProfile, WorkoutStats, WorkoutStatsPatch};
use reqwest::{Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};
use url::Url;

/// JSON client for the backend API
#[derive(Debug, Clone)]
pub struct NutriflowClient {
    client: Client,
    /// Without trailing slash; endpoint paths are appended verbatim
    base_url: String,
}

impl NutriflowClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========== Meals ==========

    /// Meals recorded on the backend
    pub async fn get_meals(&self) -> ClientResult<Vec<FoodItem>> {
        self.request(Method::GET, self.endpoint("/meals")?, None::<&()>)
            .await
    }

    /// Record a meal; the backend echoes the stored entry
    pub async fn add_meal(&self, meal: &FoodItem) -> ClientResult<FoodItem> {
        self.request(Method::POST, self.endpoint("/meals")?, Some(meal))
            .await
    }

    // ========== User ==========

    pub async fn get_user(&self) -> ClientResult<UserProfile> {
        self.request(Method::GET, self.endpoint("/user")?, None::<&()>)
            .await
    }

    pub async fn update_user(&self, user: &UserProfile) -> ClientResult<UserProfile> {
        self.request(Method::PUT, self.endpoint("/user")?, Some(user))
            .await
    }

    // ========== Workouts ==========

    pub async fn get_workouts(&self) -> ClientResult<Vec<WorkoutStats>> {
        self.request(Method::GET, self.endpoint("/workouts")?, None::<&()>)
            .await
    }

    pub async fn log_workout(&self, workout: &WorkoutStatsPatch) -> ClientResult<WorkoutStats> {
        self.request(Method::POST, self.endpoint("/workouts/log")?, Some(workout))
            .await
    }

    // ========== Plumbing ==========

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    async fn request<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%method, %url, "Backend request");
        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let result = match request.send().await {
            Ok(response) => self.handle_response(response).await,
            Err(e) => Err(ClientError::Http(e)),
        };
        if let Err(e) = &result {
            error!(%method, %url, error = %e, "Backend request failed");
        }
        result
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else if status == StatusCode::NOT_FOUND {
            Err(ClientError::NotFound(response.url().path().to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl FoodCatalog for NutriflowClient {
    async fn search_foods(&self, query: &str) -> ClientResult<Vec<FoodItem>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut url = self.endpoint("/food/search")?;
        url.query_pairs_mut().append_pair("query", query);

        // The backend answers `null` when it has nothing to say.
        let foods: Option<Vec<FoodItem>> = self.request(Method::GET, url, None::<&()>).await?;
        Ok(foods.unwrap_or_default())
    }
}
