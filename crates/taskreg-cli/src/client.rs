//! HTTP client for the task registry API.

use reqwest::{Response, StatusCode};
use serde::Deserialize;

use taskreg_core::{NewTask, Task};

use crate::error::ClientError;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the `/api/tasks` endpoints.
pub struct TaskregClient {
    inner: reqwest::Client,
    base_url: String,
}

impl TaskregClient {
    /// Create a new client for the server at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn create(&self, new: &NewTask) -> Result<Task, ClientError> {
        let response = self.inner.put(self.url("/api/tasks")).json(new).send().await?;
        Ok(check(response, "task").await?.json().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Task, ClientError> {
        let response = self
            .inner
            .get(self.url("/api/tasks"))
            .query(&[("id", id)])
            .send()
            .await?;
        Ok(check(response, id).await?.json().await?)
    }

    pub async fn list(&self) -> Result<Vec<Task>, ClientError> {
        let response = self.inner.get(self.url("/api/tasks")).send().await?;
        Ok(check(response, "tasks").await?.json().await?)
    }

    /// Tasks whose name contains `name`. No matches is an empty list.
    pub async fn find(&self, name: &str) -> Result<Vec<Task>, ClientError> {
        let response = self
            .inner
            .get(self.url("/api/tasks/find"))
            .query(&[("name", name)])
            .send()
            .await?;

        match check(response, name).await {
            Ok(response) => Ok(response.json().await?),
            Err(ClientError::NotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .inner
            .delete(self.url(&format!("/api/tasks/{id}")))
            .send()
            .await?;
        check(response, id).await?;
        Ok(())
    }

    /// Run the task's command on the server and return the updated task.
    pub async fn execute(&self, id: &str) -> Result<Task, ClientError> {
        let response = self
            .inner
            .put(self.url(&format!("/api/tasks/execute/{id}")))
            .send()
            .await?;
        Ok(check(response, id).await?.json().await?)
    }
}

/// Map error statuses onto `ClientError`.
async fn check(response: Response, what: &str) -> Result<Response, ClientError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(ClientError::NotFound(what.to_string())),
        StatusCode::BAD_REQUEST => {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => "bad request".to_string(),
            };
            Err(ClientError::Rejected(message))
        }
        _ => Ok(response.error_for_status()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = TaskregClient::new("http://127.0.0.1:8080/");
        assert_eq!(client.url("/api/tasks"), "http://127.0.0.1:8080/api/tasks");
    }
}
