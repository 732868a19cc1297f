// src/core/api_client.rs
//! HTTP client for the JobSeeker backend. One struct owns the reqwest
//! client, the base URL, and the injected token store; every endpoint is
//! a typed method. The token is read at call time, never cached.

use anyhow::Result;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, StatusCode};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::fetcher::JobsApi;
use crate::filters::JobQuery;
use crate::session::TokenStore;
use crate::types::auth::{
    ApiEnvelope, LoginData, LoginRequest, ProfileUpdate, RegisterRequest, User, UserData,
    VerifyEmailRequest,
};
use crate::types::job::{ApiJobResponse, ApiJobsResponse, Job, JobsPage};
use crate::types::resume::{AnalysisResult, ResumeMetadata, UploadResult};

const JOBS_ENDPOINT: &str = "/api/jobs";
const LOGIN_ENDPOINT: &str = "/api/auth/login";
const REGISTER_ENDPOINT: &str = "/api/auth/register";
const VERIFY_EMAIL_ENDPOINT: &str = "/api/auth/verify-email";
const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
const PROFILE_ENDPOINT: &str = "/api/users/profile";
const RESUME_ENDPOINT: &str = "/api/resume";

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    page_size: u32,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
            tokens,
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // ===== Jobs =====

    /// GET /api/jobs with the query's filters, page, and the configured
    /// page size. 404 cannot happen here; an empty result is a 200 with
    /// an empty data array.
    pub async fn fetch_jobs_page(&self, query: &JobQuery) -> ApiResult<JobsPage> {
        let mut params = query.filters.to_pairs();
        let page = query.page().to_string();
        let limit = self.page_size.to_string();
        params.push(("page", page));
        params.push(("limit", limit));

        let url = format!("{}{}", self.base_url, JOBS_ENDPOINT);
        info!("Fetching jobs: {} page {}", url, query.page());

        let response = self.client.get(&url).query(&params).send().await?;
        let response = check_status(response).await?;
        let body: ApiJobsResponse = response.json().await?;
        Ok(JobsPage::from(body))
    }

    /// GET /api/jobs/{id}. A missing id is `ApiError::NotFound`, distinct
    /// from transport and server failures.
    pub async fn fetch_job(&self, id: &str) -> ApiResult<Job> {
        let url = format!("{}{}/{}", self.base_url, JOBS_ENDPOINT, id);
        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;
        let body: ApiJobResponse = response.json().await?;
        Ok(Job::from(body.data))
    }

    // ===== Auth =====

    /// Login; on success the bearer token is persisted in the store.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginData> {
        let url = format!("{}{}", self.base_url, LOGIN_ENDPOINT);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let response = check_status(response).await?;
        let envelope: ApiEnvelope<LoginData> = response.json().await?;
        let data = unwrap_envelope(envelope, "Login failed")?;

        if let Err(e) = self.tokens.set_token(&data.token) {
            warn!("Failed to persist session token: {e:#}");
        }
        Ok(data)
    }

    /// Register a new account. No token yet; the email has to be verified
    /// first, so it is remembered as pending in the store.
    pub async fn register(&self, email: &str, password: &str) -> ApiResult<User> {
        let url = format!("{}{}", self.base_url, REGISTER_ENDPOINT);
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let response = check_status(response).await?;
        let envelope: ApiEnvelope<UserData> = response.json().await?;
        let data = unwrap_envelope(envelope, "Registration failed")?;

        if let Err(e) = self.tokens.set_pending_email(email) {
            warn!("Failed to store pending verification email: {e:#}");
        }
        Ok(data.user)
    }

    /// Verify the emailed code. Still no token; login follows.
    pub async fn verify_email(&self, email: &str, code: &str) -> ApiResult<User> {
        let url = format!("{}{}", self.base_url, VERIFY_EMAIL_ENDPOINT);
        let request = VerifyEmailRequest {
            email: email.to_string(),
            code: code.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let response = check_status(response).await?;
        let envelope: ApiEnvelope<UserData> = response.json().await?;
        let data = unwrap_envelope(envelope, "Verification failed")?;
        Ok(data.user)
    }

    pub async fn current_user(&self) -> ApiResult<User> {
        let url = format!("{}{}", self.base_url, CURRENT_USER_ENDPOINT);
        let response = self.authorize(self.client.get(&url)).send().await?;
        let response = check_status(response).await?;
        let envelope: ApiEnvelope<UserData> = response.json().await?;
        let data = unwrap_envelope(envelope, "Failed to get user")?;
        Ok(data.user)
    }

    /// Logout. The local session is cleared even when the request fails;
    /// the server call is best-effort.
    pub async fn logout(&self) -> ApiResult<()> {
        let url = format!("{}{}", self.base_url, LOGOUT_ENDPOINT);
        let result: ApiResult<()> = async {
            let response = self.authorize(self.client.post(&url)).send().await?;
            check_status(response).await?;
            Ok(())
        }
        .await;

        if let Err(e) = self.tokens.clear_token() {
            warn!("Failed to clear session token: {e:#}");
        }
        if let Err(e) = self.tokens.clear_pending_email() {
            warn!("Failed to clear pending email: {e:#}");
        }
        result
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User> {
        let url = format!("{}{}", self.base_url, PROFILE_ENDPOINT);
        let response = self
            .authorize(self.client.put(&url))
            .json(update)
            .send()
            .await?;
        let response = check_status(response).await?;
        let envelope: ApiEnvelope<UserData> = response.json().await?;
        let data = unwrap_envelope(envelope, "Failed to update profile")?;
        Ok(data.user)
    }

    // ===== Resume =====

    /// Multipart upload of a resume file.
    pub async fn upload_resume(&self, file_path: &Path) -> ApiResult<UploadResult> {
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume")
            .to_string();
        let content_type = resume_content_type(&file_name)
            .ok_or_else(|| ApiError::Api(format!("Unsupported file format: {}", file_name)))?;

        let file_content = tokio::fs::read(file_path)
            .await
            .map_err(|e| ApiError::Api(format!("Failed to read {}: {}", file_path.display(), e)))?;

        let form = Form::new().part(
            "file",
            Part::bytes(file_content)
                .file_name(file_name.clone())
                .mime_str(content_type)
                .map_err(|e| ApiError::Api(format!("Failed to build multipart: {}", e)))?,
        );

        let url = format!("{}{}/upload", self.base_url, RESUME_ENDPOINT);
        info!("Uploading resume {} to {}", file_name, url);

        let response = self
            .authorize(self.client.post(&url))
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response).await?;
        let envelope: ApiEnvelope<UploadResult> = response.json().await?;
        unwrap_envelope(envelope, "Upload failed")
    }

    pub async fn get_resume(&self, resume_id: &str) -> ApiResult<ResumeMetadata> {
        let url = format!("{}{}/{}", self.base_url, RESUME_ENDPOINT, resume_id);
        let response = self.authorize(self.client.get(&url)).send().await?;
        let response = check_status(response).await?;
        let envelope: ApiEnvelope<ResumeMetadata> = response.json().await?;
        unwrap_envelope(envelope, "Failed to fetch resume")
    }

    pub async fn analyze_resume(&self, resume_id: &str) -> ApiResult<AnalysisResult> {
        let url = format!("{}{}/analyze/{}", self.base_url, RESUME_ENDPOINT, resume_id);
        info!("Requesting AI analysis for resume {}", resume_id);
        let response = self.authorize(self.client.post(&url)).send().await?;
        let response = check_status(response).await?;
        let envelope: ApiEnvelope<AnalysisResult> = response.json().await?;
        unwrap_envelope(envelope, "Analysis failed")
    }

    pub async fn delete_resume(&self, resume_id: &str) -> ApiResult<()> {
        let url = format!("{}{}/{}", self.base_url, RESUME_ENDPOINT, resume_id);
        let response = self.authorize(self.client.delete(&url)).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

impl JobsApi for ApiClient {
    fn fetch_jobs<'a>(
        &'a self,
        query: &'a JobQuery,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ApiResult<JobsPage>> + Send + 'a>> {
        Box::pin(self.fetch_jobs_page(query))
    }
}

/// Map a non-success status to the error taxonomy, pulling the backend's
/// error message out of the envelope when there is one.
async fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| extract_error_message(&body))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .pointer("/error/message")
        .or_else(|| value.pointer("/message"))
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

fn unwrap_envelope<T>(envelope: ApiEnvelope<T>, fallback: &str) -> ApiResult<T> {
    if envelope.success {
        if let Some(data) = envelope.data {
            return Ok(data);
        }
    }
    let message = envelope
        .error
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    Err(ApiError::Api(message))
}

fn resume_content_type(file_name: &str) -> Option<&'static str> {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".pdf") {
        Some("application/pdf")
    } else if lower.ends_with(".docx") {
        Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
    } else if lower.ends_with(".doc") {
        Some("application/msword")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::auth::ApiEnvelope;

    #[test]
    fn test_extract_error_message_enveloped() {
        let body = r#"{"success":false,"error":{"code":"E1","message":"Invalid credentials"}}"#;
        assert_eq!(
            extract_error_message(body),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn test_extract_error_message_flat_and_garbage() {
        assert_eq!(
            extract_error_message(r#"{"message":"boom"}"#),
            Some("boom".to_string())
        );
        assert_eq!(extract_error_message("<html>502</html>"), None);
    }

    #[test]
    fn test_unwrap_envelope_paths() {
        let ok: ApiEnvelope<u32> = serde_json::from_value(serde_json::json!({
            "success": true, "data": 7
        }))
        .unwrap();
        assert_eq!(unwrap_envelope(ok, "fallback").unwrap(), 7);

        let failed: ApiEnvelope<u32> = serde_json::from_value(serde_json::json!({
            "success": false, "error": {"message": "nope"}
        }))
        .unwrap();
        match unwrap_envelope(failed, "fallback") {
            Err(ApiError::Api(message)) => assert_eq!(message, "nope"),
            other => panic!("unexpected: {other:?}"),
        }

        // success=true but no data is still a failure
        let hollow: ApiEnvelope<u32> =
            serde_json::from_value(serde_json::json!({"success": true})).unwrap();
        match unwrap_envelope(hollow, "fallback") {
            Err(ApiError::Api(message)) => assert_eq!(message, "fallback"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_resume_content_type() {
        assert_eq!(resume_content_type("cv.pdf"), Some("application/pdf"));
        assert_eq!(resume_content_type("CV.DOCX").is_some(), true);
        assert_eq!(resume_content_type("photo.png"), None);
    }
}
