//! HTTP client with client-side rate limiting
//!
//! One instance per upstream API. Requests wait on a `governor` quota before
//! going out and are never retried; a failed call surfaces immediately as an
//! [`AppError`].

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("cinestory/", env!("CARGO_PKG_VERSION"));

/// Rate limited JSON-over-HTTP client
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DefaultDirectRateLimiter,
    provider_name: String,
}

impl RateLimitClient {
    /// Client for the TMDB metadata API
    pub fn for_tmdb() -> Self {
        // TMDB: roughly 40 req/sec upper bound, keep well under it
        Self::new("TMDB", Self::create_rate_limiter(20.0, 10))
    }

    /// Client for the story generation API
    pub fn for_story_api() -> Self {
        // Generation is slow and expensive: 1 req/sec with a burst of 2
        Self::new("StoryAPI", Self::create_rate_limiter(1.0, 2))
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DefaultDirectRateLimiter {
        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);

        let quota = if requests_per_second > 0.0 {
            Quota::with_period(Duration::from_secs_f64(1.0 / requests_per_second))
                .map(|quota| quota.allow_burst(burst))
                .unwrap_or_else(|| Quota::per_second(burst))
        } else {
            Quota::per_hour(NonZeroU32::MIN)
        };

        GovernorRateLimiter::direct(quota)
    }

    pub fn new(provider_name: &str, rate_limiter: DefaultDirectRateLimiter) -> Self {
        Self {
            client: Client::new(),
            rate_limiter,
            provider_name: provider_name.to_string(),
        }
    }

    /// Swap the underlying reqwest client, keeping the quota
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// GET `url` and decode the JSON body
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::GET, url, None).await
    }

    /// POST `body` as JSON and decode the JSON response
    pub async fn post_json<T, B>(&self, url: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, url, Some(body)).await
    }

    async fn request<T, B>(&self, method: Method, url: &str, body: Option<&B>) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let endpoint = redact_api_key(url);
        LogContext::api_call(&self.provider_name, &endpoint, "pending", None);

        self.rate_limiter.until_ready().await;
        let started = Instant::now();

        let mut request_builder = self
            .client
            .request(method, url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json");

        if let Some(json_body) = body {
            request_builder = request_builder.json(json_body);
        }

        let response = request_builder.send().await.map_err(|e| {
            log::warn!("{} API request failed: {}", self.provider_name, e);
            AppError::from(e)
        })?;

        let status = response.status();
        LogContext::api_call(
            &self.provider_name,
            &endpoint,
            status.as_str(),
            Some(started.elapsed().as_millis() as u64),
        );

        if !status.is_success() {
            return Err(AppError::from_status(
                status.as_u16(),
                &format!("{} API returned {} for {}", self.provider_name, status, endpoint),
            ));
        }

        self.parse_response(response).await
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::NetworkFailure(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        decode_body(&self.provider_name, &response_text)
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}

/// Decode a JSON body; malformed payloads count as a network failure.
pub(crate) fn decode_body<T>(provider_name: &str, response_text: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(response_text).map_err(|e| {
        AppError::NetworkFailure(format!(
            "Malformed {} response: {}. Response: {}",
            provider_name,
            e,
            excerpt(response_text, 200)
        ))
    })
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// Strip the `api_key` query value before a URL reaches the logs.
fn redact_api_key(url: &str) -> String {
    match url.split_once('?') {
        None => url.to_string(),
        Some((path, query)) => {
            let query = query
                .split('&')
                .map(|pair| {
                    if pair.starts_with("api_key=") {
                        "api_key=***"
                    } else {
                        pair
                    }
                })
                .collect::<Vec<_>>()
                .join("&");
            format!("{}?{}", path, query)
        }
    }
}
