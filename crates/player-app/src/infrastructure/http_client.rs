//! HTTP adapter for the request store.
//!
//! Desktop builds use reqwest with a client-wide timeout. Browser builds use
//! gloo-net and race every request against a `TimeoutFuture`.

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct HttpApiAdapter {
    base_url: String,
    timeout_ms: u64,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpApiAdapter {
    pub fn new(base_url: &str, timeout_ms: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_millis(timeout_ms))
                .build()
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Falling back to default HTTP client");
                    reqwest::Client::new()
                }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn encode_form(fields: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    use super::*;

    impl HttpApiAdapter {
        fn transport_error(&self, e: reqwest::Error) -> ApiError {
            if e.is_timeout() {
                ApiError::Timeout(self.timeout_ms)
            } else {
                ApiError::RequestFailed(e.to_string())
            }
        }

        async fn check_status(
            &self,
            response: reqwest::Response,
        ) -> Result<reqwest::Response, ApiError> {
            let status = response.status();
            if status.is_success() {
                return Ok(response);
            }
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::HttpError {
                status: status.as_u16(),
                message,
            })
        }
    }

    #[async_trait::async_trait]
    impl RawApiPort for HttpApiAdapter {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            let response = self
                .client
                .get(self.url(path))
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;
            let response = self.check_status(response).await?;
            response.json::<Value>().await.map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout(self.timeout_ms)
                } else {
                    ApiError::ParseError(e.to_string())
                }
            })
        }

        async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
            let response = self
                .client
                .post(self.url(path))
                .json(body)
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;
            self.check_status(response).await.map(|_| ())
        }

        async fn post_form(&self, path: &str, fields: &[(String, String)]) -> Result<(), ApiError> {
            let response = self
                .client
                .post(self.url(path))
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(encode_form(fields))
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;
            self.check_status(response).await.map(|_| ())
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::*;
    use futures_util::future::{select, Either};
    use gloo_net::http::{Request, Response};
    use gloo_timers::future::TimeoutFuture;
    use std::future::Future;

    impl HttpApiAdapter {
        async fn send(
            &self,
            request: impl Future<Output = Result<Response, gloo_net::Error>>,
        ) -> Result<Response, ApiError> {
            let millis = u32::try_from(self.timeout_ms).unwrap_or(u32::MAX);
            match select(Box::pin(request), TimeoutFuture::new(millis)).await {
                Either::Left((result, _)) => {
                    let response = result.map_err(|e| ApiError::RequestFailed(e.to_string()))?;
                    if response.ok() {
                        Ok(response)
                    } else {
                        Err(ApiError::HttpError {
                            status: response.status(),
                            message: response.text().await.unwrap_or_default(),
                        })
                    }
                }
                Either::Right(_) => Err(ApiError::Timeout(self.timeout_ms)),
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl RawApiPort for HttpApiAdapter {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            let response = self.send(Request::get(&self.url(path)).send()).await?;
            response
                .json::<Value>()
                .await
                .map_err(|e| ApiError::ParseError(e.to_string()))
        }

        async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
            let request = Request::post(&self.url(path))
                .json(body)
                .map_err(|e| ApiError::SerializeError(e.to_string()))?;
            self.send(request.send()).await.map(|_| ())
        }

        async fn post_form(&self, path: &str, fields: &[(String, String)]) -> Result<(), ApiError> {
            let request = Request::post(&self.url(path))
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(encode_form(fields))
                .map_err(|e| ApiError::SerializeError(e.to_string()))?;
            self.send(request.send()).await.map(|_| ())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn form_fields_are_url_encoded() {
        let fields = vec![("id".to_string(), "a b&c".to_string())];
        assert_eq!(encode_form(&fields), "id=a+b%26c");
    }

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let adapter = HttpApiAdapter::new("http://localhost:3000/", 1_000);
        assert_eq!(adapter.base_url(), "http://localhost:3000");
        assert_eq!(adapter.url("/view_requests"), "http://localhost:3000/view_requests");
    }

    #[tokio::test]
    async fn get_json_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/view_requests"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 0}])))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = HttpApiAdapter::new(&server.uri(), 1_000);
        let value = adapter.get_json("/view_requests").await.unwrap();

        assert_eq!(value, json!([{"id": 0}]));
    }

    #[tokio::test]
    async fn non_success_status_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/update_request/5"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
            .mount(&server)
            .await;

        let adapter = HttpApiAdapter::new(&server.uri(), 1_000);
        let err = adapter
            .post_no_response_json("/update_request/5", &json!({"status": "accepted"}))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::HttpError {
                status: 500,
                message: "Internal error".to_string()
            }
        );
    }

    #[tokio::test]
    async fn json_post_sends_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/update_request/1"))
            .and(body_json(json!({"status": "denied"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = HttpApiAdapter::new(&server.uri(), 1_000);
        adapter
            .post_no_response_json("/update_request/1", &json!({"status": "denied"}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn form_post_sends_urlencoded_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/delete_request"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("id=2"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = HttpApiAdapter::new(&server.uri(), 1_000);
        adapter
            .post_form("/delete_request", &[("id".to_string(), "2".to_string())])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/view_requests"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let adapter = HttpApiAdapter::new(&server.uri(), 50);
        let err = adapter.get_json("/view_requests").await.unwrap_err();

        assert_eq!(err, ApiError::Timeout(50));
    }

    #[tokio::test]
    async fn unreachable_store_is_request_failed() {
        let adapter = HttpApiAdapter::new("http://127.0.0.1:9", 1_000);
        let err = adapter.get_json("/view_requests").await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::RequestFailed(_) | ApiError::Timeout(_)
        ));
    }
}
