//! Core HTTP client for the BillingPlatform API.

use tracing::{debug, info, instrument};

use crate::config::{CertVerification, ClientConfig};
use crate::error::{Error, ErrorKind, Operation, Result};
use crate::request::{RequestBody, RequestBuilder, RequestMethod};
use crate::response::Response;
use crate::translate;

/// HTTP client for the BillingPlatform API.
///
/// Sends each request exactly once; failures are translated into
/// [`Error`]s tagged with the request's operation.
#[derive(Debug, Clone)]
pub struct BpHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl BpHttpClient {
    /// Create a new HTTP client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed);

        match &config.cert_verification {
            CertVerification::Enabled => {}
            CertVerification::Disabled => {
                builder = builder.danger_accept_invalid_certs(true);
            }
            CertVerification::CaBundle(path) => {
                let pem = std::fs::read(path).map_err(|e| {
                    Error::with_source(
                        ErrorKind::Config(format!(
                            "cannot read CA bundle {}: {}",
                            path.display(),
                            e
                        )),
                        e,
                    )
                })?;
                for cert in reqwest::Certificate::from_pem_bundle(&pem)
                    .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?
                {
                    builder = builder.add_root_certificate(cert);
                }
            }
        }

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a request builder for `method`.
    pub fn request(
        &self,
        operation: Operation,
        method: RequestMethod,
        url: impl Into<String>,
    ) -> RequestBuilder {
        RequestBuilder::new(operation, method, url)
    }

    /// Create a POST request builder.
    pub fn post(&self, operation: Operation, url: impl Into<String>) -> RequestBuilder {
        self.request(operation, RequestMethod::Post, url)
    }

    /// Send a request once and return the raw response, whatever its status.
    #[instrument(
        skip(self, request),
        fields(operation = %request.operation, method = ?request.method)
    )]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let RequestBuilder {
            operation,
            method,
            url,
            headers,
            body,
        } = request;

        let mut req = self.inner.request(method.to_reqwest(), &url);

        for (name, value) in &headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = body {
            req = match body {
                RequestBody::Json(value) => req.json(&value),
                RequestBody::Form(encoded) => req.body(encoded),
                RequestBody::Multipart {
                    field,
                    file_name,
                    content,
                } => {
                    let part =
                        reqwest::multipart::Part::bytes(content.to_vec()).file_name(file_name);
                    req.multipart(reqwest::multipart::Form::new().part(field, part))
                }
            };
        }

        if self.config.enable_tracing {
            debug!(%operation, ?method, "Sending request");
        }

        let response = req
            .send()
            .await
            .map_err(|e| translate::from_transport(operation, e))?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            let content_length = response.content_length();

            if status == 200 {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        Ok(Response::new(response, operation))
    }

    /// Send a request and require a 200 response with a non-empty JSON body.
    pub async fn send_json(&self, request: RequestBuilder) -> Result<serde_json::Value> {
        let response = self.execute(request).await?;
        translate::expect_json(response).await
    }
}
