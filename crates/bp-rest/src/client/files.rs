use std::path::Path;

use serde_json::Value;
use tracing::instrument;

use billingplatform_client::security::url as url_security;
use billingplatform_client::translate;
use billingplatform_client::{Error, ErrorKind, Operation, RequestMethod, Result};

impl super::BillingPlatformRestClient {
    /// Upload a local file as the `file` part of a multipart POST to
    /// `/rest/2.0/files`.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub async fn file_upload(&self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::invalid_input(
                    Operation::FileUpload,
                    format!("{} has no usable file name", path.display()),
                )
            })?
            .to_string();
        let content = tokio::fs::read(path).await.map_err(|e| {
            Error::with_source(
                ErrorKind::InvalidInput {
                    operation: Operation::FileUpload,
                    message: format!("cannot read {}: {}", path.display(), e),
                },
                e,
            )
        })?;

        let view = self.session_view(Operation::FileUpload).await?;
        let request = self
            .request(&view, Operation::FileUpload, RequestMethod::Post, "files")
            .multipart_file("file", file_name, content);
        self.http().send_json(request).await
    }

    /// Download a file's raw content from `/rest/2.0/files/{id}`.
    #[instrument(skip(self))]
    pub async fn file_download(&self, file_id: &str) -> Result<Vec<u8>> {
        if file_id.is_empty() {
            return Err(Error::invalid_input(
                Operation::FileDownload,
                "file id must not be empty",
            ));
        }
        let path = format!("files/{}", url_security::encode_param(file_id));

        let view = self.session_view(Operation::FileDownload).await?;
        let request = self.request(&view, Operation::FileDownload, RequestMethod::Get, &path);
        let response = translate::expect_ok(self.http().execute(request).await?).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
