use std::path::Path;

use reqwest::multipart::{Form, Part};

use starshop_common::submit::{FormPart, OrderRequest, OrderTransport, RawResponse, SubmitError};

/// Payment screenshot loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofAttachment {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ProofAttachment {
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "screenshot".to_string());
        Ok(Self {
            mime: mime_for(path).to_string(),
            file_name,
            bytes,
        })
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Posts orders with `reqwest` multipart bodies.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderTransport for HttpTransport {
    type File = ProofAttachment;

    async fn post_order(
        &self,
        endpoint: &str,
        request: OrderRequest<ProofAttachment>,
    ) -> Result<RawResponse, SubmitError> {
        let mut form = Form::new();
        for part in request.parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File { name, file } => {
                    let part = Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.mime)
                        .map_err(|e| SubmitError::Transport(e.to_string()))?;
                    form.part(name, part)
                }
            };
        }

        let resp = self
            .client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
}
