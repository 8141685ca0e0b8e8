//! Multipart order payload, the transport seam and response interpretation.

use serde::Deserialize;

use crate::draft::OrderDraft;
use crate::identity::Identity;
use crate::recipient::Recipient;

/// Multipart field carrying the payment proof.
pub const SCREENSHOT_FIELD: &str = "screenshot";

/// A submission rejected before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingSender,
    MissingAttachment,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSender => write!(
                f,
                "Cannot determine sender identity. Please enter your username."
            ),
            Self::MissingAttachment => {
                write!(f, "Attachment required: please attach a payment screenshot.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Any failure after the request was issued. Reported to the user uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Transport(String),
    Status(u16),
    Rejected(Option<String>),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport failed: {msg}"),
            Self::Status(status) => write!(f, "server responded with HTTP {status}"),
            Self::Rejected(Some(reason)) => write!(f, "order rejected: {reason}"),
            Self::Rejected(None) => write!(f, "order rejected"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Editable values of the confirmation form at the time of confirm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub buyer_handle: String,
    pub buyer_id: String,
    pub recipient: String,
}

/// One part of the multipart body. `F` is the transport's file handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart<F> {
    Text { name: &'static str, value: String },
    File { name: &'static str, file: F },
}

impl<F> FormPart<F> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => *name,
        }
    }
}

/// A fully assembled order, ready to post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest<F> {
    pub parts: Vec<FormPart<F>>,
}

impl<F> OrderRequest<F> {
    /// Assemble the body: `description`, `quantity`, `price`, `screenshot`,
    /// `buyerUsername`, `buyerId`, then one recipient field. Optional
    /// fields are left out rather than sent empty.
    pub fn build(
        draft: &OrderDraft,
        sender: &Identity,
        recipient: Option<&Recipient>,
        screenshot: F,
    ) -> Self {
        let mut parts = Vec::with_capacity(7);
        let mut text = |name: &'static str, value: &str| {
            parts.push(FormPart::Text {
                name,
                value: value.to_string(),
            })
        };

        if let Some(description) = draft.item_label.as_deref() {
            text("description", description);
        }
        if let Some(quantity) = draft.quantity.as_deref() {
            text("quantity", quantity);
        }
        text("price", &draft.price);

        parts.push(FormPart::File {
            name: SCREENSHOT_FIELD,
            file: screenshot,
        });
        parts.push(FormPart::Text {
            name: "buyerUsername",
            value: sender.handle.clone(),
        });
        if let Some(id) = &sender.id {
            parts.push(FormPart::Text {
                name: "buyerId",
                value: id.clone(),
            });
        }
        if let Some(recipient) = recipient {
            parts.push(FormPart::Text {
                name: recipient.field_name(),
                value: recipient.value().to_string(),
            });
        }
        Self { parts }
    }

    /// Value of a text field, if present.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name: n, value } if *n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.parts.iter().any(|part| part.name() == name)
    }

    pub fn screenshot(&self) -> Option<&F> {
        self.parts.iter().find_map(|part| match part {
            FormPart::File { file, .. } => Some(file),
            FormPart::Text { .. } => None,
        })
    }
}

/// Status and body of the backend's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over the HTTP client posting orders (browser fetch, reqwest).
#[allow(async_fn_in_trait)]
pub trait OrderTransport {
    /// File handle the transport knows how to upload.
    type File;

    /// Issue a single multipart POST to `endpoint`.
    async fn post_order(
        &self,
        endpoint: &str,
        request: OrderRequest<Self::File>,
    ) -> Result<RawResponse, SubmitError>;
}

#[derive(Deserialize)]
struct OrderResponse {
    success: bool,
    error: Option<String>,
}

/// Decide whether the backend accepted the order.
///
/// A non-2xx status always fails. Otherwise a JSON `{ success, error }`
/// body is authoritative, and any other body counts as success.
pub fn interpret_response(response: &RawResponse) -> Result<(), SubmitError> {
    if !response.is_success_status() {
        return Err(SubmitError::Status(response.status));
    }
    match serde_json::from_str::<OrderResponse>(&response.body) {
        Ok(OrderResponse { success: true, .. }) | Err(_) => Ok(()),
        Ok(OrderResponse {
            success: false,
            error,
        }) => Err(SubmitError::Rejected(error)),
    }
}

/// Post the order and interpret the answer.
pub async fn send_order<T: OrderTransport>(
    transport: &T,
    endpoint: &str,
    request: OrderRequest<T::File>,
) -> Result<(), SubmitError> {
    let response = transport.post_order(endpoint, request).await?;
    interpret_response(&response)
}
