//! Native order client: drives the same order session as the storefront
//! page, with identity from the command line and a multipart `reqwest`
//! transport.

pub mod transport;

use std::path::PathBuf;

use anyhow::{bail, Context};
use serde_json::json;

use starshop_common::config::SessionConfig;
use starshop_common::draft::ItemAttributes;
use starshop_common::session::{Notice, OrderSession, Selection, SubmitAttempt};
use starshop_common::submit::{send_order, FormInput};

use crate::transport::{HttpTransport, ProofAttachment};

/// One order as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct OrderArgs {
    pub price: String,
    pub quantity: Option<String>,
    pub description: Option<String>,
    pub sender: String,
    pub sender_id: Option<String>,
    pub recipient: String,
    pub screenshot: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Placed,
    /// Custom order; the user should reach out over this link.
    Contact(String),
}

pub async fn place_order(config: SessionConfig, args: OrderArgs) -> anyhow::Result<Outcome> {
    let mut session = OrderSession::new(config);
    let attrs = ItemAttributes {
        price: Some(args.price),
        description: args.description,
        quantity: args.quantity,
    };

    // Command-line identity stands in for the host bridge.
    let user = json!({ "user": { "username": args.sender, "id": args.sender_id } });
    let bridge = move || Some(user.clone());
    if let Selection::Contact { url } = session.select(&attrs, &bridge) {
        return Ok(Outcome::Contact(url));
    }
    tracing::info!("{}", session.modal().summary);

    let view = session.modal().clone();
    let form = FormInput {
        buyer_handle: view.buyer_handle,
        buyer_id: view.buyer_id,
        recipient: args.recipient,
    };
    let screenshot = args
        .screenshot
        .as_deref()
        .map(ProofAttachment::read)
        .transpose()
        .context("Failed to read screenshot")?;

    let request = match session.begin_submit(&form, screenshot) {
        SubmitAttempt::Ready(request) => request,
        SubmitAttempt::Rejected(e) => bail!("{}", Notice::Invalid(e)),
        SubmitAttempt::Ignored => bail!("A submission is already in progress"),
    };

    let endpoint = session.config().endpoint.clone();
    let result = send_order(&HttpTransport::new(), &endpoint, request).await;
    let failed = result.is_err();
    let notice = session.finish_submit(result);
    if failed {
        bail!("{notice}");
    }
    Ok(Outcome::Placed)
}
