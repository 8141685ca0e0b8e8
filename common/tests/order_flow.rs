use std::cell::RefCell;

use futures::executor::block_on;
use serde_json::{json, Value};

use starshop_common::draft::ItemAttributes;
use starshop_common::guard::GuardState;
use starshop_common::identity::NoBridge;
use starshop_common::session::{Notice, OrderSession, Selection, SubmitAttempt};
use starshop_common::submit::{
    send_order, FormInput, OrderRequest, OrderTransport, RawResponse, SubmitError,
    ValidationError,
};

/// Records every posted request and answers with a canned response.
struct RecordingTransport {
    reply: Result<RawResponse, SubmitError>,
    posted: RefCell<Vec<(String, OrderRequest<&'static str>)>>,
}

impl RecordingTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
            posted: RefCell::new(Vec::new()),
        }
    }

    fn failing(msg: &str) -> Self {
        Self {
            reply: Err(SubmitError::Transport(msg.to_string())),
            posted: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.posted.borrow().len()
    }
}

impl OrderTransport for RecordingTransport {
    type File = &'static str;

    async fn post_order(
        &self,
        endpoint: &str,
        request: OrderRequest<Self::File>,
    ) -> Result<RawResponse, SubmitError> {
        self.posted.borrow_mut().push((endpoint.to_string(), request));
        self.reply.clone()
    }
}

fn alice_bridge() -> Option<Value> {
    Some(json!({ "user": { "username": "@alice", "id": 42 } }))
}

/// Form as prefilled by the dialog, with a recipient typed in.
fn prefilled_form(session: &OrderSession, recipient: &str) -> FormInput {
    let view = session.modal();
    FormInput {
        buyer_handle: view.buyer_handle.clone(),
        buyer_id: view.buyer_id.clone(),
        recipient: recipient.to_string(),
    }
}

/// Confirm, post and finish, the way the UI drives a session.
fn confirm(
    session: &mut OrderSession,
    transport: &RecordingTransport,
    form: &FormInput,
    screenshot: Option<&'static str>,
) -> Option<Notice> {
    match session.begin_submit(form, screenshot) {
        SubmitAttempt::Ready(request) => {
            let endpoint = session.config().endpoint.clone();
            let result = block_on(send_order(transport, &endpoint, request));
            Some(session.finish_submit(result))
        }
        SubmitAttempt::Ignored => None,
        SubmitAttempt::Rejected(e) => Some(Notice::Invalid(e)),
    }
}

#[test]
fn quantity_pack_end_to_end() {
    tracing_subscriber::fmt::try_init().ok();
    let mut session = OrderSession::default();
    let transport = RecordingTransport::replying(200, r#"{"success":true}"#);

    let selection = session.select(&ItemAttributes::quantity_pack("50", "15000"), &alice_bridge);
    assert_eq!(selection, Selection::Confirm);
    assert!(session.modal().visible);
    assert!(session.modal().summary.contains("50"));
    assert!(session.modal().summary.contains("15 000"));

    let form = prefilled_form(&session, "");
    let notice = confirm(&mut session, &transport, &form, Some("proof.jpg"));
    assert_eq!(notice, Some(Notice::OrderPlaced));

    let posted = transport.posted.borrow();
    assert_eq!(posted.len(), 1);
    let (endpoint, request) = &posted[0];
    assert_eq!(endpoint, "/api/order");
    assert_eq!(request.text("quantity"), Some("50"));
    assert_eq!(request.text("price"), Some("15000"));
    assert_eq!(request.text("buyerUsername"), Some("alice"));
    assert_eq!(request.text("buyerId"), Some("42"));
    assert_eq!(request.screenshot(), Some(&"proof.jpg"));
    assert!(!request.has_field("description"));
    assert!(!request.has_field("recipientUsername"));
    assert!(!request.has_field("recipientId"));

    assert!(!session.modal().visible);
    assert_eq!(session.guard_state(), GuardState::Cooling(10));
}

#[test]
fn recipient_field_follows_prefix() {
    for (input, field, value) in [
        ("@alice", "recipientUsername", "alice"),
        ("12345", "recipientId", "12345"),
    ] {
        let mut session = OrderSession::default();
        let transport = RecordingTransport::replying(200, "{}");
        session.select(&ItemAttributes::labeled("Gift", "300"), &alice_bridge);
        let form = prefilled_form(&session, input);
        confirm(&mut session, &transport, &form, Some("proof.jpg"));

        let posted = transport.posted.borrow();
        let request = &posted[0].1;
        assert_eq!(request.text(field), Some(value));
        assert_eq!(request.text("description"), Some("Gift"));
    }
}

#[test]
fn missing_attachment_never_hits_network() {
    let mut session = OrderSession::default();
    let transport = RecordingTransport::replying(200, r#"{"success":true}"#);
    session.select(&ItemAttributes::quantity_pack("50", "15000"), &alice_bridge);

    let form = prefilled_form(&session, "");
    let notice = confirm(&mut session, &transport, &form, None);
    assert_eq!(notice, Some(Notice::Invalid(ValidationError::MissingAttachment)));
    assert_eq!(transport.calls(), 0);
    assert!(session.modal().visible);
    assert_eq!(session.guard_state(), GuardState::Idle);
}

#[test]
fn unresolved_identity_blocks_until_typed_in() {
    let mut session = OrderSession::default();
    let transport = RecordingTransport::replying(200, r#"{"success":true}"#);
    session.select(&ItemAttributes::quantity_pack("50", "15000"), &NoBridge);
    assert_eq!(session.modal().buyer_handle, "");

    let form = prefilled_form(&session, "");
    let notice = confirm(&mut session, &transport, &form, Some("proof.jpg"));
    assert_eq!(notice, Some(Notice::Invalid(ValidationError::MissingSender)));
    assert_eq!(transport.calls(), 0);

    let typed = FormInput {
        buyer_handle: "@dave".into(),
        ..form
    };
    let notice = confirm(&mut session, &transport, &typed, Some("proof.jpg"));
    assert_eq!(notice, Some(Notice::OrderPlaced));
    assert_eq!(transport.posted.borrow()[0].1.text("buyerUsername"), Some("dave"));
}

#[test]
fn repeated_confirms_issue_one_request() {
    let mut session = OrderSession::default();
    let transport = RecordingTransport::replying(200, r#"{"success":true}"#);
    session.select(&ItemAttributes::labeled("Gift", "300"), &alice_bridge);
    let form = prefilled_form(&session, "");

    let first = session.begin_submit(&form, Some("proof.jpg"));
    let SubmitAttempt::Ready(request) = first else {
        panic!("first confirm should be accepted");
    };
    for _ in 0..5 {
        assert_eq!(session.begin_submit(&form, Some("proof.jpg")), SubmitAttempt::Ignored);
    }
    let result = block_on(send_order(&transport, "/api/order", request));
    session.finish_submit(result);
    assert_eq!(transport.calls(), 1);

    // Reopened dialog, but still cooling: further confirms are dropped too.
    session.select(&ItemAttributes::labeled("Gift", "300"), &alice_bridge);
    assert_eq!(session.begin_submit(&form, Some("proof.jpg")), SubmitAttempt::Ignored);
    assert_eq!(transport.calls(), 1);
}

#[test]
fn failures_are_reported_uniformly() {
    let cases = [
        RecordingTransport::failing("connection refused"),
        RecordingTransport::replying(500, "oops"),
        RecordingTransport::replying(200, r#"{"success":false,"error":"bad screenshot"}"#),
    ];
    for transport in cases {
        let mut session = OrderSession::default();
        session.select(&ItemAttributes::labeled("Gift", "300"), &alice_bridge);
        let form = prefilled_form(&session, "");
        let notice = confirm(&mut session, &transport, &form, Some("proof.jpg"));
        assert_eq!(notice, Some(Notice::OrderFailed));
        assert!(!session.modal().visible);
        assert_eq!(session.guard_state(), GuardState::Cooling(10));
    }
}

#[test]
fn cooldown_cycles_restore_label_and_reopen_gate() {
    let mut session = OrderSession::default();
    let transport = RecordingTransport::replying(200, r#"{"success":true}"#);

    for _ in 0..2 {
        session.select(&ItemAttributes::labeled("Gift", "300"), &alice_bridge);
        let form = prefilled_form(&session, "");
        confirm(&mut session, &transport, &form, Some("proof.jpg"));

        let mut labels = vec![session.confirm_label()];
        while session.tick_cooldown() {
            labels.push(session.confirm_label());
        }
        let expected: Vec<String> = (1..=10).rev().map(|n| format!("Confirm ({n})")).collect();
        assert_eq!(labels, expected);
        assert_eq!(session.confirm_label(), "Confirm");
        assert!(session.confirm_enabled());
    }
    assert_eq!(transport.calls(), 2);
}

#[test]
fn contact_item_closes_open_dialog() {
    let mut session = OrderSession::default();
    let transport = RecordingTransport::replying(200, r#"{"success":true}"#);
    session.select(&ItemAttributes::quantity_pack("50", "15000"), &alice_bridge);
    let form = prefilled_form(&session, "");

    for custom_price in ["0", "0,00"] {
        let selection = session.select(&ItemAttributes::labeled("Custom", custom_price), &alice_bridge);
        assert!(matches!(selection, Selection::Contact { .. }));
        assert!(!session.modal().visible);
        assert_eq!(confirm(&mut session, &transport, &form, Some("proof.jpg")), None);
    }
    assert_eq!(transport.calls(), 0);
    assert_eq!(session.guard_state(), GuardState::Idle);
}
