use dioxus::prelude::*;

use starshop_common::session::{Notice, SubmitAttempt};
use starshop_common::submit::send_order;

use super::host::{one_second, selected_proof, show_alert, PROOF_INPUT_ID};
use super::order_api::BrowserTransport;
use super::session_state::{use_order_form, use_order_session};

/// Confirmation dialog for the selected item.
#[component]
pub fn OrderModal() -> Element {
    let mut session = use_order_session();
    let mut form = use_order_form();

    let (view, confirm_label, confirm_enabled) = {
        let s = session.read();
        (s.modal().clone(), s.confirm_label(), s.confirm_enabled())
    };
    let input = form.read().clone();

    let on_confirm = move |_| {
        let input = form.read().clone();
        let attempt = session.write().begin_submit(&input, selected_proof());
        match attempt {
            SubmitAttempt::Ignored => {}
            SubmitAttempt::Rejected(e) => show_alert(&Notice::Invalid(e).to_string()),
            SubmitAttempt::Ready(request) => {
                let endpoint = session.read().config().endpoint.clone();
                spawn(async move {
                    let result = send_order(&BrowserTransport, &endpoint, request).await;
                    let notice = session.write().finish_submit(result);
                    show_alert(&notice.to_string());
                });
                spawn(async move {
                    loop {
                        one_second().await;
                        if !session.write().tick_cooldown() {
                            break;
                        }
                    }
                });
            }
        }
    };

    if !view.visible {
        return rsx! {};
    }

    rsx! {
        div { id: "order-modal", class: "modal",
            div { class: "modal-content",
                h3 { "Confirm order" }
                p { id: "order-summary", "{view.summary}" }
                p { id: "order-amount", "Amount: {view.amount}" }
                div { class: "form-group",
                    label { "Your username:" }
                    input {
                        id: "buyer-username",
                        value: "{input.buyer_handle}",
                        oninput: move |evt| form.write().buyer_handle = evt.value(),
                    }
                }
                div { class: "form-group",
                    label { "Your id:" }
                    input {
                        id: "buyer-id",
                        value: "{input.buyer_id}",
                        oninput: move |evt| form.write().buyer_id = evt.value(),
                    }
                }
                div { class: "form-group",
                    label { "Recipient (@username or id, optional):" }
                    input {
                        id: "recipient",
                        value: "{input.recipient}",
                        oninput: move |evt| form.write().recipient = evt.value(),
                    }
                }
                div { class: "form-group",
                    label { "Payment screenshot:" }
                    input { id: PROOF_INPUT_ID, r#type: "file", accept: "image/*" }
                }
                div { class: "modal-actions",
                    button {
                        id: "confirm-order",
                        disabled: !confirm_enabled,
                        onclick: on_confirm,
                        "{confirm_label}"
                    }
                    button {
                        id: "cancel-order",
                        onclick: move |_| session.write().close_modal(),
                        "Cancel"
                    }
                }
            }
        }
    }
}
