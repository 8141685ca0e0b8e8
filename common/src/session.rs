//! One page session: the current draft, the confirmation dialog and the
//! submission guard.
//!
//! Submitting is split in two so that every gate is set before the request
//! is awaited:
//! - [`OrderSession::begin_submit`] is synchronous: take the in-flight gate,
//!   validate, start the cooldown and assemble the request.
//! - [`OrderSession::finish_submit`] runs after the transport returns: close
//!   the dialog and drop the in-flight gate.
//!
//! The caller awaits [`crate::submit::send_order`] in between.

use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::draft::{ItemAttributes, OrderDraft};
use crate::guard::{GuardState, SubmissionGuard};
use crate::identity::{resolve_identity, Identity, IdentityBridge};
use crate::modal::{ModalController, ModalView};
use crate::recipient::Recipient;
use crate::submit::{FormInput, OrderRequest, SubmitError, ValidationError};

/// Where a selection led.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The confirmation dialog is open for the new draft.
    Confirm,
    /// Custom order: send the user to the contact channel instead.
    Contact { url: String },
}

/// Result of pressing confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt<F> {
    /// Gates are set; post this request, then call `finish_submit`.
    Ready(OrderRequest<F>),
    /// A submission is in flight or the cooldown is running. Nothing changed.
    Ignored,
    /// Rejected before the network; the guard is idle again.
    Rejected(ValidationError),
}

/// User-facing outcome message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    OrderPlaced,
    OrderFailed,
    Invalid(ValidationError),
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrderPlaced => write!(
                f,
                "Order submitted! We will check the payment and get back to you."
            ),
            Self::OrderFailed => write!(f, "Failed to submit the order. Please try again later."),
            Self::Invalid(e) => write!(f, "{e}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderSession {
    config: SessionConfig,
    draft: Option<OrderDraft>,
    modal: ModalController,
    guard: SubmissionGuard,
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl OrderSession {
    pub fn new(config: SessionConfig) -> Self {
        let guard = SubmissionGuard::new(config.cooldown_secs);
        Self {
            config,
            draft: None,
            modal: ModalController::new(),
            guard,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn draft(&self) -> Option<&OrderDraft> {
        self.draft.as_ref()
    }

    pub fn modal(&self) -> &ModalView {
        self.modal.view()
    }

    pub fn guard_state(&self) -> GuardState {
        self.guard.state()
    }

    /// Whether the confirm control should be enabled.
    pub fn confirm_enabled(&self) -> bool {
        self.guard.is_accepting()
    }

    /// Current text of the confirm control.
    pub fn confirm_label(&self) -> String {
        self.guard.label(&self.config.confirm_label)
    }

    /// Select a storefront item. The new draft replaces the old one outright.
    /// Zero-priced items go to the contact channel, leaving no draft and no
    /// open dialog behind.
    pub fn select(&mut self, attrs: &ItemAttributes, bridge: &impl IdentityBridge) -> Selection {
        let draft = OrderDraft::from_attributes(attrs);
        if draft.is_contact_request() {
            debug!(price = %draft.price, "Routing custom order to contact channel");
            self.draft = None;
            self.modal.close();
            return Selection::Contact {
                url: self.config.contact_url.clone(),
            };
        }

        let identity = resolve_identity(bridge);
        self.modal.open(&draft, &identity);
        debug!(?draft, sender = %identity.handle, "Opened order confirmation");
        self.draft = Some(draft);
        Selection::Confirm
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// Handle a confirm press. Everything here happens before any await.
    /// Confirms with no open dialog or no current draft are ignored.
    pub fn begin_submit<F>(&mut self, form: &FormInput, screenshot: Option<F>) -> SubmitAttempt<F> {
        let Some(draft) = self.draft.as_ref().filter(|_| self.modal.is_open()) else {
            debug!("Confirm without an open order discarded");
            return SubmitAttempt::Ignored;
        };
        if !self.guard.try_acquire() {
            return SubmitAttempt::Ignored;
        }

        let sender = Identity::from_form(&form.buyer_handle, &form.buyer_id);
        if !sender.is_resolved() {
            self.guard.release();
            return SubmitAttempt::Rejected(ValidationError::MissingSender);
        }
        let Some(screenshot) = screenshot else {
            self.guard.release();
            return SubmitAttempt::Rejected(ValidationError::MissingAttachment);
        };

        self.guard.start_cooldown(&self.config.confirm_label);

        let recipient = Recipient::parse(&form.recipient);
        let request = OrderRequest::build(draft, &sender, recipient.as_ref(), screenshot);
        info!(
            sender = %sender.handle,
            price = request.text("price").unwrap_or("0"),
            "Submitting order"
        );
        SubmitAttempt::Ready(request)
    }

    /// Complete a submission started by `begin_submit`. The dialog closes
    /// and the in-flight gate drops whatever the outcome; a running
    /// cooldown keeps going.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> Notice {
        self.modal.close();
        self.guard.release();
        match result {
            Ok(()) => {
                info!("Order accepted");
                Notice::OrderPlaced
            }
            Err(e) => {
                warn!("Order failed: {e}");
                Notice::OrderFailed
            }
        }
    }

    /// Advance the cooldown by one second. Returns true while still cooling.
    pub fn tick_cooldown(&mut self) -> bool {
        self.guard.tick()
    }
}
