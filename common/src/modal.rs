use crate::draft::OrderDraft;
use crate::identity::Identity;
use crate::price::format_price;

/// Noun used when a draft has neither a label nor a quantity.
const GENERIC_ITEM: &str = "item";

/// Everything the confirmation dialog displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalView {
    pub visible: bool,
    pub summary: String,
    pub amount: String,
    /// Initial value of the recipient input.
    pub recipient: String,
    pub buyer_handle: String,
    pub buyer_id: String,
}

/// Owns the confirmation dialog. `open` is the only way to write its fields.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    view: ModalView,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ModalView {
        &self.view
    }

    pub fn is_open(&self) -> bool {
        self.view.visible
    }

    pub fn open(&mut self, draft: &OrderDraft, identity: &Identity) {
        self.view = ModalView {
            visible: true,
            summary: summarize(draft),
            amount: format_price(&draft.price),
            recipient: String::new(),
            buyer_handle: identity.handle.clone(),
            buyer_id: identity.id.clone().unwrap_or_default(),
        };
    }

    /// Hide the dialog. Safe to call at any time.
    pub fn close(&mut self) {
        self.view.visible = false;
    }
}

/// Human-readable line describing what is being bought and for how much.
pub fn summarize(draft: &OrderDraft) -> String {
    let price = format_price(&draft.price);
    match (&draft.item_label, &draft.quantity) {
        (None, Some(quantity)) => format!("{quantity} pcs for {price}"),
        (Some(label), _) => format!("{label} for {price}"),
        (None, None) => format!("{GENERIC_ITEM} for {price}"),
    }
}
