use serde::{Deserialize, Serialize};

use crate::price::{is_zero_price, normalize_price};

/// Raw attributes of a storefront item card, as read from its markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttributes {
    pub price: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<String>,
}

impl ItemAttributes {
    /// A pack sold by count, e.g. 50 units.
    pub fn quantity_pack(quantity: &str, price: &str) -> Self {
        Self {
            price: Some(price.to_string()),
            description: None,
            quantity: Some(quantity.to_string()),
        }
    }

    /// An item sold by name.
    pub fn labeled(description: &str, price: &str) -> Self {
        Self {
            price: Some(price.to_string()),
            description: Some(description.to_string()),
            quantity: None,
        }
    }
}

/// The currently selected purchasable item, awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub item_label: Option<String>,
    pub quantity: Option<String>,
    /// Decimal amount as text, `"0"` when absent.
    pub price: String,
}

impl OrderDraft {
    pub fn from_attributes(attrs: &ItemAttributes) -> Self {
        Self {
            item_label: non_blank(attrs.description.as_deref()),
            quantity: non_blank(attrs.quantity.as_deref()),
            price: normalize_price(attrs.price.as_deref()),
        }
    }

    /// Zero-priced selections are custom orders handled over the contact
    /// channel rather than through the confirmation modal.
    pub fn is_contact_request(&self) -> bool {
        is_zero_price(&self.price)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
