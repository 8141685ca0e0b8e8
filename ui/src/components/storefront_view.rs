use dioxus::prelude::*;

use starshop_common::draft::ItemAttributes;
use starshop_common::price::{format_price, is_zero_price};

use super::session_state::{select_item, use_order_form, use_order_session};

/// A card in the storefront.
#[derive(Clone, Debug, PartialEq)]
struct CatalogItem {
    key: &'static str,
    title: &'static str,
    attrs: ItemAttributes,
}

fn catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            key: "pack-50",
            title: "50 pcs",
            attrs: ItemAttributes::quantity_pack("50", "15000"),
        },
        CatalogItem {
            key: "pack-100",
            title: "100 pcs",
            attrs: ItemAttributes::quantity_pack("100", "28500"),
        },
        CatalogItem {
            key: "pack-500",
            title: "500 pcs",
            attrs: ItemAttributes::quantity_pack("500", "135000"),
        },
        CatalogItem {
            key: "premium-3m",
            title: "Premium, 3 months",
            attrs: ItemAttributes::labeled("Premium, 3 months", "1290"),
        },
        CatalogItem {
            key: "premium-12m",
            title: "Premium, 12 months",
            attrs: ItemAttributes::labeled("Premium, 12 months", "3990"),
        },
        // Zero price: negotiated over the contact channel.
        CatalogItem {
            key: "custom",
            title: "Custom amount",
            attrs: ItemAttributes::labeled("Custom amount", "0"),
        },
    ]
}

#[component]
pub fn StorefrontView() -> Element {
    let session = use_order_session();
    let form = use_order_form();

    rsx! {
        div { class: "storefront-view",
            div { class: "product-list",
                {catalog().into_iter().map(|item| {
                    let price = item.attrs.price.clone().unwrap_or_default();
                    let price_str = if is_zero_price(&price) {
                        "Contact us".to_string()
                    } else {
                        format_price(&price)
                    };
                    let attrs = item.attrs.clone();
                    rsx! {
                        div { class: "product-card",
                            key: "{item.key}",
                            h3 { "{item.title}" }
                            p { class: "price", "{price_str}" }
                            button {
                                class: "buy-button",
                                onclick: move |_| select_item(session, form, &attrs),
                                "Buy"
                            }
                        }
                    }
                })}
            }
        }
    }
}
