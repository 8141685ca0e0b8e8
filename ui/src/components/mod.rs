pub mod app;
pub mod host;
pub mod order_api;
pub mod order_modal;
pub mod session_state;
pub mod storefront_view;
