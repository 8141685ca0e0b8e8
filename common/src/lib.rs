//! Order intake for the storefront: draft selection, identity prefill,
//! the confirmation modal, duplicate-submission guarding and the multipart
//! order submitter. Everything here is DOM-free so the same session drives
//! the web UI and the native order client.

pub mod config;
pub mod draft;
pub mod guard;
pub mod identity;
pub mod modal;
pub mod price;
pub mod recipient;
pub mod session;
pub mod submit;
