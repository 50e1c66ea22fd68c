//! API Access
//!
//! HTTP client for the SocialAuto REST API.

pub mod client;

pub use client::*;
