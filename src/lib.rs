//! Client for the Dream Weaver image-generation service.
//!
//! A [`RequestController`] reads a prompt and optional style selections
//! from a [`PageView`], posts them to the generation endpoint through an
//! [`ImageGenerator`], and renders the returned images, their metadata and
//! a lightbox from a single [`UiState`].

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod ui;

pub use client::{HttpImageClient, ImageGenerator};
pub use config::{ClientConfig, Config};
pub use error::{Result, WeaverError};
pub use models::*;
pub use ui::{
    LightboxTarget, PageView, PendingRequest, RequestController, SlotPage, SubmitOutcome, UiState,
};
