//! # shortlink-page
//!
//! WASM helpers for the URL-shortener page: copy the generated short link,
//! show or hide the custom alias field, and switch between light and dark
//! themes with the choice kept in `localStorage`.
//!
//! Handler logic lives in [`interactions`] and talks to the page only through
//! the handle traits in [`dom`]. The browser implementations of those traits
//! and the `#[wasm_bindgen]` exports are in `web`, compiled with the
//! `hydrate` feature.

pub mod config;
pub mod dom;
pub mod error;
pub mod interactions;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::PageConfig;
pub use error::PageError;
pub use interactions::{PageHandles, PageInteractions};
pub use theme::Theme;
