//! Platform abstraction layer
//!
//! The core never touches real timers or input devices. On the web, `web`
//! exposes [`crate::Game`] to a JS renderer that feeds it frame times and
//! taps and draws the snapshots it returns.

#[cfg(target_arch = "wasm32")]
pub mod web;
