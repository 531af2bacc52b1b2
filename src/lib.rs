// SPDX-License-Identifier: MPL-2.0
//! `scrub_chrome` is the control layer of a media player: seek-track
//! scrubbing, auto-hiding chrome, double-tap quick seek and a status-aware
//! transport, with an iced rendering and a demo window.
//!
//! The control components in [`controls`] hold no references to a player or
//! a toolkit. They consume [`domain::video::PlaybackClock`] snapshots and
//! pointer events, schedule work on a [`timer::Timer`], and report requests
//! as [`controls::Effect`]s.

#![doc(html_root_url = "https://docs.rs/scrub_chrome/0.1.0")]

pub mod app;
pub mod config;
pub mod controls;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod timer;
pub mod ui;

#[cfg(test)]
mod test_utils;
