// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the playback chrome.

pub mod controls_view;
pub mod design_tokens;
