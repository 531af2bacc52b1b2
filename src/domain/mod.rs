// SPDX-License-Identifier: MPL-2.0
//! Domain layer.
//!
//! Value objects and conversions that are independent of any presentation
//! or infrastructure concerns.

pub mod video;
