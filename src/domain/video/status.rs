// SPDX-License-Identifier: MPL-2.0
//! Media resource lifecycle as reported by the player.

/// Discrete lifecycle of the media resource.
///
/// Transitions are driven only by the external player; the control layer
/// never invents a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoStatus {
    /// Resource is opening or buffering.
    #[default]
    Loading,
    /// Resource is ready and frames are flowing.
    Loaded,
    /// Player reported a failure; terminal for display.
    Error,
}

impl VideoStatus {
    /// Returns true if the resource is still loading.
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if the resource is ready.
    #[must_use]
    pub fn is_loaded(self) -> bool {
        matches!(self, Self::Loaded)
    }

    /// Returns true if the player reported an error.
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}
