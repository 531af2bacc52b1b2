// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, opacities, spacing and sizes used by the playback chrome.

## Organization

- **Palette**: Base colors
- **Opacity**: Overlay transparency levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Control and track sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use scrub_chrome::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Visible thickness of the progress track.
    pub const TIMELINE_TRACK: f32 = 4.0;
    /// Thickness while a scrub is in flight.
    pub const TIMELINE_TRACK_ACTIVE: f32 = 8.0;
    /// Pointer hit area around the track.
    pub const TIMELINE_HIT_HEIGHT: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - labels, status text
    pub const BODY: f32 = 14.0;

    /// Caption - time labels
    pub const CAPTION: f32 = 12.0;

    /// Center glyphs (play/pause, busy)
    pub const GLYPH_LG: f32 = 32.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_SUBTLE > 0.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM && opacity::OVERLAY_STRONG < 1.0);

    assert!(sizing::TIMELINE_HIT_HEIGHT > sizing::TIMELINE_TRACK_ACTIVE);
    assert!(sizing::TIMELINE_TRACK_ACTIVE > sizing::TIMELINE_TRACK);

    assert!(typography::BODY > typography::CAPTION);
};
