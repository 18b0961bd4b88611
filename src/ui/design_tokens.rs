// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the palette, spacing, sizing and typography scales shared
//! by every view.
//!
//! ```
//! use iced_split::ui::design_tokens::{palette, spacing};
//!
//! let gutter = spacing::MD; // 16px
//! let accent = palette::PRIMARY_500;
//! # let _ = (gutter, accent);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (warm orange scale)
    pub const PRIMARY_100: Color = Color::from_rgb(1.0, 0.93, 0.85);
    pub const PRIMARY_400: Color = Color::from_rgb(1.0, 0.66, 0.3);
    pub const PRIMARY_500: Color = Color::from_rgb(1.0, 0.57, 0.17);
    pub const PRIMARY_600: Color = Color::from_rgb(0.9, 0.47, 0.1);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Avatar thumbnail edge length (matches the 48px pravatar images).
    pub const AVATAR: f32 = 48.0;

    /// Width of the friends column.
    pub const SIDEBAR_WIDTH: f32 = 420.0;

    /// Width of the split-bill form.
    pub const FORM_WIDTH: f32 = 380.0;

    /// Width of the value inputs in forms.
    pub const INPUT_WIDTH: f32 = 160.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Form headings
    pub const TITLE_LG: f32 = 24.0;

    /// Medium title - Friend names
    pub const TITLE_MD: f32 = 18.0;

    /// Standard body - Labels, balance lines
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);

    assert!(sizing::SIDEBAR_WIDTH > sizing::AVATAR);
};
