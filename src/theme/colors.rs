//! Colors - EasyCore Theme Colors

use gpui::{rgb, rgba, Hsla, Rgba};

/// EasyCore color palette - All colors are accessed via associated functions
pub struct EasyColors;

impl EasyColors {
    // Brand colors
    /// Primary brand color - Teal
    pub fn primary() -> Rgba { rgb(0x0d9488) }
    /// Primary, lighter tint (hover/selection backgrounds)
    pub fn primary_soft() -> Rgba { rgba(0x0d948822) }
    /// Header background
    pub fn header_bg() -> Rgba { rgb(0x0f766e) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf8fafc) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x0f172a) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x475569) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x94a3b8) }
    /// Header text
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x16a34a) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xd97706) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    /// Info - Blue
    pub fn info() -> Rgba { rgb(0x2563eb) }

    // Notice colors
    /// Notice background - Amber tint
    pub fn notice_bg() -> Rgba { rgb(0xfffbeb) }
    /// Notice border
    pub fn notice_border() -> Rgba { rgb(0xfde68a) }
    /// Notice text
    pub fn notice_text() -> Rgba { rgb(0x92400e) }
    /// Error banner background
    pub fn error_bg() -> Rgba { rgb(0xfef2f2) }
    /// Error banner border
    pub fn error_border() -> Rgba { rgb(0xfecaca) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe2e8f0) }
    /// Row separator
    pub fn border_subtle() -> Rgba { rgb(0xf1f5f9) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x0d9488) }
    /// Primary button hover
    pub fn button_primary_hover() -> Rgba { rgb(0x0f766e) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x475569) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf8fafc) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf1f5f9) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xcbd5e1) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x94a3b8) }
}

/// Badge variants map onto a (background, text) pair
impl EasyColors {
    pub fn badge(variant: BadgeVariant) -> (Hsla, Hsla) {
        let (bg, fg) = match variant {
            BadgeVariant::Success => (rgb(0xdcfce7), rgb(0x166534)),
            BadgeVariant::Warning => (rgb(0xfef3c7), rgb(0x92400e)),
            BadgeVariant::Error => (rgb(0xfee2e2), rgb(0x991b1b)),
            BadgeVariant::Info => (rgb(0xdbeafe), rgb(0x1e40af)),
            BadgeVariant::Default => (rgb(0xf1f5f9), rgb(0x334155)),
        };
        (Hsla::from(bg), Hsla::from(fg))
    }
}

/// Badge color variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Warning,
    Error,
    Info,
    #[default]
    Default,
}
