//! Colors - Console Theme Colors

use gpui::{rgb, rgba, Rgba};

use crate::domain::status::Status;
use crate::state::notification_state::NotificationLevel;

/// Console color palette - All colors are accessed via associated functions
pub struct AdminColors;

impl AdminColors {
    // Brand
    /// Primary brand blue (buttons, selection)
    pub fn primary() -> Rgba { rgb(0x1677ff) }
    pub fn primary_hover() -> Rgba { rgb(0x4096ff) }
    /// Selected menu item background
    pub fn primary_soft() -> Rgba { rgba(0x1677ff1f) }

    // Background colors
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Dark sidebar
    pub fn sidebar_bg() -> Rgba { rgb(0x001529) }
    pub fn sidebar_hover() -> Rgba { rgba(0xffffff14) }
    pub fn header_bg() -> Rgba { rgb(0xffffff) }
    /// Modal backdrop
    pub fn overlay() -> Rgba { rgba(0x00000073) }

    // Text colors
    pub fn text_primary() -> Rgba { rgb(0x1f1f1f) }
    pub fn text_secondary() -> Rgba { rgb(0x595959) }
    pub fn text_muted() -> Rgba { rgb(0x8c8c8c) }
    /// Text on dark backgrounds
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    pub fn text_sidebar() -> Rgba { rgba(0xffffffa6) }

    // Status colors
    pub fn success() -> Rgba { rgb(0x52c41a) }
    pub fn warning() -> Rgba { rgb(0xfaad14) }
    pub fn danger() -> Rgba { rgb(0xff4d4f) }
    pub fn danger_hover() -> Rgba { rgb(0xff7875) }
    pub fn info() -> Rgba { rgb(0x1677ff) }

    // Border colors
    pub fn border() -> Rgba { rgb(0xf0f0f0) }
    pub fn input_border() -> Rgba { rgb(0xd9d9d9) }

    // Table colors
    pub fn table_header_bg() -> Rgba { rgb(0xfafafa) }
    pub fn table_row_hover() -> Rgba { rgb(0xf5f5f5) }
}

impl AdminColors {
    /// Tag color of a lifecycle status
    pub fn status(status: Status) -> Rgba {
        match status {
            Status::Active => Self::success(),
            Status::Inactive => Self::warning(),
            Status::Deprecated => Self::danger(),
        }
    }

    /// Accent of a toast
    pub fn notification(level: NotificationLevel) -> Rgba {
        match level {
            NotificationLevel::Info => Self::info(),
            NotificationLevel::Success => Self::success(),
            NotificationLevel::Warning => Self::warning(),
            NotificationLevel::Error => Self::danger(),
        }
    }
}
