// File: crates/chart-spec/src/layout.rs
// Summary: Viewport classification and the fixed responsive layout tables.

/// Widest viewport still treated as mobile, in logical pixels.
pub const MOBILE_MAX_WIDTH: u32 = 576;

/// Minimum container height forced under a rendered chart, in pixels.
pub const MIN_CONTAINER_HEIGHT: u32 = 320;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    /// Classify a viewport width. The classification happens once at render
    /// time and is never re-evaluated on resize.
    pub fn classify(width: u32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Layout parameters selected by viewport class.
/// Contract: a pure total mapping; same class, same record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutParams {
    pub legend_box_width: u32,
    pub legend_font_size: u32,
    pub legend_padding: u32,
    pub ticks_font_size: u32,
    pub x_max_rotation: u32,
    pub x_max_ticks: u32,
    pub padding_bottom: u32,
    pub show_axis_titles: bool,
}

impl LayoutParams {
    /// Sparse ticks and no label rotation; trades readability for space.
    pub const MOBILE: Self = Self {
        legend_box_width: 10,
        legend_font_size: 8,
        legend_padding: 4,
        ticks_font_size: 8,
        x_max_rotation: 0,
        x_max_ticks: 4,
        padding_bottom: 4,
        show_axis_titles: false,
    };

    /// Denser ticks with rotated labels.
    pub const DESKTOP: Self = Self {
        legend_box_width: 14,
        legend_font_size: 10,
        legend_padding: 8,
        ticks_font_size: 10,
        x_max_rotation: 40,
        x_max_ticks: 8,
        padding_bottom: 10,
        show_axis_titles: true,
    };

    pub fn for_viewport(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Mobile => Self::MOBILE,
            ViewportClass::Desktop => Self::DESKTOP,
        }
    }
}
