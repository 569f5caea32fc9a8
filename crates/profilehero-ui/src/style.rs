//! Inline style builders.
//!
//! Turn layouts from `profilehero-core` into `style` attribute strings. The
//! static look (colours, fonts, borders) lives in the global stylesheet;
//! only values that move with the morph are emitted here.

use profilehero_core::{
    ActionBarLayout, Alignment, AvatarLayout, BioLayout, ChangePhotoLayout, PlaceholderLayout,
    Rgb, ScreenLayout,
};

/// Pixel value rounded to two decimals, without trailing zeros.
pub fn px(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0px" from tiny negative remainders
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}px", rounded)
}

fn ratio(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}

pub fn rgb_css(color: Rgb) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}

pub fn flex_align(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Leading => "flex-start",
        Alignment::Center => "center",
    }
}

pub fn text_align(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Leading => "left",
        Alignment::Center => "center",
    }
}

pub fn screen_style(layout: &ScreenLayout) -> String {
    format!(
        "align-items: {}; padding-left: {}; padding-right: {};",
        flex_align(layout.alignment),
        px(layout.horizontal_padding),
        px(layout.horizontal_padding),
    )
}

pub fn divider_style(layout: &ScreenLayout) -> String {
    format!("opacity: {};", ratio(layout.divider_opacity))
}

pub fn avatar_style(layout: &AvatarLayout) -> String {
    format!(
        "width: {}; height: {}; border-radius: {}; margin-top: {};",
        px(layout.frame.width),
        px(layout.frame.height),
        px(layout.corner_radius),
        px(layout.top_padding),
    )
}

pub fn placeholder_style(layout: &PlaceholderLayout) -> String {
    format!(
        "width: {side}; height: {side}; margin-top: {};",
        px(layout.top_padding),
        side = px(layout.side),
    )
}

pub fn bio_style(layout: &BioLayout) -> String {
    format!(
        "align-items: {}; text-align: {}; padding-left: {};",
        flex_align(layout.alignment),
        text_align(layout.alignment),
        px(layout.leading_padding),
    )
}

pub fn bio_name_style(layout: &BioLayout) -> String {
    format!("font-weight: {};", layout.name_weight.value())
}

pub fn bio_subtitle_style(layout: &BioLayout) -> String {
    format!("color: {};", rgb_css(layout.subtitle_color))
}

pub fn action_bar_style(layout: &ActionBarLayout) -> String {
    format!(
        "gap: {}; padding: {} {} 0 {};",
        px(layout.spacing),
        px(layout.top_padding),
        px(layout.horizontal_padding),
        px(layout.horizontal_padding),
    )
}

pub fn change_photo_style(layout: &ChangePhotoLayout) -> String {
    format!(
        "opacity: {}; transform: translateY({}); right: {}; pointer-events: {};",
        ratio(layout.opacity),
        px(layout.offset_y),
        px(layout.trailing_padding),
        if layout.interactive { "auto" } else { "none" },
    )
}

pub fn fade_style(opacity: f32) -> String {
    format!("opacity: {};", ratio(opacity))
}
