//! Button Components
//!
//! Two shapes appear on the profile card:
//! - Pill: white filled button with icon and label ("Message")
//! - Circle: icon-only button on a gray disc with a gradient rim

use dioxus::prelude::*;

use crate::icons::{Icon, IconGlyph};

/// Button shape variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonShape {
    /// Filled pill with label
    #[default]
    Pill,
    /// Icon-only circle
    Circle,
}

impl ButtonShape {
    /// Returns the CSS class for this shape
    pub fn class(&self) -> &'static str {
        match self {
            ButtonShape::Pill => "btn-pill",
            ButtonShape::Circle => "btn-circle",
        }
    }
}

fn full_class(shape: ButtonShape, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", shape.class(), extra),
        _ => shape.class().to_string(),
    }
}

/// Properties for the MessageButton component
#[derive(Clone, PartialEq, Props)]
pub struct MessageButtonProps {
    /// Visible label
    pub title: String,
    /// Leading icon
    pub icon: Icon,
    /// Click handler
    pub onclick: EventHandler<()>,
}

/// Pill-shaped primary action with an icon and a label
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MessageButton {
///         title: "Message".to_string(),
///         icon: Icon::Message,
///         onclick: move |_| {},
///     }
/// }
/// ```
#[component]
pub fn MessageButton(props: MessageButtonProps) -> Element {
    let class = full_class(ButtonShape::Pill, None);

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| props.onclick.call(()),
            IconGlyph { icon: props.icon, size: 20.0 }
            span { class: "btn-pill__label", "{props.title}" }
        }
    }
}

/// Properties for the ConnectIconButton component
#[derive(Clone, PartialEq, Props)]
pub struct ConnectIconButtonProps {
    /// The glyph to show
    pub icon: Icon,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Circular icon-only button
#[component]
pub fn ConnectIconButton(props: ConnectIconButtonProps) -> Element {
    let class = full_class(ButtonShape::Circle, props.class.as_deref());
    let label = props.icon.label();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-label": "{label}",
            onclick: move |_| props.onclick.call(()),
            IconGlyph { icon: props.icon, size: 25.0 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_shape_classes() {
        assert_eq!(ButtonShape::Pill.class(), "btn-pill");
        assert_eq!(ButtonShape::Circle.class(), "btn-circle");
    }

    #[test]
    fn button_shape_default() {
        assert_eq!(ButtonShape::default(), ButtonShape::Pill);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(full_class(ButtonShape::Circle, Some("change-photo")), "btn-circle change-photo");
        assert_eq!(full_class(ButtonShape::Circle, Some("")), "btn-circle");
        assert_eq!(full_class(ButtonShape::Pill, None), "btn-pill");
    }
}
