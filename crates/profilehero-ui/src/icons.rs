//! Inline SVG glyphs used by the profile card.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Person,
    Photo,
    Message,
    Phone,
    Video,
}

impl Icon {
    /// Accessible label
    pub fn label(&self) -> &'static str {
        match self {
            Icon::Person => "person",
            Icon::Photo => "change photo",
            Icon::Message => "message",
            Icon::Phone => "call",
            Icon::Video => "video",
        }
    }
}

/// Renders an [`Icon`] at `size` logical pixels, filled with `currentColor`.
#[component]
pub fn IconGlyph(icon: Icon, #[props(default = 24.0)] size: f32) -> Element {
    let body = match icon {
        Icon::Person => rsx! {
            circle { cx: "12", cy: "8", r: "4.5", fill: "currentColor" }
            path { d: "M 3.5 21 Q 3.5 13.5, 12 13.5 Q 20.5 13.5, 20.5 21 Z", fill: "currentColor" }
        },
        Icon::Photo => rsx! {
            rect {
                x: "2.5",
                y: "4.5",
                width: "19",
                height: "15",
                rx: "2.5",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.8",
            }
            circle { cx: "8.5", cy: "9.5", r: "1.8", fill: "currentColor" }
            path { d: "M 4 18 L 9.5 12.5 L 13 16 L 16 13 L 20 18 Z", fill: "currentColor" }
        },
        Icon::Message => rsx! {
            path {
                d: "M 12 3.5 C 6.8 3.5 2.5 7 2.5 11.3 C 2.5 13.7 3.8 15.8 5.9 17.2 L 5 20.5 L 9 18.7 C 9.9 18.9 11 19.1 12 19.1 C 17.2 19.1 21.5 15.6 21.5 11.3 C 21.5 7 17.2 3.5 12 3.5 Z",
                fill: "currentColor",
            }
        },
        Icon::Phone => rsx! {
            path {
                d: "M 6.6 2.8 L 9.3 6.6 C 9.7 7.2 9.6 8 9.1 8.5 L 7.8 9.8 C 8.9 12.2 11.8 15.1 14.2 16.2 L 15.5 14.9 C 16 14.4 16.8 14.3 17.4 14.7 L 21.2 17.4 C 21.9 17.9 22 18.9 21.4 19.5 L 19.8 21.1 C 18.9 22 17.5 22.3 16.3 21.8 C 10.1 19.5 4.5 13.9 2.2 7.7 C 1.7 6.5 2 5.1 2.9 4.2 L 4.5 2.6 C 5.1 2 6.1 2.1 6.6 2.8 Z",
                fill: "currentColor",
            }
        },
        Icon::Video => rsx! {
            rect { x: "2", y: "6", width: "14", height: "12", rx: "2.5", fill: "currentColor" }
            path { d: "M 17 10 L 22 7 L 22 17 L 17 14 Z", fill: "currentColor" }
        },
    };

    let label = icon.label();

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            class: "icon",
            "aria-label": "{label}",
            {body}
        }
    }
}
