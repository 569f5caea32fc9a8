//! Avatar Components
//!
//! The avatar slot renders exactly one of two variants, chosen by the
//! [`Avatar`] it is given: a placeholder circle that opens the picker, or
//! the selected picture that toggles the card between collapsed and
//! expanded.

use dioxus::prelude::*;
use profilehero_core::{
    Avatar, AvatarLayout, Morph, PlaceholderLayout, ProfileEvent, SelectedPicture,
};

use crate::icons::{Icon, IconGlyph};
use crate::style::{avatar_style, fade_style, placeholder_style};

/// Single dispatch point for the avatar variants
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     AvatarSlot {
///         avatar: state.read().avatar(),
///         morph: Morph::settled(state.read().expansion()),
///         container_width: 390.0,
///         on_event: move |event| dispatcher.send(event),
///     }
/// }
/// ```
#[component]
pub fn AvatarSlot(
    /// Which variant to show
    avatar: Avatar,
    /// Current morph of the card
    morph: Morph,
    /// Width of the expanded banner
    container_width: f32,
    /// Opacity of the picture while it fades in
    #[props(default = 1.0)]
    reveal: f32,
    /// Receives tap events
    on_event: EventHandler<ProfileEvent>,
) -> Element {
    match avatar {
        Avatar::Placeholder => rsx! {
            PlaceholderAvatar {
                layout: PlaceholderLayout::at(morph),
                ontap: move |_| on_event.call(ProfileEvent::PlaceholderTapped),
            }
        },
        Avatar::Picture(picture) => rsx! {
            ProfilePicture {
                picture: picture,
                layout: AvatarLayout::at(morph, container_width),
                opacity: reveal,
                ontap: move |_| on_event.call(ProfileEvent::AvatarTapped),
            }
        },
    }
}

/// Person glyph in a translucent circle, shown before any pick
#[component]
pub fn PlaceholderAvatar(layout: PlaceholderLayout, ontap: EventHandler<()>) -> Element {
    let style = placeholder_style(&layout);

    rsx! {
        div {
            class: "avatar-placeholder",
            style: "{style}",
            title: "Choose a profile picture",
            onclick: move |_| ontap.call(()),
            IconGlyph { icon: Icon::Person, size: 44.0 }
        }
    }
}

/// Selected picture, cropped to fill its frame
#[component]
pub fn ProfilePicture(
    picture: SelectedPicture,
    layout: AvatarLayout,
    #[props(default = 1.0)]
    opacity: f32,
    ontap: EventHandler<()>,
) -> Element {
    let frame_style = avatar_style(&layout);
    let img_style = fade_style(opacity);

    rsx! {
        div {
            class: "avatar",
            style: "{frame_style}",
            onclick: move |_| ontap.call(()),
            img {
                class: "avatar__img",
                style: "{img_style}",
                src: "{picture.data_uri}",
                alt: "Profile picture",
                draggable: "false",
            }
        }
    }
}
