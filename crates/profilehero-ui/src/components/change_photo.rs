//! Change Photo Component
//!
//! Corner-anchored button for picking a new picture. Only rendered when a
//! picture exists; fades and slides away while the card is expanded.

use dioxus::prelude::*;
use profilehero_core::ChangePhotoLayout;

use super::ConnectIconButton;
use crate::icons::Icon;
use crate::style::change_photo_style;

#[component]
pub fn ChangePhotoButton(layout: Option<ChangePhotoLayout>, ontap: EventHandler<()>) -> Element {
    let Some(layout) = layout else {
        return rsx! {};
    };
    let style = change_photo_style(&layout);

    rsx! {
        div { class: "change-photo", style: "{style}",
            ConnectIconButton {
                icon: Icon::Photo,
                class: "change-photo__btn".to_string(),
                onclick: move |_| ontap.call(()),
            }
        }
    }
}
