//! Bio Component
//!
//! Name and title lines under the avatar, plus the hairline divider that
//! separates them from the action bar.

use dioxus::prelude::*;
use profilehero_core::{BioLayout, ScreenLayout};

use crate::style::{bio_name_style, bio_style, bio_subtitle_style, divider_style};

#[component]
pub fn ProfileBio(name: String, title: String, layout: BioLayout) -> Element {
    let container = bio_style(&layout);
    let name_style = bio_name_style(&layout);
    let title_style = bio_subtitle_style(&layout);

    rsx! {
        div { class: "bio", style: "{container}",
            h1 { class: "bio__name", style: "{name_style}", "{name}" }
            span { class: "bio__title", style: "{title_style}", "{title}" }
        }
    }
}

/// 1px rule that fades out as the card expands
#[component]
pub fn Divider(layout: ScreenLayout) -> Element {
    let style = divider_style(&layout);

    rsx! {
        div { class: "divider", style: "{style}" }
    }
}
