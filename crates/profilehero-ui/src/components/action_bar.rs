//! Action Bar Component
//!
//! "Message" pill followed by call and video icon buttons. The actions are
//! optional; unset ones only log the tap.

use dioxus::prelude::*;
use profilehero_core::ActionBarLayout;

use super::{ConnectIconButton, MessageButton};
use crate::icons::Icon;
use crate::style::action_bar_style;

fn run_or_log(handler: Option<EventHandler<()>>, action: &'static str) {
    match handler {
        Some(handler) => handler.call(()),
        None => tracing::debug!(action, "Action not wired"),
    }
}

#[component]
pub fn ActionBar(
    layout: ActionBarLayout,
    #[props(default)] on_message: Option<EventHandler<()>>,
    #[props(default)] on_call: Option<EventHandler<()>>,
    #[props(default)] on_video: Option<EventHandler<()>>,
) -> Element {
    let style = action_bar_style(&layout);

    rsx! {
        div { class: "action-bar", style: "{style}",
            MessageButton {
                title: "Message".to_string(),
                icon: Icon::Message,
                onclick: move |_| run_or_log(on_message, "message"),
            }
            ConnectIconButton {
                icon: Icon::Phone,
                onclick: move |_| run_or_log(on_call, "call"),
            }
            ConnectIconButton {
                icon: Icon::Video,
                onclick: move |_| run_or_log(on_video, "video"),
            }
        }
    }
}
