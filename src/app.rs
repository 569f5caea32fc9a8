use dioxus::prelude::*;

use crate::context::get_config;
use crate::pages::ProfileScreen;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the config context, then renders the single
/// profile screen.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(get_config()));

    rsx! {
        style { {GLOBAL_STYLES} }
        ProfileScreen {}
    }
}
