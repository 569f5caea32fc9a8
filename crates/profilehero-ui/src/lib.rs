//! Profile Hero UI Components
//!
//! Dioxus components for the animated profile card. Components are purely
//! presentational: they receive layouts computed by `profilehero-core` and
//! report taps upward through event handlers, never touching screen state.
//!
//! ## Pieces
//!
//! - **AvatarSlot**: placeholder circle or picture, chosen from an `Avatar`
//! - **ProfileBio**: name and title lines
//! - **ActionBar**: "Message" pill plus call/video icon buttons
//! - **ChangePhotoButton**: corner affordance for re-picking

pub mod components;
pub mod icons;
pub mod style;

pub use components::*;
pub use icons::{Icon, IconGlyph};
