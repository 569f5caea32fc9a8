//! Profile Hero Core Library
//!
//! State, layout interpolation and picture loading for an animated profile
//! card: a circular avatar that morphs into a full-width banner on tap.
//!
//! ## Overview
//!
//! The crate has no UI framework dependency. A shell (the Dioxus desktop
//! app) owns a [`ProfileState`], feeds it [`ProfileEvent`]s and runs the
//! returned [`Effect`]s:
//!
//! ```ignore
//! use profilehero_core::{Effect, ProfileEvent, ProfileState};
//!
//! let mut state = ProfileState::new();
//! if let Some(Effect::PresentPicker { ticket }) = state.update(ProfileEvent::PlaceholderTapped) {
//!     let outcome = profilehero_core::load_picture(&source, ticket, 1024).await;
//!     state.update(ProfileEvent::PickerDismissed { ticket });
//!     state.update(ProfileEvent::PickFinished(outcome));
//! }
//!
//! let layout = CardLayout::at(Morph::settled(state.expansion()), 390.0, state.picture().is_some());
//! ```

pub mod animation;
pub mod config;
pub mod error;
pub mod layout;
pub mod picture;
pub mod state;

// Re-exports
pub use animation::{AnimationFrame, CardAnimator, Easing, TransitionConfig, Tween};
pub use config::{AnimationConfig, ProfileConfig, WindowConfig};
pub use error::{ProfileError, ProfileResult};
pub use layout::{
    ActionBarLayout, Alignment, AvatarLayout, BioLayout, CardLayout, ChangePhotoLayout,
    FontWeight, Frame, Morph, PlaceholderLayout, Rgb, ScreenLayout,
};
pub use picture::{
    decode_picture, load_picture, resolve_pick, DecodedPicture, MediaFilter, PickOutcome,
    PictureSource, SelectedPicture,
};
pub use state::{Avatar, Effect, ExpansionState, PickTicket, ProfileEvent, ProfileState};
