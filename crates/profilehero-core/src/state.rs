//! Profile screen state and its reducer.
//!
//! All screen state lives in [`ProfileState`]. Components never mutate it
//! directly: taps become [`ProfileEvent`]s, [`ProfileState::update`] applies
//! them and hands back at most one [`Effect`] for the UI shell to run.

use tracing::{debug, info, warn};

use crate::picture::{PickOutcome, SelectedPicture};

/// The two layout modes of the profile card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Expanded,
}

impl ExpansionState {
    pub fn toggled(self) -> Self {
        match self {
            ExpansionState::Collapsed => ExpansionState::Expanded,
            ExpansionState::Expanded => ExpansionState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == ExpansionState::Expanded
    }

    /// Animation progress at rest in this state.
    pub fn progress(self) -> f32 {
        match self {
            ExpansionState::Collapsed => 0.0,
            ExpansionState::Expanded => 1.0,
        }
    }
}

/// Identifies one presentation of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PickTicket(pub u64);

/// What the avatar slot shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Avatar {
    Placeholder,
    Picture(SelectedPicture),
}

/// Input events bubbling up from the view tree and the picker task
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileEvent {
    /// The selected picture was tapped
    AvatarTapped,
    /// The placeholder circle was tapped
    PlaceholderTapped,
    /// The corner "change photo" button was tapped
    ChangePhotoTapped,
    /// The picker sheet closed, with or without a selection
    PickerDismissed { ticket: PickTicket },
    /// Loading and decoding of a pick finished
    PickFinished(PickOutcome),
}

/// Work the UI shell must carry out after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Animate the card towards the given state
    Animate { to: ExpansionState },
    /// Present the native picker for this ticket
    PresentPicker { ticket: PickTicket },
    /// Fade in the freshly committed picture
    Reveal { ticket: PickTicket },
}

/// Complete state of the profile screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    picture: Option<SelectedPicture>,
    expansion: ExpansionState,
    picker_visible: bool,
    latest_ticket: Option<PickTicket>,
    tickets_issued: u64,
}

impl ProfileState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn picture(&self) -> Option<&SelectedPicture> {
        self.picture.as_ref()
    }

    pub fn expansion(&self) -> ExpansionState {
        self.expansion
    }

    pub fn picker_visible(&self) -> bool {
        self.picker_visible
    }

    /// The variant the avatar slot should render.
    pub fn avatar(&self) -> Avatar {
        match &self.picture {
            Some(picture) => Avatar::Picture(picture.clone()),
            None => Avatar::Placeholder,
        }
    }

    /// Whether the corner "change photo" button exists at all.
    pub fn shows_change_photo(&self) -> bool {
        self.picture.is_some()
    }

    /// Apply one event and return the effect it triggers, if any.
    pub fn update(&mut self, event: ProfileEvent) -> Option<Effect> {
        match event {
            ProfileEvent::AvatarTapped => {
                if self.picture.is_none() {
                    return None;
                }
                self.expansion = self.expansion.toggled();
                debug!(expansion = ?self.expansion, "Avatar toggled");
                Some(Effect::Animate { to: self.expansion })
            }
            ProfileEvent::PlaceholderTapped => {
                if self.picture.is_some() {
                    return None;
                }
                self.present_picker()
            }
            ProfileEvent::ChangePhotoTapped => {
                if self.picture.is_none() || self.expansion.is_expanded() {
                    return None;
                }
                self.present_picker()
            }
            ProfileEvent::PickerDismissed { ticket } => {
                if self.latest_ticket == Some(ticket) {
                    self.picker_visible = false;
                }
                None
            }
            ProfileEvent::PickFinished(outcome) => self.finish_pick(outcome),
        }
    }

    fn present_picker(&mut self) -> Option<Effect> {
        if self.picker_visible {
            debug!("Picker already visible, ignoring tap");
            return None;
        }
        self.tickets_issued += 1;
        let ticket = PickTicket(self.tickets_issued);
        self.latest_ticket = Some(ticket);
        self.picker_visible = true;
        debug!(ticket = ticket.0, "Presenting picker");
        Some(Effect::PresentPicker { ticket })
    }

    /// Commit a loaded picture unless a newer one is already showing.
    ///
    /// Cancelled and failed picks never touch the state, so an earlier pick
    /// still decoding stays eligible to commit.
    fn finish_pick(&mut self, outcome: PickOutcome) -> Option<Effect> {
        let ticket = outcome.ticket();
        match outcome {
            PickOutcome::Loaded(picture) => {
                if let Some(current) = &self.picture {
                    if current.ticket >= ticket {
                        debug!(
                            ticket = ticket.0,
                            current = current.ticket.0,
                            "Discarding stale picture"
                        );
                        return None;
                    }
                }
                info!(
                    ticket = ticket.0,
                    width = picture.width,
                    height = picture.height,
                    "Profile picture selected"
                );
                self.picture = Some(picture);
                Some(Effect::Reveal { ticket })
            }
            PickOutcome::Cancelled { .. } => {
                debug!(ticket = ticket.0, "Picker cancelled");
                None
            }
            PickOutcome::Failed { reason, .. } => {
                warn!(ticket = ticket.0, "Failed to load picked image: {}", reason);
                None
            }
        }
    }
}
