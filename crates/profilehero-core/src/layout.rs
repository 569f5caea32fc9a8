//! Layout interpolation for the profile card.
//!
//! Every visual property of the card is a pure function of a [`Morph`].
//! Continuous properties (sizes, paddings, radii, opacity, colour) follow
//! the animation progress; discrete ones (alignment, font weight) follow the
//! target state so they flip as soon as the transition starts.

use crate::state::ExpansionState;

pub const AVATAR_COLLAPSED_SIDE: f32 = 110.0;
pub const AVATAR_EXPANDED_HEIGHT: f32 = 320.0;
pub const AVATAR_COLLAPSED_TOP_PADDING: f32 = 80.0;
pub const SCREEN_COLLAPSED_PADDING: f32 = 10.0;
pub const DIVIDER_COLLAPSED_OPACITY: f32 = 0.25;
pub const BIO_EXPANDED_LEADING_PADDING: f32 = 24.0;
pub const ACTION_BAR_SPACING: f32 = 12.0;
pub const ACTION_BAR_HORIZONTAL_PADDING: f32 = 20.0;
pub const ACTION_BAR_COLLAPSED_TOP_PADDING: f32 = 20.0;
pub const CHANGE_PHOTO_TRAILING_PADDING: f32 = 24.0;
pub const CHANGE_PHOTO_HIDDEN_OFFSET: f32 = -100.0;

/// Exact at both endpoints.
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from * (1.0 - t) + to * t
}

/// Target state plus how far the card has travelled towards expanded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Morph {
    pub target: ExpansionState,
    /// 0.0 = collapsed, 1.0 = expanded
    pub progress: f32,
}

impl Morph {
    pub fn new(target: ExpansionState, progress: f32) -> Self {
        Self {
            target,
            progress: progress.clamp(0.0, 1.0),
        }
    }

    /// The card at rest in `state`.
    pub fn settled(state: ExpansionState) -> Self {
        Self::new(state, state.progress())
    }
}

/// Horizontal alignment of stacked content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Leading,
    Center,
}

impl Alignment {
    fn for_state(state: ExpansionState) -> Self {
        if state.is_expanded() {
            Alignment::Leading
        } else {
            Alignment::Center
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Bold,
    Heavy,
}

impl FontWeight {
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Bold => 700,
            FontWeight::Heavy => 800,
        }
    }
}

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
    pub const GRAY: Rgb = Rgb { r: 142, g: 142, b: 147 };

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let mix = |a: u8, b: u8| lerp(a as f32, b as f32, t).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
}

/// Outer column of the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    pub alignment: Alignment,
    pub horizontal_padding: f32,
    pub divider_opacity: f32,
}

impl ScreenLayout {
    pub fn at(morph: Morph) -> Self {
        Self {
            alignment: Alignment::for_state(morph.target),
            horizontal_padding: lerp(SCREEN_COLLAPSED_PADDING, 0.0, morph.progress),
            divider_opacity: lerp(DIVIDER_COLLAPSED_OPACITY, 0.0, morph.progress),
        }
    }
}

/// Picture frame: a circle when collapsed, a full-width banner when expanded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarLayout {
    pub frame: Frame,
    pub corner_radius: f32,
    pub top_padding: f32,
}

impl AvatarLayout {
    pub fn at(morph: Morph, container_width: f32) -> Self {
        let t = morph.progress;
        Self {
            frame: Frame {
                width: lerp(AVATAR_COLLAPSED_SIDE, container_width, t),
                height: lerp(AVATAR_COLLAPSED_SIDE, AVATAR_EXPANDED_HEIGHT, t),
            },
            corner_radius: lerp(AVATAR_COLLAPSED_SIDE / 2.0, 0.0, t),
            top_padding: lerp(AVATAR_COLLAPSED_TOP_PADDING, 0.0, t),
        }
    }
}

/// Placeholder circle; keeps its size, only the padding moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderLayout {
    pub side: f32,
    pub top_padding: f32,
}

impl PlaceholderLayout {
    pub fn at(morph: Morph) -> Self {
        Self {
            side: AVATAR_COLLAPSED_SIDE,
            top_padding: lerp(AVATAR_COLLAPSED_TOP_PADDING, 0.0, morph.progress),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BioLayout {
    pub alignment: Alignment,
    pub name_weight: FontWeight,
    pub subtitle_color: Rgb,
    pub leading_padding: f32,
}

impl BioLayout {
    pub fn at(morph: Morph) -> Self {
        Self {
            alignment: Alignment::for_state(morph.target),
            name_weight: if morph.target.is_expanded() {
                FontWeight::Heavy
            } else {
                FontWeight::Bold
            },
            subtitle_color: Rgb::GRAY.lerp(Rgb::WHITE, morph.progress),
            leading_padding: lerp(0.0, BIO_EXPANDED_LEADING_PADDING, morph.progress),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionBarLayout {
    pub spacing: f32,
    pub horizontal_padding: f32,
    pub top_padding: f32,
}

impl ActionBarLayout {
    pub fn at(morph: Morph) -> Self {
        Self {
            spacing: ACTION_BAR_SPACING,
            horizontal_padding: ACTION_BAR_HORIZONTAL_PADDING,
            top_padding: lerp(ACTION_BAR_COLLAPSED_TOP_PADDING, 0.0, morph.progress),
        }
    }
}

/// Corner "change photo" button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangePhotoLayout {
    pub opacity: f32,
    pub offset_y: f32,
    pub trailing_padding: f32,
    /// Whether the button accepts taps
    pub interactive: bool,
}

impl ChangePhotoLayout {
    /// `None` when there is no picture to change.
    pub fn at(morph: Morph, has_picture: bool) -> Option<Self> {
        if !has_picture {
            return None;
        }
        Some(Self {
            opacity: lerp(1.0, 0.0, morph.progress),
            offset_y: lerp(0.0, CHANGE_PHOTO_HIDDEN_OFFSET, morph.progress),
            trailing_padding: CHANGE_PHOTO_TRAILING_PADDING,
            interactive: !morph.target.is_expanded(),
        })
    }
}

/// Every layout of the card for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub screen: ScreenLayout,
    pub avatar: AvatarLayout,
    pub placeholder: PlaceholderLayout,
    pub bio: BioLayout,
    pub action_bar: ActionBarLayout,
    pub change_photo: Option<ChangePhotoLayout>,
}

impl CardLayout {
    pub fn at(morph: Morph, container_width: f32, has_picture: bool) -> Self {
        Self {
            screen: ScreenLayout::at(morph),
            avatar: AvatarLayout::at(morph, container_width),
            placeholder: PlaceholderLayout::at(morph),
            bio: BioLayout::at(morph),
            action_bar: ActionBarLayout::at(morph),
            change_photo: ChangePhotoLayout::at(morph, has_picture),
        }
    }
}
