//! End-to-end flows through the profile screen state machine
//!
//! Drives `ProfileState` the way the desktop shell does: events in, effects
//! out, with a scripted picture source standing in for the native picker.

use std::io::Cursor;
use std::sync::Mutex;

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb as Pixel};
use profilehero_core::{
    load_picture, Alignment, Avatar, CardLayout, Effect, ExpansionState, Frame, MediaFilter,
    Morph, PickOutcome, PickTicket, PictureSource, ProfileError, ProfileEvent, ProfileResult,
    ProfileState,
};

const WIDTH: f32 = 390.0;
const MAX_DIMENSION: u32 = 1024;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("profilehero_core=debug")
        .try_init();
}

fn encoded(format: ImageFormat) -> Vec<u8> {
    let img = ImageBuffer::from_fn(64, 48, |x, y| Pixel([x as u8 * 3, y as u8 * 5, 90]));
    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buffer), format)
        .unwrap();
    buffer
}

/// Picker that replays a fixed script of responses
struct ScriptedPicker {
    responses: Mutex<Vec<ProfileResult<Option<Vec<u8>>>>>,
}

impl ScriptedPicker {
    fn new(mut responses: Vec<ProfileResult<Option<Vec<u8>>>>) -> Self {
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
        }
    }
}

impl PictureSource for ScriptedPicker {
    async fn pick(&self, filter: MediaFilter) -> ProfileResult<Option<Vec<u8>>> {
        assert_eq!(filter, MediaFilter::Images);
        self.responses.lock().unwrap().pop().unwrap_or(Ok(None))
    }
}

/// Tap, pick, dismiss, commit: one full picker round trip.
async fn pick_with(
    state: &mut ProfileState,
    source: &ScriptedPicker,
    tap: ProfileEvent,
) -> Option<PickOutcome> {
    let Some(Effect::PresentPicker { ticket }) = state.update(tap) else {
        return None;
    };
    assert!(state.picker_visible());

    let outcome = load_picture(source, ticket, MAX_DIMENSION).await;
    state.update(ProfileEvent::PickerDismissed { ticket });
    state.update(ProfileEvent::PickFinished(outcome.clone()));
    assert!(!state.picker_visible());
    Some(outcome)
}

fn layout(state: &ProfileState) -> CardLayout {
    CardLayout::at(
        Morph::settled(state.expansion()),
        WIDTH,
        state.picture().is_some(),
    )
}

#[tokio::test]
async fn placeholder_to_picture_with_jpeg() {
    init_tracing();
    let mut state = ProfileState::new();
    assert_eq!(state.avatar(), Avatar::Placeholder);
    assert_eq!(state.expansion(), ExpansionState::Collapsed);

    let picker = ScriptedPicker::new(vec![Ok(Some(encoded(ImageFormat::Jpeg)))]);
    let outcome = pick_with(&mut state, &picker, ProfileEvent::PlaceholderTapped)
        .await
        .expect("placeholder tap presents the picker");
    assert!(matches!(outcome, PickOutcome::Loaded(_)));

    let Avatar::Picture(picture) = state.avatar() else {
        panic!("placeholder should be replaced by the picture");
    };
    assert_eq!((picture.width, picture.height), (64, 48));
    assert!(state.shows_change_photo());

    let card = layout(&state);
    assert_eq!(card.avatar.frame, Frame { width: 110.0, height: 110.0 });
    assert!(card.change_photo.is_some());
}

#[tokio::test]
async fn tapping_picture_expands_card() {
    init_tracing();
    let mut state = ProfileState::new();
    let picker = ScriptedPicker::new(vec![Ok(Some(encoded(ImageFormat::Png)))]);
    pick_with(&mut state, &picker, ProfileEvent::PlaceholderTapped).await;

    assert_eq!(
        state.update(ProfileEvent::AvatarTapped),
        Some(Effect::Animate { to: ExpansionState::Expanded })
    );

    let card = layout(&state);
    assert_eq!(card.avatar.frame, Frame { width: WIDTH, height: 320.0 });
    assert_eq!(card.avatar.corner_radius, 0.0);
    assert_eq!(card.bio.alignment, Alignment::Leading);
    assert_eq!(card.screen.alignment, Alignment::Leading);

    let change_photo = card.change_photo.expect("picture present");
    assert_eq!(change_photo.opacity, 0.0);
    assert_eq!(change_photo.offset_y, -100.0);
}

#[tokio::test]
async fn undecodable_bytes_leave_state_untouched() {
    init_tracing();
    let mut state = ProfileState::new();
    let picker = ScriptedPicker::new(vec![
        Ok(Some(b"\xff\xd8\xff truncated jpeg".to_vec())),
        Ok(Some(encoded(ImageFormat::Png))),
        Ok(Some(Vec::new())),
    ]);

    let outcome = pick_with(&mut state, &picker, ProfileEvent::PlaceholderTapped)
        .await
        .unwrap();
    assert!(matches!(outcome, PickOutcome::Failed { .. }));
    assert_eq!(state.avatar(), Avatar::Placeholder);
    assert!(!state.shows_change_photo());

    pick_with(&mut state, &picker, ProfileEvent::PlaceholderTapped).await;
    let before = state.picture().cloned();
    assert!(before.is_some());

    let outcome = pick_with(&mut state, &picker, ProfileEvent::ChangePhotoTapped)
        .await
        .unwrap();
    assert!(matches!(outcome, PickOutcome::Failed { .. }));
    assert_eq!(state.picture().cloned(), before);
}

#[tokio::test]
async fn cancel_and_picker_errors_are_distinct_but_silent() {
    init_tracing();
    let mut state = ProfileState::new();
    let picker = ScriptedPicker::new(vec![
        Ok(None),
        Err(ProfileError::Picker("dialog crashed".to_string())),
    ]);

    let cancelled = pick_with(&mut state, &picker, ProfileEvent::PlaceholderTapped)
        .await
        .unwrap();
    assert_eq!(cancelled, PickOutcome::Cancelled { ticket: PickTicket(1) });

    let failed = pick_with(&mut state, &picker, ProfileEvent::PlaceholderTapped)
        .await
        .unwrap();
    assert!(matches!(failed, PickOutcome::Failed { ticket: PickTicket(2), .. }));

    assert_eq!(state.avatar(), Avatar::Placeholder);
}

#[tokio::test]
async fn repick_replaces_picture() {
    init_tracing();
    let mut state = ProfileState::new();
    let picker = ScriptedPicker::new(vec![
        Ok(Some(encoded(ImageFormat::Png))),
        Ok(Some(encoded(ImageFormat::Jpeg))),
    ]);

    pick_with(&mut state, &picker, ProfileEvent::PlaceholderTapped).await;
    let first = state.picture().map(|p| p.ticket);

    pick_with(&mut state, &picker, ProfileEvent::ChangePhotoTapped).await;
    let second = state.picture().map(|p| p.ticket);

    assert_eq!(first, Some(PickTicket(1)));
    assert_eq!(second, Some(PickTicket(2)));
}

#[tokio::test]
async fn slow_earlier_pick_cannot_overwrite_newer_one() {
    init_tracing();
    let mut state = ProfileState::new();
    let picker = ScriptedPicker::new(vec![
        Ok(Some(encoded(ImageFormat::Png))),
        Ok(Some(encoded(ImageFormat::Png))),
        Ok(Some(encoded(ImageFormat::Jpeg))),
    ]);
    pick_with(&mut state, &picker, ProfileEvent::PlaceholderTapped).await;

    // Ticket 2 is presented and dismissed, its decode still in flight
    let Some(Effect::PresentPicker { ticket: slow }) = state.update(ProfileEvent::ChangePhotoTapped)
    else {
        panic!("change photo presents the picker");
    };
    state.update(ProfileEvent::PickerDismissed { ticket: slow });
    let slow_outcome = load_picture(&picker, slow, MAX_DIMENSION).await;

    // Ticket 3 completes first
    pick_with(&mut state, &picker, ProfileEvent::ChangePhotoTapped).await;
    assert_eq!(state.picture().map(|p| p.ticket), Some(PickTicket(3)));

    state.update(ProfileEvent::PickFinished(slow_outcome));
    assert_eq!(state.picture().map(|p| p.ticket), Some(PickTicket(3)));
}

#[tokio::test]
async fn cancelled_repick_does_not_lose_pick_still_decoding() {
    init_tracing();
    let mut state = ProfileState::new();
    let picker = ScriptedPicker::new(vec![Ok(Some(encoded(ImageFormat::Png))), Ok(None)]);

    // Ticket 1 is picked and dismissed, its decode still in flight
    let Some(Effect::PresentPicker { ticket: decoding }) =
        state.update(ProfileEvent::PlaceholderTapped)
    else {
        panic!("placeholder tap presents the picker");
    };
    state.update(ProfileEvent::PickerDismissed { ticket: decoding });
    let decoded = load_picture(&picker, decoding, MAX_DIMENSION).await;

    // The placeholder is still showing, so it can be tapped again and cancelled
    let cancelled = pick_with(&mut state, &picker, ProfileEvent::PlaceholderTapped)
        .await
        .unwrap();
    assert_eq!(cancelled, PickOutcome::Cancelled { ticket: PickTicket(2) });
    assert_eq!(state.avatar(), Avatar::Placeholder);

    assert_eq!(
        state.update(ProfileEvent::PickFinished(decoded)),
        Some(Effect::Reveal { ticket: decoding })
    );
    assert!(matches!(state.avatar(), Avatar::Picture(p) if p.ticket == decoding));
}
