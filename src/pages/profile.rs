//! Profile Page - animated profile card
//!
//! Owns all screen state. Components below only receive layouts and report
//! taps; every tap is routed through [`Dispatcher::send`], which runs the
//! reducer and then the effect it returns.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use profilehero_core::{
    resolve_pick, AnimationFrame, CardAnimator, CardLayout, Effect, MediaFilter, Morph,
    PickTicket, PictureSource, ProfileEvent, ProfileState,
};
use profilehero_ui::style::screen_style;
use profilehero_ui::{ActionBar, AvatarSlot, ChangePhotoButton, Divider, ProfileBio};

use crate::context::use_profile_config;
use crate::picker::DialogPicker;

/// Routes events through the reducer and runs the resulting effects.
#[derive(Clone, Copy)]
struct Dispatcher {
    state: Signal<ProfileState>,
    animator: Signal<CardAnimator>,
    frame: Signal<AnimationFrame>,
    ticking: Signal<bool>,
    frame_interval: Duration,
    max_picture_dimension: u32,
}

impl Dispatcher {
    fn send(mut self, event: ProfileEvent) {
        let effect = self.state.write().update(event);
        let now = Instant::now();

        match effect {
            Some(Effect::Animate { to }) => {
                self.animator.write().animate_to(to.progress(), now);
                self.tick(now);
            }
            Some(Effect::Reveal { .. }) => {
                self.animator.write().reveal(now);
                self.tick(now);
            }
            Some(Effect::PresentPicker { ticket }) => self.present_picker(ticket),
            None => {}
        }
    }

    fn present_picker(self, ticket: PickTicket) {
        let max_dimension = self.max_picture_dimension;

        spawn(async move {
            let picked = DialogPicker.pick(MediaFilter::Images).await;
            self.send(ProfileEvent::PickerDismissed { ticket });

            let outcome = resolve_pick(ticket, picked, max_dimension).await;
            self.send(ProfileEvent::PickFinished(outcome));
        });
    }

    /// Publish the frame at `now` and run a frame loop until both tweens
    /// settle. At most one loop runs at a time.
    fn tick(self, now: Instant) {
        self.publish(now);

        let mut ticking = self.ticking;
        if *ticking.peek() {
            return;
        }
        ticking.set(true);

        spawn(async move {
            loop {
                tokio::time::sleep(self.frame_interval).await;
                if self.publish(Instant::now()).settled {
                    break;
                }
            }
            ticking.set(false);
            tracing::trace!("Animations settled, frame loop stopped");
        });
    }

    fn publish(self, now: Instant) -> AnimationFrame {
        let mut frame = self.frame;
        let sampled = self.animator.peek().frame(now);
        if *frame.peek() != sampled {
            frame.set(sampled);
        }
        sampled
    }
}

/// Profile screen: avatar, bio, divider and action bar in one column, with
/// the change-photo button pinned to the top-right corner.
#[component]
pub fn ProfileScreen() -> Element {
    let config = use_profile_config();
    let (name, title, width, transition, frame_interval, max_picture_dimension) = {
        let config = config.read();
        (
            config.name.clone(),
            config.title.clone(),
            config.window.width,
            config.animation.transition(),
            config.frame_interval(),
            config.max_picture_dimension,
        )
    };

    let state = use_signal(ProfileState::new);
    let animator = use_signal(|| CardAnimator::new(transition));
    let frame = use_signal(|| animator.peek().frame(Instant::now()));
    let ticking = use_signal(|| false);

    let dispatcher = Dispatcher {
        state,
        animator,
        frame,
        ticking,
        frame_interval,
        max_picture_dimension,
    };

    let (expansion, avatar, has_picture, picker_visible) = {
        let state = state.read();
        (
            state.expansion(),
            state.avatar(),
            state.shows_change_photo(),
            state.picker_visible(),
        )
    };
    let AnimationFrame { progress, reveal, .. } = frame();
    let card_morph = Morph::new(expansion, progress);
    let card = CardLayout::at(card_morph, width, has_picture);
    let column_style = screen_style(&card.screen);

    rsx! {
        div { class: "profile-screen",
            div { class: "profile-column", style: "{column_style}",
                AvatarSlot {
                    avatar: avatar,
                    morph: card_morph,
                    container_width: width,
                    reveal: reveal,
                    on_event: move |event| dispatcher.send(event),
                }

                ProfileBio { name: name, title: title, layout: card.bio }

                Divider { layout: card.screen }

                ActionBar { layout: card.action_bar }
            }

            ChangePhotoButton {
                layout: card.change_photo,
                ontap: move |_| dispatcher.send(ProfileEvent::ChangePhotoTapped),
            }

            if picker_visible {
                div { class: "picker-scrim" }
            }
        }
    }
}
