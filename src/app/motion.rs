//! Reactive wrappers that drive the state machines in [`crate::motion`] from
//! browser timers and observers. Every timer and observer registered here is
//! released with the owning component.

use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer, UseIntersectionObserverReturn};

use crate::motion::{
    CursorBlink, Entrance, FloatMotion, FloatPhase, RevealState, TypingSequence,
};

/// Phase of a mount animation: `Hidden` until the first frame after mount,
/// `Entering` while the transition runs, then `Settled`.
pub fn use_entrance_phase(entrance: Entrance) -> ReadSignal<FloatPhase> {
    let (phase, set_phase) = signal(FloatPhase::Hidden);
    Effect::new(move |_| {
        if let Ok(frame) =
            request_animation_frame_with_handle(move || set_phase.set(FloatPhase::Entering))
        {
            on_cleanup(move || frame.cancel());
        }
        if let Ok(handle) =
            set_timeout_with_handle(move || set_phase.set(FloatPhase::Settled), entrance.total())
        {
            on_cleanup(move || handle.clear());
        }
    });
    phase
}

/// Types `text` out one character per tick with a blinking caret.
///
/// At most one tick is pending at a time: each tick is scheduled by the effect
/// run that follows the previous tick's update, and the pending timeout is
/// cleared when the effect re-runs or the component is torn down.
#[component]
pub fn TypingText(text: &'static str, #[prop(optional, into)] class: String) -> impl IntoView {
    let sequence = StoredValue::new(TypingSequence::new(text));
    let (typed, set_typed) = signal(String::new());

    Effect::new(move |_| {
        typed.track();
        let Some(delay) = sequence.with_value(|s| s.next_tick()) else {
            log::debug!("finished typing {} characters", text.chars().count());
            return;
        };
        let tick = move || {
            if let Some(prefix) = sequence.try_update_value(|s| s.next()).flatten() {
                set_typed.set(prefix);
            }
        };
        if let Ok(handle) = set_timeout_with_handle(tick, delay) {
            on_cleanup(move || handle.clear());
        }
    });

    view! {
        <span class=class>
            {typed}
            <span
                class="inline-block w-0.5 h-6 bg-current ml-1 align-middle"
                style=CursorBlink::default().css_animation()
            ></span>
        </span>
    }
}

/// Fades children up into place the first time they scroll into view.
#[component]
pub fn Reveal(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (state, set_state) = signal(RevealState::Hidden);

    let UseIntersectionObserverReturn { stop, .. } =
        use_intersection_observer(target, move |entries, _| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            set_state.update(|s| *s = s.observe(intersecting));
        });

    Effect::new(move |_| {
        if state.get().is_visible() {
            log::debug!("reveal triggered, releasing observer");
            stop();
        }
    });

    view! {
        <div node_ref=target class=class style=move || state.get().style()>
            {children()}
        </div>
    }
}

/// Card wrapper that floats in after `delay` and lifts slightly on hover.
#[component]
pub fn FloatingCard(#[prop(optional)] delay: Duration, children: Children) -> impl IntoView {
    let float = FloatMotion::with_delay(delay);
    let phase = use_entrance_phase(float.entrance);
    let (hovered, set_hovered) = signal(false);

    view! {
        <div
            class="h-full"
            style=move || float.style(phase.get(), hovered.get()).css()
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            {children()}
        </div>
    }
}

/// Plays a one-off mount animation around its children.
#[component]
pub fn Appear(
    entrance: Entrance,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let phase = use_entrance_phase(entrance);
    view! {
        <div class=class style=move || entrance.style(phase.get()).css()>
            {children()}
        </div>
    }
}
