//! Leave guard for forms with unsaved edits.

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::navigation::use_app_navigator;

pub const LEAVE_MESSAGE: &str = "Form has been modified. You will lose your unsaved changes. Are you sure you want to close this form?";

/// Re-entrancy gate: at most one prompt on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptGate {
    #[default]
    Idle,
    Prompting,
}

impl PromptGate {
    pub fn try_enter(&mut self) -> bool {
        if *self == PromptGate::Prompting {
            return false;
        }
        *self = PromptGate::Prompting;
        true
    }

    pub fn release(&mut self) {
        *self = PromptGate::Idle;
    }

    pub fn is_prompting(&self) -> bool {
        *self == PromptGate::Prompting
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Nothing is blocked
    Inactive,
    /// Blocked, but the form is clean again: let it through without asking
    Release,
    /// A prompt is already open
    Suppressed,
    /// User confirmed leaving
    Proceed,
    /// User chose to stay
    Stay,
}

/// Decide what to do with a blocked navigation. On `Proceed` or `Stay` the
/// gate is left in `Prompting`; the caller releases it later.
pub fn decide(
    blocked: bool,
    when: bool,
    gate: &mut PromptGate,
    confirm: impl FnOnce() -> bool,
) -> GuardDecision {
    if !blocked {
        return GuardDecision::Inactive;
    }
    if !when {
        return GuardDecision::Release;
    }
    if !gate.try_enter() {
        return GuardDecision::Suppressed;
    }
    if confirm() {
        GuardDecision::Proceed
    } else {
        GuardDecision::Stay
    }
}

fn confirm_leave() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(LEAVE_MESSAGE).ok())
        .unwrap_or(false)
}

/// Guard the current page while `when` is true.
///
/// Tab close and reload get the browser's own confirmation; in-app navigation
/// through [`super::navigation::AppNavigator`] gets [`LEAVE_MESSAGE`]. On
/// confirm `on_confirm` runs before the navigation continues.
pub fn use_unsaved_changes_prompt(when: Signal<bool>, on_confirm: Option<Callback<()>>) {
    let navigator = use_app_navigator();

    let guard_id = navigator.set_guard(when);
    on_cleanup(move || navigator.clear_guard(guard_id));

    let unload = window_event_listener(ev::beforeunload, move |ev: web_sys::BeforeUnloadEvent| {
        if when.get_untracked() {
            ev.prevent_default();
            ev.set_return_value("");
        }
    });
    on_cleanup(move || unload.remove());

    let gate = StoredValue::new(PromptGate::default());

    Effect::new(move |_| {
        if !navigator.is_blocked() {
            return;
        }
        let dirty = when.get_untracked();
        let decision = gate
            .try_update_value(|g| decide(true, dirty, g, confirm_leave))
            .unwrap_or(GuardDecision::Inactive);

        match decision {
            GuardDecision::Proceed => {
                if let Some(cb) = on_confirm {
                    cb.run(());
                }
                navigator.proceed();
            }
            GuardDecision::Release => navigator.proceed(),
            GuardDecision::Stay => navigator.reset(),
            GuardDecision::Suppressed | GuardDecision::Inactive => {}
        }

        if matches!(decision, GuardDecision::Proceed | GuardDecision::Stay) {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                gate.try_update_value(PromptGate::release);
            });
        }
    });
}
