//! Transient status messages (the snackbar line under a page)

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert alert--success",
            Severity::Error => "alert alert--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

/// At most one visible message. Every `show` bumps the generation so a
/// dismiss timer started for an older message cannot hide a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSlot {
    current: Option<StatusMessage>,
    generation: u64,
}

impl StatusSlot {
    pub fn show(&mut self, message: StatusMessage) -> u64 {
        self.generation += 1;
        self.current = Some(message);
        self.generation
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Hide the message only if it is still the one shown as `generation`
    pub fn dismiss_if(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.current.is_some() {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}

/// Reactive status slot with auto-dismiss
#[derive(Clone, Copy)]
pub struct StatusHandle {
    slot: RwSignal<StatusSlot>,
    hide_ms: u32,
}

impl StatusHandle {
    pub fn new(hide_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(StatusSlot::default()),
            hide_ms,
        }
    }

    pub fn show(&self, message: StatusMessage) {
        let Some(generation) = self.slot.try_update(|s| s.show(message)) else {
            return;
        };
        let slot = self.slot;
        let hide_ms = self.hide_ms;
        spawn_local(async move {
            TimeoutFuture::new(hide_ms).await;
            slot.try_update(|s| s.dismiss_if(generation));
        });
    }

    pub fn dismiss(&self) {
        self.slot.update(StatusSlot::dismiss);
    }

    pub fn current(&self) -> Option<StatusMessage> {
        self.slot.with(|s| s.current().cloned())
    }
}
