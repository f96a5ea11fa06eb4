//! In-app navigation with an optional leave guard and one-shot flash messages.
//!
//! Every link and redirect inside the app goes through [`AppNavigator`]. When a
//! guard is registered and active, the request is parked as "blocked" until the
//! guard either proceeds or resets it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    pub path: String,
    pub flash: Option<String>,
    pub replace: bool,
}

impl PendingNavigation {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            flash: None,
            replace: false,
        }
    }

    pub fn with_flash(mut self, flash: impl Into<String>) -> Self {
        self.flash = Some(flash.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Go(PendingNavigation),
    Blocked,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    blocked: Option<PendingNavigation>,
    flash: Option<String>,
}

impl NavigationState {
    /// A newer attempt replaces a parked one.
    pub fn request(&mut self, nav: PendingNavigation, guarded: bool) -> NavOutcome {
        if guarded {
            self.blocked = Some(nav);
            return NavOutcome::Blocked;
        }
        self.flash = nav.flash.clone();
        NavOutcome::Go(nav)
    }

    pub fn blocked(&self) -> Option<&PendingNavigation> {
        self.blocked.as_ref()
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked.is_some()
    }

    /// Release the parked navigation
    pub fn proceed(&mut self) -> Option<PendingNavigation> {
        let nav = self.blocked.take()?;
        self.flash = nav.flash.clone();
        Some(nav)
    }

    /// Drop the parked navigation
    pub fn reset(&mut self) -> Option<PendingNavigation> {
        self.blocked.take()
    }

    pub fn take_flash(&mut self) -> Option<String> {
        self.flash.take()
    }
}

type GoFn = Box<dyn Fn(&str, bool)>;

#[derive(Clone, Copy)]
pub struct AppNavigator {
    state: RwSignal<NavigationState>,
    guard: RwSignal<Option<(u64, Signal<bool>)>>,
    next_guard: StoredValue<u64>,
    go: StoredValue<GoFn, LocalStorage>,
}

impl AppNavigator {
    fn new(go: GoFn) -> Self {
        Self {
            state: RwSignal::new(NavigationState::default()),
            guard: RwSignal::new(None),
            next_guard: StoredValue::new(0),
            go: StoredValue::new_local(go),
        }
    }

    pub fn navigate(&self, path: &str) {
        self.request(PendingNavigation::to(path));
    }

    pub fn navigate_with_flash(&self, path: &str, flash: impl Into<String>) {
        self.request(PendingNavigation::to(path).with_flash(flash));
    }

    pub fn request(&self, nav: PendingNavigation) {
        let guarded = self
            .guard
            .with_untracked(|g| g.as_ref().is_some_and(|(_, when)| when.get_untracked()));
        if guarded {
            log::debug!("navigation to {} held by leave guard", nav.path);
        }
        if let Some(NavOutcome::Go(nav)) = self.state.try_update(|s| s.request(nav, guarded)) {
            self.go(&nav);
        }
    }

    pub fn proceed(&self) {
        if let Some(nav) = self.state.try_update(NavigationState::proceed).flatten() {
            self.go(&nav);
        }
    }

    pub fn reset(&self) {
        self.state.update(|s| {
            s.reset();
        });
    }

    /// Tracked
    pub fn is_blocked(&self) -> bool {
        self.state.with(NavigationState::is_blocked)
    }

    pub fn take_flash(&self) -> Option<String> {
        self.state.try_update(NavigationState::take_flash).flatten()
    }

    /// Register `when` as the active leave guard. Returns a token for
    /// [`AppNavigator::clear_guard`].
    pub fn set_guard(&self, when: Signal<bool>) -> u64 {
        let id = self.next_guard.get_value() + 1;
        self.next_guard.set_value(id);
        self.guard.set(Some((id, when)));
        id
    }

    /// Remove the guard registered as `id`; a newer guard is left alone.
    pub fn clear_guard(&self, id: u64) {
        let current = self.guard.with_untracked(|g| g.as_ref().map(|(gid, _)| *gid));
        if current == Some(id) {
            self.guard.set(None);
        }
    }

    fn go(&self, nav: &PendingNavigation) {
        self.go.with_value(|go| go(&nav.path, nav.replace));
    }
}

/// Create the navigator and put it in context. Must run inside `<Router>`.
pub fn provide_app_navigator() -> AppNavigator {
    let navigate = use_navigate();
    let navigator = AppNavigator::new(Box::new(move |path: &str, replace: bool| {
        navigate(
            path,
            NavigateOptions {
                replace,
                ..Default::default()
            },
        )
    }));
    provide_context(navigator);
    navigator
}

pub fn use_app_navigator() -> AppNavigator {
    use_context::<AppNavigator>().expect("AppNavigator not provided")
}
