//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected view applies the same decision: wait while the session is
//! loading, send signed-out visitors to `/login`, and send a session whose
//! role does not match the view to that role's own dashboard. Right after
//! the user signs out, the page being left sends them to `/` instead, the
//! same place the logout control navigates to.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::token::Role;

/// Login entry point for signed-out visitors.
pub const LOGIN_PATH: &str = "/login";

/// Landing page after an explicit sign-out.
pub const HOME_PATH: &str = "/";

/// Outcome of checking a view's requirements against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Session still loading; render a placeholder and do nothing.
    Pending,
    Allow,
    Redirect(&'static str),
}

/// Decide whether the current session may see a view.
///
/// `required` is `None` for views open to any signed-in role.
pub fn check_access(state: &AuthState, required: Option<Role>) -> Access {
    if state.loading {
        return Access::Pending;
    }
    let Some(role) = state.role() else {
        return Access::Redirect(if state.signed_out { HOME_PATH } else { LOGIN_PATH });
    };
    match required {
        Some(expected) if expected != role => Access::Redirect(role.home_path()),
        _ => Access::Allow,
    }
}

/// Placeholder copy shown while a guarded view is not yet allowed.
pub fn placeholder_text(access: Access) -> &'static str {
    match access {
        Access::Pending => "Loading...",
        Access::Redirect(LOGIN_PATH) => "Redirecting to login...",
        Access::Redirect(HOME_PATH) => "Signing out...",
        Access::Redirect(_) => "Redirecting to your dashboard...",
        Access::Allow => "",
    }
}

/// Expire a stale session on mount, then redirect whenever the session
/// stops satisfying `required`.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, required: Option<Role>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    // Runs once per mount; nothing here is tracked.
    Effect::new(move || {
        let now = crate::util::clock::now_unix_secs();
        if auth.with_untracked(|s| s.session_expired(now)) {
            auth.update(|s| {
                s.expire_if_due(&crate::util::storage::LocalTokenStore, now);
            });
        }
    });

    Effect::new(move || {
        let access = auth.with(|state| check_access(state, required));
        if let Access::Redirect(path) = access {
            if path == HOME_PATH {
                auth.update_untracked(|s| s.signed_out = false);
            }
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
