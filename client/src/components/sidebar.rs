//! Role-specific navigation sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by every dashboard-area page. Items come from the signed-in role,
//! the current route is highlighted, and the logout control ends the session
//! and returns to the home page. On narrow screens the list collapses behind
//! a toggle.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::HOME_PATH;
use crate::util::storage::LocalTokenStore;
use crate::util::token::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const USER_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", path: "/user" },
    NavItem { label: "Upload Document", path: "/user/upload" },
    NavItem { label: "My Documents", path: "/user/my-documents" },
    NavItem { label: "Flag Document", path: "/user/flag" },
];

const AUTHORITY_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", path: "/authority" },
    NavItem { label: "Issue Document", path: "/authority/issue" },
    NavItem { label: "Issued Documents", path: "/authority/issued-documents" },
    NavItem { label: "Verify Document", path: "/authority/verify" },
];

/// Navigation entries for `role`.
pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::User => &USER_ITEMS,
        Role::Authority => &AUTHORITY_ITEMS,
    }
}

/// Exact path match, ignoring one trailing slash on the current path.
pub fn is_active(current: &str, path: &str) -> bool {
    let current = if current.len() > 1 { current.strip_suffix('/').unwrap_or(current) } else { current };
    current == path
}

/// Page frame for the signed-in area: sidebar plus main column.
#[component]
pub fn DashboardLayout(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="dashboard">
            <Sidebar/>
            <main class="dashboard__main">
                <h1 class="dashboard__title">{title}</h1>
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();
    let open = RwSignal::new(false);

    let items = move || auth.with(|s| s.role().map(nav_items).unwrap_or_default());
    let name = move || auth.with(|s| s.display_name().map(str::to_owned));

    // The guard of the page being left may redirect after this; it targets
    // HOME_PATH as well, so the visitor ends on the home page either way.
    let on_logout = move |_| {
        auth.update(|s| s.sign_out(&LocalTokenStore));
        navigate(HOME_PATH, NavigateOptions::default());
    };

    view! {
        <aside class="sidebar" class:sidebar--open=move || open.get()>
            <div class="sidebar__header">
                <a class="sidebar__brand" href="/">"DocuChain"</a>
                <button
                    type="button"
                    class="sidebar__toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    {move || if open.get() { "Close" } else { "Menu" }}
                </button>
            </div>
            {move || name().map(|n| view! { <p class="sidebar__user">{n}</p> })}
            <nav class="sidebar__nav">
                {move || {
                    let current = location.pathname.get();
                    items()
                        .iter()
                        .map(|item| {
                            let active = is_active(&current, item.path);
                            view! {
                                <a
                                    class="sidebar__item"
                                    class:sidebar__item--active=active
                                    href=item.path
                                    on:click=move |_| open.set(false)
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>
            <button type="button" class="sidebar__logout" on:click=on_logout>
                "Logout"
            </button>
        </aside>
    }
}
