//! Route wrapper enforcing the session guard.
//!
//! Children render only once the guard allows them; until then a placeholder
//! line stands in while the redirect happens.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{Access, check_access, install_route_guard, placeholder_text};
use crate::util::token::Role;

/// Gate `children` behind a session, and behind `role` when given.
#[component]
pub fn Protected(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, role, use_navigate());

    let access = Memo::new(move |_| auth.with(|s| check_access(s, role)));

    view! {
        <Show
            when=move || access.get() == Access::Allow
            fallback=move || view! { <p class="guard-placeholder">{placeholder_text(access.get())}</p> }
        >
            {children()}
        </Show>
    }
}
