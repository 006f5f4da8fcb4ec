use leptos::prelude::*;

/// Labelled counter on dashboards and the home page.
///
/// `value` is `None` while the backing request is in flight.
#[component]
pub fn StatCard(label: &'static str, #[prop(into)] value: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{move || value.get().unwrap_or_else(|| "-".to_owned())}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}

/// Link card pointing at one of the role's views.
#[component]
pub fn ActionCard(title: &'static str, description: &'static str, href: &'static str) -> impl IntoView {
    view! {
        <a class="action-card" href=href>
            <h3 class="action-card__title">{title}</h3>
            <p class="action-card__description">{description}</p>
        </a>
    }
}
