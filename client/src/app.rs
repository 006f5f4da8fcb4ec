//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::pages::{
    authority_dashboard::AuthorityDashboardPage, document_detail::DocumentDetailPage, flag_document::FlagDocumentPage,
    home::HomePage, issue_document::IssueDocumentPage, issued_documents::IssuedDocumentsPage, login::LoginPage,
    my_documents::MyDocumentsPage, register::RegisterPage, upload_document::UploadDocumentPage,
    user_dashboard::UserDashboardPage, verify_document::VerifyDocumentPage,
};
use crate::state::{auth::AuthState, documents::DocumentSelection};
use crate::util::clock::now_unix_secs;
use crate::util::storage::LocalTokenStore;
use crate::util::token::Role;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and document-selection contexts, restores the
/// session from storage once mounted, and declares the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let selection = RwSignal::new(DocumentSelection::default());
    provide_context(auth);
    provide_context(selection);

    // Storage only exists in the browser, so restore after hydration.
    Effect::new(move || {
        auth.set(AuthState::initialize(&LocalTokenStore, now_unix_secs()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/docuchain.css"/>
        <Title text="DocuChain"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=(StaticSegment("documents"), ParamSegment("id"))
                    view=|| view! { <Protected><DocumentDetailPage/></Protected> }
                />

                <Route
                    path=StaticSegment("user")
                    view=|| view! { <Protected role=Role::User><UserDashboardPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("user"), StaticSegment("my-documents"))
                    view=|| view! { <Protected role=Role::User><MyDocumentsPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("user"), StaticSegment("upload"))
                    view=|| view! { <Protected role=Role::User><UploadDocumentPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("user"), StaticSegment("flag"))
                    view=|| view! { <Protected role=Role::User><FlagDocumentPage/></Protected> }
                />

                <Route
                    path=StaticSegment("authority")
                    view=|| view! { <Protected role=Role::Authority><AuthorityDashboardPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("authority"), StaticSegment("issued-documents"))
                    view=|| view! { <Protected role=Role::Authority><IssuedDocumentsPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("authority"), StaticSegment("issue"))
                    view=|| view! { <Protected role=Role::Authority><IssueDocumentPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("authority"), StaticSegment("verify"))
                    view=|| view! { <Protected role=Role::Authority><VerifyDocumentPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
