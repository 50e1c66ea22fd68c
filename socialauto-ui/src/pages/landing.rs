//! Landing Page

use leptos::*;
use leptos_router::*;

use crate::components::{CallToAction, Features, Footer, Hero, Navbar};
use crate::state::models::Session;
use crate::state::session::SessionContext;

/// Where a visitor with this session should be sent instead of the landing
pub fn landing_redirect(session: Option<&Session>) -> Option<&'static str> {
    session.map(|_| "/dashboard")
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext not found");

    // Visitors see the landing while the session is still resolving
    move || {
        let session = session.get().flatten();
        view! { <LandingComposition session=session /> }
    }
}

/// Landing sections, or a redirect for signed-in users
#[component]
pub fn LandingComposition(session: Option<Session>) -> impl IntoView {
    if let Some(path) = landing_redirect(session.as_ref()) {
        return view! { <Redirect path=path /> }.into_view();
    }

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Navbar />
            <main class="flex-1">
                <Hero />
                <Features />
                <CallToAction />
            </main>
            <Footer />
        </div>
    }
    .into_view()
}
