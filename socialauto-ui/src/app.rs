//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{
    ChatPage, DashboardRoute, LandingPage, NewPostPage, Overview, PostsPage, Privacy, SignIn,
    SignUp, Terms,
};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::session::provide_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Resolve the session from the stored token
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    provide_session(state);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white">
                <Routes>
                    <Route path="/" view=LandingPage />
                    <Route path="/sign-in" view=SignIn />
                    <Route path="/sign-up" view=SignUp />
                    <Route path="/terms" view=Terms />
                    <Route path="/privacy" view=Privacy />
                    <Route path="/dashboard" view=DashboardRoute>
                        <Route path="" view=Overview />
                        <Route path="posts" view=PostsPage />
                        <Route path="posts/new" view=NewPostPage />
                        <Route path="chat" view=ChatPage />
                    </Route>
                    <Route path="/*any" view=NotFound />
                </Routes>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to SocialAuto"
            </A>
        </div>
    }
}
