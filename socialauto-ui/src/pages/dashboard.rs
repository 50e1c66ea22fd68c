//! Dashboard Pages
//!
//! The gated dashboard route and its overview page.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::dashboard_shell::ShellView;
use crate::components::{CardSkeleton, DashboardShell, Loading, UserStatsGrid};
use crate::state::models::Session;
use crate::state::session::{CurrentUser, SessionContext};

/// Parent route for everything under `/dashboard`
#[component]
pub fn DashboardRoute() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext not found");

    view! {
        <Suspense fallback=|| view! { <Loading /> }>
            {move || session.get().map(|session| view! { <DashboardGate session=session /> })}
        </Suspense>
    }
}

/// Resolved session: the shell around the nested route, or a redirect
#[component]
fn DashboardGate(session: Option<Session>) -> impl IntoView {
    let redirect = ShellView::from_session(session.as_ref()).redirect();
    if let Some(session) = &session {
        provide_context(CurrentUser(session.user.clone()));
    }

    view! {
        <DashboardShell session=session>
            <Outlet />
        </DashboardShell>
        {redirect.map(|path| view! { <Redirect path=path /> })}
    }
}

/// Overview page: greeting and the user's stats
#[component]
pub fn Overview() -> impl IntoView {
    let CurrentUser(user) = use_context::<CurrentUser>().expect("CurrentUser not found");
    let user_id = user.id.clone();

    let stats = create_local_resource(
        move || user_id.clone(),
        |id| async move { api::fetch_user_stats(&id).await },
    );

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">{format!("Welcome back, {}", user.label())}</h1>
                <p class="text-gray-400 mt-1">"Your activity at a glance"</p>
            </div>

            <section>
                <h2 class="text-lg font-semibold mb-4">"Your stats"</h2>
                <Suspense fallback=|| view! {
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        {(0..4).map(|_| view! { <CardSkeleton /> }).collect_view()}
                    </div>
                }>
                    {move || stats.get().map(|result| match result {
                        Ok(stats) => view! { <UserStatsGrid stats=stats /> }.into_view(),
                        Err(e) => view! {
                            <div class="bg-gray-800 rounded-lg p-6 text-center">
                                <p class="text-gray-400 mb-4">{format!("Stats are unavailable: {}", e)}</p>
                                <button
                                    on:click=move |_| stats.refetch()
                                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg transition-colors"
                                >
                                    "Retry"
                                </button>
                            </div>
                        }.into_view(),
                    })}
                </Suspense>
            </section>

            <section class="grid md:grid-cols-2 gap-6">
                <A href="/dashboard/posts/new" class="bg-gray-800 rounded-xl p-6 hover:bg-gray-750 border border-gray-700">
                    <h3 class="text-lg font-semibold">"✍️ Create a post"</h3>
                    <p class="text-gray-400 mt-1">"Draft and schedule across your networks."</p>
                </A>
                <A href="/dashboard/chat" class="bg-gray-800 rounded-xl p-6 hover:bg-gray-750 border border-gray-700">
                    <h3 class="text-lg font-semibold">"💬 Open chat"</h3>
                    <p class="text-gray-400 mt-1">"Talk with the rest of your team."</p>
                </A>
            </section>
        </div>
    }
}
