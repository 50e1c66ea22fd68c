//! Dashboard Shell Component
//!
//! Header + sidebar frame around every dashboard page. The session is handed
//! in by the caller; without one the shell renders nothing.

use leptos::*;
use leptos_router::*;

use crate::components::avatar::{AvatarSize, UserAvatar};
use crate::state::global::GlobalState;
use crate::state::models::{Session, User};

/// What the shell renders for a session state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellView {
    Unauthenticated,
    Authenticated(User),
}

impl ShellView {
    pub fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(session) => ShellView::Authenticated(session.user.clone()),
            None => ShellView::Unauthenticated,
        }
    }

    /// Where the dashboard route sends a visitor in this state. Signing out
    /// lands here too: clearing the token turns the shell unauthenticated.
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            ShellView::Unauthenticated => Some(SIGN_IN_PATH),
            ShellView::Authenticated(_) => None,
        }
    }
}

pub const SIGN_IN_PATH: &str = "/sign-in";

/// Dashboard frame, gated on a session
#[component]
pub fn DashboardShell(session: Option<Session>, children: Children) -> impl IntoView {
    match ShellView::from_session(session.as_ref()) {
        ShellView::Unauthenticated => view! {}.into_view(),
        ShellView::Authenticated(user) => view! {
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <DashboardHeader user=user />
                <div class="flex flex-1">
                    <DashboardSidebar />
                    <main class="flex-1 px-4 md:px-8 py-8">{children()}</main>
                </div>
            </div>
        }
        .into_view(),
    }
}

/// Top bar with brand and the signed-in user
#[component]
fn DashboardHeader(user: User) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let on_sign_out = move |_| {
        state.sign_out();
        state.show_success("Signed out");
    };

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="px-4 md:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/dashboard" class="flex items-center space-x-3">
                        <span class="text-2xl">"🚀"</span>
                        <span class="text-xl font-bold text-white">"SocialAuto"</span>
                    </A>

                    <div class="flex items-center space-x-4">
                        <div class="hidden sm:block text-right">
                            <div class="text-sm font-medium">{user.label()}</div>
                            {user.email.clone().map(|e| view! {
                                <div class="text-xs text-gray-400">{e}</div>
                            })}
                        </div>
                        <UserAvatar name=user.name.clone() image=user.image.clone() size=AvatarSize::Medium />
                        <button
                            type="button"
                            on:click=on_sign_out
                            class="px-3 py-2 rounded-lg text-sm text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                        >
                            "Sign out"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Section navigation
#[component]
fn DashboardSidebar() -> impl IntoView {
    view! {
        <nav class="hidden md:flex w-56 shrink-0 flex-col space-y-1 bg-gray-800 border-r border-gray-700 p-4">
            <SidebarLink href="/dashboard" label="Overview" icon="📊" exact=true />
            <SidebarLink href="/dashboard/posts" label="Posts" icon="🗓️" exact=true />
            <SidebarLink href="/dashboard/posts/new" label="New Post" icon="✍️" exact=true />
            <SidebarLink href="/dashboard/chat" label="Chat" icon="💬" exact=false />
        </nav>
    }
}

#[component]
fn SidebarLink(
    href: &'static str,
    label: &'static str,
    icon: &'static str,
    exact: bool,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=exact
            class="flex items-center space-x-3 px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            <span>{icon}</span>
            <span>{label}</span>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            user: User::named("1", "Jane Cooper"),
            issued_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_no_session_renders_nothing() {
        assert_eq!(ShellView::from_session(None), ShellView::Unauthenticated);
    }

    #[test]
    fn test_only_unauthenticated_view_redirects() {
        assert_eq!(ShellView::from_session(None).redirect(), Some("/sign-in"));
        assert_eq!(ShellView::from_session(Some(&session())).redirect(), None);
    }

    #[test]
    fn test_session_renders_frame_for_its_user() {
        let session = session();
        assert_eq!(
            ShellView::from_session(Some(&session)),
            ShellView::Authenticated(session.user.clone())
        );
    }
}
