//! Posts Pages
//!
//! Post list and the new-post flow. Publishing belongs to the post service;
//! here a submitted draft is only acknowledged.

use leptos::*;
use leptos_router::*;

use crate::components::post_form::{PostDraft, PostForm};
use crate::state::global::GlobalState;

#[component]
pub fn PostsPage() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Posts"</h1>
                    <p class="text-gray-400 mt-1">"Scheduled and published posts"</p>
                </div>
                <A
                    href="/dashboard/posts/new"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "New post"
                </A>
            </div>

            <div class="bg-gray-800 rounded-xl p-12 text-center">
                <div class="text-5xl mb-4">"🗓️"</div>
                <p class="text-gray-400">"No posts yet. Your scheduled posts will show up here."</p>
            </div>
        </div>
    }
}

/// Toast text acknowledging a submitted draft
pub fn acknowledgement(draft: &PostDraft) -> String {
    let targets = draft
        .platforms
        .iter()
        .map(|p| p.label())
        .collect::<Vec<_>>()
        .join(", ");

    match draft.scheduled_at {
        Some(at) => format!("Post scheduled for {} on {}", at.format("%b %d, %H:%M"), targets),
        None => format!("Post queued for {}", targets),
    }
}

#[component]
pub fn NewPostPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let on_submit = Callback::new(move |draft: PostDraft| {
        state.show_success(&acknowledgement(&draft));
        navigate("/dashboard/posts", Default::default());
    });

    view! {
        <div class="space-y-8 max-w-2xl">
            <div>
                <h1 class="text-3xl font-bold">"Create post"</h1>
                <p class="text-gray-400 mt-1">"Write once, publish to every network you pick"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <PostForm on_submit=on_submit />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::post_form::Platform;

    #[test]
    fn test_acknowledgement() {
        let now = PostDraft::from_form("hi", &[Platform::Twitter, Platform::LinkedIn], "");
        assert_eq!(acknowledgement(&now), "Post queued for Twitter / X, LinkedIn");

        let later = PostDraft::from_form("hi", &[Platform::Instagram], "2026-10-20T09:30");
        assert_eq!(acknowledgement(&later), "Post scheduled for Oct 20, 09:30 on Instagram");
    }
}
