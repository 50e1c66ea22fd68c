//! Landing Sections
//!
//! Stateless marketing sections composed by the landing page.

use leptos::*;
use leptos_router::*;

/// Top navigation for public pages
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🚀"</span>
                        <span class="text-xl font-bold text-white">"SocialAuto"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink href="/sign-in" label="Sign in" />
                        <A
                            href="/sign-up"
                            class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 text-white font-medium transition-colors"
                        >
                            "Get started"
                        </A>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-24 text-center">
            <h1 class="text-5xl font-bold mb-6">"Schedule once. Post everywhere."</h1>
            <p class="text-xl text-gray-400 max-w-2xl mx-auto mb-10">
                "SocialAuto plans, schedules and publishes your posts across every network \
                 from one dashboard."
            </p>
            <div class="flex justify-center space-x-4">
                <A
                    href="/sign-up"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Start free"
                </A>
                <A
                    href="/sign-in"
                    class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "Sign in"
                </A>
            </div>
        </section>
    }
}

/// Feature blurbs, in display order
pub const FEATURES: [(&str, &str, &str); 3] = [
    ("🗓️", "Scheduling", "Queue posts for the best time on each platform."),
    ("💬", "Team chat", "Talk drafts through with your team without leaving the app."),
    ("📈", "Insights", "See how your audience responds at a glance."),
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="bg-gray-800 py-20">
            <div class="container mx-auto px-4 grid md:grid-cols-3 gap-8">
                {FEATURES.into_iter().map(|(icon, title, body)| view! {
                    <div class="bg-gray-900 rounded-xl p-6 border border-gray-700">
                        <div class="text-3xl mb-4">{icon}</div>
                        <h3 class="text-lg font-semibold mb-2">{title}</h3>
                        <p class="text-gray-400">{body}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-20 text-center">
            <h2 class="text-3xl font-bold mb-4">"Ready to automate your social media?"</h2>
            <p class="text-gray-400 mb-8">"Set up your first schedule in minutes."</p>
            <A
                href="/sign-up"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Create an account"
            </A>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-6 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"© SocialAuto"</span>
                <div class="flex space-x-4">
                    <A href="/terms" class="hover:text-white">"Terms"</A>
                    <A href="/privacy" class="hover:text-white">"Privacy"</A>
                </div>
            </div>
        </footer>
    }
}

/// Navbar and footer around a public page
#[component]
pub fn PublicFrame(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Navbar />
            <main class="flex-1 container mx-auto px-4 py-12">{children()}</main>
            <Footer />
        </div>
    }
}
