//! Terms and Privacy Pages

use leptos::*;

use crate::components::PublicFrame;

#[component]
fn LegalDocument(title: &'static str, sections: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <PublicFrame>
            <article class="max-w-3xl mx-auto space-y-6">
                <h1 class="text-3xl font-bold">{title}</h1>
                {sections.iter().map(|(heading, body)| view! {
                    <section>
                        <h2 class="text-xl font-semibold mb-2">{*heading}</h2>
                        <p class="text-gray-400">{*body}</p>
                    </section>
                }).collect_view()}
            </article>
        </PublicFrame>
    }
}

#[component]
pub fn Terms() -> impl IntoView {
    const SECTIONS: &[(&str, &str)] = &[
        ("Using SocialAuto", "You are responsible for the content you schedule and publish."),
        ("Accounts", "Keep your session token private. Access may be revoked at any time."),
        ("Connected platforms", "Each network's own terms apply to posts sent there."),
    ];
    view! { <LegalDocument title="Terms of Service" sections=SECTIONS /> }
}

#[component]
pub fn Privacy() -> impl IntoView {
    const SECTIONS: &[(&str, &str)] = &[
        ("What we store", "Your profile, your drafts and the schedule you set."),
        ("Your browser", "The session token and API address are kept in local storage."),
        ("Sharing", "Posts go only to the platforms you choose."),
    ];
    view! { <LegalDocument title="Privacy Policy" sections=SECTIONS /> }
}
