//! Sign-in and Sign-up Pages

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::PublicFrame;
use crate::state::global::GlobalState;

/// Token sign-in against the API's configured sessions
#[component]
pub fn SignIn() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (token, set_token) = create_signal(String::new());
    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let token = token.get();
        let token = token.trim();
        if token.is_empty() {
            state.show_error("Enter a session token");
            return;
        }

        let url = api_url.get();
        if !url.trim().is_empty() && url.trim() != api::get_api_base() {
            api::set_api_base(url.trim());
        }

        state.sign_in(token);
        navigate("/dashboard", Default::default());
    };

    view! {
        <PublicFrame>
            <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-8">
                <h1 class="text-2xl font-bold mb-2">"Sign in"</h1>
                <p class="text-gray-400 mb-6">"Use the session token your administrator gave you."</p>

                <form on:submit=handle_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Session token"</label>
                        <input
                            type="password"
                            placeholder="demo"
                            prop:value=move || token.get()
                            on:input=move |ev| set_token.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"SocialAuto API URL"</label>
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold transition-colors"
                    >
                        "Sign in"
                    </button>
                </form>

                <p class="text-sm text-gray-400 mt-6">
                    "No account yet? "
                    <A href="/sign-up" class="text-primary-400 hover:underline">"Sign up"</A>
                </p>
            </div>
        </PublicFrame>
    }
}

#[component]
pub fn SignUp() -> impl IntoView {
    view! {
        <PublicFrame>
            <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-8 text-center">
                <h1 class="text-2xl font-bold mb-2">"Create your account"</h1>
                <p class="text-gray-400 mb-6">
                    "Accounts are set up by your workspace administrator. Ask them for a \
                     session token, then sign in."
                </p>
                <A
                    href="/sign-in"
                    class="inline-block px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Go to sign in"
                </A>
            </div>
        </PublicFrame>
    }
}
