//! Post Form Component
//!
//! Compose form for a social post: text, target platforms and an optional
//! schedule time. It only assembles a [`PostDraft`] and hands it to its
//! caller; publishing is someone else's job.

use chrono::NaiveDateTime;
use leptos::*;

/// Networks a post can target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Twitter,
    LinkedIn,
    Facebook,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::Facebook,
        Platform::Instagram,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter / X",
            Platform::LinkedIn => "LinkedIn",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
        }
    }
}

/// A post ready to hand to the post service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostDraft {
    pub content: String,
    pub platforms: Vec<Platform>,
    /// `None` means publish immediately
    pub scheduled_at: Option<NaiveDateTime>,
}

impl PostDraft {
    /// Assemble a draft from raw form values. `schedule` is the value of a
    /// `datetime-local` input; blank or unparsable means "now".
    pub fn from_form(content: &str, platforms: &[Platform], schedule: &str) -> Self {
        let platforms: Vec<Platform> = Platform::ALL
            .into_iter()
            .filter(|p| platforms.contains(p))
            .collect();

        Self {
            content: content.trim().to_string(),
            platforms,
            scheduled_at: parse_schedule(schedule),
        }
    }
}

/// Parse a `datetime-local` value (`YYYY-MM-DDTHH:MM`, seconds optional)
pub fn parse_schedule(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Post composition form
#[component]
pub fn PostForm(
    /// Receives the draft on submit
    #[prop(into)]
    on_submit: Callback<PostDraft>,
) -> impl IntoView {
    let (content, set_content) = create_signal(String::new());
    let (platforms, set_platforms) = create_signal(vec![Platform::Twitter]);
    let (schedule, set_schedule) = create_signal(String::new());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = PostDraft::from_form(&content.get(), &platforms.get(), &schedule.get());
        on_submit.call(draft);

        set_content.set(String::new());
        set_schedule.set(String::new());
    };

    view! {
        <form on:submit=handle_submit class="space-y-6">
            // Post text
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Content"</label>
                <textarea
                    rows="6"
                    placeholder="What do you want to share?"
                    class="w-full bg-gray-700 border border-gray-600 rounded-lg px-4 py-3 focus:border-primary-500 focus:outline-none"
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                />
                <div class="text-xs text-gray-500 mt-1 text-right">
                    {move || format!("{} characters", content.get().chars().count())}
                </div>
            </div>

            // Platforms
            <fieldset>
                <legend class="block text-sm text-gray-400 mb-2">"Platforms"</legend>
                <div class="grid grid-cols-2 gap-2">
                    {Platform::ALL.into_iter().map(|platform| view! {
                        <label class="flex items-center space-x-2 bg-gray-700 rounded-lg px-3 py-2 cursor-pointer">
                            <input
                                type="checkbox"
                                prop:checked=move || platforms.get().contains(&platform)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    set_platforms.update(|list| {
                                        list.retain(|p| *p != platform);
                                        if checked {
                                            list.push(platform);
                                        }
                                    });
                                }
                            />
                            <span class="text-sm">{platform.label()}</span>
                        </label>
                    }).collect_view()}
                </div>
            </fieldset>

            // Schedule
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Schedule (optional)"</label>
                <input
                    type="datetime-local"
                    class="bg-gray-700 border border-gray-600 rounded-lg px-4 py-2 focus:border-primary-500 focus:outline-none"
                    prop:value=move || schedule.get()
                    on:input=move |ev| set_schedule.set(event_target_value(&ev))
                />
                <p class="text-xs text-gray-500 mt-1">"Leave empty to publish right away."</p>
            </div>

            <button
                type="submit"
                disabled=move || content.get().trim().is_empty() || platforms.get().is_empty()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
            >
                {move || if schedule.get().trim().is_empty() { "Publish" } else { "Schedule" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_parse_schedule() {
        let expected = NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        );
        assert_eq!(parse_schedule("2026-10-20T09:30"), Some(expected));
        assert_eq!(parse_schedule("2026-10-20T09:30:00"), Some(expected));
        assert_eq!(parse_schedule(""), None);
        assert_eq!(parse_schedule("next tuesday"), None);
    }

    #[test]
    fn test_draft_keeps_platform_order_and_trims() {
        let draft = PostDraft::from_form(
            "  Launch day!  ",
            &[Platform::Instagram, Platform::Twitter, Platform::Instagram],
            "",
        );

        assert_eq!(draft.content, "Launch day!");
        assert_eq!(draft.platforms, vec![Platform::Twitter, Platform::Instagram]);
        assert_eq!(draft.scheduled_at, None);
    }
}
