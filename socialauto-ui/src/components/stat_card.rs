//! Stat Card Component
//!
//! Displays one of a user's aggregate stats.

use leptos::*;

use crate::state::models::UserStats;

/// Single stat tile
#[component]
pub fn StatCard(
    /// Stat name to display
    #[prop(into)]
    label: String,
    /// Formatted value
    #[prop(into)]
    value: String,
    /// Optional icon shown next to the label
    #[prop(optional)]
    icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                {icon.map(|i| view! { <span class="text-lg">{i}</span> })}
            </div>
            <div class="text-3xl font-bold mt-2">{value}</div>
        </div>
    }
}

/// Label and value for each tile, in display order
pub fn stat_tiles(stats: &UserStats) -> [(&'static str, &'static str, String); 4] {
    [
        ("Messages", "💬", stats.total_messages.to_string()),
        ("Contacts", "👥", stats.total_contacts.to_string()),
        ("Active time", "⏱️", stats.active_time.clone()),
        ("Response rate", "📈", stats.response_rate.clone()),
    ]
}

/// Grid of the four user stats
#[component]
pub fn UserStatsGrid(stats: UserStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {stat_tiles(&stats).into_iter().map(|(label, icon, value)| view! {
                <StatCard label=label value=value icon=icon />
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_tiles() {
        let tiles = stat_tiles(&UserStats::placeholder());
        let values: Vec<&str> = tiles.iter().map(|(_, _, v)| v.as_str()).collect();
        assert_eq!(values, vec!["0", "0", "0m", "0%"]);
        assert_eq!(tiles[0].0, "Messages");
    }
}
