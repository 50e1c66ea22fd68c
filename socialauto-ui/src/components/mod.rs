//! UI Components
//!
//! Reusable Leptos components for the dashboard and public pages.

pub mod avatar;
pub mod chat_layout;
pub mod chat_sidebar;
pub mod chat_window;
pub mod dashboard_shell;
pub mod landing;
pub mod loading;
pub mod post_form;
pub mod stat_card;
pub mod toast;

pub use avatar::{AvatarSize, UserAvatar};
pub use chat_layout::ChatLayout;
pub use dashboard_shell::DashboardShell;
pub use landing::{CallToAction, Features, Footer, Hero, Navbar, PublicFrame};
pub use loading::{CardSkeleton, ListSkeleton, Loading};
pub use post_form::{PostDraft, PostForm};
pub use stat_card::UserStatsGrid;
pub use toast::Toast;
