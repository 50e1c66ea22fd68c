//! Pages
//!
//! Top-level page components for each route.

pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod landing;
pub mod legal;
pub mod posts;

pub use auth::{SignIn, SignUp};
pub use chat::ChatPage;
pub use dashboard::{DashboardRoute, Overview};
pub use landing::LandingPage;
pub use legal::{Privacy, Terms};
pub use posts::{NewPostPage, PostsPage};
