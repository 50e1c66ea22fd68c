//! State Management
//!
//! API models, global notification state, the session and the chat selection.

pub mod chat;
pub mod global;
pub mod models;
pub mod session;

pub use chat::ChatSelection;
pub use global::{provide_global_state, GlobalState};
pub use models::{Session, User, UserStats};
pub use session::{provide_session, CurrentUser, SessionContext};
