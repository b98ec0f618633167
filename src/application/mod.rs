//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;
mod notice;
mod view_state;

pub use handlers::*;
pub use notice::{NoticeAction, NoticeKind, UserNotice};
pub use view_state::{LoadTicket, ScreenLoader, ViewState};
