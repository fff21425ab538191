//! Domain types: review statuses, payload shape validation, poll state.

pub mod response;
pub mod state;
pub mod status;

pub use response::{current_date, extract_submissions};
pub use state::PollState;
pub use status::{format_status, ReviewStatus, StatusUpdate};
