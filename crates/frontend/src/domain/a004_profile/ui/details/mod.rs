//! Profile Details UI Module
//!
//! - view_model.rs: state signal and the load command
//! - view.rs: Leptos components (summary and solves cards)

mod view;
mod view_model;

pub use view::ProfileDetails;
pub use view_model::ProfileDetailsViewModel;
