pub mod modal_frame;
pub mod not_started;
pub mod pagination_controls;
pub mod ui;
