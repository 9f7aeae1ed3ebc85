pub mod api;
pub mod model;
pub mod pagination;
pub mod ui;
pub mod view_state;
