pub mod api;
pub mod filter;
pub mod model;
pub mod solves;
pub mod ui;
