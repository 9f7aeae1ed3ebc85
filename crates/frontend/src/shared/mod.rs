pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod load_state;
pub mod query_params;
pub mod storage;
