pub mod explorer_config;
pub mod frame_data;
pub mod view_input;
