pub mod frame;
pub mod painter_config;
