pub mod canvas;
pub mod data;
pub mod operations;
