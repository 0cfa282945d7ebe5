//! Window presenter backed by a `pixels` framebuffer.

pub mod adapter;
pub mod blit;
pub mod presenter;
pub mod scene;

pub use adapter::PixelsAdapter;
pub use presenter::PixelsPresenter;
