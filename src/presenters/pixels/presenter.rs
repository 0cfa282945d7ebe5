use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use tracing::warn;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::PixelsAdapter;
use crate::presenters::pixels::blit::blit_scaled;
use crate::presenters::pixels::scene::default_scene;

/// Draws the latest published frame, stretched to the window.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    frame: Option<PixelBuffer>,
    placeholder: Option<PixelBuffer>,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            frame: None,
            placeholder: default_scene(size.width, size.height),
        })
    }

    pub fn share_adapter(&self) -> Arc<PixelsAdapter> {
        Arc::clone(&self.adapter)
    }

    pub fn render(&mut self) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        if let Some(frame) = self.adapter.take_frame() {
            self.frame = Some(frame);
        }

        if let Some(surface) = self.frame.as_ref().or(self.placeholder.as_ref()) {
            blit_scaled(surface, self.pixels.frame_mut(), self.width, self.height);
        }

        self.pixels.render()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.placeholder = default_scene(width, height);

        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.pixels.resize_surface(width, height) {
            warn!(error = %err, width, height, "failed to resize surface");
        }
        if let Err(err) = self.pixels.resize_buffer(width, height) {
            warn!(error = %err, width, height, "failed to resize buffer");
        }
    }
}
