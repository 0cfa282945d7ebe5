use std::sync::{Mutex, PoisonError};

use winit::event_loop::EventLoopProxy;

use crate::controllers::painter::data::frame::Frame;
use crate::controllers::painter::ports::frame_sink::FrameSink;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::events::GuiEvent;

/// Hands frames from the painter thread to the window thread.
///
/// Only the newest frame is kept; a frame the window never got round to drawing is
/// simply replaced.
pub struct PixelsAdapter {
    latest: Mutex<Option<PixelBuffer>>,
    event_loop_proxy: Mutex<EventLoopProxy<GuiEvent>>,
}

impl FrameSink for PixelsAdapter {
    fn publish(&self, frame: &Frame<'_>) {
        {
            let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
            match latest.as_mut() {
                Some(held) if held.pixel_rect() == frame.surface.pixel_rect() => {
                    held.clone_from(frame.surface);
                }
                _ => *latest = Some(frame.surface.clone()),
            }
        }

        let proxy = self
            .event_loop_proxy
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // Fails only once the window loop has exited.
        let _ = proxy.send_event(GuiEvent::FramePublished);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            latest: Mutex::new(None),
            event_loop_proxy: Mutex::new(event_loop_proxy),
        }
    }

    pub fn take_frame(&self) -> Option<PixelBuffer> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
