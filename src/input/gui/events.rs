/// User events for the winit loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// The painter published a frame. The handler decides whether to redraw.
    FramePublished,
}
