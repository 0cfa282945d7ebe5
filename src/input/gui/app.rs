use std::sync::Arc;

use anyhow::Context as _;
use tracing::{error, info};
use winit::{
    dpi::{LogicalSize, PhysicalPosition},
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::EventLoopBuilder,
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

use crate::controllers::painter::data::painter_config::PainterConfig;
use crate::controllers::painter::ports::frame_sink::FrameSink;
use crate::controllers::painter::EventLoop;
use crate::core::operations::operation::Operation;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::stdin::spawn_stdin_reader;
use crate::presenters::pixels::PixelsPresenter;

/// Operations posted for a left click at `position` in a `width` x `height` window.
fn click_operation(position: PhysicalPosition<f64>, width: u32, height: u32) -> Option<Operation> {
    if width == 0 || height == 0 {
        return None;
    }

    let x = position.x / f64::from(width);
    let y = position.y / f64::from(height);

    Some(Operation::List(vec![Operation::figure(x, y), Operation::Update]))
}

/// Opens the painter window and blocks until it is closed.
///
/// Script lines typed on stdin are posted as they arrive. A left click adds a
/// figure under the cursor and publishes. Escape or closing the window stops the
/// painter after it has drained everything already posted.
pub fn run_gui(config: PainterConfig) -> anyhow::Result<()> {
    let surface_rect = config.surface_rect().context("invalid surface size")?;

    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
        .build()
        .context("failed to create event loop")?;

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Painter")
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .context("failed to create window")?,
    ));

    let mut presenter = PixelsPresenter::new(window, event_loop.create_proxy())
        .context("failed to create pixels surface")?;

    let painter = Arc::new(
        EventLoop::start(surface_rect, presenter.share_adapter() as Arc<dyn FrameSink>)
            .context("failed to start event loop")?,
    );
    spawn_stdin_reader(Arc::clone(&painter)).context("failed to spawn stdin reader")?;

    info!(width = config.width, height = config.height, "window open");

    let mut cursor = PhysicalPosition::new(0.0, 0.0);

    event_loop
        .run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::FramePublished) => window.request_redraw(),
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key: Key::Named(NamedKey::Escape),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => elwt.exit(),
                WindowEvent::CursorMoved { position, .. } => cursor = position,
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    let size = window.inner_size();
                    if let Some(operation) = click_operation(cursor, size.width, size.height) {
                        painter.post(operation);
                    }
                }
                WindowEvent::Resized(size) => {
                    presenter.resize(size.width, size.height);
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { .. } => {
                    let size = window.inner_size();
                    presenter.resize(size.width, size.height);
                    window.request_redraw();
                }
                WindowEvent::RedrawRequested => {
                    if let Err(err) = presenter.render() {
                        error!(error = %err, "render failed");
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::LoopExiting => {
                painter.stop_and_wait();
                info!(frames = painter.published_frames(), "window closed");
            }
            _ => {}
        })
        .context("event loop error")?;

    Ok(())
}
