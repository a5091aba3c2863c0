//! Engine loop: drain input, apply commands, advance, render, pace

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;
use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::anim::AnimationState;
use crate::core::stats::FrameStats;
use crate::input::{Command, InputRouter};
use crate::render::{self, SoftCanvas};

/// Fatal setup failures. Nothing inside the per-frame cycle can fail, so
/// these are the only error paths the engine has.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create framebuffer surface: {0}")]
    Surface(#[from] pixels::Error),
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Window title
    pub title: String,
    /// Logical canvas width in pixels
    pub width: u32,
    /// Logical canvas height in pixels
    pub height: u32,
    /// Fixed sleep between frames
    pub frame_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: String::from("Whirligig"),
            width: 800,
            height: 600,
            frame_delay: Duration::from_millis(30),
        }
    }
}

impl EngineConfig {
    /// Create a new config with a title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the logical canvas dimensions
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the fixed per-frame sleep
    #[must_use]
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }
}

/// The animation engine: owns the state, the router, and the software
/// canvas, and drives the fixed frame cycle over a winit window.
pub struct Engine {
    config: EngineConfig,
    state: AnimationState,
    router: InputRouter,
    canvas: SoftCanvas,
    stats: FrameStats,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    last_frame: Instant,
    error: Option<EngineError>,
}

impl Engine {
    /// Create the engine; shapes orbit the center of the logical canvas.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let center = Vec2::new(config.width as f32 / 2.0, config.height as f32 / 2.0);
        let canvas = SoftCanvas::new(config.width, config.height);
        Self {
            config,
            state: AnimationState::new(center),
            router: InputRouter::new(),
            canvas,
            stats: FrameStats::new(),
            window: None,
            pixels: None,
            last_frame: Instant::now(),
            error: None,
        }
    }

    /// Run the engine until a quit command or window close.
    pub fn run(mut self) -> Result<(), EngineError> {
        env_logger::init();
        log::info!("starting {}", self.config.title);
        log::info!("controls: {}", render::HINT_TEXT);

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;

        match self.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Fail setup: record the error and stop the loop before the first frame.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: EngineError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    /// One frame of the fixed cycle: drain input, apply commands, advance
    /// the state, rasterize, present, pace.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let mut quit = false;
        for command in self.router.drain() {
            log::debug!("command: {command:?}");
            if command == Command::Quit {
                quit = true;
                break;
            }
            self.state.apply(command);
        }
        if quit {
            log::info!("quit requested after {} frames", self.stats.total_frames());
            event_loop.exit();
            return;
        }

        self.state.advance();

        let now = Instant::now();
        self.stats.record_frame(now - self.last_frame);
        self.last_frame = now;

        render::draw_frame(&mut self.canvas, &self.state, self.stats.fps());

        if let Some(pixels) = &mut self.pixels {
            pixels.frame_mut().copy_from_slice(self.canvas.data());
            if let Err(error) = pixels.render() {
                self.fail(event_loop, error.into());
                return;
            }
        }

        thread::sleep(self.config.frame_delay);
    }
}

impl ApplicationHandler for Engine {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(error) => return self.fail(event_loop, error.into()),
        };

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels = match Pixels::new(self.config.width, self.config.height, surface_texture) {
            Ok(pixels) => pixels,
            Err(error) => return self.fail(event_loop, error.into()),
        };

        log::info!(
            "surface opened: {}x{} \"{}\"",
            self.config.width,
            self.config.height,
            self.config.title
        );

        self.pixels = Some(pixels);
        self.window = Some(window);
        self.last_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!(
                    "close requested after {} frames, shutting down",
                    self.stats.total_frames()
                );
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                // Logical canvas stays fixed; only the presentation surface
                // rescales.
                if new_size.width > 0 && new_size.height > 0 {
                    if let Some(pixels) = &mut self.pixels {
                        if let Err(error) =
                            pixels.resize_surface(new_size.width, new_size.height)
                        {
                            log::warn!("surface resize failed: {error}");
                        }
                    }
                }
            }

            WindowEvent::KeyboardInput { .. }
            | WindowEvent::MouseInput { .. }
            | WindowEvent::CursorMoved { .. } => {
                self.router.process(&event);
            }

            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
