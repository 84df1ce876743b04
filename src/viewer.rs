//! Standalone orbit-view window backed by winit.
//!
//! ```no_run
//! # use orbit_view::Viewer;
//! Viewer::builder().build().run().unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    camera::OrbitController,
    error::OrbitError,
    gpu::RenderContext,
    input::KeyboardState,
    options::Options,
    renderer::{SceneAssets, SceneRenderer},
    scene::{advance_frame, FrameStep, SceneDriver},
    util::FrameTiming,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self { options: None }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the textured quad and four mesh instances under an
/// orbit camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Load the scene assets, open the window and run the event loop.
    /// Blocks until the window is closed or the exit key is held.
    ///
    /// # Errors
    ///
    /// Returns the first options, asset, GPU or event-loop failure. A
    /// failure during window or GPU setup ends the loop and is reported
    /// here.
    pub fn run(self) -> Result<(), OrbitError> {
        self.options.validate()?;
        let assets = SceneAssets::load(&self.options.scene)?;

        let event_loop =
            EventLoop::new().map_err(|e| OrbitError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            keyboard: KeyboardState::new(self.options.keybindings.clone()),
            timing: FrameTiming::new(),
            window: None,
            scene: None,
            assets: Some(assets),
            error: None,
            options: self.options,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| OrbitError::Viewer(e.to_string()))?;

        app.error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// GPU state plus the simulation that drives it.
struct RunningScene {
    context: RenderContext,
    renderer: SceneRenderer,
    controller: OrbitController,
    driver: SceneDriver,
}

/// Internal winit application handler.
struct ViewerApp {
    options: Options,
    keyboard: KeyboardState,
    timing: FrameTiming,
    window: Option<Arc<Window>>,
    scene: Option<RunningScene>,
    /// Uploaded on the first `resumed`.
    assets: Option<SceneAssets>,
    error: Option<OrbitError>,
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: OrbitError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_scene(
        &mut self,
        window: &Arc<Window>,
    ) -> Result<RunningScene, OrbitError> {
        let assets = self.assets.take().ok_or_else(|| {
            OrbitError::Viewer("scene assets already consumed".into())
        })?;
        let inner = window.inner_size();
        let context = pollster::block_on(RenderContext::new(
            Arc::clone(window),
            (inner.width.max(1), inner.height.max(1)),
            self.options.display.vsync,
        ))?;
        let renderer = SceneRenderer::new(&context, &assets, &self.options);
        Ok(RunningScene {
            context,
            renderer,
            controller: OrbitController::new(&self.options.camera),
            driver: SceneDriver::new(&self.options.lighting),
        })
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let tick = self.timing.tick();
        let keys = self.keyboard.take_snapshot();

        let Some(scene) = &mut self.scene else {
            return;
        };

        if let Some(ms) = tick.ms_per_frame {
            if self.options.display.report_frame_time {
                log::info!(
                    "frame {}: {ms:.3} ms/frame ({:.0} fps smoothed, {:.1} s elapsed)",
                    scene.driver.frame_count(),
                    self.timing.fps(),
                    scene.driver.elapsed()
                );
            }
        }

        let plan = match advance_frame(
            &mut scene.controller,
            &mut scene.driver,
            &keys,
            tick.elapsed_seconds,
        ) {
            FrameStep::Exit => {
                event_loop.exit();
                return;
            }
            FrameStep::Draw(plan) => plan,
        };

        match scene.renderer.render(&scene.context, &plan) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                scene.context.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(
                    event_loop,
                    OrbitError::Viewer("GPU out of memory".into()),
                );
                return;
            }
            Err(e) => log::warn!("render error: {e:?}"),
        }

        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let display = &self.options.display;
        let attrs = Window::default_attributes()
            .with_title(&display.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                display.width,
                display.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, OrbitError::Viewer(e.to_string()));
                return;
            }
        };

        match self.create_scene(&window) {
            Ok(scene) => self.scene = Some(scene),
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        }

        // First frame measures from here, not from asset loading.
        self.timing = FrameTiming::new();
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(scene) = &mut self.scene {
                    if scene.context.resize(size.width, size.height) {
                        scene.renderer.resize(&scene.context);
                    }
                }
            }
            WindowEvent::Focused(false) => self.keyboard.release_all(),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                self.keyboard
                    .set_key(&key_str, event.state == ElementState::Pressed);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => (),
        }
    }
}
