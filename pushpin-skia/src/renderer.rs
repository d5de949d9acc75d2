use crate::config::WindowConfig;
use crate::core::{FontBook, Presenter, load_image};
use crate::screens::Showcase;
use crate::ui::UiDrawer;

use anyhow::Context;
use winit::{
    event_loop::{ControlFlow, EventLoop, ActiveEventLoop},
    application::ApplicationHandler,
    window::{Window, WindowId},
    event::{WindowEvent, ElementState, MouseButton},
    dpi::PhysicalSize
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use pushpin_ui::{Point, input::UiContext};

pub struct App {
    cfg: WindowConfig,
    presenter: Option<Presenter>,
    fonts: FontBook,
    showcase: Showcase,

    ui_ctx: UiContext,

    frame_time: Duration,
    next_frame: Instant,

    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(cfg: WindowConfig) -> Self {
        log::info!("Loading resources...");

        let image = match load_image(&cfg.assets.image_path) {
            Ok(image) => {
                log::info!("Image loaded successfully! ({}x{})", image.width(), image.height());
                Some(image)
            }
            Err(e) => {
                log::error!("Error loading image: {}", e);
                None
            }
        };

        let fps = cfg.fps.max(1);

        Self {
            cfg,
            presenter: None,
            fonts: FontBook::new(),
            showcase: Showcase::new(image),
            ui_ctx: UiContext::new(),
            frame_time: Duration::from_secs(1) / fps,
            next_frame: Instant::now(),
            error: None,
        }
    }

    /// Runs until the window is closed. An error raised inside the loop stops
    /// it and is returned here after the window has been torn down.
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = EventLoop::new().context("creating event loop")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        log::info!("Starting the main loop...");
        event_loop.run_app(&mut self).context("running event loop")?;

        // 先释放窗口和表面
        self.presenter = None;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("An unexpected error occurred: {:#}", err);
        self.error = Some(err);
        event_loop.exit();
    }

    fn request_redraw(&self) {
        if let Some(presenter) = self.presenter.as_ref() {
            presenter.window.request_redraw();
        }
    }

    fn create_presenter(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Presenter> {
        let window_attributes = Window::default_attributes()
            .with_title(&self.cfg.title)
            .with_inner_size(PhysicalSize::new(self.cfg.width, self.cfg.height))
            .with_resizable(self.cfg.resizable);

        let window = Arc::new(event_loop.create_window(window_attributes).context("creating window")?);
        Presenter::new(window)
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let Some(presenter) = self.presenter.as_mut() else {
            return Ok(());
        };

        let fonts = &mut self.fonts;
        let showcase = &self.showcase;
        let ui_ctx = &self.ui_ctx;
        let mut activated = None;

        presenter.draw(|canvas| {
            let mut ui = UiDrawer::new(canvas, fonts);
            activated = showcase.draw(&mut ui, ui_ctx)?.map(str::to_string);
            Ok::<_, pushpin_ui::UiError>(())
        })?;

        if let Some(name) = activated {
            // 点击处理逻辑接在这里
            log::info!("{} button clicked!", name);
        }

        self.ui_ctx.pressed = false;
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.presenter.is_some() {
            return;
        }

        match self.create_presenter(event_loop) {
            Ok(presenter) => {
                self.presenter = Some(presenter);
                self.request_redraw();
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Exiting...");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(presenter) = self.presenter.as_mut() {
                    if let Err(e) = presenter.resize(size.width, size.height) {
                        self.fail(event_loop, e);
                        return;
                    }
                    self.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.ui_ctx.pointer = Some(Point::new(position.x as f32, position.y as f32));
            }

            WindowEvent::CursorLeft { .. } => {
                self.ui_ctx.pointer = None;
            }

            // 按下在下一帧结算，和悬停共用同一个命中判断
            WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                self.ui_ctx.pressed = true;
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_frame {
            self.request_redraw();
            self.next_frame = now + self.frame_time;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
