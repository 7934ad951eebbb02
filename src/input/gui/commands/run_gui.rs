use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::input::console::console_input::ConsoleInputSource;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;
use std::error::Error;
use std::io;
use std::thread;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

/// Opens the explorer window and runs a console-driven session against it.
///
/// Returns when the window is closed or the session ends, whichever comes first.
pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn execute(self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let side = self.config.resolution.get();

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(PhysicalSize::new(side, side))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(
            window,
            self.config.resolution,
            event_loop.create_proxy(),
        )?;
        let display = presenter.share_adapter();
        let mut app = GuiApp::new(window, &event_loop, presenter);

        let session_proxy = event_loop.create_proxy();
        let config = self.config;

        // The controller blocks on stdin, so it must not own the event loop thread.
        // It is left detached: on window close it may still be waiting for a line.
        thread::Builder::new()
            .name("explorer-controller".to_string())
            .spawn(move || {
                let input = ConsoleInputSource::new(
                    io::stdin().lock(),
                    io::stdout(),
                    config.affirmative_token.clone(),
                );

                let session = InteractiveController::new(input, display, config)
                    .and_then(|mut controller| controller.run());

                if let Err(err) = session {
                    log::error!("Session ended with error: {}", err);
                }

                let _ = session_proxy.send_event(GuiEvent::SessionEnded);
            })?;

        let mut redraw_pending = true;

        event_loop.run(|event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                redraw_pending = true;
            }
            Event::UserEvent(GuiEvent::SessionEnded) => {
                elwt.exit();
            }
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                if app.handle_window_event(window, event) {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        app.presenter().close();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = app.update_ui(window);
                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if let Err(err) = app.render(egui_output) {
                            log::error!("Render error: {}", err);
                            app.presenter().close();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = app.resize(size.width, size.height) {
                            log::error!("Resize error: {}", err);
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(err) = app.resize(size.width, size.height) {
                            log::error!("Resize error: {}", err);
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
