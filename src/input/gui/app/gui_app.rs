use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;
use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

const STATUS_MARGIN: f32 = 8.0;

pub struct GuiApp {
    presenter: PixelsPresenter,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: PixelsPresenter,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            egui_ctx,
            egui_state,
        }
    }

    #[must_use]
    pub fn presenter(&self) -> &PixelsPresenter {
        &self.presenter
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.presenter.resize_surface(width, height)
    }

    /// Picks up the newest frame, then lays out the status overlay.
    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        self.presenter.sync_from_controller();

        let raw_input = self.egui_state.take_egui_input(window);
        let status = self.presenter.status().map(str::to_string);

        self.egui_ctx.run(raw_input, |ctx| {
            let Some(status) = status else {
                return;
            };

            egui::Area::new(egui::Id::new("render_status"))
                .anchor(egui::Align2::RIGHT_BOTTOM, [-STATUS_MARGIN, -STATUS_MARGIN])
                .interactable(false)
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(status)
                            .monospace()
                            .color(egui::Color32::WHITE)
                            .background_color(egui::Color32::from_black_alpha(160)),
                    );
                });
        })
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).repaint
    }
}
