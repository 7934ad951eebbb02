use crate::adapters::pixel_format::{copy_colours_to_rgba, fill_rgba};
use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

/// Draws frames from the controller thread into a `pixels` framebuffer with an egui overlay.
///
/// The framebuffer is always `resolution x resolution`; the window surface may differ on
/// high-DPI screens and `pixels` scales between them.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    resolution: Resolution,
    surface_width: u32,
    surface_height: u32,
    last_presented_generation: u64,
    status: Option<String>,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        resolution: Resolution,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let mut pixels = Pixels::new(resolution.get(), resolution.get(), surface_texture)?;

        fill_rgba(pixels.frame_mut(), Colour::BLACK);

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            resolution,
            surface_width: size.width,
            surface_height: size.height,
            last_presented_generation: 0,
            status: None,
        })
    }

    #[must_use]
    pub fn share_adapter(&self) -> Arc<PixelsAdapter> {
        Arc::clone(&self.adapter)
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Stops accepting frames; the controller's next present fails with a closed display.
    pub fn close(&self) {
        self.adapter.slot().close();
    }

    /// Pulls in whatever the controller thread left in the slot since the last call.
    pub fn sync_from_controller(&mut self) {
        if let Some(frame) = self.adapter.slot().take_frame() {
            let buffer_resolution = frame.pixel_buffer.resolution();

            if buffer_resolution != self.resolution {
                log::warn!(
                    "Dropping frame {}: {} does not match window {}",
                    frame.generation,
                    buffer_resolution,
                    self.resolution
                );
            } else if frame.generation > self.last_presented_generation {
                copy_colours_to_rgba(frame.pixel_buffer.pixels(), self.pixels.frame_mut());
                self.last_presented_generation = frame.generation;
            }
        }

        if let Some(status) = self.adapter.slot().take_status() {
            self.status = Some(status);
        }
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    /// Follows the window surface. The framebuffer keeps its size.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}
