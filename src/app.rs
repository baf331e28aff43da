//! The interactive event loop
//!
//! Single-threaded immediate-mode loop: drain input, mutate the view state,
//! recompose the frame, present. Frame pacing comes entirely from the FIFO
//! surface present; every `RedrawRequested` requests the next redraw.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowId},
};

use wire4d_core::Color;
use wire4d_render::{BlitPipeline, Canvas, RenderContext, TextPainter, Viewport};

use crate::config::AppConfig;
use crate::input::{InputAction, InputMapper};
use crate::scene::Scene;

/// Main application state
pub struct App {
    config: AppConfig,
    scene: Scene,
    start_fullscreen: bool,
    window: Option<Arc<Window>>,
    context: Option<RenderContext>,
    blit: Option<BlitPipeline>,
    text: Option<TextPainter>,
    shift_held: bool,
}

impl App {
    pub fn new(config: AppConfig, scene: Scene, start_fullscreen: bool) -> Self {
        Self {
            config,
            scene,
            start_fullscreen,
            window: None,
            context: None,
            blit: None,
            text: None,
            shift_held: false,
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    let new_fullscreen = if window.fullscreen().is_some() {
                        None
                    } else {
                        Some(Fullscreen::Borderless(None))
                    };
                    window.set_fullscreen(new_fullscreen);
                }
            }
            InputAction::View(command) => {
                self.scene.apply(command, &self.config.input);
                self.scene.end_input_pass();
            }
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(ctx) = &self.context else {
            return;
        };
        let (width, height) = (ctx.size.width, ctx.size.height);
        if width == 0 || height == 0 {
            return; // minimized
        }

        // Compose the frame on the CPU: black screen, viewport panels,
        // status line.
        let mut frame = Canvas::new(width, height);
        let font_px = self.config.text.font_px();

        let margin = self.config.view.viewport_margin;
        let border = self.config.view.viewport_border;
        let panels = self.scene.panels();
        let count = panels.len() as u32;
        let panel_width = (width.saturating_sub(margin * (count + 1)) / count).max(1);
        let panel_height = height.saturating_sub(margin * 2).max(1);

        for (i, panel) in panels.iter().enumerate() {
            let x = margin + i as u32 * (panel_width + margin);
            let mut viewport = Viewport::new(
                panel_width,
                panel_height,
                x as i32,
                margin as i32,
                border,
                Some(panel.label.clone()),
            );
            self.scene.draw(&mut viewport, panel, &self.config.view);
            viewport.composite(&mut frame, self.text.as_ref().map(|t| (t, font_px)));
        }

        if let Some(text) = &self.text {
            let y = height as i32 - self.config.text.status_height as i32 + 1;
            text.draw(&mut frame, 1, y, font_px, Color::WHITE, &self.scene.status_line());
        }

        // Present through wgpu.
        let (Some(ctx), Some(blit)) = (&mut self.context, &mut self.blit) else {
            return;
        };
        blit.upload(&ctx.device, &ctx.queue, &frame);

        let output = match ctx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => {
                ctx.resize(ctx.size);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory");
                event_loop.exit();
                return;
            }
            Err(e) => {
                log::warn!("surface error: {e:?}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });
        blit.render(&mut encoder, &view);
        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let mut attrs = Window::default_attributes()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        if self.start_fullscreen || self.config.window.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );

        let context = pollster::block_on(RenderContext::new(window.clone()))
            .expect("Failed to create render context");
        let blit = BlitPipeline::new(&context.device, context.config.format);

        // A missing font only disables text; the wireframe still renders.
        self.text = match TextPainter::load_first(&self.config.text.font_paths) {
            Ok(painter) => Some(painter),
            Err(e) => {
                log::warn!("status text disabled: {e}");
                None
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.context = Some(context);
        self.blit = Some(blit);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.context {
                    ctx.resize(physical_size);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift_held = modifiers.state().shift_key();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) =
                        InputMapper::map_key(key, self.shift_held, self.scene.dimension())
                    {
                        self.handle_action(action, event_loop);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.render(event_loop),

            _ => {}
        }
    }
}
