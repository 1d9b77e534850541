//! Windowing shell: winit event loop + egui-winit input + egui-wgpu paint.
//!
//! The shell owns the window, GPU surface and redraw pipeline; the UI itself
//! is an injected callback run once per frame with the egui [`Context`].
//!
//! [`Context`]: egui::Context

use std::sync::Arc;
use std::{thread, time::Duration};

use egui::{Context as EguiContext, viewport::ViewportId};
use egui_wgpu::{Renderer as EguiWgpuRenderer, ScreenDescriptor, wgpu};
use egui_winit::State as EguiWinitState;
use tracing::warn;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

/// Per-frame UI builder.
pub type UiCallback = Box<dyn FnMut(&EguiContext)>;

enum UserEvent {
    Tick,
}

/// Open a window with `title` and drive `ui` until the window closes.
pub fn run(title: &str, ui: UiCallback) {
    let event_loop = EventLoop::<UserEvent>::with_user_event()
        .build()
        .expect("failed to create event loop");
    let proxy = event_loop.create_proxy();

    let mut app = ShellApp {
        title: title.to_owned(),
        ui,
        window: None,
        proxy: Some(proxy),
        ticker_started: false,
        egui_ctx: None,
        egui_state: None,
        gpu: None,
    };
    event_loop.run_app(&mut app).expect("event loop crashed");
}

/// Everything wgpu-side for one window surface.
struct Gpu {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: EguiWgpuRenderer,
}

impl Gpu {
    fn new(window: &Arc<Window>) -> Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = unsafe { instance.create_surface(Arc::clone(window)) }.expect("surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .expect("no suitable adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::default(),
        }))
        .expect("device");

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);

        let size = window.inner_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 0,
        };
        surface.configure(&device, &config);

        let renderer = EguiWgpuRenderer::new(&device, format, None, 1, true);

        Self {
            surface,
            device,
            queue,
            config,
            renderer,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
    }
}

struct ShellApp {
    title: String,
    ui: UiCallback,
    window: Option<Arc<Window>>,
    proxy: Option<EventLoopProxy<UserEvent>>,
    ticker_started: bool,
    egui_ctx: Option<EguiContext>,
    egui_state: Option<EguiWinitState>,
    gpu: Option<Gpu>,
}

impl ShellApp {
    fn redraw(&mut self) {
        let (Some(window), Some(ctx), Some(state), Some(gpu)) = (
            self.window.as_ref(),
            self.egui_ctx.as_ref(),
            self.egui_state.as_mut(),
            self.gpu.as_mut(),
        ) else {
            return;
        };

        // 1) Acquire frame
        let frame = match gpu.surface.get_current_texture() {
            Ok(x) => x,
            Err(wgpu::SurfaceError::Lost) => {
                // Reconfigure (common after display changes)
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(wgpu::SurfaceError::Outdated) => return, // minimized / moved
            Err(e) => {
                warn!("surface error: {e:?}");
                return;
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // 2) Egui frame (build UI)
        let raw_input = state.take_egui_input(window);
        ctx.begin_pass(raw_input);
        (self.ui)(ctx);
        let full_output = ctx.end_pass();
        state.handle_platform_output(window, full_output.platform_output);

        // 3) Tessellate + upload textures
        let clipped = ctx.tessellate(full_output.shapes, ctx.pixels_per_point());
        for (id, delta) in &full_output.textures_delta.set {
            gpu.renderer
                .update_texture(&gpu.device, &gpu.queue, *id, delta);
        }

        // 4) Encode draw
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        let screen = ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: ctx.pixels_per_point(),
        };
        gpu.renderer
            .update_buffers(&gpu.device, &gpu.queue, &mut encoder, &clipped, &screen);

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            gpu.renderer
                .render(&mut rpass.forget_lifetime(), &clipped, &screen);
        }

        for id in full_output.textures_delta.free {
            gpu.renderer.free_texture(&id);
        }

        // 5) Submit & present
        gpu.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}

impl ApplicationHandler<UserEvent> for ShellApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let raw_window = event_loop
                .create_window(Window::default_attributes().with_title(&self.title))
                .expect("create window");
            self.window = Some(Arc::new(raw_window));
        }
        let window = Arc::clone(self.window.as_ref().expect("window just created"));

        if !self.ticker_started {
            self.ticker_started = true;

            if let Some(proxy) = self.proxy.clone() {
                thread::spawn(move || {
                    let frame = Duration::from_millis(16); // ~60Hz
                    loop {
                        if proxy.send_event(UserEvent::Tick).is_err() {
                            break;
                        }
                        thread::sleep(frame);
                    }
                });
            }
        }

        if self.egui_ctx.is_none() || self.egui_state.is_none() {
            let ctx = EguiContext::default();
            let state = EguiWinitState::new(
                ctx.clone(),
                ViewportId::ROOT,
                &window,
                Some(window.scale_factor() as f32),
                None,
                None,
            );
            self.egui_ctx = Some(ctx);
            self.egui_state = Some(state);
        }

        self.gpu = Some(Gpu::new(&window));
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(window), Some(state)) = (self.window.as_ref(), self.egui_state.as_mut()) {
            let _response = state.on_window_event(window, &event);
        }
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }
}
