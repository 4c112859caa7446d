//! Simulation builder, per-frame driver, and the winit application.
//!
//! The frame driver is deliberately small: once per redraw it sweeps the
//! pool with the active behavior, snapshots the render-relevant fields,
//! and hands them to the renderer. Redraws are self-rescheduling, so at
//! most one frame is ever in flight.

use std::path::PathBuf;
use std::sync::Arc;

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::SimulationError;
use crate::gpu::Renderer;
use crate::input::{ControlAction, Input, PointerState};
use crate::pool::{ParticlePool, DEFAULT_COUNT};
use crate::rules::Behavior;
use crate::textures::SpriteConfig;
use crate::time::FrameClock;

/// Everything a single frame of motion depends on, passed by reference so
/// tests can drive the engine with synthetic contexts.
#[derive(Debug, Clone, Copy)]
pub struct SimContext {
    /// The globally selected behavior, read once per particle per frame.
    pub behavior: Behavior,
    /// Pointer snapshot taken at the start of the frame.
    pub pointer: PointerState,
    /// Surface width in pixels.
    pub width: f32,
    /// Surface height in pixels.
    pub height: f32,
}

/// Advance every particle in the pool by one frame.
pub fn step<R: Rng>(pool: &mut ParticlePool, ctx: &SimContext, rng: &mut R) {
    for p in pool.iter_mut() {
        ctx.behavior.apply(&ctx.pointer, ctx.width, ctx.height, p, rng);
    }
}

/// A particle animation builder.
///
/// Use method chaining to configure, then call `.run()` to open a window
/// and start animating.
///
/// ```ignore
/// use pursuit::prelude::*;
///
/// Simulation::new()
///     .with_particle_count(200)
///     .with_hue(300.0)
///     .with_behavior(Behavior::Galaxy)
///     .run()
/// ```
pub struct Simulation {
    particle_count: usize,
    hue: f32,
    behavior: Behavior,
    sprite_path: Option<PathBuf>,
}

impl Simulation {
    /// Create a simulation with default settings: 50 particles, hue 180,
    /// direct chase.
    pub fn new() -> Self {
        Self {
            particle_count: DEFAULT_COUNT,
            hue: 180.0,
            behavior: Behavior::Chase,
            sprite_path: None,
        }
    }

    /// Set the initial particle count (clamped to 1..=500 at build time).
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the shared hue in degrees, [0, 360).
    pub fn with_hue(mut self, hue: f32) -> Self {
        self.hue = hue;
        self
    }

    /// Set the initial motion behavior.
    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Load the particle sprite from a PNG or JPEG file instead of the
    /// built-in radial disc.
    pub fn with_sprite(mut self, path: impl Into<PathBuf>) -> Self {
        self.sprite_path = Some(path.into());
        self
    }

    /// Run the simulation. Blocks until the window is closed.
    pub fn run(self) -> Result<(), SimulationError> {
        let sprite = match &self.sprite_path {
            Some(path) => SpriteConfig::from_file(path)?,
            None => SpriteConfig::default(),
        };

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self, sprite);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames between window-title refreshes.
const TITLE_REFRESH_FRAMES: u64 = 30;

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    input: Input,
    pool: ParticlePool,
    behavior: Behavior,
    sprite: SpriteConfig,
    rng: SmallRng,
    clock: FrameClock,
}

impl App {
    fn new(config: Simulation, sprite: SpriteConfig) -> Self {
        Self {
            window: None,
            renderer: None,
            input: Input::new(1280, 720),
            pool: ParticlePool::new(config.particle_count, Vec2::ZERO, config.hue),
            behavior: config.behavior,
            sprite,
            rng: SmallRng::from_entropy(),
            clock: FrameClock::new(),
        }
    }

    /// Where a rebuilt pool spawns: the pointer, or the origin while the
    /// pointer is absent.
    fn spawn_point(&self) -> Vec2 {
        let (w, h) = self.input.surface_size();
        self.input
            .pointer()
            .device_position(w as f32, h as f32)
            .unwrap_or(Vec2::ZERO)
    }

    fn apply_action(&mut self, action: ControlAction) {
        match action {
            ControlAction::SelectBehavior(behavior) => {
                self.behavior = behavior;
                log::info!("behavior: {}", behavior.label());
            }
            ControlAction::AdjustCount(delta) => {
                let count = (self.pool.len() as i32 + delta).max(1) as usize;
                self.pool.rebuild(count, self.spawn_point());
                log::info!("particles: {}", self.pool.len());
            }
            ControlAction::AdjustHue(delta) => {
                self.pool.recolor(self.pool.hue() + delta);
                log::info!("hue: {}", self.pool.hue());
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.clock.tick();

        let (w, h) = self.input.surface_size();
        let ctx = SimContext {
            behavior: self.behavior,
            pointer: self.input.pointer(),
            width: w as f32,
            height: h as f32,
        };
        step(&mut self.pool, &ctx, &mut self.rng);

        let instances: Vec<_> = self.pool.iter().map(|p| p.instance()).collect();

        if let Some(renderer) = &mut self.renderer {
            match renderer.render(&instances) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => renderer.resize(winit::dpi::PhysicalSize {
                    width: renderer.config.width,
                    height: renderer.config.height,
                }),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("out of GPU memory, exiting");
                    event_loop.exit();
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }

        if let Some(window) = &self.window {
            if self.clock.frame() % TITLE_REFRESH_FRAMES == 0 {
                window.set_title(&format!(
                    "pursuit: {} | {} particles | {:.0} fps",
                    self.behavior.label(),
                    self.pool.len(),
                    self.clock.fps(),
                ));
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("pursuit")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let size = window.inner_size();
        self.input.set_surface_size(size.width, size.height);

        match pollster::block_on(Renderer::new(window)) {
            Ok(mut renderer) => {
                renderer.set_sprite(&self.sprite);
                self.renderer = Some(renderer);
            }
            Err(e) => {
                log::error!("failed to initialize GPU: {}", e);
                event_loop.exit();
            }
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        self.input.handle_device_event(&event);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(action) = self.input.handle_event(&event) {
            self.apply_action(action);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.input
                    .set_surface_size(physical_size.width, physical_size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::FLOOR_Y;

    fn context(behavior: Behavior, pointer: PointerState) -> SimContext {
        SimContext {
            behavior,
            pointer,
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn test_step_is_identity_without_pointer() {
        let mut pool = ParticlePool::new(25, Vec2::new(0.1, 0.1), 180.0);
        let before: Vec<_> = pool.iter().cloned().collect();
        let ctx = context(Behavior::Galaxy, PointerState::absent());
        let mut rng = SmallRng::seed_from_u64(1);

        step(&mut pool, &ctx, &mut rng);

        let after: Vec<_> = pool.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_step_moves_whole_pool_toward_pointer() {
        let mut pool = ParticlePool::new(25, Vec2::new(-0.9, -0.9), 180.0);
        // Pixel position mapping to device (0.5, 0.5) on an 800x600 surface.
        let ctx = context(
            Behavior::Chase,
            PointerState::at(Vec2::new(600.0, 150.0)),
        );
        let target = Vec2::new(0.5, 0.5);
        let mut rng = SmallRng::seed_from_u64(1);

        let start = Vec2::new(-0.9, -0.9);
        step(&mut pool, &ctx, &mut rng);

        for p in pool.iter() {
            assert!(p.position.distance(target) < start.distance(target));
        }
    }

    #[test]
    fn test_step_holds_bounce_floor_for_every_particle() {
        let mut pool = ParticlePool::new(50, Vec2::new(0.0, 0.9), 180.0);
        let ctx = context(Behavior::Bounce, PointerState::at(Vec2::new(400.0, 50.0)));
        let mut rng = SmallRng::seed_from_u64(2);

        for _ in 0..500 {
            step(&mut pool, &ctx, &mut rng);
            for p in pool.iter() {
                assert!(p.position.y >= FLOOR_Y && p.position.y <= 2.0);
            }
        }
    }
}
