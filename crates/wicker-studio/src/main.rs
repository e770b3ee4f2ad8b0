use std::time::Duration;

use wicker_engine::logging::{init_logging, LoggingConfig};
use wicker_ui::prelude::*;

// ── Config ────────────────────────────────────────────────────────────────

/// Knobs for the demo run.
#[derive(Debug, Clone)]
struct StudioConfig {
    /// Frames to run before exiting.
    frames: u32,
    /// Pause between frames.
    frame_interval: Duration,
    /// The beacon flips color every this many updates.
    blink_every: u32,
    logging: LoggingConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            frames: 8,
            frame_interval: Duration::from_millis(16),
            blink_every: 3,
            logging: LoggingConfig { default_level: log::LevelFilter::Debug, ..LoggingConfig::default() },
        }
    }
}

// ── LogRenderer ───────────────────────────────────────────────────────────

/// Backend that reports every call through `log` instead of touching a GPU.
#[derive(Debug, Default)]
struct LogRenderer {
    passes: u64,
    triangles: usize,
}

impl Renderer for LogRenderer {
    fn begin_pass(&mut self) {
        self.passes += 1;
        self.triangles = 0;
        log::info!("[backend] begin pass #{}", self.passes);
    }

    fn draw(&mut self, vertices: &[Vertex]) {
        self.triangles += vertices.len() / 3;
        let first = vertices.first().map(|v| v.position);
        log::debug!("[backend] draw {} vertices, first at {first:?}", vertices.len());
    }

    fn end_pass(&mut self) {
        log::info!("[backend] end pass #{} ({} triangles)", self.passes, self.triangles);
    }

    fn enable_scissor_test(&mut self, offset: Vec2, extent: Vec2) {
        log::debug!("[backend] scissor on  offset={offset} extent={extent}");
    }

    fn disable_scissor_test(&mut self) {
        log::debug!("[backend] scissor off");
    }
}

// ── Beacon ────────────────────────────────────────────────────────────────

/// Blinking triangle; the only widget in the demo that changes over time.
struct Beacon {
    shape: Triangle,
    on: Color,
    off: Color,
    lit: bool,
    every: u32,
    updates: u32,
}

impl Beacon {
    fn new(shape: Triangle, on: Color, every: u32) -> Self {
        let mut shape = shape;
        shape.set_color(on);
        Self { shape, on, off: Color::BLACK, lit: true, every: every.max(1), updates: 0 }
    }
}

impl Widget for Beacon {
    fn draw(&self, cx: &mut DrawCtx<'_, '_>) {
        self.shape.draw(cx);
    }

    fn update(&mut self, time: &FrameTime) -> bool {
        self.updates += 1;
        if self.updates % self.every != 0 {
            return false;
        }
        self.lit = !self.lit;
        self.shape.set_color(if self.lit { self.on } else { self.off });
        log::debug!("beacon {} at {:.3}s", if self.lit { "on" } else { "off" }, time.elapsed);
        true
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────

fn build_scene(cx: &mut Context, config: &StudioConfig) -> anyhow::Result<()> {
    let root = cx.root();
    let tree = cx.tree_mut();

    let backdrop = tree.emplace_back(root, Panel::new().fill(rgba(0.08, 0.08, 0.1, 1.0)))?;
    tree.set_bounds(backdrop, vec2(2.0, 2.0))?;
    tree.get_mut::<Panel>(backdrop)
        .ok_or_else(|| anyhow::anyhow!("backdrop is not a panel"))?
        .set_offset(vec2(-1.0, -1.0));

    let viewport = tree.emplace_back(
        backdrop,
        Panel::new().offset(vec2(-0.75, -0.75)).fill(rgba(0.2, 0.22, 0.3, 1.0)).clip(true),
    )?;
    tree.set_bounds(viewport, vec2(1.5, 1.5))?;

    tree.emplace_back(viewport, Triangle::default())?;
    tree.emplace_back(
        viewport,
        Beacon::new(
            Triangle::solid(vec2(0.5, 0.5), vec2(1.0, 0.5), vec2(0.75, 1.0), Color::WHITE),
            rgba(1.0, 0.6, 0.1, 1.0),
            config.blink_every,
        ),
    )?;

    log::info!("scene ready: {} widgets", cx.tree().node_count());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = StudioConfig::default();
    init_logging(config.logging.clone());

    let mut cx = make_context(LogRenderer::default());
    build_scene(&mut cx, &config)?;

    let mut drawn = 0u32;
    for _ in 0..config.frames {
        let time = cx.update();
        match cx.draw_if_dirty() {
            Some(stats) => {
                drawn += 1;
                log::info!(
                    "frame {} dt={:.4}s: {} widgets, {} batches, {} vertices",
                    time.frame_index,
                    time.dt,
                    stats.widgets,
                    stats.batches,
                    stats.vertices
                );
            }
            None => log::info!("frame {} dt={:.4}s: clean, skipped", time.frame_index, time.dt),
        }
        std::thread::sleep(config.frame_interval);
    }

    log::info!("{drawn} of {} frames drawn", config.frames);
    Ok(())
}
