use kurbo::Point;

use crate::core::FrameIndex;

/// Frames per full grid-cell scroll cycle.
const GRID_PERIOD_FRAMES: u64 = 240;
/// Grid cell pitch in pixels.
const GRID_CELL_PX: f64 = 80.0;

const PARTICLE_COUNT: usize = 20;
/// Particles keep rising this far past the top edge before wrapping.
const RISE_OVERSHOOT_PX: f64 = 75.0;

/// Looping vertical translation for the perspective grid, in pixels.
///
/// Wraps every [`GRID_PERIOD_FRAMES`] frames, exactly one cell, so the loop
/// seam is invisible.
pub fn grid_scroll_px(frame: FrameIndex) -> f64 {
    ((frame.0 % GRID_PERIOD_FRAMES) as f64) * (GRID_CELL_PX / GRID_PERIOD_FRAMES as f64)
}

/// One ambient particle.
///
/// `pos.x` is a percentage of canvas width, `pos.y` is in pixels from the top
/// edge (the two axes animate in different spaces).
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct Particle {
    pub pos: Point,
    pub radius: f64,
    pub opacity: f64,
}

/// The rising particle field at a frame, for a canvas `height_px` tall.
///
/// Fully deterministic: each particle's column, period, phase offset, drift
/// and size derive from its index alone, so any frame can be evaluated in
/// isolation and re-evaluated identically.
pub fn particles(frame: FrameIndex, height_px: f64) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|i| {
            let start_x = ((i * 37) % 100) as f64;
            let period = 300 + (i % 5) as u64 * 60;
            let phase = ((frame.0 + i as u64 * 30) % period) as f64 / period as f64;

            let y = height_px - phase * (height_px + RISE_OVERSHOOT_PX);
            let drift = (i as f64).sin() * 150.0;
            let x = start_x + phase * drift / 100.0;

            let opacity = if phase < 0.2 {
                phase * 2.5
            } else if phase > 0.8 {
                (1.0 - phase) * 2.5
            } else {
                0.5
            };

            Particle {
                pos: Point::new(x, y),
                radius: (1 + i % 3) as f64,
                opacity,
            }
        })
        .collect()
}
