//! Ribbon path generation: a finite, lazy strip of jittered triangles
//! walking left to right across the surface.
//!
//! The walk keeps a two-point leading edge. Each step picks the next vertex
//! with constrained randomness (forward-biased x step, rejection-sampled y
//! jitter kept inside the surface), emits the triangle spanning the old edge
//! and the new vertex, then slides the edge forward. Only the edge is live;
//! no vertex history is retained.

/// A 2D coordinate in logical surface units (not device pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One filled triangle of the ribbon. Ephemeral: painted, then dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

/// Source of uniform draws in `[0, 1)`.
///
/// Browser code hands in `js_sys::Math::random`; tests hand in seeded RNG
/// closures so the walk is reproducible.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Retry cap for the y-jitter rejection loop. The source this motif comes
/// from retries forever; with a band width comparable to the surface height
/// that can spin, so we cap and clamp instead.
const JITTER_RETRY_CAP: u32 = 1000;

/// Lazy triangle-strip generator spanning `0..=width + band`.
///
/// Restartable (build a new one), not resumable: dropping it mid-walk loses
/// the edge.
pub struct RibbonPath<R> {
    width: f64,
    height: f64,
    /// Band half-width: vertical amplitude and mean horizontal pacing both
    /// scale with this.
    band: f64,
    prev: Point,
    curr: Point,
    rng: R,
}

impl<R: RandomSource> RibbonPath<R> {
    /// Seed the leading edge at the left margin, straddling `height * 0.7`
    /// by one band half-width in each direction.
    pub fn new(width: f64, height: f64, band: f64, rng: R) -> Self {
        let anchor = height * 0.7;
        Self {
            width,
            height,
            band,
            prev: Point::new(0.0, anchor + band),
            curr: Point::new(0.0, anchor - band),
            rng,
        }
    }

    /// Forward-biased horizontal step: `band * (2U - 0.25)`, mean `0.875 *
    /// band`, with a small chance of backward jitter when `U < 0.125`.
    fn step_x(&mut self) -> f64 {
        self.curr.x + self.band * (2.0 * self.rng.next_unit() - 0.25)
    }

    /// Vertical jitter with a slight downward bias, rejection-sampled until
    /// it lands inside `[0, height]`. Bounded: after `JITTER_RETRY_CAP`
    /// misses the last candidate is clamped into range.
    fn step_y(&mut self) -> f64 {
        let base = self.curr.y;
        let mut candidate = base;
        for _ in 0..JITTER_RETRY_CAP {
            candidate = base + self.band * (2.0 * self.rng.next_unit() - 1.1);
            if (0.0..=self.height).contains(&candidate) {
                return candidate;
            }
        }
        candidate.clamp(0.0, self.height)
    }
}

impl<R: RandomSource> Iterator for RibbonPath<R> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        if self.curr.x >= self.width + self.band {
            return None;
        }
        let next = Point::new(self.step_x(), self.step_y());
        let tri = Triangle {
            a: self.prev,
            b: self.curr,
            c: next,
        };
        self.prev = self.curr;
        self.curr = next;
        Some(tri)
    }
}
