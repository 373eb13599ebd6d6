//! Seamless vertical scrolling over a region whose content is two identical
//! halves. Resetting the offset to zero once it reaches the halfway point
//! is visually indistinguishable from continuing forward.

/// Sub-pixel advance per frame. Small enough to stay smooth at 60-144Hz.
pub const DEFAULT_SCROLL_STEP: f64 = 0.25;

/// Anything with a vertical scroll offset and a measurable content height.
pub trait ScrollRegion {
    /// Total scrollable content height. Queried every tick since it changes
    /// whenever the viewport (and therefore the column layout) resizes.
    fn scroll_height(&self) -> f64;

    fn set_scroll_top(&mut self, top: f64);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTick {
    Advanced(f64),
    Wrapped,
    /// The region has no content to scroll through.
    Idle,
}

/// Owns the scroll cursor. Nothing else writes the region's offset.
#[derive(Clone, Debug)]
pub struct ScrollEngine {
    cursor: f64,
    step: f64,
}

impl Default for ScrollEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_STEP)
    }
}

impl ScrollEngine {
    pub fn new(step: f64) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            DEFAULT_SCROLL_STEP
        };

        Self { cursor: 0.0, step }
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn tick<R: ScrollRegion + ?Sized>(&mut self, region: &mut R) -> ScrollTick {
        let half = region.scroll_height() / 2.0;

        if half.is_nan() || half <= 0.0 {
            if self.cursor != 0.0 {
                self.cursor = 0.0;
                region.set_scroll_top(0.0);
            }
            return ScrollTick::Idle;
        }

        let next = self.cursor + self.step;
        let tick = if next >= half {
            self.cursor = 0.0;
            ScrollTick::Wrapped
        } else {
            self.cursor = next;
            ScrollTick::Advanced(next)
        };

        region.set_scroll_top(self.cursor);
        tick
    }

    pub fn reset<R: ScrollRegion + ?Sized>(&mut self, region: &mut R) {
        self.cursor = 0.0;
        region.set_scroll_top(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Region {
        height: f64,
        top: f64,
        writes: usize,
    }

    impl Region {
        fn new(height: f64) -> Self {
            Self {
                height,
                top: 0.0,
                writes: 0,
            }
        }
    }

    impl ScrollRegion for Region {
        fn scroll_height(&self) -> f64 {
            self.height
        }

        fn set_scroll_top(&mut self, top: f64) {
            self.top = top;
            self.writes += 1;
        }
    }

    #[test]
    fn advances_by_step_and_writes_region() {
        let mut engine = ScrollEngine::default();
        let mut region = Region::new(1000.0);

        assert_eq!(engine.tick(&mut region), ScrollTick::Advanced(0.25));
        assert_eq!(engine.tick(&mut region), ScrollTick::Advanced(0.5));
        assert_eq!(region.top, 0.5);
        assert_eq!(engine.cursor(), 0.5);
    }

    #[test]
    fn wraps_to_zero_instead_of_reaching_half() {
        let mut engine = ScrollEngine::new(1.0);
        let mut region = Region::new(10.0);

        for expected in 1..5 {
            assert_eq!(
                engine.tick(&mut region),
                ScrollTick::Advanced(expected as f64)
            );
        }

        assert_eq!(engine.tick(&mut region), ScrollTick::Wrapped);
        assert_eq!(engine.cursor(), 0.0);
        assert_eq!(region.top, 0.0);
    }

    #[test]
    fn never_exceeds_half_over_many_ticks() {
        let mut engine = ScrollEngine::default();
        let mut region = Region::new(333.0);
        let mut wraps = 0;

        for _ in 0..10_000 {
            if engine.tick(&mut region) == ScrollTick::Wrapped {
                wraps += 1;
            }
            assert!(engine.cursor() < region.height / 2.0);
        }

        assert!(wraps > 0);
    }

    #[test]
    fn recomputes_half_every_tick() {
        let mut engine = ScrollEngine::new(10.0);
        let mut region = Region::new(100.0);

        for _ in 0..4 {
            engine.tick(&mut region);
        }
        assert_eq!(engine.cursor(), 40.0);

        // Viewport shrank so the content reflowed taller; keep going.
        region.height = 200.0;
        assert_eq!(engine.tick(&mut region), ScrollTick::Advanced(50.0));

        // Content shrank below the cursor; the next tick wraps.
        region.height = 60.0;
        assert_eq!(engine.tick(&mut region), ScrollTick::Wrapped);
    }

    #[test]
    fn empty_region_stays_idle() {
        let mut engine = ScrollEngine::default();
        let mut region = Region::new(0.0);

        assert_eq!(engine.tick(&mut region), ScrollTick::Idle);
        assert_eq!(engine.cursor(), 0.0);
        assert_eq!(region.writes, 0);
    }

    #[test]
    fn invalid_step_falls_back_to_default() {
        assert_eq!(ScrollEngine::new(0.0).step(), DEFAULT_SCROLL_STEP);
        assert_eq!(ScrollEngine::new(-3.0).step(), DEFAULT_SCROLL_STEP);
        assert_eq!(ScrollEngine::new(f64::NAN).step(), DEFAULT_SCROLL_STEP);
        assert_eq!(ScrollEngine::new(1.5).step(), 1.5);
    }

    #[test]
    fn reset_returns_cursor_and_region_to_top() {
        let mut engine = ScrollEngine::default();
        let mut region = Region::new(1000.0);
        engine.tick(&mut region);
        engine.tick(&mut region);

        engine.reset(&mut region);
        assert_eq!(engine.cursor(), 0.0);
        assert_eq!(region.top, 0.0);
    }
}
