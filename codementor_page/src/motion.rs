//! One-shot entrance animations.
//!
//! Each animated block fades in from `opacity: 0` while sliding up from a
//! small downward offset. The browser drives the timing through the `enter`
//! keyframes in [`crate::styles::LANDING_CSS`]; this module decides the
//! per-element duration, delay and offset and can sample the same curve in
//! Rust for tests and tooling.
//!
//! ```rust
//! use codementor_page::motion::EntranceAnimation;
//!
//! let first = EntranceAnimation::feature_card(0);
//! let second = EntranceAnimation::feature_card(1);
//! assert!(second.start_ms() > first.start_ms());
//! ```

/// Hero block duration.
pub const HERO_DURATION_MS: u32 = 800;
/// Feature card duration.
pub const CARD_DURATION_MS: u32 = 500;
/// Delay added per feature card index.
pub const CARD_STAGGER_MS: u32 = 100;
/// Initial downward shift for every animated block.
pub const ENTER_OFFSET_PX: u32 = 20;

/// Timing of a single entrance animation, relative to first display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntranceAnimation {
    /// Length of the transition
    pub duration_ms: u32,
    /// Wait before the transition starts
    pub delay_ms: u32,
    /// Initial downward shift in pixels
    pub offset_px: u32,
}

/// Visual state of an animated element at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// 0.0 (invisible) to 1.0 (opaque)
    pub opacity: f64,
    /// Remaining downward shift in pixels
    pub offset_px: f64,
}

impl Frame {
    /// Invisible and shifted down by `offset_px`.
    pub fn initial(offset_px: u32) -> Self {
        Self {
            opacity: 0.0,
            offset_px: f64::from(offset_px),
        }
    }

    /// Fully visible at its natural position.
    pub fn at_rest() -> Self {
        Self {
            opacity: 1.0,
            offset_px: 0.0,
        }
    }
}

impl EntranceAnimation {
    /// The hero block: 800 ms, no delay.
    pub const HERO: Self = Self {
        duration_ms: HERO_DURATION_MS,
        delay_ms: 0,
        offset_px: ENTER_OFFSET_PX,
    };

    /// Feature card `index`: 500 ms, delayed by `index × 100 ms`.
    pub fn feature_card(index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            duration_ms: CARD_DURATION_MS,
            delay_ms: CARD_STAGGER_MS.saturating_mul(index),
            offset_px: ENTER_OFFSET_PX,
        }
    }

    /// When the transition begins.
    pub fn start_ms(&self) -> u32 {
        self.delay_ms
    }

    /// When the element reaches its resting state.
    pub fn end_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.duration_ms)
    }

    /// Inline `style` value feeding the `enter` keyframes.
    pub fn inline_style(&self) -> String {
        format!(
            "animation-duration:{}ms;animation-delay:{}ms;--enter-offset:{}px",
            self.duration_ms, self.delay_ms, self.offset_px
        )
    }

    /// Sample the transition `elapsed_ms` after first display.
    ///
    /// Uses the same cubic ease-out as the stylesheet.
    pub fn frame_at(&self, elapsed_ms: u32) -> Frame {
        if elapsed_ms <= self.start_ms() {
            return if self.duration_ms == 0 && elapsed_ms == self.start_ms() {
                Frame::at_rest()
            } else {
                Frame::initial(self.offset_px)
            };
        }
        if elapsed_ms >= self.end_ms() {
            return Frame::at_rest();
        }

        let progress = f64::from(elapsed_ms - self.delay_ms) / f64::from(self.duration_ms);
        let eased = ease_out_cubic(progress);
        Frame {
            opacity: eased,
            offset_px: f64::from(self.offset_px) * (1.0 - eased),
        }
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
