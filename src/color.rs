//! Cosine-lobe hue cycling for triangle fills.
//!
//! The phase advances by a fixed fraction of a turn before every fill, so the
//! colour is a function of emission order alone, never of geometry. The phase
//! survives regeneration: redraws restart the ribbon, not the rainbow.

use std::f64::consts::TAU;

/// Phase advance applied before each fill: one fiftieth of a turn.
pub const HUE_STEP: f64 = TAU / 50.0;

/// A solid fill colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// CSS hex form, e.g. `#7fc840`.
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Monotonically advancing hue phase, one per surface instance.
#[derive(Debug, Default)]
pub struct HueCycle {
    phase: f64,
}

impl HueCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the phase and sample it as a colour.
    ///
    /// Three cosine lobes a third of a turn apart, scaled to `cos * 127 +
    /// 128`; the cosine range keeps every channel in `1..=255` with no
    /// explicit clamp.
    pub fn advance(&mut self) -> Rgb {
        self.phase += HUE_STEP;
        Rgb {
            r: Self::lobe(self.phase),
            g: Self::lobe(self.phase + TAU / 3.0),
            b: Self::lobe(self.phase + 2.0 * TAU / 3.0),
        }
    }

    fn lobe(angle: f64) -> u8 {
        (angle.cos() * 127.0 + 128.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nth_fill_is_a_function_of_n_only() {
        let mut a = HueCycle::new();
        let mut b = HueCycle::new();
        for _ in 0..17 {
            a.advance();
        }
        for _ in 0..17 {
            b.advance();
        }
        assert_eq!(a.advance(), b.advance());
    }

    #[test]
    fn first_fill_matches_the_lobe_formula() {
        let mut cycle = HueCycle::new();
        let got = cycle.advance();
        let expect = |shift: f64| ((HUE_STEP + shift).cos() * 127.0 + 128.0) as u8;
        assert_eq!(got.r, expect(0.0));
        assert_eq!(got.g, expect(TAU / 3.0));
        assert_eq!(got.b, expect(2.0 * TAU / 3.0));
    }

    #[test]
    fn channels_stay_inside_the_byte_range_without_clamping() {
        let mut cycle = HueCycle::new();
        for _ in 0..200 {
            let rgb = cycle.advance();
            for ch in [rgb.r, rgb.g, rgb.b] {
                assert!(ch >= 1, "cosine amplitude keeps channels off zero");
            }
        }
    }

    #[test]
    fn css_hex_is_six_digits() {
        let css = Rgb { r: 1, g: 200, b: 15 }.to_css();
        assert_eq!(css, "#01c80f");
    }
}
