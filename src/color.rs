use image::Rgb;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Value ramp: property value → RGB
// ---------------------------------------------------------------------------

/// Hue for the smallest value (blue).
const LOW_HUE: f32 = 240.0;
/// Hue for the largest value (red).
const HIGH_HUE: f32 = 0.0;

/// Maps property values in `[min, max]` onto a blue → red HSL ramp.
#[derive(Debug, Clone, Copy)]
pub struct ValueRamp {
    min: f32,
    max: f32,
}

impl ValueRamp {
    pub fn new(min: f32, max: f32) -> Self {
        ValueRamp { min, max }
    }

    /// Position of `value` on the ramp in `[0, 1]`. A degenerate range sits
    /// at the midpoint; non-finite values clamp to the low end.
    pub fn position(&self, value: f32) -> f32 {
        let span = self.max - self.min;
        if !(span.is_finite() && span > 0.0) {
            return 0.5;
        }
        let t = (value - self.min) / span;
        if t.is_nan() {
            0.0
        } else {
            t.clamp(0.0, 1.0)
        }
    }

    pub fn color_for(&self, value: f32) -> Rgb<u8> {
        let t = self.position(value);
        let hue = LOW_HUE + (HIGH_HUE - LOW_HUE) * t;
        let hsl = Hsl::new(hue, 0.75, 0.55);
        let rgb: Srgb = hsl.into_color();
        Rgb([
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        ])
    }
}
