/// Approximate float equality with a tolerance scaled to the operands.
pub fn approximately(a: f32, b: f32) -> bool {
    (a - b).abs() <= (1e-6_f32 * a.abs().max(b.abs())).max(f32::EPSILON * 8.0)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if approximately(a, b) {
        0.0
    } else {
        ((value - a) / (b - a)).clamp(0.0, 1.0)
    }
}

/// Remaps `value` from the range [in_min, in_max] to [out_min, out_max].
pub fn remap(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    lerp(out_min, out_max, inverse_lerp(in_min, in_max, value))
}

pub fn between(value: f32, min: f32, max: f32) -> bool {
    value > min && value < max
}

pub fn within(value: f32, min: f32, max: f32) -> bool {
    value >= min && value <= max
}

pub trait FloatExt {
    fn approx(self, other: f32) -> bool;
    fn between(self, min: f32, max: f32) -> bool;
    fn within(self, min: f32, max: f32) -> bool;
    fn at_least(self, min: f32) -> f32;
    fn at_most(self, max: f32) -> f32;
    fn sign_with_zero(self) -> i32;
    fn remap(self, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32;
}

impl FloatExt for f32 {
    fn approx(self, other: f32) -> bool {
        approximately(self, other)
    }

    fn between(self, min: f32, max: f32) -> bool {
        between(self, min, max)
    }

    fn within(self, min: f32, max: f32) -> bool {
        within(self, min, max)
    }

    fn at_least(self, min: f32) -> f32 {
        self.max(min)
    }

    fn at_most(self, max: f32) -> f32 {
        self.min(max)
    }

    fn sign_with_zero(self) -> i32 {
        if approximately(self, 0.0) {
            0
        } else if self > 0.0 {
            1
        } else {
            -1
        }
    }

    fn remap(self, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
        remap(self, in_min, in_max, out_min, out_max)
    }
}

pub trait IntExt {
    fn between(self, min: i32, max: i32) -> bool;
    fn within(self, min: i32, max: i32) -> bool;
    fn at_least(self, min: i32) -> i32;
    fn at_most(self, max: i32) -> i32;
    fn sign_with_zero(self) -> i32;
    fn is_even(self) -> bool;
    fn is_odd(self) -> bool;
}

impl IntExt for i32 {
    fn between(self, min: i32, max: i32) -> bool {
        self > min && self < max
    }

    fn within(self, min: i32, max: i32) -> bool {
        self >= min && self <= max
    }

    fn at_least(self, min: i32) -> i32 {
        self.max(min)
    }

    fn at_most(self, max: i32) -> i32 {
        self.min(max)
    }

    fn sign_with_zero(self) -> i32 {
        self.signum()
    }

    fn is_even(self) -> bool {
        self % 2 == 0
    }

    fn is_odd(self) -> bool {
        self % 2 != 0
    }
}
