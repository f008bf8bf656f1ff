use glam::Vec4;

/// RGBA helpers over `Vec4`, the crate's color representation (x=r, y=g,
/// z=b, w=a).
pub trait ColorExt {
    fn r(self) -> f32;
    fn g(self) -> f32;
    fn b(self) -> f32;
    fn a(self) -> f32;
    fn with_r(self, r: f32) -> Self;
    fn with_g(self, g: f32) -> Self;
    fn with_b(self, b: f32) -> Self;
    fn with_a(self, a: f32) -> Self;
    fn add_r(self, r: f32) -> Self;
    fn add_g(self, g: f32) -> Self;
    fn add_b(self, b: f32) -> Self;
    fn add_a(self, a: f32) -> Self;
}

impl ColorExt for Vec4 {
    fn r(self) -> f32 {
        self.x
    }

    fn g(self) -> f32 {
        self.y
    }

    fn b(self) -> f32 {
        self.z
    }

    fn a(self) -> f32 {
        self.w
    }

    fn with_r(self, r: f32) -> Self {
        Self::new(r, self.y, self.z, self.w)
    }

    fn with_g(self, g: f32) -> Self {
        Self::new(self.x, g, self.z, self.w)
    }

    fn with_b(self, b: f32) -> Self {
        Self::new(self.x, self.y, b, self.w)
    }

    fn with_a(self, a: f32) -> Self {
        Self::new(self.x, self.y, self.z, a)
    }

    fn add_r(self, r: f32) -> Self {
        Self::new(self.x + r, self.y, self.z, self.w)
    }

    fn add_g(self, g: f32) -> Self {
        Self::new(self.x, self.y + g, self.z, self.w)
    }

    fn add_b(self, b: f32) -> Self {
        Self::new(self.x, self.y, self.z + b, self.w)
    }

    fn add_a(self, a: f32) -> Self {
        Self::new(self.x, self.y, self.z, self.w + a)
    }
}
