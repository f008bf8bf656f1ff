use glam::{Vec2, Vec3, Vec4};

// Swizzles come from glam itself.
pub use glam::{Vec3Swizzles, Vec4Swizzles};

pub trait Vec2Ext {
    fn with_x(self, x: f32) -> Self;
    fn with_y(self, y: f32) -> Self;
    fn add_x(self, x: f32) -> Self;
    fn add_y(self, y: f32) -> Self;
    /// Same direction, given length. A zero vector stays zero.
    fn with_length(self, length: f32) -> Self;
    /// Displacement from this point to the target.
    fn delta_to(self, target: Self) -> Self;
    /// Normalized direction from this point to the target.
    fn direction_to(self, target: Self) -> Self;
}

impl Vec2Ext for Vec2 {
    fn with_x(self, x: f32) -> Self {
        Self::new(x, self.y)
    }

    fn with_y(self, y: f32) -> Self {
        Self::new(self.x, y)
    }

    fn add_x(self, x: f32) -> Self {
        Self::new(self.x + x, self.y)
    }

    fn add_y(self, y: f32) -> Self {
        Self::new(self.x, self.y + y)
    }

    fn with_length(self, length: f32) -> Self {
        self.normalize_or_zero() * length
    }

    fn delta_to(self, target: Self) -> Self {
        target - self
    }

    fn direction_to(self, target: Self) -> Self {
        (target - self).normalize_or_zero()
    }
}

pub trait Vec3Ext {
    fn with_x(self, x: f32) -> Self;
    fn with_y(self, y: f32) -> Self;
    fn with_z(self, z: f32) -> Self;
    fn add_x(self, x: f32) -> Self;
    fn add_y(self, y: f32) -> Self;
    fn add_z(self, z: f32) -> Self;
    fn with_length(self, length: f32) -> Self;
    fn delta_to(self, target: Self) -> Self;
    fn direction_to(self, target: Self) -> Self;
}

impl Vec3Ext for Vec3 {
    fn with_x(self, x: f32) -> Self {
        Self::new(x, self.y, self.z)
    }

    fn with_y(self, y: f32) -> Self {
        Self::new(self.x, y, self.z)
    }

    fn with_z(self, z: f32) -> Self {
        Self::new(self.x, self.y, z)
    }

    fn add_x(self, x: f32) -> Self {
        Self::new(self.x + x, self.y, self.z)
    }

    fn add_y(self, y: f32) -> Self {
        Self::new(self.x, self.y + y, self.z)
    }

    fn add_z(self, z: f32) -> Self {
        Self::new(self.x, self.y, self.z + z)
    }

    fn with_length(self, length: f32) -> Self {
        self.normalize_or_zero() * length
    }

    fn delta_to(self, target: Self) -> Self {
        target - self
    }

    fn direction_to(self, target: Self) -> Self {
        (target - self).normalize_or_zero()
    }
}

pub trait Vec4Ext {
    fn with_x(self, x: f32) -> Self;
    fn with_y(self, y: f32) -> Self;
    fn with_z(self, z: f32) -> Self;
    fn with_w(self, w: f32) -> Self;
    fn add_x(self, x: f32) -> Self;
    fn add_y(self, y: f32) -> Self;
    fn add_z(self, z: f32) -> Self;
    fn add_w(self, w: f32) -> Self;
    fn with_length(self, length: f32) -> Self;
    fn delta_to(self, target: Self) -> Self;
    fn direction_to(self, target: Self) -> Self;
}

impl Vec4Ext for Vec4 {
    fn with_x(self, x: f32) -> Self {
        Self::new(x, self.y, self.z, self.w)
    }

    fn with_y(self, y: f32) -> Self {
        Self::new(self.x, y, self.z, self.w)
    }

    fn with_z(self, z: f32) -> Self {
        Self::new(self.x, self.y, z, self.w)
    }

    fn with_w(self, w: f32) -> Self {
        Self::new(self.x, self.y, self.z, w)
    }

    fn add_x(self, x: f32) -> Self {
        Self::new(self.x + x, self.y, self.z, self.w)
    }

    fn add_y(self, y: f32) -> Self {
        Self::new(self.x, self.y + y, self.z, self.w)
    }

    fn add_z(self, z: f32) -> Self {
        Self::new(self.x, self.y, self.z + z, self.w)
    }

    fn add_w(self, w: f32) -> Self {
        Self::new(self.x, self.y, self.z, self.w + w)
    }

    fn with_length(self, length: f32) -> Self {
        self.normalize_or_zero() * length
    }

    fn delta_to(self, target: Self) -> Self {
        target - self
    }

    fn direction_to(self, target: Self) -> Self {
        (target - self).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approximately;

    #[test]
    fn component_overrides_leave_the_rest_alone() {
        let v = Vec3::new(1.0, 2.0, 3.0).with_y(9.0);
        assert_eq!(v, Vec3::new(1.0, 9.0, 3.0));
        let v = Vec2::new(1.0, 2.0).add_x(0.5);
        assert_eq!(v, Vec2::new(1.5, 2.0));
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0).with_w(0.0).add_z(1.0);
        assert_eq!(v, Vec4::new(1.0, 2.0, 4.0, 0.0));
    }

    #[test]
    fn with_length_preserves_direction() {
        let v = Vec3::new(3.0, 0.0, 4.0).with_length(10.0);
        assert!(approximately(v.length(), 10.0));
        assert!(approximately(v.x / v.z, 3.0 / 4.0));
    }

    #[test]
    fn with_length_on_zero_vector_stays_zero() {
        assert_eq!(Vec2::ZERO.with_length(5.0), Vec2::ZERO);
    }

    #[test]
    fn direction_to_is_normalized_delta() {
        let from = Vec2::new(1.0, 1.0);
        let to = Vec2::new(4.0, 5.0);
        assert_eq!(from.delta_to(to), Vec2::new(3.0, 4.0));
        let dir = from.direction_to(to);
        assert!(approximately(dir.length(), 1.0));
        assert!(approximately(dir.x, 0.6));
    }
}
