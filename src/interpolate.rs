use crate::color::{Color, Component, Components};
use crate::math::lerp;
use crate::models::Srgb;

impl Srgb {
    /// Linearly interpolate the gamma encoded components from this color to
    /// another using `t` as the progress between them.
    pub fn interpolate(&self, other: &Self, t: Component) -> Self {
        let Components(r0, g0, b0) = self.to_components();
        let Components(r1, g1, b1) = other.to_components();

        Srgb::new(lerp(r0, r1, t), lerp(g0, g1, t), lerp(b0, b1, t))
    }
}

impl Color {
    /// Mix this color toward `other`. A `t` of 0 returns this color, 1
    /// returns `other`.
    pub fn mix(&self, other: &Color, t: Component) -> Color {
        Color::from_srgb(&self.srgb().interpolate(&other.srgb(), t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn basic() {
        let left = Srgb::new(0.1, 0.2, 0.3);
        let right = Srgb::new(0.5, 0.6, 0.7);
        let mixed = left.interpolate(&right, 0.5);
        assert_component_eq!(mixed.red, 0.3);
        assert_component_eq!(mixed.green, 0.4);
        assert_component_eq!(mixed.blue, 0.5);
    }

    #[test]
    fn mix_endpoints() {
        let color = Color::new(201, 101, 51);
        assert_eq!(color.mix(&Color::BLACK, 0.0), color);
        assert_eq!(color.mix(&Color::BLACK, 1.0), Color::BLACK);
        assert_eq!(color.mix(&Color::WHITE, 0.5), Color::new(228, 178, 153));
    }
}
