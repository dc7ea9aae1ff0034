use crate::components::mesh::Color;

/// Light falloff model.
#[derive(Debug, Clone, Copy)]
pub enum LightKind {
    /// Uniform fill with no position or falloff.
    Ambient,
    /// Point source with a falloff range in world units.
    Point { range: f32 },
}

/// Component for scene lights. A point light illuminates from the world
/// position of the node that carries it.
#[derive(Debug, Clone, Copy)]
pub struct LightComponent {
    pub kind: LightKind,
    /// RGB color (typically [0..1] but can exceed 1.0 for HDR).
    pub color: Color,
    /// Light strength multiplier.
    pub intensity: f32,
}

impl LightComponent {
    pub fn ambient(intensity: f32) -> Self {
        Self {
            kind: LightKind::Ambient,
            color: Color::WHITE,
            intensity,
        }
    }

    pub fn point(intensity: f32, range: f32) -> Self {
        Self {
            kind: LightKind::Point { range },
            color: Color::WHITE,
            intensity,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_carries_range() {
        let light = LightComponent::point(350_000.0, 4000.0);
        assert!(matches!(light.kind, LightKind::Point { range } if range == 4000.0));
        assert_eq!(light.intensity, 350_000.0);
    }

    #[test]
    fn ambient_defaults_to_white() {
        let light = LightComponent::ambient(0.2);
        assert_eq!(light.color, Color::WHITE);
    }
}
