use crate::assets::registry::TextureHandle;

/// RGB color, linear, typically in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Uniformly scale all channels (e.g. to dim a base grey).
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Geometric primitive the host knows how to tessellate.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Sphere { radius: f32 },
    /// Flat annulus in the local XY plane.
    Ring { inner: f32, outer: f32 },
    /// Irregular rock: an icosahedron with per-vertex displacement up to
    /// `irregularity` of the base radius.
    Rock { radius: f32, irregularity: f32 },
}

/// Component for renderable meshes.
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    pub shape: Shape,
    pub color: Color,
    /// HDR glow multiplier (0.0 = lit by scene lights only).
    pub emissive: f32,
    /// Alpha; values below 1.0 render translucent.
    pub opacity: f32,
    /// Texture to sample, if the host has resolved it.
    pub texture: Option<TextureHandle>,
    /// Render both faces (starfield interiors, thin rings).
    pub double_sided: bool,
}

impl MeshComponent {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            color: Color::WHITE,
            emissive: 0.0,
            opacity: 1.0,
            texture: None,
            double_sided: false,
        }
    }

    pub fn sphere(radius: f32) -> Self {
        Self::new(Shape::Sphere { radius })
    }

    pub fn ring(inner: f32, outer: f32) -> Self {
        Self::new(Shape::Ring { inner, outer })
    }

    pub fn rock(radius: f32, irregularity: f32) -> Self {
        Self::new(Shape::Rock { radius, irregularity })
    }

    // -- Builder pattern --

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_texture(mut self, texture: TextureHandle) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        self
    }

    /// Radius of the bounding sphere, before node scale.
    pub fn radius(&self) -> f32 {
        match self.shape {
            Shape::Sphere { radius } => radius,
            Shape::Ring { outer, .. } => outer,
            Shape::Rock { radius, irregularity } => radius * (1.0 + irregularity),
        }
    }
}
