//! Planetary data — designer-tuned distances, radii, and angular speeds.
//!
//! None of this is physically accurate; spacing and speeds are exaggerated
//! for readability, with real orbital inclinations kept for flavor.

use glam::Vec3;

/// Static description of one planet. Immutable after load.
pub struct PlanetDesc {
    pub name: &'static str,
    /// Orbital distance from the sun, world units.
    pub distance: f32,
    /// Body radius, world units.
    pub radius: f32,
    /// Texture path for the host loader.
    pub texture: &'static str,
    /// Revolution speed of the orbit pivot, radians per frame.
    pub speed: f32,
    /// Number of moons to synthesize.
    pub moons: u32,
    /// Axial tilt in degrees (0 = upright).
    pub axial_tilt_deg: f32,
    /// Orbital inclination in degrees (0 = ecliptic).
    pub inclination_deg: f32,
}

impl PlanetDesc {
    /// Vertical offset of the body produced by its orbital inclination.
    pub fn inclination_offset(&self) -> f32 {
        self.inclination_deg.to_radians().tan() * self.distance
    }

    /// Initial body position inside its orbit pivot.
    pub fn initial_position(&self) -> Vec3 {
        Vec3::new(self.distance, self.inclination_offset(), 0.0)
    }
}

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

pub const PLANETS: [PlanetDesc; PLANET_COUNT] = [
    PlanetDesc { name: "Mercury", distance: 100.0,  radius: 8.0,  texture: "images/mercurymap.jpg", speed: 0.04,   moons: 0,  axial_tilt_deg: 0.0,  inclination_deg: 7.0 },
    PlanetDesc { name: "Venus",   distance: 160.0,  radius: 18.0, texture: "images/venusmap.jpg",   speed: 0.015,  moons: 0,  axial_tilt_deg: 0.0,  inclination_deg: 3.4 },
    PlanetDesc { name: "Earth",   distance: 240.0,  radius: 20.0, texture: "images/earthmap1k.jpg", speed: 0.01,   moons: 1,  axial_tilt_deg: 0.0,  inclination_deg: 0.0 },
    PlanetDesc { name: "Mars",    distance: 350.0,  radius: 12.0, texture: "images/marsmap1k.jpg",  speed: 0.008,  moons: 2,  axial_tilt_deg: 0.0,  inclination_deg: 1.9 },
    PlanetDesc { name: "Jupiter", distance: 600.0,  radius: 60.0, texture: "images/jupitermap.jpg", speed: 0.002,  moons: 9,  axial_tilt_deg: 0.0,  inclination_deg: 1.3 },
    PlanetDesc { name: "Saturn",  distance: 1000.0, radius: 50.0, texture: "images/saturnmap.jpg",  speed: 0.001,  moons: 14, axial_tilt_deg: 26.7, inclination_deg: 2.5 },
    PlanetDesc { name: "Uranus",  distance: 1500.0, radius: 25.0, texture: "images/uranusmap.jpg",  speed: 0.0005, moons: 3,  axial_tilt_deg: 0.0,  inclination_deg: 0.8 },
    PlanetDesc { name: "Neptune", distance: 2100.0, radius: 24.0, texture: "images/neptunemap.jpg", speed: 0.0003, moons: 2,  axial_tilt_deg: 0.0,  inclination_deg: 1.8 },
];

/// The body the asteroid cinematic strikes.
pub const IMPACT_TARGET: usize = EARTH;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 50.0;
pub const SUN_TEXTURE: &str = "images/sunmap.jpg";
/// Sun self-rotation, radians per frame.
pub const SUN_SPIN: f32 = 0.002;
/// Planet self-rotation, radians per frame (shared by all planets).
pub const PLANET_SPIN: f32 = 0.01;
/// Vertical drift of the whole system, world units per frame.
pub const SYSTEM_DRIFT: f32 = 0.1;

pub const AMBIENT_INTENSITY: f32 = 0.2;
pub const SUN_LIGHT_INTENSITY: f32 = 350_000.0;
pub const SUN_LIGHT_RANGE: f32 = 4000.0;

// ── Starfield ────────────────────────────────────────────────────────

pub const STARFIELD_RADIUS: f32 = 5000.0;
pub const STARFIELD_TEXTURE: &str = "images/starfield.jpg";

// ── Moons ────────────────────────────────────────────────────────────

/// Moon radius as a fraction of the parent body radius.
pub const MOON_RADIUS_FRAC: (f32, f32) = (0.04, 0.12);
/// Clearance between body surface and moon orbit, world units.
pub const MOON_CLEARANCE: (f32, f32) = (10.0, 25.0);
/// Moon orbit speed factor range; multiplied by MOON_SPEED_SCALE.
pub const MOON_SPEED_FACTOR: (f32, f32) = (0.2, 1.2);
pub const MOON_SPEED_SCALE: f32 = 0.05;
/// Base moon grey, dimmed per-moon by a random factor in [0.7, 1.0).
pub const MOON_GREY: f32 = 0.8;
pub const MOON_GREY_DIM: (f32, f32) = (0.7, 1.0);

// ── Saturn ring ──────────────────────────────────────────────────────

pub const RING_INNER_OFFSET: f32 = 10.0;
pub const RING_OUTER_OFFSET: f32 = 40.0;
pub const RING_TEXTURE: &str = "images/saturnringmap.png";
pub const RING_OPACITY: f32 = 0.8;

// ── Orbit path rings ─────────────────────────────────────────────────

pub const ORBIT_PATH_HALF_WIDTH: f32 = 0.1;
pub const ORBIT_PATH_GREY: f32 = 0.33;
pub const ORBIT_PATH_OPACITY: f32 = 0.5;

// ── Asteroid ─────────────────────────────────────────────────────────

pub const ASTEROID_RADIUS: f32 = 7.0;
/// Per-vertex displacement fraction for the rock silhouette.
pub const ASTEROID_IRREGULARITY: f32 = 0.2;
pub const ASTEROID_TEXTURE: &str = "images/asteroid.jpg";

// ── Camera ───────────────────────────────────────────────────────────

pub const CAMERA_START: Vec3 = Vec3::new(400.0, 200.0, 600.0);
pub const CAMERA_SPEED: f32 = 10.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planet_names_are_unique() {
        for (i, a) in PLANETS.iter().enumerate() {
            for b in &PLANETS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn outer_planets_revolve_slower() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].speed > pair[1].speed, "{} vs {}", pair[0].name, pair[1].name);
            assert!(pair[0].distance < pair[1].distance);
        }
    }

    #[test]
    fn earth_sits_on_the_ecliptic() {
        assert_eq!(PLANETS[EARTH].inclination_offset(), 0.0);
        assert_eq!(PLANETS[EARTH].initial_position(), Vec3::new(240.0, 0.0, 0.0));
    }

    #[test]
    fn inclination_offset_matches_tangent() {
        let mercury = &PLANETS[MERCURY];
        let expected = (7.0f32).to_radians().tan() * 100.0;
        assert!((mercury.inclination_offset() - expected).abs() < 1e-4);
    }

    #[test]
    fn impact_target_has_a_descriptor() {
        assert_eq!(PLANETS[IMPACT_TARGET].name, "Earth");
    }
}
