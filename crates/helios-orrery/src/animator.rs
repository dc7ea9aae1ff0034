//! Per-frame orbital animation: spins, revolutions, and the slow vertical
//! drift of the whole system.

use helios_engine::Scene;

use crate::bodies;
use crate::hierarchy::SystemNodes;

/// Advances every pivot and body each frame. The drift accumulator lives
/// here so reset can zero it along with the root's translation.
pub struct OrbitalAnimator {
    drift: f32,
}

impl OrbitalAnimator {
    pub fn new() -> Self {
        Self { drift: 0.0 }
    }

    /// Current vertical offset of the shared root.
    pub fn drift(&self) -> f32 {
        self.drift
    }

    /// Advance one frame of animation.
    pub fn tick(&mut self, scene: &mut Scene, nodes: &SystemNodes) {
        self.drift += bodies::SYSTEM_DRIFT;
        if let Some(root) = scene.get_mut(nodes.root) {
            root.local.translation.y = self.drift;
        }

        if let Some(sun) = scene.get_mut(nodes.sun) {
            sun.local.rotation.y += bodies::SUN_SPIN;
        }

        for planet in &nodes.planets {
            if let Some(body) = scene.get_mut(planet.body) {
                body.local.rotation.y += bodies::PLANET_SPIN;
            }
            if let Some(pivot) = scene.get_mut(planet.pivot) {
                pivot.local.rotation.y += planet.speed;
            }
            for moon in &planet.moons {
                if let Some(pivot) = scene.get_mut(moon.pivot) {
                    pivot.local.rotation.y += moon.speed;
                }
            }
        }
    }

    /// Zero the drift accumulator and snap the root back to the ecliptic.
    pub fn reset_drift(&mut self, scene: &mut Scene, nodes: &SystemNodes) {
        self.drift = 0.0;
        if let Some(root) = scene.get_mut(nodes.root) {
            root.local.translation.y = 0.0;
        }
    }
}

impl Default for OrbitalAnimator {
    fn default() -> Self {
        Self::new()
    }
}
