//! The asteroid-impact cinematic: a finite-state sequence driven one frame
//! at a time, plus a concurrent camera-shake counter.
//!
//! All durations are frame counts. The explosion timer and the shake timer
//! start together at the collision but drain independently.

use glam::Vec3;
use helios_engine::{Color, MeshComponent, Node, NodeId, SimContext};

use crate::animator::OrbitalAnimator;
use crate::hierarchy::{SystemNodes, SHOCKWAVE_OPACITY};

pub const ASTEROID_SPEED: f32 = 7.0;
pub const COLLISION_THRESHOLD: f32 = 20.0;
pub const EXPLOSION_DURATION: u32 = 120;
pub const SHAKE_BUDGET: u32 = 100;
pub const SHAKE_MAGNITUDE: f32 = 1.0;
/// Where the asteroid materializes relative to the target.
pub const SPAWN_OFFSET: Vec3 = Vec3::new(300.0, 300.0, -300.0);

pub const DEBRIS_COUNT: usize = 30;
/// Per-axis velocity bound, world units per time unit.
pub const DEBRIS_SPEED: f32 = 15.0;
/// Integration step for debris motion.
pub const DEBRIS_DT: f32 = 0.5;
pub const DEBRIS_RADIUS: (f32, f32) = (1.0, 2.5);
pub const DEBRIS_COLOR: Color = Color { r: 1.0, g: 0.4, b: 0.0 };

pub const FLASH_RADIUS: f32 = 20.0;
pub const FLASH_OPACITY: f32 = 0.8;
pub const FLASH_GROWTH: f32 = 1.13;
pub const FLASH_DECAY: f32 = 0.03;

pub const DAMAGE_TINT: Color = Color { r: 1.0, g: 0.2, b: 0.0 };

/// What the UI affordance reflects: trigger when peaceful, reset otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneMode {
    Peaceful,
    Impact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Inbound,
    Exploding,
    Cooldown,
}

/// One piece of ballistic debris. The velocity is assigned at spawn and
/// never reassigned; only the node's position integrates it.
#[derive(Debug, Clone)]
pub struct DebrisParticle {
    node: NodeId,
    velocity: Vec3,
}

impl DebrisParticle {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }
}

/// The impact state machine.
///
/// The phase enum makes "asteroid inbound" and "exploding" mutually
/// exclusive by construction. Camera shake is a separate counter, not a
/// phase; it keeps draining through Cooldown.
pub struct ImpactSequencer {
    phase: Phase,
    explosion_duration: u32,
    shake_budget: u32,
    explosion_progress: u32,
    shake_frames: u32,
    debris: Vec<DebrisParticle>,
    flash: Option<NodeId>,
}

impl ImpactSequencer {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            explosion_duration: EXPLOSION_DURATION,
            shake_budget: SHAKE_BUDGET,
            explosion_progress: 0,
            shake_frames: 0,
            debris: Vec::new(),
            flash: None,
        }
    }

    /// Override the explosion length in frames.
    pub fn set_explosion_duration(&mut self, frames: u32) {
        self.explosion_duration = frames.max(1);
    }

    /// Override the camera-shake budget in frames.
    pub fn set_shake_budget(&mut self, frames: u32) {
        self.shake_budget = frames;
    }

    pub fn mode(&self) -> SceneMode {
        if self.phase == Phase::Idle {
            SceneMode::Peaceful
        } else {
            SceneMode::Impact
        }
    }

    pub fn asteroid_active(&self) -> bool {
        self.phase == Phase::Inbound
    }

    pub fn exploding_active(&self) -> bool {
        self.phase == Phase::Exploding
    }

    pub fn explosion_progress(&self) -> u32 {
        self.explosion_progress
    }

    pub fn shake_frames_remaining(&self) -> u32 {
        self.shake_frames
    }

    pub fn debris(&self) -> &[DebrisParticle] {
        &self.debris
    }

    pub fn flash(&self) -> Option<NodeId> {
        self.flash
    }

    /// Start the cinematic. No-op if the target is unset or a sequence is
    /// already in progress, so a stray activation can never double-spawn.
    pub fn trigger(&mut self, ctx: &mut SimContext, nodes: &SystemNodes) {
        if self.phase != Phase::Idle {
            return;
        }
        let Some(target) = nodes.target else { return };
        let Some(target_pos) = ctx.scene.world_position(target) else {
            return;
        };
        if let Some(asteroid) = ctx.scene.get_mut(nodes.asteroid) {
            asteroid.local.translation = target_pos + SPAWN_OFFSET;
            asteroid.visible = true;
        }
        self.phase = Phase::Inbound;
        log::info!("impact sequence triggered, asteroid inbound");
    }

    /// Tear the whole cinematic down, from any sub-state. Unconditional and
    /// idempotent: always lands in Peaceful with every transient cleared,
    /// cancelling both frame timers in the same call.
    pub fn reset(
        &mut self,
        ctx: &mut SimContext,
        nodes: &SystemNodes,
        animator: &mut OrbitalAnimator,
    ) {
        if let Some(asteroid) = ctx.scene.get_mut(nodes.asteroid) {
            asteroid.visible = false;
        }
        if let Some(shockwave) = ctx.scene.get_mut(nodes.shockwave) {
            shockwave.visible = false;
            shockwave.local.scale = Vec3::ONE;
            if let Some(mesh) = shockwave.mesh.as_mut() {
                mesh.opacity = SHOCKWAVE_OPACITY;
            }
        }
        for particle in self.debris.drain(..) {
            ctx.scene.despawn(particle.node);
        }
        if let Some(flash) = self.flash.take() {
            ctx.scene.despawn(flash);
        }
        if let Some(target) = nodes.target {
            if let Some(body) = ctx.scene.get_mut(target) {
                if let Some(mesh) = body.mesh.as_mut() {
                    mesh.color = Color::WHITE;
                }
            }
        }
        animator.reset_drift(&mut ctx.scene, nodes);
        self.explosion_progress = 0;
        self.shake_frames = 0;
        self.phase = Phase::Idle;
        log::info!("impact sequence reset, scene peaceful");
    }

    /// Advance one frame of the cinematic.
    pub fn tick(&mut self, ctx: &mut SimContext, nodes: &SystemNodes) {
        match self.phase {
            Phase::Inbound => self.tick_inbound(ctx, nodes),
            Phase::Exploding => self.tick_exploding(ctx, nodes),
            Phase::Idle | Phase::Cooldown => {}
        }
        self.tick_shake(ctx);
    }

    fn tick_inbound(&mut self, ctx: &mut SimContext, nodes: &SystemNodes) {
        let Some(target) = nodes.target else { return };
        // The target keeps orbiting and drifting, so re-resolve its
        // world-space position every frame.
        let Some(target_pos) = ctx.scene.world_position(target) else {
            return;
        };
        let Some(asteroid) = ctx.scene.get_mut(nodes.asteroid) else {
            return;
        };
        let direction = (target_pos - asteroid.local.translation).normalize_or_zero();
        let position = asteroid.local.translation + direction * ASTEROID_SPEED;
        asteroid.local.translation = position;
        asteroid.local.rotation = facing_euler(direction);

        if position.distance(target_pos) < COLLISION_THRESHOLD {
            self.collide(ctx, nodes, target, target_pos, position);
        }
    }

    /// Instantaneous transition, same frame as detection.
    fn collide(
        &mut self,
        ctx: &mut SimContext,
        nodes: &SystemNodes,
        target: NodeId,
        target_pos: Vec3,
        impact_pos: Vec3,
    ) {
        if let Some(asteroid) = ctx.scene.get_mut(nodes.asteroid) {
            asteroid.visible = false;
        }

        // The shockwave lives inside the drifting group, so place it in the
        // group's local coordinates.
        let local_pos = ctx
            .scene
            .world_to_local(nodes.root, target_pos)
            .unwrap_or(target_pos);
        if let Some(shockwave) = ctx.scene.get_mut(nodes.shockwave) {
            shockwave.local.translation = local_pos;
            shockwave.local.scale = Vec3::ONE;
            shockwave.visible = true;
            if let Some(mesh) = shockwave.mesh.as_mut() {
                mesh.opacity = SHOCKWAVE_OPACITY;
            }
        }

        if let Some(body) = ctx.scene.get_mut(target) {
            if let Some(mesh) = body.mesh.as_mut() {
                mesh.color = DAMAGE_TINT;
            }
        }

        self.shake_frames = self.shake_budget;

        let flash_id = ctx.next_id();
        self.flash = Some(ctx.scene.spawn(
            Node::new(flash_id)
                .with_tag("flash-glow")
                .with_translation(target_pos)
                .with_mesh(
                    MeshComponent::sphere(FLASH_RADIUS)
                        .with_emissive(1.0)
                        .with_opacity(FLASH_OPACITY),
                ),
        ));

        for _ in 0..DEBRIS_COUNT {
            let radius = ctx.rng.range(DEBRIS_RADIUS.0, DEBRIS_RADIUS.1);
            let velocity = Vec3::new(
                ctx.rng.signed(DEBRIS_SPEED),
                ctx.rng.signed(DEBRIS_SPEED),
                ctx.rng.signed(DEBRIS_SPEED),
            );
            let id = ctx.next_id();
            let node = ctx.scene.spawn_child(
                Node::new(id)
                    .with_translation(impact_pos)
                    .with_mesh(
                        MeshComponent::sphere(radius)
                            .with_color(DEBRIS_COLOR)
                            .with_emissive(1.0),
                    ),
                nodes.debris_group,
            );
            self.debris.push(DebrisParticle { node, velocity });
        }

        self.explosion_progress = 0;
        self.phase = Phase::Exploding;
        log::info!("asteroid struck target at {:?}", target_pos);
    }

    fn tick_exploding(&mut self, ctx: &mut SimContext, nodes: &SystemNodes) {
        self.explosion_progress += 1;
        let scale = 1.0 - self.explosion_progress as f32 / self.explosion_duration as f32;
        if let Some(shockwave) = ctx.scene.get_mut(nodes.shockwave) {
            shockwave.local.scale = Vec3::splat(scale);
            if let Some(mesh) = shockwave.mesh.as_mut() {
                mesh.opacity = SHOCKWAVE_OPACITY * scale;
            }
        }

        if let Some(flash_id) = self.flash {
            let mut spent = false;
            if let Some(flash) = ctx.scene.get_mut(flash_id) {
                flash.local.scale *= FLASH_GROWTH;
                if let Some(mesh) = flash.mesh.as_mut() {
                    mesh.opacity -= FLASH_DECAY;
                    spent = mesh.opacity <= 0.0;
                }
            }
            if spent {
                ctx.scene.despawn(flash_id);
                self.flash = None;
            }
        }

        for particle in &self.debris {
            if let Some(node) = ctx.scene.get_mut(particle.node) {
                node.local.translation += particle.velocity * DEBRIS_DT;
            }
        }

        if self.explosion_progress >= self.explosion_duration {
            if let Some(shockwave) = ctx.scene.get_mut(nodes.shockwave) {
                shockwave.visible = false;
            }
            self.phase = Phase::Cooldown;
            log::debug!("explosion finished, awaiting reset");
        }
    }

    fn tick_shake(&mut self, ctx: &mut SimContext) {
        if self.shake_frames == 0 {
            return;
        }
        ctx.camera.position.x += ctx.rng.signed(SHAKE_MAGNITUDE);
        ctx.camera.position.y += ctx.rng.signed(SHAKE_MAGNITUDE);
        self.shake_frames -= 1;
    }
}

impl Default for ImpactSequencer {
    fn default() -> Self {
        Self::new()
    }
}

/// XYZ-euler rotation that points a node's local -Z along `dir`.
fn facing_euler(dir: Vec3) -> Vec3 {
    Vec3::new(
        f32::atan2(dir.y, -dir.z),
        f32::atan2(-dir.x, (dir.y * dir.y + dir.z * dir.z).sqrt()),
        0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy;
    use helios_engine::{SimConfig, Transform};

    fn setup() -> (SimContext, SystemNodes, ImpactSequencer, OrbitalAnimator) {
        let mut ctx = SimContext::new(&SimConfig::default());
        let nodes = hierarchy::build(&mut ctx);
        (ctx, nodes, ImpactSequencer::new(), OrbitalAnimator::new())
    }

    #[test]
    fn facing_euler_points_negative_z_along_direction() {
        for dir in [
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 2.0, -3.0).normalize(),
            Vec3::new(-0.5, 0.7, 0.3).normalize(),
        ] {
            let transform = Transform {
                rotation: facing_euler(dir),
                ..Transform::default()
            };
            let forward = transform.to_affine().transform_vector3(Vec3::NEG_Z);
            assert!(
                (forward - dir).length() < 1e-4,
                "dir {:?} got {:?}",
                dir,
                forward
            );
        }
    }

    #[test]
    fn trigger_spawns_asteroid_at_offset_from_target() {
        let (mut ctx, nodes, mut seq, _) = setup();
        let target_pos = ctx.scene.world_position(nodes.target.unwrap()).unwrap();
        seq.trigger(&mut ctx, &nodes);

        assert_eq!(seq.mode(), SceneMode::Impact);
        assert!(seq.asteroid_active());
        let asteroid = ctx.scene.get(nodes.asteroid).unwrap();
        assert!(asteroid.visible);
        assert_eq!(asteroid.local.translation, target_pos + SPAWN_OFFSET);
    }

    #[test]
    fn trigger_without_target_is_a_noop() {
        let (mut ctx, mut nodes, mut seq, _) = setup();
        nodes.target = None;
        seq.trigger(&mut ctx, &nodes);
        assert_eq!(seq.mode(), SceneMode::Peaceful);
        assert!(!ctx.scene.get(nodes.asteroid).unwrap().visible);
    }

    #[test]
    fn trigger_while_inbound_is_a_noop() {
        let (mut ctx, nodes, mut seq, _) = setup();
        seq.trigger(&mut ctx, &nodes);
        for _ in 0..3 {
            seq.tick(&mut ctx, &nodes);
        }
        let position = ctx.scene.get(nodes.asteroid).unwrap().local.translation;

        seq.trigger(&mut ctx, &nodes);
        assert!(seq.asteroid_active());
        assert_eq!(
            ctx.scene.get(nodes.asteroid).unwrap().local.translation,
            position,
            "re-trigger must not respawn the asteroid"
        );
        assert!(seq.debris().is_empty());
    }

    #[test]
    fn inbound_and_exploding_are_mutually_exclusive() {
        let (mut ctx, nodes, mut seq, _) = setup();
        seq.trigger(&mut ctx, &nodes);
        for _ in 0..2000 {
            seq.tick(&mut ctx, &nodes);
            assert!(!(seq.asteroid_active() && seq.exploding_active()));
            if seq.mode() == SceneMode::Impact && !seq.asteroid_active() && !seq.exploding_active()
            {
                return; // reached cooldown
            }
        }
        panic!("sequence never completed");
    }

    #[test]
    fn collision_detection_respects_the_threshold_boundary() {
        let (mut ctx, nodes, mut seq, _) = setup();
        seq.trigger(&mut ctx, &nodes);
        let target_pos = ctx.scene.world_position(nodes.target.unwrap()).unwrap();

        // Park the asteroid so one step of homing lands exactly on the
        // threshold: distance == 20 is NOT a hit (strictly less-than).
        let offset = Vec3::new(COLLISION_THRESHOLD + ASTEROID_SPEED, 0.0, 0.0);
        ctx.scene.get_mut(nodes.asteroid).unwrap().local.translation = target_pos + offset;
        seq.tick(&mut ctx, &nodes);
        assert!(seq.asteroid_active(), "distance == threshold must not collide");

        // The next step crosses strictly below the threshold.
        seq.tick(&mut ctx, &nodes);
        assert!(seq.exploding_active());
        assert_eq!(seq.explosion_progress(), 0);
        assert_eq!(seq.debris().len(), DEBRIS_COUNT);
    }

    #[test]
    fn collision_fires_exactly_once() {
        let (mut ctx, nodes, mut seq, _) = setup();
        seq.trigger(&mut ctx, &nodes);
        let target_pos = ctx.scene.world_position(nodes.target.unwrap()).unwrap();
        ctx.scene.get_mut(nodes.asteroid).unwrap().local.translation =
            target_pos + Vec3::new(COLLISION_THRESHOLD, 0.0, 0.0);

        seq.tick(&mut ctx, &nodes);
        assert!(seq.exploding_active());
        for _ in 0..10 {
            seq.tick(&mut ctx, &nodes);
        }
        // A second spawn would double the debris count
        assert_eq!(seq.debris().len(), DEBRIS_COUNT);
    }

    #[test]
    fn reset_is_safe_from_peaceful() {
        let (mut ctx, nodes, mut seq, mut animator) = setup();
        seq.reset(&mut ctx, &nodes, &mut animator);
        assert_eq!(seq.mode(), SceneMode::Peaceful);
        assert!(seq.debris().is_empty());
    }

    #[test]
    fn shake_decrements_to_zero_and_stops() {
        let (mut ctx, nodes, mut seq, _) = setup();
        seq.trigger(&mut ctx, &nodes);
        let target_pos = ctx.scene.world_position(nodes.target.unwrap()).unwrap();
        ctx.scene.get_mut(nodes.asteroid).unwrap().local.translation =
            target_pos + Vec3::new(COLLISION_THRESHOLD, 0.0, 0.0);
        // The collision frame arms the counter and drains it once.
        seq.tick(&mut ctx, &nodes);
        assert_eq!(seq.shake_frames_remaining(), SHAKE_BUDGET - 1);

        for _ in 0..SHAKE_BUDGET - 1 {
            seq.tick(&mut ctx, &nodes);
        }
        assert_eq!(seq.shake_frames_remaining(), 0);

        let at_rest = ctx.camera.position;
        for _ in 0..5 {
            seq.tick(&mut ctx, &nodes);
        }
        assert_eq!(ctx.camera.position, at_rest, "jitter must cease at zero");
    }
}
