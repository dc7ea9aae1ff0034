//! Transform-hierarchy builder: turns the static body descriptors into the
//! nested pivot structure the animator and impact sequencer drive.
//!
//! Runs exactly once at init. Moons are synthesized from the injected RNG,
//! so a seed fully determines the scene.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;
use helios_engine::{Color, LightComponent, MeshComponent, Node, NodeId, SimContext};

use crate::bodies::{self, PlanetDesc, PLANETS};

/// Shockwave sphere base radius and opacity.
pub const SHOCKWAVE_RADIUS: f32 = 10.0;
pub const SHOCKWAVE_OPACITY: f32 = 0.8;

/// One synthesized moon: its orbit pivot and fixed angular speed.
#[derive(Debug, Clone)]
pub struct MoonNodes {
    pub pivot: NodeId,
    /// Radians per frame, fixed at creation.
    pub speed: f32,
}

/// Scene ids for one planet.
#[derive(Debug, Clone)]
pub struct PlanetNodes {
    /// The body mesh, child of the orbit pivot.
    pub body: NodeId,
    /// The orbit pivot, exclusive parent of the body.
    pub pivot: NodeId,
    pub moons: Vec<MoonNodes>,
    /// Revolution speed of the pivot, radians per frame.
    pub speed: f32,
}

/// Id map for everything the per-frame systems touch.
#[derive(Debug, Clone)]
pub struct SystemNodes {
    /// Shared solar-system group; carries the vertical drift.
    pub root: NodeId,
    pub sun: NodeId,
    pub starfield: NodeId,
    pub planets: Vec<PlanetNodes>,
    /// Hidden until the impact sequence is triggered.
    pub asteroid: NodeId,
    /// Hidden shockwave sphere, child of the shared root.
    pub shockwave: NodeId,
    /// Empty group that owns debris particles for their whole lifetime.
    pub debris_group: NodeId,
    /// The body the asteroid homes in on.
    pub target: Option<NodeId>,
}

/// Build the full scene. Populates the hierarchy and returns the id map.
pub fn build(ctx: &mut SimContext) -> SystemNodes {
    // ── Shared root ─────────────────────────────────────────────────
    let root_id = ctx.next_id();
    let root = ctx.scene.spawn(Node::new(root_id).with_tag("solar-system"));

    let sun_texture = ctx.textures.request(bodies::SUN_TEXTURE);
    let sun_id = ctx.next_id();
    let sun = ctx.scene.spawn_child(
        Node::new(sun_id)
            .with_tag("sun")
            .with_mesh(
                MeshComponent::sphere(bodies::SUN_RADIUS)
                    .with_texture(sun_texture)
                    .with_emissive(1.0),
            ),
        root,
    );

    // Lights: point source at the sun, plus a dim fill
    let sun_light = ctx.next_id();
    ctx.scene.spawn_child(
        Node::new(sun_light)
            .with_tag("sun-light")
            .with_light(LightComponent::point(
                bodies::SUN_LIGHT_INTENSITY,
                bodies::SUN_LIGHT_RANGE,
            )),
        root,
    );
    let ambient = ctx.next_id();
    ctx.scene.spawn(
        Node::new(ambient)
            .with_tag("ambient-light")
            .with_light(LightComponent::ambient(bodies::AMBIENT_INTENSITY)),
    );

    // ── Starfield ───────────────────────────────────────────────────
    let starfield_texture = ctx.textures.request(bodies::STARFIELD_TEXTURE);
    let starfield_id = ctx.next_id();
    let starfield = ctx.scene.spawn(
        Node::new(starfield_id).with_tag("starfield").with_mesh(
            MeshComponent::sphere(bodies::STARFIELD_RADIUS)
                .with_texture(starfield_texture)
                .with_emissive(1.0)
                .with_double_sided(true),
        ),
    );

    // ── Planets ─────────────────────────────────────────────────────
    let mut planets = Vec::with_capacity(PLANETS.len());
    let mut target = None;
    for (index, desc) in PLANETS.iter().enumerate() {
        let planet = build_planet(ctx, root, desc);
        if index == bodies::IMPACT_TARGET {
            target = Some(planet.body);
        }
        planets.push(planet);
    }

    // ── Asteroid + impact props ─────────────────────────────────────
    let asteroid_texture = ctx.textures.request(bodies::ASTEROID_TEXTURE);
    let asteroid_id = ctx.next_id();
    let asteroid = ctx.scene.spawn(
        Node::new(asteroid_id)
            .with_tag("asteroid")
            .with_visible(false)
            .with_mesh(
                MeshComponent::rock(bodies::ASTEROID_RADIUS, bodies::ASTEROID_IRREGULARITY)
                    .with_texture(asteroid_texture),
            ),
    );

    let shockwave_id = ctx.next_id();
    let shockwave = ctx.scene.spawn_child(
        Node::new(shockwave_id)
            .with_tag("shockwave")
            .with_visible(false)
            .with_mesh(
                MeshComponent::sphere(SHOCKWAVE_RADIUS)
                    .with_color(Color::new(1.0, 0.0, 0.0))
                    .with_emissive(1.0)
                    .with_opacity(SHOCKWAVE_OPACITY),
            ),
        root,
    );

    let debris_id = ctx.next_id();
    let debris_group = ctx.scene.spawn(Node::new(debris_id).with_tag("debris"));

    log::info!(
        "solar system built: {} planets, {} nodes",
        planets.len(),
        ctx.scene.len()
    );

    SystemNodes {
        root,
        sun,
        starfield,
        planets,
        asteroid,
        shockwave,
        debris_group,
        target,
    }
}

fn build_planet(ctx: &mut SimContext, root: NodeId, desc: &PlanetDesc) -> PlanetNodes {
    let texture = ctx.textures.request(desc.texture);

    let pivot_id = ctx.next_id();
    let pivot = ctx
        .scene
        .spawn_child(Node::new(pivot_id).with_tag(format!("{}-orbit", desc.name)), root);

    let body_id = ctx.next_id();
    let body = ctx.scene.spawn_child(
        Node::new(body_id)
            .with_tag(desc.name)
            .with_translation(desc.initial_position())
            .with_rotation(Vec3::new(0.0, 0.0, desc.axial_tilt_deg.to_radians()))
            .with_mesh(MeshComponent::sphere(desc.radius).with_texture(texture)),
        pivot,
    );

    let mut moons = Vec::with_capacity(desc.moons as usize);
    for _ in 0..desc.moons {
        moons.push(build_moon(ctx, body, desc));
    }

    if desc.name == "Saturn" {
        build_ring(ctx, body, desc);
    }
    build_orbit_path(ctx, desc);

    PlanetNodes {
        body,
        pivot,
        moons,
        speed: desc.speed,
    }
}

fn build_moon(ctx: &mut SimContext, body: NodeId, desc: &PlanetDesc) -> MoonNodes {
    let radius = desc.radius
        * ctx
            .rng
            .range(bodies::MOON_RADIUS_FRAC.0, bodies::MOON_RADIUS_FRAC.1);
    let distance = desc.radius
        + radius
        + ctx
            .rng
            .range(bodies::MOON_CLEARANCE.0, bodies::MOON_CLEARANCE.1);
    let speed = ctx
        .rng
        .range(bodies::MOON_SPEED_FACTOR.0, bodies::MOON_SPEED_FACTOR.1)
        * bodies::MOON_SPEED_SCALE;
    let grey = Color::new(bodies::MOON_GREY, bodies::MOON_GREY, bodies::MOON_GREY)
        .scaled(ctx.rng.range(bodies::MOON_GREY_DIM.0, bodies::MOON_GREY_DIM.1));

    // Random initial yaw so sibling moons are not phase-aligned
    let pivot_id = ctx.next_id();
    let pivot = ctx.scene.spawn_child(
        Node::new(pivot_id)
            .with_tag(format!("{}-moon-orbit", desc.name))
            .with_rotation(Vec3::new(0.0, ctx.rng.range(0.0, TAU), 0.0)),
        body,
    );

    let moon_id = ctx.next_id();
    ctx.scene.spawn_child(
        Node::new(moon_id)
            .with_tag(format!("{}-moon", desc.name))
            .with_translation(Vec3::new(distance, 0.0, 0.0))
            .with_mesh(MeshComponent::sphere(radius).with_color(grey)),
        pivot,
    );

    MoonNodes { pivot, speed }
}

fn build_ring(ctx: &mut SimContext, body: NodeId, desc: &PlanetDesc) {
    let texture = ctx.textures.request(bodies::RING_TEXTURE);
    let ring_id = ctx.next_id();
    ctx.scene.spawn_child(
        Node::new(ring_id)
            .with_tag(format!("{}-ring", desc.name))
            .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))
            .with_mesh(
                MeshComponent::ring(
                    desc.radius + bodies::RING_INNER_OFFSET,
                    desc.radius + bodies::RING_OUTER_OFFSET,
                )
                .with_texture(texture)
                .with_opacity(bodies::RING_OPACITY)
                .with_double_sided(true),
            ),
        body,
    );
}

/// Static grey annulus marking the orbit path. Not part of the drifting
/// group, so it stays put while the system floats upward.
fn build_orbit_path(ctx: &mut SimContext, desc: &PlanetDesc) {
    let path_id = ctx.next_id();
    ctx.scene.spawn(
        Node::new(path_id)
            .with_tag(format!("{}-path", desc.name))
            .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))
            .with_mesh(
                MeshComponent::ring(
                    desc.distance - bodies::ORBIT_PATH_HALF_WIDTH,
                    desc.distance + bodies::ORBIT_PATH_HALF_WIDTH,
                )
                .with_color(Color::new(
                    bodies::ORBIT_PATH_GREY,
                    bodies::ORBIT_PATH_GREY,
                    bodies::ORBIT_PATH_GREY,
                ))
                .with_emissive(1.0)
                .with_opacity(bodies::ORBIT_PATH_OPACITY)
                .with_double_sided(true),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use helios_engine::{Shape, SimConfig};

    fn build_system() -> (SimContext, SystemNodes) {
        let mut ctx = SimContext::new(&SimConfig::default());
        let nodes = build(&mut ctx);
        ctx.scene.propagate();
        (ctx, nodes)
    }

    #[test]
    fn one_planet_node_per_descriptor() {
        let (ctx, nodes) = build_system();
        assert_eq!(nodes.planets.len(), PLANETS.len());
        for (planet, desc) in nodes.planets.iter().zip(PLANETS.iter()) {
            let body = ctx.scene.get(planet.body).unwrap();
            assert_eq!(body.tag, desc.name);
            assert_eq!(body.parent(), Some(planet.pivot));
        }
    }

    #[test]
    fn orbit_pivots_hang_off_the_shared_root() {
        let (ctx, nodes) = build_system();
        for planet in &nodes.planets {
            assert_eq!(ctx.scene.get(planet.pivot).unwrap().parent(), Some(nodes.root));
        }
    }

    #[test]
    fn moon_counts_match_descriptors() {
        let (_, nodes) = build_system();
        for (planet, desc) in nodes.planets.iter().zip(PLANETS.iter()) {
            assert_eq!(planet.moons.len(), desc.moons as usize);
        }
    }

    #[test]
    fn moon_parameters_stay_in_their_ranges() {
        let (ctx, nodes) = build_system();
        for (planet, desc) in nodes.planets.iter().zip(PLANETS.iter()) {
            for moon in &planet.moons {
                let pivot = ctx.scene.get(moon.pivot).unwrap();
                assert_eq!(pivot.parent(), Some(planet.body));

                let speed_lo = bodies::MOON_SPEED_FACTOR.0 * bodies::MOON_SPEED_SCALE;
                let speed_hi = bodies::MOON_SPEED_FACTOR.1 * bodies::MOON_SPEED_SCALE;
                assert!(moon.speed >= speed_lo && moon.speed < speed_hi);

                let moon_body = ctx.scene.get(pivot.children()[0]).unwrap();
                let mesh = moon_body.mesh.unwrap();
                let Shape::Sphere { radius } = mesh.shape else {
                    panic!("moon should be a sphere");
                };
                assert!(radius >= desc.radius * bodies::MOON_RADIUS_FRAC.0);
                assert!(radius < desc.radius * bodies::MOON_RADIUS_FRAC.1);

                let orbit = moon_body.local.translation.x;
                assert!(orbit >= desc.radius + radius + bodies::MOON_CLEARANCE.0);
                assert!(orbit < desc.radius + radius + bodies::MOON_CLEARANCE.1);
            }
        }
    }

    #[test]
    fn moons_are_not_phase_aligned() {
        let (ctx, nodes) = build_system();
        let jupiter = &nodes.planets[crate::bodies::JUPITER];
        let yaws: Vec<f32> = jupiter
            .moons
            .iter()
            .map(|m| ctx.scene.get(m.pivot).unwrap().local.rotation.y)
            .collect();
        let distinct = yaws
            .iter()
            .filter(|&&y| yaws.iter().filter(|&&o| (o - y).abs() < 1e-6).count() == 1)
            .count();
        assert!(distinct >= yaws.len() - 1, "yaws suspiciously aligned: {:?}", yaws);
    }

    #[test]
    fn saturn_carries_a_tilted_ring() {
        let (ctx, nodes) = build_system();
        let saturn = &nodes.planets[crate::bodies::SATURN];
        let ring_id = ctx
            .scene
            .children(saturn.body)
            .iter()
            .copied()
            .find(|&c| ctx.scene.get(c).unwrap().tag == "Saturn-ring")
            .expect("Saturn should have a ring child");
        let ring = ctx.scene.get(ring_id).unwrap();
        assert!((ring.local.rotation.x - FRAC_PI_2).abs() < 1e-6);
        let Shape::Ring { inner, outer } = ring.mesh.unwrap().shape else {
            panic!("ring should be an annulus");
        };
        assert_eq!(inner, 60.0);
        assert_eq!(outer, 90.0);
    }

    #[test]
    fn saturn_body_is_axially_tilted() {
        let (ctx, nodes) = build_system();
        let saturn = ctx.scene.get(nodes.planets[crate::bodies::SATURN].body).unwrap();
        assert!((saturn.local.rotation.z - 26.7f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn inclined_planets_sit_above_the_ecliptic() {
        let (ctx, nodes) = build_system();
        let mercury = ctx.scene.get(nodes.planets[crate::bodies::MERCURY].body).unwrap();
        let expected = (7.0f32).to_radians().tan() * 100.0;
        assert!((mercury.local.translation.y - expected).abs() < 1e-3);
    }

    #[test]
    fn impact_props_start_hidden() {
        let (ctx, nodes) = build_system();
        assert!(!ctx.scene.get(nodes.asteroid).unwrap().visible);
        assert!(!ctx.scene.get(nodes.shockwave).unwrap().visible);
        assert!(ctx.scene.children(nodes.debris_group).is_empty());
        assert!(nodes.target.is_some());
    }

    #[test]
    fn same_seed_builds_identical_moons() {
        let (ctx_a, nodes_a) = build_system();
        let (ctx_b, nodes_b) = build_system();
        for (pa, pb) in nodes_a.planets.iter().zip(nodes_b.planets.iter()) {
            for (ma, mb) in pa.moons.iter().zip(pb.moons.iter()) {
                assert_eq!(ma.speed, mb.speed);
                let ya = ctx_a.scene.get(ma.pivot).unwrap().local.rotation.y;
                let yb = ctx_b.scene.get(mb.pivot).unwrap().local.rotation.y;
                assert_eq!(ya, yb);
            }
        }
    }

    #[test]
    fn lights_are_present() {
        let (ctx, _) = build_system();
        assert!(ctx.scene.find_by_tag("sun-light").unwrap().light.is_some());
        assert!(ctx.scene.find_by_tag("ambient-light").unwrap().light.is_some());
    }
}
