use glam::{Affine3A, EulerRot, Quat, Vec3};

use crate::api::types::NodeId;
use crate::components::light::LightComponent;
use crate::components::mesh::MeshComponent;

/// Local transform relative to the parent node (or world if root).
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub translation: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            self.translation,
        )
    }
}

/// Fat scene node — a single struct with optional components.
/// Designed for simplicity and rapid prototyping over ECS purity.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Whether the host should draw this node's mesh.
    pub visible: bool,
    /// Transform relative to the parent node.
    pub local: Transform,
    /// Mesh component (optional — nodes without meshes are pure pivots).
    pub mesh: Option<MeshComponent>,
    /// Light component (optional).
    pub light: Option<LightComponent>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// World transform, cached by `Scene::propagate`.
    world: Affine3A,
}

impl Node {
    /// Create a new node with the given ID at the origin.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            tag: String::new(),
            visible: true,
            local: Transform::default(),
            mesh: None,
            light: None,
            parent: None,
            children: Vec::new(),
            world: Affine3A::IDENTITY,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.local.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.local.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.local.scale = scale;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_light(mut self, light: LightComponent) -> Self {
        self.light = Some(light);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// World transform as of the last `Scene::propagate` call.
    pub fn world(&self) -> Affine3A {
        self.world
    }
}

/// Scene graph stored as a flat arena of nodes addressed by stable ids.
/// Parent/child relationships are explicit id links, never back-pointers,
/// so ownership stays acyclic. Designed for small-to-medium node counts
/// (hundreds, not millions).
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(256),
        }
    }

    /// Create a scene with a specific node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a root node to the scene.
    pub fn spawn(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.push(node);
        id
    }

    /// Add a node as a child of `parent`.
    pub fn spawn_child(&mut self, mut node: Node, parent: NodeId) -> NodeId {
        let id = node.id;
        node.parent = Some(parent);
        self.nodes.push(node);
        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children.push(id);
        }
        id
    }

    /// Reparent a node. Pass `None` to make it a root.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) {
        let old_parent = match self.get(child) {
            Some(node) => node.parent,
            None => return,
        };
        if let Some(old) = old_parent {
            if let Some(old_node) = self.get_mut(old) {
                old_node.children.retain(|&c| c != child);
            }
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
        }
        if let Some(p) = parent {
            if let Some(parent_node) = self.get_mut(p) {
                if !parent_node.children.contains(&child) {
                    parent_node.children.push(child);
                }
            }
        }
    }

    /// Remove a node and its entire subtree. Returns false if absent.
    pub fn despawn(&mut self, id: NodeId) -> bool {
        let (parent, children) = match self.get(id) {
            Some(node) => (node.parent, node.children.clone()),
            None => return false,
        };
        if let Some(p) = parent {
            if let Some(parent_node) = self.get_mut(p) {
                parent_node.children.retain(|&c| c != id);
            }
        }
        for child in children {
            self.despawn_subtree(child);
        }
        if let Some(idx) = self.nodes.iter().position(|n| n.id == id) {
            self.nodes.swap_remove(idx);
        }
        true
    }

    fn despawn_subtree(&mut self, id: NodeId) {
        let children = self
            .get(id)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        for child in children {
            self.despawn_subtree(child);
        }
        if let Some(idx) = self.nodes.iter().position(|n| n.id == id) {
            self.nodes.swap_remove(idx);
        }
    }

    /// Get a reference to a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get a mutable reference to a node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    /// Find the first node with the given tag (mutable).
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.tag == tag)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate over all nodes mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// Child ids of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear all nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Recompute and cache world transforms from the roots down.
    /// Called by the frame driver after all per-frame mutation, before render.
    pub fn propagate(&mut self) {
        let roots: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| n.parent.is_none())
            .map(|n| n.id)
            .collect();
        for root in roots {
            self.propagate_recursive(root, Affine3A::IDENTITY);
        }
    }

    fn propagate_recursive(&mut self, id: NodeId, parent_world: Affine3A) {
        let (world, children) = match self.get_mut(id) {
            Some(node) => {
                node.world = parent_world * node.local.to_affine();
                (node.world, node.children.clone())
            }
            None => return,
        };
        for child in children {
            self.propagate_recursive(child, world);
        }
    }

    /// Compute a node's current world transform by walking the parent chain.
    /// Unlike the cached value this reflects local mutations made earlier in
    /// the same frame, which is what moving-target queries need.
    pub fn compute_world(&self, id: NodeId) -> Option<Affine3A> {
        let node = self.get(id)?;
        let local = node.local.to_affine();
        Some(match node.parent {
            Some(parent) => self.compute_world(parent)? * local,
            None => local,
        })
    }

    /// Current world-space position of a node (post-drift, this frame).
    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        self.compute_world(id).map(|w| Vec3::from(w.translation))
    }

    /// Express a world-space point in a node's local coordinates.
    pub fn world_to_local(&self, id: NodeId, point: Vec3) -> Option<Vec3> {
        self.compute_world(id)
            .map(|w| w.inverse().transform_point3(point))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
