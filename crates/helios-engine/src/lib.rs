pub mod api;
pub mod core;
pub mod components;
pub mod input;
pub mod renderer;
pub mod assets;

// Re-export key types at crate root for convenience
pub use crate::api::runner::{NullHost, RenderHost, Runner};
pub use crate::api::sim::{SimConfig, SimContext, Simulation};
pub use crate::api::types::{NodeId, SimEvent};
pub use crate::assets::manifest::TextureManifest;
pub use crate::assets::registry::{TextureHandle, TextureRegistry};
pub use crate::components::light::{LightComponent, LightKind};
pub use crate::components::mesh::{Color, MeshComponent, Shape};
pub use crate::core::rng::Rng;
pub use crate::core::scene::{Node, Scene, Transform};
pub use crate::core::time::FixedTimestep;
pub use crate::input::queue::{InputEvent, InputQueue, KeyCode};
pub use crate::renderer::camera::{Camera, CameraUniform};
pub use crate::renderer::fly::FlyController;
