use std::collections::HashMap;

use crate::assets::manifest::TextureManifest;

/// Opaque handle to a texture the host may or may not have finished loading.
/// A mesh referencing an unresolved handle renders untextured; nothing in
/// the simulation blocks on the upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Registry of requested textures.
///
/// `request` allocates a handle immediately and records the path for the
/// host to pick up; there is no completion callback consumed by the core.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    paths: Vec<String>,
    by_path: HashMap<String, TextureHandle>,
    by_name: HashMap<String, TextureHandle>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed manifest, keeping name-based lookup.
    pub fn from_manifest(manifest: &TextureManifest) -> Self {
        let mut registry = Self::new();
        for (name, path) in &manifest.textures {
            let handle = registry.request(path);
            registry.by_name.insert(name.clone(), handle);
        }
        registry
    }

    /// Request a texture by path. Returns the same handle for a repeated path.
    pub fn request(&mut self, path: &str) -> TextureHandle {
        if let Some(&handle) = self.by_path.get(path) {
            return handle;
        }
        let handle = TextureHandle(self.paths.len() as u32);
        log::debug!("texture requested: {} -> {:?}", path, handle);
        self.paths.push(path.to_string());
        self.by_path.insert(path.to_string(), handle);
        handle
    }

    /// Look up a manifest-named texture. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<TextureHandle> {
        self.by_name.get(name).copied()
    }

    /// The path behind a handle.
    pub fn path(&self, handle: TextureHandle) -> Option<&str> {
        self.paths.get(handle.0 as usize).map(String::as_str)
    }

    /// Iterate over (handle, path) pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (TextureHandle, &str)> {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, p)| (TextureHandle(i as u32), p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
