use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Texture manifest naming every image asset a scene wants loaded.
/// Loaded from a JSON file at startup; loading is fire-and-forget, so the
/// simulation never waits on any of these paths resolving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Named textures: logical name → relative image path.
    #[serde(default)]
    pub textures: HashMap<String, String>,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest() {
        let json = r#"{
            "textures": {
                "earth": "images/earthmap1k.jpg",
                "sun": "images/sunmap.jpg"
            }
        }"#;
        let manifest = TextureManifest::from_json(json).unwrap();
        assert_eq!(manifest.textures.len(), 2);
        assert_eq!(manifest.textures["earth"], "images/earthmap1k.jpg");
    }

    #[test]
    fn parse_empty_manifest() {
        let manifest = TextureManifest::from_json("{}").unwrap();
        assert!(manifest.textures.is_empty());
    }
}
