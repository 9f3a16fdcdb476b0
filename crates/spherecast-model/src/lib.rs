//! Shared scene description for spherecast.

use serde::{Deserialize, Serialize};

pub const SCENE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneFile {
    pub version: u32,
    pub spheres: Vec<SphereSpec>,
    pub lights: Vec<LightSpec>,
    pub atmosphere_color: [f64; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SphereSpec {
    pub position: [f64; 3],
    pub squared_radius: f64,
    pub color: [f64; 3],
}

/// `direction` points from the light into the scene. It does not need to be
/// unit length on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightSpec {
    pub direction: [f64; 3],
    pub color: [f64; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_file_round_trip_is_stable() {
        let scene = SceneFile {
            version: SCENE_VERSION,
            spheres: vec![
                SphereSpec {
                    position: [0.0, 0.0, 5.0],
                    squared_radius: 1.0,
                    color: [1.0, 0.1, 0.1],
                },
                SphereSpec {
                    position: [0.0, 100001.0, 0.0],
                    squared_radius: 1e10,
                    color: [0.1, 1.0, 0.1],
                },
            ],
            lights: vec![LightSpec {
                direction: [1.0, 1.0, 2.0],
                color: [0.4, 0.32, 0.2],
            }],
            atmosphere_color: [0.15, 0.15, 0.3],
        };

        let json = serde_json::to_string_pretty(&scene).unwrap();
        let decoded: SceneFile = serde_json::from_str(&json).unwrap();
        let json2 = serde_json::to_string_pretty(&decoded).unwrap();

        assert_eq!(scene, decoded);
        assert_eq!(json, json2);
    }

    #[test]
    fn scene_file_uses_snake_case_keys() {
        let json = r#"{
            "version": 1,
            "spheres": [{"position": [0, 0, 5], "squared_radius": 1, "color": [1, 1, 1]}],
            "lights": [],
            "atmosphere_color": [0, 0, 0]
        }"#;

        let scene: SceneFile = serde_json::from_str(json).unwrap();
        assert_eq!(scene.spheres.len(), 1);
        assert_eq!(scene.spheres[0].squared_radius, 1.0);
        assert!(scene.lights.is_empty());
    }
}
