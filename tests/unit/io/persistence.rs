//! Tests for tile set JSON storage

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use wavetile::AlgorithmError;
    use wavetile::io::persistence::{
        TileSetDefinition, from_json, load_from_file, save_to_file, to_json,
    };
    use wavetile::spatial::presets::coastline;
    use wavetile::spatial::tiles::Category::{Grass as G, Water as W};
    use wavetile::spatial::tiles::Direction;
    use wavetile::spatial::tileset::{AssetMetadata, TileSet};

    // Tests categories are stored as integer codes
    // Verified by serializing categories by name
    #[test]
    fn test_to_json_uses_codes() {
        let tileset = TileSet::new(&[[W; 9], [G; 9]]).expect("valid tile set");
        let json = to_json(&tileset).expect("encodes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["tiles"][1][4], 1);
        assert_eq!(value["resolution"], 16);
    }

    // Tests a reloaded tile set answers adjacency queries identically
    // Verified by reordering tiles on load
    #[test]
    fn test_json_preserves_adjacency() {
        let original = coastline().expect("preset builds");
        let restored = from_json(&to_json(&original).expect("encodes")).expect("decodes");

        assert_eq!(restored.tile_count(), original.tile_count());
        for id in 0..original.tile_count() {
            for direction in Direction::ALL {
                assert_eq!(
                    restored.compatible_tiles(id, direction).ok(),
                    original.compatible_tiles(id, direction).ok()
                );
            }
        }
    }

    // Tests malformed definitions surface construction errors
    // Verified by skipping validation on load
    #[test]
    fn test_from_json_validation() {
        assert!(matches!(
            from_json(r#"{"tiles": [[0,0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0,0]], "resolution": 8}"#),
            Err(AlgorithmError::DuplicateTile { index: 1, first: 0 })
        ));
        assert!(matches!(
            from_json(r#"{"tiles": [[0,0,0,0,9,0,0,0,0]], "resolution": 8}"#),
            Err(AlgorithmError::Serialization { .. })
        ));
        assert!(matches!(
            from_json(r#"{"tiles": [[0,0,0]], "resolution": 8}"#),
            Err(AlgorithmError::InvalidTileDefinition { index: 0, len: 3 })
        ));
    }

    // Tests saving and loading through the file system
    // Verified by writing to the parent directory instead
    #[test]
    fn test_save_and_load_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("sets").join("water.json");
        let tileset = TileSet::with_metadata(
            &[[W; 9], [G; 9]],
            AssetMetadata {
                resolution: 24,
                asset_dir: PathBuf::from("art"),
            },
        )
        .expect("valid tile set");

        save_to_file(&tileset, &path).expect("save succeeds");
        let loaded = load_from_file(&path).expect("load succeeds");

        assert_eq!(loaded.tile_count(), 2);
        assert_eq!(loaded.metadata().resolution, 24);
        assert_eq!(loaded.metadata().asset_dir, dir.path().join("sets").join("art"));
    }

    // Tests a missing asset directory stays empty after loading
    // Verified by joining empty paths onto the file location
    #[test]
    fn test_load_without_asset_dir() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("plain.json");
        std::fs::write(&path, r#"{"tiles": [[1,1,1,1,1,1,1,1,1]], "resolution": 8}"#)
            .expect("write definition");

        let loaded = load_from_file(&path).expect("load succeeds");
        assert!(loaded.metadata().asset_dir.as_os_str().is_empty());
    }

    // Tests missing files and bad JSON report the path
    // Verified by returning the bare serde error
    #[test]
    fn test_load_errors_name_path() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_from_file(&missing),
            Err(AlgorithmError::FileSystem { .. })
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{").expect("write definition");
        match load_from_file(&broken) {
            Err(AlgorithmError::Serialization { path, .. }) => assert_eq!(path, broken),
            other => panic!("expected serialization error, got {other:?}"),
        }
    }

    // Tests the definition captures tiles in id order
    // Verified by collecting tiles in reverse
    #[test]
    fn test_definition_from_tileset() {
        let tileset = TileSet::new(&[[G; 9], [W; 9]]).expect("valid tile set");
        let definition = TileSetDefinition::from_tileset(&tileset);

        assert_eq!(definition.tiles, vec![vec![G; 9], vec![W; 9]]);
        assert_eq!(definition.into_tileset().map(|t| t.tile_count()).ok(), Some(2));
    }
}
