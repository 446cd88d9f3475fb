// galaxy_sim/src/simulation/config/catalog.rs

//! This module defines the `PresetCatalog` resource and the loader that
//! fills it with every galaxy preset found on disk.

use bevy::prelude::*;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use galaxy_core::prelude::GalaxyParameters;
use std::{collections::BTreeMap, path::Path};
use walkdir::WalkDir;

/// A Bevy resource that holds the parsed catalog of parameter presets.
/// The key is a namespace string (e.g., "spirals.tight") built from the
/// file's path relative to the presets directory.
#[derive(Resource, Default, Debug, Clone)]
pub struct PresetCatalog(pub BTreeMap<String, GalaxyParameters>);

impl PresetCatalog {
    pub fn get(&self, name: &str) -> Option<&GalaxyParameters> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Walks `catalog_path`, parses every `.toml` file as a `GalaxyParameters`
/// (fields missing from a file keep their defaults) and collects them.
/// Unreadable files are logged and skipped.
pub fn load_catalog_from_disk(catalog_path: &Path) -> PresetCatalog {
    let mut catalog = PresetCatalog::default();
    if !catalog_path.exists() {
        warn!(
            "Preset directory not found at {:?}, no presets will be loaded.",
            catalog_path
        );
        return catalog;
    }

    info!("Loading preset catalog from: {:?}", catalog_path);

    for entry in WalkDir::new(catalog_path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| {
            !e.file_type().is_dir() && e.path().extension().is_some_and(|ext| ext == "toml")
        })
    {
        let path = entry.path();
        // Create a key like "spirals.tight" from the path.
        let Ok(relative) = path.strip_prefix(catalog_path) else {
            continue;
        };
        let key = relative
            .with_extension("")
            .to_string_lossy()
            .replace(std::path::MAIN_SEPARATOR, ".");

        match Figment::from(Serialized::defaults(GalaxyParameters::default()))
            .merge(Toml::file(path))
            .extract::<GalaxyParameters>()
        {
            Ok(preset) => {
                debug!("Loaded preset: '{}'", key);
                catalog.0.insert(key, preset);
            }
            Err(e) => {
                error!("Failed to load preset from {:?}: {}", path, e);
            }
        }
    }

    info!("Preset catalog holds {} entries.", catalog.0.len());
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// A scratch directory unique to one test.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "galaxy_sim_catalog_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_directory_yields_empty_catalog() {
        let catalog = load_catalog_from_disk(Path::new("definitely/not/a/real/dir"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn nested_files_become_dotted_keys() {
        let dir = scratch_dir("nested");
        fs::create_dir_all(dir.join("spirals")).unwrap();
        fs::write(dir.join("calm.toml"), "branches = 2\nspin = 0.1\n").unwrap();
        fs::write(dir.join("spirals").join("tight.toml"), "spin = 0.95\n").unwrap();
        fs::write(dir.join("notes.txt"), "not a preset").unwrap();

        let catalog = load_catalog_from_disk(&dir);
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["calm", "spirals.tight"]);

        let calm = catalog.get("calm").unwrap();
        assert_eq!(calm.branches, 2);
        // Untouched fields keep their defaults.
        assert_eq!(calm.radius, GalaxyParameters::default().radius);
        assert_eq!(catalog.get("spirals.tight").unwrap().spin, 0.95);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn broken_presets_are_skipped() {
        let dir = scratch_dir("broken");
        fs::write(dir.join("good.toml"), "seed = 12345\n").unwrap();
        fs::write(dir.join("typo.toml"), "arms = 3\n").unwrap();
        fs::write(dir.join("garbage.toml"), "seed = [").unwrap();

        let catalog = load_catalog_from_disk(&dir);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["good"]);
        assert_eq!(catalog.get("good").unwrap().seed, 12_345);

        fs::remove_dir_all(&dir).unwrap();
    }
}
