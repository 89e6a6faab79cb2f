//! Extraction settings (`settings.toml`) and their resolution against CLI
//! overrides.
//!
//! Precedence: command-line flag, then the settings file, then the built-in
//! default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use giftgraph_catalog::NpcFilter;
use giftgraph_export::{ExportOptions, Metadata};
use giftgraph_import::{DuplicatePolicy, LoadOptions};

use crate::CliError;

/// Canonical path to the settings file: `~/.config/giftgraph/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("giftgraph").join("settings.toml")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ExtractConfig {
    /// SQLite game dump.
    pub database: Option<PathBuf>,
    /// Directory of extracted images searched for item icons.
    pub images_dir: PathBuf,
    /// Destination of the JSON documents.
    pub output_dir: PathBuf,
    /// Destination of the renamed item icons.
    pub image_output_dir: PathBuf,
    pub default_icon: String,
    pub gift_marker: String,
    pub excluded_npcs: Vec<String>,
    pub duplicate_gifts: DuplicatePolicy,
    pub metadata: Metadata,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        let filter = NpcFilter::default();
        Self {
            database: None,
            images_dir: PathBuf::from("images"),
            output_dir: PathBuf::from("site"),
            image_output_dir: PathBuf::from("site/images/items"),
            default_icon: "Item_Default".to_string(),
            gift_marker: filter.marker,
            excluded_npcs: filter.excluded,
            duplicate_gifts: DuplicatePolicy::default(),
            metadata: Metadata::default(),
        }
    }
}

/// Where the effective settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigOrigin {
    File(PathBuf),
    Defaults,
}

/// Overrides collected from command-line flags.
#[derive(Debug, Clone, Default)]
pub(crate) struct ConfigOverrides {
    pub database: Option<PathBuf>,
    pub images_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub image_output_dir: Option<PathBuf>,
    pub default_icon: Option<String>,
    pub keep_duplicate_gifts: bool,
}

impl ExtractConfig {
    /// Load settings from `explicit`, or from the default location.
    ///
    /// A missing default file yields the built-in defaults; a missing
    /// explicit file is an error.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<(Self, ConfigOrigin), CliError> {
        let path = match explicit {
            Some(p) => {
                if !p.is_file() {
                    return Err(CliError::config(format!(
                        "settings file not found: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => {
                let p = settings_path();
                if !p.is_file() {
                    log::debug!("No settings file at {}; using defaults", p.display());
                    return Ok((Self::default(), ConfigOrigin::Defaults));
                }
                p
            }
        };

        let contents = std::fs::read_to_string(&path)?;
        let config = Self::parse(&contents)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok((config, ConfigOrigin::File(path)))
    }

    pub(crate) fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub(crate) fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(p) = overrides.database {
            self.database = Some(p);
        }
        if let Some(p) = overrides.images_dir {
            self.images_dir = p;
        }
        if let Some(p) = overrides.output_dir {
            self.output_dir = p;
        }
        if let Some(p) = overrides.image_output_dir {
            self.image_output_dir = p;
        }
        if let Some(icon) = overrides.default_icon {
            self.default_icon = icon;
        }
        if overrides.keep_duplicate_gifts {
            self.duplicate_gifts = DuplicatePolicy::Keep;
        }
    }

    /// The game dump path, which has no default.
    pub(crate) fn database(&self) -> Result<&Path, CliError> {
        self.database.as_deref().ok_or_else(|| {
            CliError::config("no game dump given; pass --database or set `database` in settings.toml")
        })
    }

    pub(crate) fn load_options(&self) -> LoadOptions {
        LoadOptions {
            npc_filter: NpcFilter {
                excluded: self.excluded_npcs.clone(),
                marker: self.gift_marker.clone(),
            },
            duplicates: self.duplicate_gifts,
        }
    }

    pub(crate) fn export_options(&self, dry_run: bool) -> ExportOptions {
        ExportOptions {
            output_dir: self.output_dir.clone(),
            images_dir: self.images_dir.clone(),
            image_output_dir: self.image_output_dir.clone(),
            default_icon: self.default_icon.clone(),
            metadata: self.metadata.clone(),
            dry_run,
        }
    }

    pub(crate) fn to_toml(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::config(e.to_string()))
    }
}

/// Commented starter file written by `config init`.
pub(crate) const SETTINGS_TEMPLATE: &str = r#"# giftgraph settings. Command-line flags take precedence over these values.

# SQLite game dump to read.
# database = "/path/to/game.db"

# Extracted images searched for item icons (matched as "<icon>-CAB").
images_dir = "images"

# Where props.json, npcs.json, gifts.json and metadata.json are written.
output_dir = "site"

# Where item icons are copied as <prop-id>_<slug>.png.
image_output_dir = "site/images/items"

# Fallback icon; must match exactly one extracted image.
default_icon = "Item_Default"

# Interaction flag an NPC needs to receive gifts.
gift_marker = "SendGift"

# NPCs never exported, by display name.
excluded_npcs = ["Yoyo", "First Child", "Second Child"]

# "suppress" keeps one edge per prop and level; "keep" allows repeats.
duplicate_gifts = "suppress"

[metadata]
game_version = ""
platform = ""
dump_date = ""
"#;

/// Write [`SETTINGS_TEMPLATE`] to `path` atomically. Refuses to overwrite an
/// existing file unless `force` is set.
pub(crate) fn write_template(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, SETTINGS_TEMPLATE)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_to_defaults() {
        let config = ExtractConfig::parse(SETTINGS_TEMPLATE).unwrap();
        assert_eq!(config, ExtractConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = ExtractConfig::parse(
            r#"
            database = "game.db"
            duplicate_gifts = "keep"
            excluded_npcs = []

            [metadata]
            platform = "Switch"
            "#,
        )
        .unwrap();
        assert_eq!(config.database, Some(PathBuf::from("game.db")));
        assert_eq!(config.duplicate_gifts, DuplicatePolicy::Keep);
        assert!(config.excluded_npcs.is_empty());
        assert_eq!(config.default_icon, "Item_Default");
        assert_eq!(config.metadata.platform, "Switch");
        assert_eq!(config.metadata.game_version, "");
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(ExtractConfig::parse(r#"duplicate_gifts = "merge""#).is_err());
    }

    #[test]
    fn flags_override_file_values() {
        let mut config = ExtractConfig::parse(
            r#"
            database = "from-file.db"
            output_dir = "file-out"
            "#,
        )
        .unwrap();
        config.apply(ConfigOverrides {
            database: Some(PathBuf::from("flag.db")),
            keep_duplicate_gifts: true,
            ..ConfigOverrides::default()
        });
        assert_eq!(config.database().unwrap(), Path::new("flag.db"));
        assert_eq!(config.output_dir, PathBuf::from("file-out"));
        assert_eq!(config.load_options().duplicates, DuplicatePolicy::Keep);
    }

    #[test]
    fn database_is_required() {
        assert!(matches!(
            ExtractConfig::default().database(),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn load_options_carry_the_npc_filter() {
        let mut config = ExtractConfig::default();
        config.excluded_npcs = vec!["Gale".to_string()];
        config.gift_marker = "Gift".to_string();
        let options = config.load_options();
        assert!(!options.npc_filter.is_eligible("Gale", Some("Gift")));
        assert!(options.npc_filter.is_eligible("Emily", Some("Talk,Gift")));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            ExtractConfig::load(Some(missing.as_path())),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn init_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("giftgraph/settings.toml");

        write_template(&path, false).unwrap();
        let (config, origin) = ExtractConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config, ExtractConfig::default());
        assert_eq!(origin, ConfigOrigin::File(path.clone()));

        assert!(write_template(&path, false).is_err());
        write_template(&path, true).unwrap();
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
