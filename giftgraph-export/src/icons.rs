//! Best-effort icon lookup against a directory of extracted images.
//!
//! Extracted textures are named after their asset bundle, e.g.
//! `Item_Apple-CAB-3f2a….png`. A prop's `Icon_Path` (`Item/Icon/Item_Apple`)
//! is reduced to its base name and matched case-insensitively as the
//! substring `<basename>-CAB`.

use std::fs;
use std::path::Path;

use giftgraph_catalog::Prop;

use crate::error::ExportError;

/// Suffix every extracted image name carries after its asset name.
const BUNDLE_MARKER: &str = "-CAB";

/// Sorted list of image file names available for icon lookup.
#[derive(Debug, Clone, Default)]
pub struct ImageIndex {
    names: Vec<String>,
}

impl ImageIndex {
    /// Index every regular file directly inside `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, ExportError> {
        if !dir.is_dir() {
            return Err(ExportError::ImagesDirNotFound(dir.display().to_string()));
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        log::debug!("Indexed {} images in {}", names.len(), dir.display());
        Ok(Self::from_names(names))
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names containing `<basename>-CAB`, ignoring case, in index order.
    pub fn matches(&self, basename: &str) -> Vec<&str> {
        let needle = format!("{basename}{BUNDLE_MARKER}").to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

/// Reduce an icon path to its base name: the last path segment without its
/// extension. Both `/` and `\` separate segments.
pub fn icon_basename(icon_path: &str) -> &str {
    let file = icon_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(icon_path)
        .trim();
    match file.rfind('.') {
        Some(dot) if dot > 0 => &file[..dot],
        _ => file,
    }
}

/// Outcome of resolving one prop's icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMatch<'a> {
    /// Exactly one image matched.
    Unique(&'a str),
    /// Several images matched; the first in index order was picked.
    Ambiguous { first: &'a str, count: usize },
    /// Nothing matched; the default icon was used.
    Fallback(&'a str),
}

impl<'a> IconMatch<'a> {
    /// The image file name to copy.
    pub fn file(&self) -> &'a str {
        match *self {
            Self::Unique(file) | Self::Fallback(file) => file,
            Self::Ambiguous { first, .. } => first,
        }
    }
}

/// Resolves prop icons against an [`ImageIndex`], falling back to a default
/// icon that is validated up front.
#[derive(Debug)]
pub struct IconResolver<'a> {
    index: &'a ImageIndex,
    default: &'a str,
}

impl<'a> IconResolver<'a> {
    /// Fails unless `default_icon` matches exactly one indexed image.
    pub fn new(index: &'a ImageIndex, default_icon: &str) -> Result<Self, ExportError> {
        let basename = icon_basename(default_icon);
        let matches = index.matches(basename);
        match matches[..] {
            [only] => Ok(Self {
                index,
                default: only,
            }),
            [] => Err(ExportError::DefaultIconMissing {
                pattern: format!("{basename}{BUNDLE_MARKER}"),
            }),
            _ => Err(ExportError::DefaultIconAmbiguous {
                pattern: format!("{basename}{BUNDLE_MARKER}"),
                count: matches.len(),
            }),
        }
    }

    /// The image file the default icon resolved to.
    pub fn default_file(&self) -> &'a str {
        self.default
    }

    /// Resolve a raw icon path. `label` names the prop in warnings.
    pub fn resolve_path(&self, icon_path: Option<&str>, label: &str) -> IconMatch<'a> {
        let basename = icon_path.map(icon_basename).unwrap_or_default();
        if basename.is_empty() {
            log::warn!("{label}: no icon path, using default icon {}", self.default);
            return IconMatch::Fallback(self.default);
        }

        let matches = self.index.matches(basename);
        match matches[..] {
            [] => {
                log::warn!(
                    "{label}: no image matches {basename}{BUNDLE_MARKER}, using default icon {}",
                    self.default
                );
                IconMatch::Fallback(self.default)
            }
            [only] => IconMatch::Unique(only),
            [first, ..] => {
                log::warn!(
                    "{label}: {} images match {basename}{BUNDLE_MARKER}, using {first}",
                    matches.len()
                );
                IconMatch::Ambiguous {
                    first,
                    count: matches.len(),
                }
            }
        }
    }

    pub fn resolve(&self, prop: &Prop) -> IconMatch<'a> {
        let label = format!("Prop {} ({})", prop.id, prop.name);
        self.resolve_path(prop.icon_path.as_deref(), &label)
    }
}
