//! Copy resolved item icons under their export names.

use std::fs;
use std::path::Path;

use giftgraph_catalog::{GiftGraph, HasGiftEdges};

use crate::icons::{IconMatch, IconResolver};

/// One planned icon copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCopy {
    pub prop_id: String,
    /// File name in the source image directory.
    pub source: String,
    /// File name in the destination directory: `<prop-id>_<slug>.png`.
    pub dest: String,
    pub fallback: bool,
    pub ambiguous: bool,
}

/// A copy that failed; the run carries on without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    pub prop_id: String,
    pub reason: String,
}

/// Resolve the icon of every prop that has at least one gift edge.
pub fn plan_copies(graph: &GiftGraph, resolver: &IconResolver<'_>) -> Vec<ImageCopy> {
    graph
        .props()
        .iter()
        .filter(|prop| !prop.edges().is_empty())
        .map(|prop| {
            let found = resolver.resolve(prop);
            ImageCopy {
                prop_id: prop.id.clone(),
                source: found.file().to_string(),
                dest: format!("{}.png", prop.icon_name()),
                fallback: matches!(found, IconMatch::Fallback(_)),
                ambiguous: matches!(found, IconMatch::Ambiguous { .. }),
            }
        })
        .collect()
}

/// Copy each planned image from `images_dir` to `dest_dir`.
///
/// Returns the number copied and the per-item failures.
pub fn copy_images(
    plan: &[ImageCopy],
    images_dir: &Path,
    dest_dir: &Path,
) -> (usize, Vec<CopyFailure>) {
    let mut failures = Vec::new();
    if let Err(e) = fs::create_dir_all(dest_dir) {
        log::warn!("Cannot create {}: {}", dest_dir.display(), e);
        failures.extend(plan.iter().map(|copy| CopyFailure {
            prop_id: copy.prop_id.clone(),
            reason: e.to_string(),
        }));
        return (0, failures);
    }

    let mut copied = 0;
    for copy in plan {
        let from = images_dir.join(&copy.source);
        let to = dest_dir.join(&copy.dest);
        match fs::copy(&from, &to) {
            Ok(_) => copied += 1,
            Err(e) => {
                log::warn!(
                    "Failed to copy {} to {}: {}",
                    from.display(),
                    to.display(),
                    e
                );
                failures.push(CopyFailure {
                    prop_id: copy.prop_id.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }
    (copied, failures)
}
