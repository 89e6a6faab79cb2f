//! Export a loaded gift graph as JSON documents plus renamed item icons.
//!
//! The output layout is what the static site reads:
//!
//! ```text
//! <output_dir>/props.json
//! <output_dir>/npcs.json
//! <output_dir>/gifts.json
//! <output_dir>/metadata.json
//! <image_output_dir>/<prop-id>_<slug>.png
//! ```

pub mod error;
pub mod icons;
pub mod images;
pub mod records;
pub mod writer;

pub use error::ExportError;
pub use icons::{IconMatch, IconResolver, ImageIndex, icon_basename};
pub use images::{CopyFailure, ImageCopy, copy_images, plan_copies};
pub use records::{ExportDocuments, GiftRecord, Metadata, NpcRecord, PropRecord};
pub use writer::{write_documents, write_json};

use std::path::PathBuf;

use giftgraph_catalog::GiftGraph;

/// Where and how to export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    /// Directory of extracted images searched for icons.
    pub images_dir: PathBuf,
    pub image_output_dir: PathBuf,
    /// Base name of the fallback icon, e.g. `Item_Default`.
    pub default_icon: String,
    pub metadata: Metadata,
    /// Resolve everything but write nothing.
    pub dry_run: bool,
}

/// What an export did.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub props: usize,
    pub npcs: usize,
    pub gifts: usize,
    /// Documents written (empty on a dry run).
    pub documents: Vec<PathBuf>,
    /// Icons planned for copying.
    pub images_planned: usize,
    pub images_copied: usize,
    pub icon_fallbacks: usize,
    pub icon_ambiguous: usize,
    pub copy_failures: Vec<CopyFailure>,
}

/// Resolve icons, write the JSON documents and copy item icons.
///
/// A default icon that does not match exactly one image is fatal and is
/// checked before anything is written. Individual copy failures are
/// collected in the summary.
pub fn export(graph: &GiftGraph, options: &ExportOptions) -> Result<ExportSummary, ExportError> {
    let index = ImageIndex::from_dir(&options.images_dir)?;
    let resolver = IconResolver::new(&index, &options.default_icon)?;
    log::debug!(
        "Default icon {} resolved to {}",
        options.default_icon,
        resolver.default_file()
    );

    let plan = plan_copies(graph, &resolver);
    let docs = ExportDocuments::build(graph, options.metadata.clone());

    let mut summary = ExportSummary {
        props: docs.props.len(),
        npcs: docs.npcs.len(),
        gifts: docs.gifts.len(),
        images_planned: plan.len(),
        icon_fallbacks: plan.iter().filter(|c| c.fallback).count(),
        icon_ambiguous: plan.iter().filter(|c| c.ambiguous).count(),
        ..ExportSummary::default()
    };

    if options.dry_run {
        log::info!("Dry run: nothing written.");
        return Ok(summary);
    }

    summary.documents = write_documents(&options.output_dir, &docs)?;
    let (copied, failures) = copy_images(&plan, &options.images_dir, &options.image_output_dir);
    summary.images_copied = copied;
    summary.copy_failures = failures;

    log::info!(
        "Exported {} props, {} npcs, {} gifts; copied {} of {} icons.",
        summary.props,
        summary.npcs,
        summary.gifts,
        summary.images_copied,
        summary.images_planned
    );
    Ok(summary)
}
