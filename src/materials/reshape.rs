//! Batch reshaping for material uploads.
//!
//! The registry endpoint accepts small payloads, so an inventory is cut
//! into consecutive fixed-size windows and each window becomes one
//! request body with identifiers grouped by kind.

use crate::api::MaterialBatch;

use super::types::{MaterialKind, MaterialRef};

/// Maximum identifiers per upload batch, counted across both kinds.
pub const MAX_BATCH_ITEMS: usize = 4;

/// Cut an ordered inventory into upload batches of at most
/// [`MAX_BATCH_ITEMS`] identifiers each.
///
/// Order is preserved: concatenating the `blocks` of all batches yields
/// the block identifiers in inventory order, and likewise for
/// `scaffolds`. Every input item lands in exactly one batch.
pub fn reshape(materials: &[MaterialRef]) -> Vec<MaterialBatch> {
    reshape_with_limit(materials, MAX_BATCH_ITEMS)
}

/// Same as [`reshape`] with an explicit window size.
pub fn reshape_with_limit(materials: &[MaterialRef], limit: usize) -> Vec<MaterialBatch> {
    if limit == 0 {
        // chunks() panics on zero
        return Vec::new();
    }

    materials
        .chunks(limit)
        .map(|window| {
            let mut batch = MaterialBatch::default();
            for material in window {
                let full_name = material.qualified_name();
                match material.kind {
                    MaterialKind::Block => batch.blocks.push(full_name),
                    MaterialKind::Scaffold => batch.scaffolds.push(full_name),
                }
            }
            batch
        })
        .filter(|batch| !batch.is_empty())
        .collect()
}
