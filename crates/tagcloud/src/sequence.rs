//! Deterministic tag ordering.
//!
//! Placement order decides which tags win the contested space near the center,
//! so it must be a pure function of the tags themselves. Tags are ordered by
//! descending weight, ties are broken by ascending [`label_hash`], and tags that
//! still compare equal keep their input order.

use std::cmp::Ordering;

use log::{debug, warn};

use crate::tag::{SkipReason, SkippedTag, Tag, TagInput};

/// Computes the 32-bit rolling hash of a label.
///
/// `hash = hash * 31 + unit` over the label's UTF-16 code units, wrapping on
/// signed 32-bit overflow.
///
/// # Examples
///
/// ```
/// # use tagcloud::sequence::label_hash;
/// assert_eq!(label_hash(""), 0);
/// assert_eq!(label_hash("a"), 97);
/// assert_eq!(label_hash("ab"), 97 * 31 + 98);
/// ```
pub fn label_hash(label: &str) -> i32 {
    label
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// The outcome of sequencing a batch of tag inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequenced {
    /// Valid tags in placement order.
    pub tags: Vec<Tag>,
    /// Tags excluded for a missing or unusable weight, in input order.
    pub skipped: Vec<SkippedTag>,
}

/// Validates tag inputs and sorts them into placement order.
///
/// Inputs without a weight, or with a negative or non-finite weight, are left
/// out with a warning.
pub fn sequence(inputs: &[TagInput]) -> Sequenced {
    let mut result = Sequenced::default();

    for input in inputs {
        let label = input.label();
        match input.weight() {
            None => {
                warn!(label; "Tag missing weight; excluding it");
                result
                    .skipped
                    .push(SkippedTag::new(label, SkipReason::MissingWeight));
            }
            Some(weight) if !weight.is_finite() || weight < 0.0 => {
                warn!(label, weight; "Tag weight is not a non-negative number; excluding it");
                result
                    .skipped
                    .push(SkippedTag::new(label, SkipReason::InvalidWeight(weight)));
            }
            // `+ 0.0` folds -0.0 into 0.0 so both sort identically
            Some(weight) => result
                .tags
                .push(Tag::new(label.to_string(), weight + 0.0, label_hash(label))),
        }
    }

    // `sort_by` is stable, which keeps input order for full ties
    result.tags.sort_by(placement_order);

    debug!(
        tags = result.tags.len(),
        skipped = result.skipped.len();
        "Tags sequenced"
    );

    result
}

fn placement_order(a: &Tag, b: &Tag) -> Ordering {
    b.weight()
        .total_cmp(&a.weight())
        .then_with(|| a.hash().cmp(&b.hash()))
}
