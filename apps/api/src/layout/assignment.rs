//! Layout Assignment — maps each content slug to a rotating presentation template.
//!
//! # Rotation rules
//! - Cursor starts at 0; candidate = `variants[cursor % len]`.
//! - If the candidate's key equals the previously assigned key (and there is more than
//!   one variant), the cursor advances once and the candidate is recomputed.
//! - After every assignment the cursor advances once more, so an item that needed
//!   repeat avoidance moves the cursor two positions in total.
//!
//! The engine is a pure fold over the item list: same inputs, same table.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Anything that can be placed on a page by slug.
pub trait Slugged {
    fn slug(&self) -> &str;
}

/// Anything that identifies a layout template by key.
pub trait VariantKey {
    fn key(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout variant set is empty")]
    NoVariants,

    #[error("duplicate slug '{0}' in content list")]
    DuplicateSlug(String),
}

/// Immutable slug → variant key table, built once per content category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LayoutTable {
    assignments: BTreeMap<String, String>,
}

impl LayoutTable {
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.assignments.get(slug).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Cursor state threaded through the fold.
#[derive(Debug, Clone, Copy, Default)]
struct Rotation<'a> {
    cursor: usize,
    last: Option<&'a str>,
}

impl<'a> Rotation<'a> {
    /// Picks the key for the next item and returns the advanced state.
    /// `variants` must be non-empty.
    fn step<V: VariantKey>(self, variants: &'a [V]) -> (&'a str, Rotation<'a>) {
        let len = variants.len();
        let mut cursor = self.cursor;
        let mut candidate = variants[cursor % len].key();

        if len > 1 && self.last == Some(candidate) {
            cursor += 1;
            candidate = variants[cursor % len].key();
        }

        let next = Rotation {
            cursor: cursor + 1,
            last: Some(candidate),
        };
        (candidate, next)
    }
}

/// Assigns a layout variant key to every item, in input order.
///
/// Fails fast on an empty variant set. Duplicate slugs are rejected because the
/// table must cover each item exactly once.
pub fn assign_layouts<I, V>(items: &[I], variants: &[V]) -> Result<LayoutTable, LayoutError>
where
    I: Slugged,
    V: VariantKey,
{
    if variants.is_empty() {
        return Err(LayoutError::NoVariants);
    }

    let (assignments, _) = items.iter().try_fold(
        (BTreeMap::new(), Rotation::default()),
        |(mut assignments, rotation), item| {
            let (key, rotation) = rotation.step(variants);
            let slug = item.slug();
            if assignments
                .insert(slug.to_string(), key.to_string())
                .is_some()
            {
                return Err(LayoutError::DuplicateSlug(slug.to_string()));
            }
            Ok((assignments, rotation))
        },
    )?;

    Ok(LayoutTable { assignments })
}
