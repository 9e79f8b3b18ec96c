//! Listing comparison

use std::collections::HashMap;

use crate::Object;

/// Differences between two listings of the same store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSliceDiff {
    pub change: bool,
    pub removed: Vec<Object>,
    pub added: Vec<Object>,
    pub updated: Vec<Object>,
}

/// Compare a previous listing against the current one by path.
///
/// An object counts as updated when it exists in both listings and its current
/// `last_modified` is later than the previous one. Entries in the result keep the
/// order of the listing they came from (`removed` from `prev`, the rest from `curr`).
pub fn object_slice_diff(prev: &[Object], curr: &[Object]) -> ObjectSliceDiff {
    let previous: HashMap<&str, &Object> = prev.iter().map(|o| (o.path.as_str(), o)).collect();
    let current: HashMap<&str, &Object> = curr.iter().map(|o| (o.path.as_str(), o)).collect();

    let mut diff = ObjectSliceDiff::default();

    for obj in prev {
        if !current.contains_key(obj.path.as_str()) {
            diff.removed.push(obj.clone());
        }
    }

    for obj in curr {
        match previous.get(obj.path.as_str()) {
            None => diff.added.push(obj.clone()),
            Some(old) if obj.last_modified > old.last_modified => diff.updated.push(obj.clone()),
            Some(_) => {}
        }
    }

    diff.change = !(diff.removed.is_empty() && diff.added.is_empty() && diff.updated.is_empty());
    diff
}
