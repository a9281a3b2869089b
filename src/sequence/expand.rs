use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Extend `base` with the alternatives of its elements.
///
/// Each distinct element of `base` (first occurrence wins) is looked up in
/// `alternatives`; every mapped value not already present in `base` or among
/// earlier additions is appended after the original sequence, in discovery
/// order. The original sequence passes through unchanged, duplicates
/// included, so the output order is fully determined by the inputs.
///
/// Alternatives of newly-added values are not expanded in turn.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use lenient_utils::sequence::expand_alternatives;
///
/// let base = vec!["doc", "jpg"];
/// let alternatives = HashMap::from([("doc", vec!["docx"])]);
/// assert_eq!(expand_alternatives(&base, &alternatives), ["doc", "jpg", "docx"]);
/// ```
pub fn expand_alternatives<T>(base: &[T], alternatives: &HashMap<T, Vec<T>>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut expanded = base.to_vec();
    // Everything emitted so far, whether from the base or a prior addition.
    let mut seen: HashSet<T> = base.iter().cloned().collect();
    let mut visited: HashSet<&T> = HashSet::with_capacity(base.len());

    for item in base {
        // Duplicate base entries collapse to their first occurrence.
        if !visited.insert(item) {
            continue;
        }
        if let Some(alts) = alternatives.get(item) {
            for alt in alts {
                if !seen.contains(alt) {
                    seen.insert(alt.clone());
                    expanded.push(alt.clone());
                }
            }
        }
    }

    expanded
}
