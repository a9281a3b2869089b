/// Check that a sequence is ordered.
///
/// With `strict` set, every element must be greater than its predecessor;
/// otherwise equal neighbours are allowed. Sequences of zero or one element
/// are vacuously monotonic. The check short-circuits on the first violation
/// and consumes its input in a single forward pass, so it works on lazy,
/// single-pass iterators without buffering.
///
/// Comparison consistency is the caller's obligation: a pair the item type
/// cannot order (such as a float `NaN`) counts as a violation.
pub fn is_monotonic<I>(sequence: I, strict: bool) -> bool
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    let mut iter = sequence.into_iter();
    let mut prev = match iter.next() {
        Some(first) => first,
        None => return true,
    };

    for next in iter {
        let in_order = if strict { prev < next } else { prev <= next };
        if !in_order {
            return false;
        }
        prev = next;
    }

    true
}
