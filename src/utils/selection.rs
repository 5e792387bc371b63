//! Filtered best-element scan used for pivot selection.

/// Position of the best element of `items` that passes `filter`.
///
/// `better(a, b)` must be a strict ordering: it returns `true` only when `a` should replace the
/// current best `b`. Ties therefore keep the element seen first. Returns `None` when no element
/// passes the filter.
pub fn select_best<I, C, F>(items: I, better: C, filter: F) -> Option<usize>
where
    I: IntoIterator,
    C: Fn(&I::Item, &I::Item) -> bool,
    F: Fn(&I::Item) -> bool,
{
    let mut best: Option<(usize, I::Item)> = None;
    for (pos, item) in items.into_iter().enumerate() {
        if !filter(&item) {
            continue;
        }
        let replace = match &best {
            None => true,
            Some((_, current)) => better(&item, current),
        };
        if replace {
            best = Some((pos, item));
        }
    }
    best.map(|(pos, _)| pos)
}

/// Position of the filtered minimum under `<`.
pub fn select_min<I, F>(items: I, filter: F) -> Option<usize>
where
    I: IntoIterator,
    I::Item: PartialOrd,
    F: Fn(&I::Item) -> bool,
{
    select_best(items, |a, b| a < b, filter)
}
