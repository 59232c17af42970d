use crate::flatten::position_of;
use crate::model::{FlatEntry, NodeId, Projection};

/// Compute where the active entry would land if the drag ended now.
///
/// `entries` is the visible sequence (children of the active entry already
/// removed), `offset` the horizontal pointer displacement since drag start
/// and `indentation_width` the width of one nesting level, both in pixels.
///
/// Returns `None` when either id is absent from `entries`.
pub fn get_projection<P>(
    entries: &[FlatEntry<P>],
    active_id: &NodeId,
    over_id: &NodeId,
    offset: f32,
    indentation_width: f32,
) -> Option<Projection> {
    let over_index = position_of(entries, over_id)?;
    let active_index = position_of(entries, active_id)?;
    let active = &entries[active_index];

    let mut reordered: Vec<&FlatEntry<P>> = entries.iter().collect();
    let moved = reordered.remove(active_index);
    reordered.insert(over_index, moved);

    let previous = over_index
        .checked_sub(1)
        .and_then(|index| reordered.get(index))
        .copied();
    let next = reordered.get(over_index + 1).copied();

    let projected = depth_as_i64(active.depth)
        .saturating_add(drag_depth(offset, indentation_width));
    let max_depth = max_depth(active, previous);
    let min_depth = min_depth(active, next);

    let depth = if projected >= depth_as_i64(max_depth) {
        max_depth
    } else if projected < depth_as_i64(min_depth) {
        min_depth
    } else {
        usize::try_from(projected).unwrap_or(min_depth)
    };

    let parent_id = resolve_parent_id(depth, previous, &reordered[..over_index]);

    Some(Projection {
        depth,
        min_depth,
        max_depth,
        parent_id,
    })
}

/// Quantize a pixel offset into a whole number of indentation levels.
///
/// Halves round up, so `25.0 / 50.0` is one level and `-25.0 / 50.0` none.
pub fn drag_depth(offset: f32, indentation_width: f32) -> i64 {
    if !offset.is_finite()
        || !indentation_width.is_finite()
        || indentation_width <= 0.0
    {
        return 0;
    }
    (offset / indentation_width + 0.5).floor() as i64
}

fn max_depth<P>(
    active: &FlatEntry<P>,
    previous: Option<&FlatEntry<P>>,
) -> usize {
    if active.supports_children {
        return 0;
    }

    match previous {
        Some(previous) if previous.supports_children => previous.depth + 1,
        Some(previous) => previous.depth,
        None => 0,
    }
}

fn min_depth<P>(active: &FlatEntry<P>, next: Option<&FlatEntry<P>>) -> usize {
    if active.supports_children {
        return active.depth;
    }

    next.map_or(0, |next| next.depth)
}

fn resolve_parent_id<P>(
    depth: usize,
    previous: Option<&FlatEntry<P>>,
    preceding: &[&FlatEntry<P>],
) -> Option<NodeId> {
    let previous = previous?;
    if depth == 0 {
        return None;
    }
    if depth == previous.depth {
        return previous.parent_id.clone();
    }
    if depth > previous.depth {
        return Some(previous.id.clone());
    }

    // No earlier entry at the target depth orphans the node to the root.
    preceding
        .iter()
        .rev()
        .find(|entry| entry.depth == depth)
        .and_then(|entry| entry.parent_id.clone())
}

fn depth_as_i64(depth: usize) -> i64 {
    i64::try_from(depth).unwrap_or(i64::MAX)
}
