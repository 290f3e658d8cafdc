//! Index arithmetic shared by grid accessors.

use tilt_core::Direction;

/// Move `index` by `delta` along an axis of length `len`.
/// Returns `None` when the result leaves `[0, len)`.
pub(crate) fn offset_index(index: usize, delta: isize, len: usize) -> Option<usize> {
    index.checked_add_signed(delta).filter(|&i| i < len)
}

/// Resolve the cell `distance` steps from `(row, col)` toward `direction`.
pub(crate) fn offset_2d(
    row: usize,
    col: usize,
    direction: Direction,
    distance: usize,
    width: usize,
) -> Option<(usize, usize)> {
    let distance = isize::try_from(distance).ok()?;
    let (dr, dc) = direction.offset_2d();
    let r = offset_index(row, dr.checked_mul(distance)?, width)?;
    let c = offset_index(col, dc.checked_mul(distance)?, width)?;
    Some((r, c))
}

/// Row-major flat index of `(row, col)`.
pub(crate) fn rank(row: usize, col: usize, width: usize) -> usize {
    row * width + col
}
