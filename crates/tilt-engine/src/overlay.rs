//! Layer merging for quadrant images.

use tilt_space::Grid;

/// Merge `layers` onto `base`, cell by cell.
///
/// A non-empty layer cell replaces whatever is below it, so when several
/// layers write the same cell the last one in iteration order wins. Empty
/// layer cells leave `base` alone. Every layer must share `base`'s width.
///
/// Returns the number of cells where a later layer replaced a value an
/// earlier layer had written.
///
/// # Panics
///
/// Panics if a layer's width differs from `base`'s.
pub fn overlay<'a>(base: &mut Grid, layers: impl IntoIterator<Item = &'a Grid>) -> usize {
    let width = base.width();
    let mut written = vec![false; width * width];
    let mut conflicts = 0;
    for layer in layers {
        assert_eq!(
            layer.width(),
            width,
            "overlay layer width {} does not match base width {width}",
            layer.width()
        );
        for (i, &cell) in layer.cells().iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let at = (i / width, i % width);
            if written[i] && base[at] != cell {
                conflicts += 1;
            }
            base[at] = cell;
            written[i] = true;
        }
    }
    conflicts
}
