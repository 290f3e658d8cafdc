//! Axis geometry derived from a grid width.

use smallvec::SmallVec;

type IndexSeq = SmallVec<[usize; 16]>;

/// Immutable index geometry for a square grid of a given width.
///
/// Computed once per width and borrowed by every component that needs to
/// locate the center axis or enumerate quadrant members. With `d =
/// dist_from_axis = floor(width / 2)`:
///
/// - [`indices`](Self::indices): `0..width`
/// - [`reverse_indices`](Self::reverse_indices): `width-1, ..., 0`
/// - [`near_axis`](Self::near_axis): `indices[..d]`
/// - [`near_axis_reverse`](Self::near_axis_reverse): `reverse_indices[d+1..]`
/// - [`far_axis`](Self::far_axis): `indices[d+1..]`
/// - [`far_axis_reverse`](Self::far_axis_reverse): `reverse_indices[..d]`
///
/// For an odd width the four sub-ranges each hold exactly `d` indices and
/// together cover every row (or column) except the center one. Even widths
/// are accepted here and produce a usable but off-center geometry; [`Grid`]
/// rejects them before an engine ever sees one.
///
/// [`Grid`]: crate::Grid
///
/// # Examples
///
/// ```
/// use tilt_space::AxisGeometry;
///
/// let g = AxisGeometry::for_width(5);
/// assert_eq!(g.dist_from_axis(), 2);
/// assert_eq!(g.center(), 2);
/// assert_eq!(g.near_axis(), &[0, 1]);
/// assert_eq!(g.near_axis_reverse(), &[1, 0]);
/// assert_eq!(g.far_axis(), &[3, 4]);
/// assert_eq!(g.far_axis_reverse(), &[4, 3]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisGeometry {
    width: usize,
    dist_from_axis: usize,
    indices: IndexSeq,
    reverse_indices: IndexSeq,
}

impl AxisGeometry {
    /// Derive the geometry for `width`. Pure and infallible.
    pub fn for_width(width: usize) -> Self {
        let indices: IndexSeq = (0..width).collect();
        let reverse_indices: IndexSeq = (0..width).rev().collect();
        Self {
            width,
            dist_from_axis: width / 2,
            indices,
            reverse_indices,
        }
    }

    /// Grid width this geometry was derived from.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Offset from any edge to the center row/column: `floor(width / 2)`.
    pub fn dist_from_axis(&self) -> usize {
        self.dist_from_axis
    }

    /// One-based position of the center row/column: `dist_from_axis + 1`.
    pub fn axis_index(&self) -> usize {
        self.dist_from_axis + 1
    }

    /// Zero-based index of the center cell on both axes.
    ///
    /// Equal to `dist_from_axis` for odd widths.
    pub fn center(&self) -> usize {
        self.width.saturating_sub(1 + self.dist_from_axis)
    }

    /// `0..width`.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// `width-1, ..., 0`.
    pub fn reverse_indices(&self) -> &[usize] {
        &self.reverse_indices
    }

    /// Indices before the axis, ascending: `indices[..d]`.
    pub fn near_axis(&self) -> &[usize] {
        &self.indices[..self.dist_from_axis.min(self.width)]
    }

    /// Indices before the axis, walking outward from it: `reverse_indices[d+1..]`.
    pub fn near_axis_reverse(&self) -> &[usize] {
        let start = (self.dist_from_axis + 1).min(self.width);
        &self.reverse_indices[start..]
    }

    /// Indices after the axis, walking outward from it: `indices[d+1..]`.
    pub fn far_axis(&self) -> &[usize] {
        let start = (self.dist_from_axis + 1).min(self.width);
        &self.indices[start..]
    }

    /// Indices after the axis, descending from the far edge: `reverse_indices[..d]`.
    pub fn far_axis_reverse(&self) -> &[usize] {
        &self.reverse_indices[..self.dist_from_axis.min(self.width)]
    }

    /// Distance of `index` from the center row/column.
    pub fn offset_of(&self, index: usize) -> usize {
        index.abs_diff(self.center())
    }
}
