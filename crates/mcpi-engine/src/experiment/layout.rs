use serde::Serialize;

use crate::LayoutError;

/// Partition of `points` samples into `blocks` blocks of equal size.
///
/// The block size is `points / blocks`; the remainder is dropped and never
/// sampled.
///
/// # Example
///
/// ```
/// use mcpi_engine::BlockLayout;
///
/// let layout = BlockLayout::new(1005, 10).unwrap();
/// assert_eq!(layout.block_size(), 100);
/// assert_eq!(layout.used_points(), 1000);
/// assert_eq!(layout.dropped_points(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockLayout {
    points: usize,
    blocks: usize,
    block_size: usize,
}

impl BlockLayout {
    /// Creates a layout for `points` total samples split into `blocks` blocks.
    ///
    /// # Errors
    ///
    /// * [`LayoutError::ZeroBlocks`] - if `blocks` is zero
    /// * [`LayoutError::EmptyBlocks`] - if `points < blocks`, which would leave every block empty
    pub fn new(points: usize, blocks: usize) -> Result<Self, LayoutError> {
        if blocks == 0 {
            return Err(LayoutError::ZeroBlocks);
        }
        let block_size = points / blocks;
        if block_size == 0 {
            return Err(LayoutError::EmptyBlocks { points, blocks });
        }
        Ok(Self {
            points,
            blocks,
            block_size,
        })
    }

    /// Total number of requested samples, including dropped ones.
    #[must_use]
    pub const fn points(&self) -> usize {
        self.points
    }

    #[must_use]
    pub const fn blocks(&self) -> usize {
        self.blocks
    }

    /// Samples per block.
    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// Samples actually drawn (`blocks * block_size`).
    #[must_use]
    pub const fn used_points(&self) -> usize {
        self.blocks * self.block_size
    }

    /// Samples discarded by the integer division.
    #[must_use]
    pub const fn dropped_points(&self) -> usize {
        self.points - self.used_points()
    }
}
