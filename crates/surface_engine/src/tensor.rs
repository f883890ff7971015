//! The dense result tensor and its grid views.
//!
//! A [`SurfaceTensor`] is one flat `f64` buffer in row-major order over four
//! axes: `[row (sigma), col (strike), option variant, greek]`. The layout is
//! fixed by [`OptionKind::index`] and [`GreekKind::index`]; slicing a single
//! `(variant, greek)` pair out of it yields a [`GreekGrid`].

use serde::{Deserialize, Serialize};
use surface_core::{GreekKind, OptionKind};

/// Per-cell valuation block: all six measures for all four variants.
pub(crate) type CellBlock = [[f64; GreekKind::COUNT]; OptionKind::COUNT];

/// Dense valuation tensor for one surface request.
///
/// Immutable once built; the cache hands out shared references to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTensor {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl SurfaceTensor {
    /// Assemble the tensor from per-cell blocks in row-major cell order.
    ///
    /// # Panics
    /// Panics if `cells.len() != rows * cols`; the evaluator constructs the
    /// cell vector by index so a mismatch is a programming error.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<CellBlock>) -> Self {
        assert_eq!(cells.len(), rows * cols, "cell count does not match grid");
        let mut data = Vec::with_capacity(rows * cols * OptionKind::COUNT * GreekKind::COUNT);
        for block in &cells {
            for per_option in block {
                data.extend_from_slice(per_option);
            }
        }
        Self { rows, cols, data }
    }

    /// Number of volatility steps.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of strike steps.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize, option: OptionKind, greek: GreekKind) -> usize {
        ((row * self.cols + col) * OptionKind::COUNT + option.index()) * GreekKind::COUNT
            + greek.index()
    }

    /// One measure of one variant at one grid point.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn value(&self, row: usize, col: usize, option: OptionKind, greek: GreekKind) -> f64 {
        assert!(row < self.rows && col < self.cols, "grid index out of range");
        self.data[self.offset(row, col, option, greek)]
    }

    /// Extract the `rows x cols` grid of one measure for one variant.
    pub fn greek_grid(&self, option: OptionKind, greek: GreekKind) -> GreekGrid {
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                data.push(self.data[self.offset(row, col, option, greek)]);
            }
        }
        GreekGrid {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    /// Extract one measure for all four variants at once.
    pub fn surfaces_for(&self, greek: GreekKind) -> GreekSurfaces {
        GreekSurfaces {
            amer_call: self.greek_grid(OptionKind::AmerCall, greek),
            amer_put: self.greek_grid(OptionKind::AmerPut, greek),
            euro_call: self.greek_grid(OptionKind::EuroCall, greek),
            euro_put: self.greek_grid(OptionKind::EuroPut, greek),
        }
    }
}

/// A `rows x cols` grid of one measure for one option variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreekGrid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl GreekGrid {
    /// Number of volatility steps.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of strike steps.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "grid index out of range");
        self.data[row * self.cols + col]
    }

    /// The grid as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// One measure across all four option variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreekSurfaces {
    /// American call grid.
    pub amer_call: GreekGrid,
    /// American put grid.
    pub amer_put: GreekGrid,
    /// European call grid.
    pub euro_call: GreekGrid,
    /// European put grid.
    pub euro_put: GreekGrid,
}

impl GreekSurfaces {
    /// Select one variant's grid by kind.
    pub fn grid(&self, option: OptionKind) -> &GreekGrid {
        match option {
            OptionKind::AmerCall => &self.amer_call,
            OptionKind::AmerPut => &self.amer_put,
            OptionKind::EuroCall => &self.euro_call,
            OptionKind::EuroPut => &self.euro_put,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 2x3 tensor whose every value encodes its own coordinates:
    /// `row * 1000 + col * 100 + option_index * 10 + greek_index`.
    fn coordinate_tensor() -> SurfaceTensor {
        let rows = 2;
        let cols = 3;
        let cells: Vec<CellBlock> = (0..rows * cols)
            .map(|idx| {
                let (row, col) = (idx / cols, idx % cols);
                let mut block = [[0.0; GreekKind::COUNT]; OptionKind::COUNT];
                for option in OptionKind::ALL {
                    for greek in GreekKind::ALL {
                        block[option.index()][greek.index()] =
                            (row * 1000 + col * 100 + option.index() * 10 + greek.index()) as f64;
                    }
                }
                block
            })
            .collect();
        SurfaceTensor::from_cells(rows, cols, cells)
    }

    #[test]
    fn test_value_addresses_every_coordinate() {
        let tensor = coordinate_tensor();
        for row in 0..2 {
            for col in 0..3 {
                for option in OptionKind::ALL {
                    for greek in GreekKind::ALL {
                        let expected =
                            (row * 1000 + col * 100 + option.index() * 10 + greek.index()) as f64;
                        assert_eq!(tensor.value(row, col, option, greek), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_greek_grid_slices_one_pair() {
        let tensor = coordinate_tensor();
        let grid = tensor.greek_grid(OptionKind::EuroCall, GreekKind::Vega);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        // option index 2, greek index 3.
        assert_eq!(grid.at(1, 2), 1000.0 + 200.0 + 20.0 + 3.0);
        assert_eq!(grid.at(0, 0), 23.0);
    }

    #[test]
    fn test_surfaces_for_covers_all_variants() {
        let tensor = coordinate_tensor();
        let surfaces = tensor.surfaces_for(GreekKind::Price);
        for option in OptionKind::ALL {
            let grid = surfaces.grid(option);
            assert_eq!(
                grid.at(0, 1),
                (100 + option.index() * 10) as f64,
                "variant {option}"
            );
        }
    }

    #[test]
    fn test_as_slice_is_row_major() {
        let tensor = coordinate_tensor();
        let grid = tensor.greek_grid(OptionKind::AmerCall, GreekKind::Price);
        assert_eq!(grid.as_slice(), &[0.0, 100.0, 200.0, 1000.0, 1100.0, 1200.0]);
    }

    #[test]
    #[should_panic(expected = "grid index out of range")]
    fn test_out_of_range_panics() {
        let tensor = coordinate_tensor();
        let _ = tensor.value(2, 0, OptionKind::AmerCall, GreekKind::Price);
    }

    #[test]
    #[should_panic(expected = "cell count")]
    fn test_mismatched_cell_count_panics() {
        let _ = SurfaceTensor::from_cells(2, 3, vec![[[0.0; 6]; 4]; 5]);
    }
}
