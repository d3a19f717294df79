/// Longest-common-subsequence lengths for every pair of prefixes of two token sequences.
///
/// Cells are stored row-major in a single vector of `(N + 1) * (M + 1)` entries,
/// where cell `(i, j)` holds the LCS length of the first `i` tokens of `a` and the
/// first `j` tokens of `b`. Row 0 and column 0 are always zero.
///
/// Building the table costs O(N·M) time and memory. Inputs are expected to be
/// sentences or short paragraphs; callers diffing larger texts should cap the
/// input size first (see [`DiffConfig::max_table_cells`](crate::DiffConfig::max_table_cells)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    /// Number of rows (N + 1)
    rows: usize,

    /// Number of columns (M + 1)
    cols: usize,

    /// Row-major cell storage
    cells: Vec<usize>,
}

impl LcsTable {
    /// Fill the table for `a` (rows) against `b` (columns) using exact equality.
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// Number of cells a table for sequences of these lengths would hold,
    /// or `None` if that count overflows `usize`.
    pub fn cell_count(a_len: usize, b_len: usize) -> Option<usize> {
        a_len.checked_add(1)?.checked_mul(b_len.checked_add(1)?)
    }

    /// Get the cell at row `i`, column `j`
    pub fn get(&self, i: usize, j: usize) -> usize {
        debug_assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) outside {}x{} table",
            self.rows,
            self.cols
        );
        self.cells[i * self.cols + j]
    }

    /// Get the number of rows (length of `a` plus one)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns (length of `b` plus one)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the longest common subsequence of the full sequences
    pub fn lcs_len(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}
