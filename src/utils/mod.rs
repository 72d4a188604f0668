// Utility functions
pub mod sanitize;

/// Number of empty cells needed to fill the last grid row
pub fn grid_filler(items: usize, columns: usize) -> usize {
    if columns == 0 || items % columns == 0 {
        0
    } else {
        columns - items % columns
    }
}
