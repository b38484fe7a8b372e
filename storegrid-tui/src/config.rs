//! Grid configuration.

use storegrid_lib::DEFAULT_BASE_URL;

/// Immutable configuration for the grid controller.
///
/// Dimensions are injected here rather than hard-coded, so non-default
/// shapes are testable.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub base_url: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 5,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
