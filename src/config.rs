//! Component configuration. All fields optional on the JS side; defaults
//! mirror the decorative "sit behind the page" use case.

/// Options for a mounted ribbon background.
#[derive(Clone, Debug)]
pub struct RibbonConfig {
    /// Stacking order of the canvas element.
    pub z_index: i32,
    /// Global fill opacity applied to every triangle.
    pub alpha: f64,
    /// Band half-width `f`: drives both vertical amplitude and mean
    /// horizontal step size.
    pub size: f64,
    /// CSS selectors checked against the event target's ancestry; a match
    /// suppresses regeneration for that event.
    pub excluded_selectors: Vec<String>,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            z_index: -1,
            alpha: 0.5,
            size: 100.0,
            excluded_selectors: Vec::new(),
        }
    }
}
