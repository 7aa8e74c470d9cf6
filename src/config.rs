//! Viewer window configuration.

/// Options for the viewer window.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Native window title.
    pub title: String,
    /// Initial window size in points (width, height).
    pub window_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "IPTWP Plot".to_string(),
            window_size: [1400.0, 900.0],
        }
    }
}
