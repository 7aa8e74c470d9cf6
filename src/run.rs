//! Native window entry point.

use eframe::egui;

use crate::app::ViewerApp;
use crate::config::ViewerConfig;
use crate::extract::Extraction;

/// Open the viewer window for an extraction and block until it is closed.
pub fn run_viewer(extraction: Extraction, cfg: ViewerConfig) -> eframe::Result<()> {
    let app = ViewerApp::new(extraction);

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(cfg.window_size[0], cfg.window_size[1]));
    if let Some(icon) = render_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &cfg.title,
        options,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Render the bundled `icon.svg` into an [`egui::IconData`].
///
/// Returns `None` if the SVG cannot be parsed or rendered.
fn render_app_icon() -> Option<egui::IconData> {
    let data: &[u8] = include_bytes!("../icon.svg");
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}
