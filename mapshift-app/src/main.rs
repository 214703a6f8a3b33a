use anyhow::Context;
use clap::Parser;
use mapshift::{
    core::{config::ViewerConfig, offset::Offset, panel::PanelSize},
    data::geojson::Shape,
    rendering::{registry::ProjectionRegistry, svg},
    ui::widget::ProjectionGridExt,
    DataSource, ProjectionSession,
};
use std::path::PathBuf;

const GRID_COLUMNS: usize = 2;
const GRID_ROWS: usize = 2;

#[derive(Debug, Parser)]
#[command(name = "mapshift-app", about = "Drag an outline across four map projections")]
struct Args {
    /// GeoJSON file or http(s) URL; overrides the config's data_source
    data: Option<String>,

    /// JSON config file (defaults to ./mapshift.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the four views to an SVG file and exit instead of opening a window
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Initial latitude offset in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    lat: f64,

    /// Initial longitude offset in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    lon: f64,
}

/// Standalone four-projection viewer
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ViewerConfig::load_or_default("mapshift.json")?,
    };
    if let Some(data) = &args.data {
        config.data_source = data.clone();
        config.validate()?;
    }

    // Nothing is built until the outline is in hand.
    let source = DataSource::parse(&config.data_source);
    let shape = mapshift::load_shape(&source)
        .await
        .with_context(|| format!("loading outline from {}", source))?;
    log::info!(
        "outline: {} ({})",
        shape.property_str("name").unwrap_or("unnamed"),
        shape.geometry.type_name()
    );
    let initial = Offset::new(args.lat, args.lon);

    if let Some(path) = &args.export {
        let [w, h] = config.window_size;
        let panel = PanelSize::cell_of(
            PanelSize::measure(w as f64, h as f64),
            GRID_COLUMNS,
            GRID_ROWS,
        );
        let mut session =
            ProjectionSession::new(shape, panel, &ProjectionRegistry::standard(), &config)?;
        session.set_offset(initial);
        svg::export(&session, path)?;
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("mapshift - projection distortion"),
        ..Default::default()
    };

    eframe::run_native(
        "mapshift-app",
        options,
        Box::new(move |_cc| Box::new(MapshiftApp::new(shape, config, initial))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {}", e))?;

    Ok(())
}

/// The main application struct
struct MapshiftApp {
    pending: Option<Shape>,
    session: Option<ProjectionSession>,
    config: ViewerConfig,
    initial: Offset,
    error: Option<String>,
}

impl MapshiftApp {
    fn new(shape: Shape, config: ViewerConfig, initial: Offset) -> Self {
        Self {
            pending: Some(shape),
            session: None,
            config,
            initial,
            error: None,
        }
    }

    /// Views are sized from the first frame's layout, then kept for the session.
    fn ensure_session(&mut self, available: egui::Rect) {
        let Some(shape) = self.pending.take() else {
            return;
        };
        let panel = PanelSize::cell_of(PanelSize::from_rect(available), GRID_COLUMNS, GRID_ROWS);
        match ProjectionSession::new(shape, panel, &ProjectionRegistry::standard(), &self.config) {
            Ok(mut session) => {
                session.set_offset(self.initial);
                self.session = Some(session);
            }
            Err(e) => {
                log::error!("could not build views: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for MapshiftApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("mapshift");
                ui.separator();
                if let Some(session) = self.session.as_mut() {
                    let labels = session.labels();
                    ui.label(format!(
                        "latitude {}  longitude {}",
                        labels.latitude_text, labels.longitude_text
                    ));
                    if ui.button("Reset").clicked() {
                        session.reset();
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("drag to shift, double-click to reset");
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ensure_session(ui.available_rect_before_wrap());
            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, error);
            } else if let Some(session) = self.session.as_mut() {
                ui.projection_grid(session);
            }
        });
    }
}
