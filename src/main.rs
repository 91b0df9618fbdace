use classdesk::config::{PortalConfig, StartView};
use classdesk::infrastructure::mock::MockCatalog;
use classdesk::infrastructure::ui_prefs::UiPrefsStore;
use classdesk::interfaces::shell::{configure_fonts, PortalApp, PortalView};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn, Level};
use tracing_subscriber::prelude::*;

// A writer that sends logs to the UI via a crossbeam channel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "classdesk", version, about = "Teacher portal for assessments, quizzes and student reports")]
struct Cli {
    /// Page to open on: saved-assessments, saved-quizzes, create-assessment,
    /// ai-assessment, library, reports or paper-review
    #[arg(long)]
    view: Option<String>,

    /// Seed for the demo data generator
    #[arg(long)]
    seed: Option<u64>,

    /// UI zoom factor
    #[arg(long)]
    scale: Option<f32>,

    /// Optional portal.toml overlay
    #[arg(long, default_value = "portal.toml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before reading any config)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 1. Create Log Channel
    let (log_tx, log_rx) = crossbeam_channel::unbounded();

    // 2. Setup Logging (Stdout + UI)
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false) // No color codes for UI text
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("Initializing Classdesk Portal...");

    // 3. Resolve configuration: env defaults, TOML overlay, saved prefs,
    //    then CLI flags on top.
    let mut config = PortalConfig::from_env()?;
    config.apply_file(&cli.config)?;

    let prefs_store = match UiPrefsStore::new() {
        Ok(store) => Some(store),
        Err(err) => {
            warn!("UI preferences unavailable: {}", err);
            None
        }
    };
    let prefs = prefs_store.as_ref().and_then(|store| {
        store.load().unwrap_or_else(|err| {
            warn!("Ignoring unreadable UI preferences: {}", err);
            None
        })
    });

    if let Some(prefs) = &prefs {
        if cli.scale.is_none() {
            config.ui_scale = prefs.ui_scale;
        }
        if cli.view.is_none() {
            if let Some(name) = &prefs.start_view {
                match StartView::from_str(name) {
                    Ok(view) => config.start_view = view,
                    Err(err) => warn!("Ignoring saved start view: {}", err),
                }
            }
        }
    }

    if let Some(view) = &cli.view {
        config.start_view = StartView::from_str(view)?;
    }
    if let Some(seed) = cli.seed {
        config.data_seed = seed;
    }
    if let Some(scale) = cli.scale {
        config.ui_scale = scale;
    }

    // 4. Generate Demo Data
    info!(
        "Generating demo data (seed {}), opening on '{}'",
        config.data_seed,
        config.start_view.name()
    );
    let catalog = MockCatalog::generate(config.data_seed);

    let app = PortalApp::new(
        config.school_name.clone(),
        catalog,
        PortalView::from(config.start_view),
        config.ui_scale,
        log_rx,
        prefs_store,
    );

    // 5. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([980.0, 640.0])
            .with_title("Classdesk"),
        ..Default::default()
    };

    eframe::run_native(
        "Classdesk",
        native_options,
        Box::new(|cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
