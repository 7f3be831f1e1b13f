//! Othello GUI
//!
//! Two players share the mouse and take turns clicking cells.

use othello::ui::theme::WINDOW_SIZE;
use othello::ui::OthelloApp;
use othello::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("othello=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_SIZE, WINDOW_SIZE])
            .with_resizable(false)
            .with_title("Othello"),
        ..Default::default()
    };

    let game = Game::new();
    info!("starting Othello");

    eframe::run_native(
        "Othello",
        options,
        Box::new(move |cc| Ok(Box::new(OthelloApp::new(cc, game)))),
    )
}
