//! Node Sockets - node editor demo
//!
//! Entry point for the application. An editor configuration file may be
//! passed as the first argument; the stock configuration is used otherwise.

use std::path::PathBuf;

use eframe::egui;
use node_sockets::app::EditorApp;
use node_sockets::persistence::{self, EditorConfig};

fn load_config() -> Result<EditorConfig, Box<dyn std::error::Error>> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("loading editor configuration from {}", path.display());
            Ok(persistence::load_from_file(&path)?)
        }
        None => Ok(EditorConfig::builtin()?),
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; starting with an empty configuration", e);
            EditorConfig::new(node_sockets::catalog::DEFAULT_TREE_TYPE)
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 640.0])
            .with_title("Node Sockets"),
        ..Default::default()
    };

    eframe::run_native(
        "Node Sockets",
        options,
        Box::new(move |_cc| Ok(Box::new(EditorApp::new(&config)))),
    )
}
