mod app;
mod config;
mod loader;
mod theme;
mod view;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::config::GridConfig;

#[tokio::main]
async fn main() {
    let log_file = File::create("storegrid-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let app = match App::new(GridConfig::default()) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    if let Err(e) = app.run().await {
        eprintln!("Error: {e}");
    }
}
