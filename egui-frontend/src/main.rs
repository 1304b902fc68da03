use eframe::egui;
use log::{error, info};

mod app;
mod backend;
mod ui;

use app::BirthRegistryApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Birth Registry egui application");

    // Create window options sized for a single-column government form
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 900.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Birth Certificate Registration")
            .with_resizable(true),
        ..Default::default()
    };

    // Run the application
    info!("Launching egui window");
    eframe::run_native(
        "Birth Certificate Registration",
        options,
        Box::new(|cc| {
            // Background runtime for the simulated registrar task. The egui
            // event loop stays synchronous; submissions are polled each frame.
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to start async runtime: {}", e);
                    return Err(format!("Failed to start async runtime: {}", e).into());
                }
            };

            // Initialize the app
            match BirthRegistryApp::new(cc, runtime) {
                Ok(app) => {
                    info!("Successfully initialized Birth Registry app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    // Convert anyhow::Error to eframe::Error
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
