pub mod app;
pub mod audio;
pub mod mood_dialog;
pub mod mood_dialog_ui;
pub mod search;
pub mod ui;

use std::error::Error;

pub use app::StartOptions;

pub fn run(options: StartOptions) -> Result<(), Box<dyn Error>> {
    app::run(options)
}
