mod setup;
mod config_gen;

use std::process::ExitCode;
use pushpin_skia::App;
use pushpin_skia::config::WindowConfig;

const CONFIG_PATH: &str = "config.toml";

fn main() -> ExitCode {
    setup::init(CONFIG_PATH);
    log::info!(">>> Pushpin Desktop Started <<<");

    let cfg: WindowConfig = pushpin_shared::config::get("window");
    log::debug!("Window config: {:?}", cfg);

    match App::new(cfg).run() {
        Ok(()) => {
            log::info!("Bye.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Shut down after error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
