//! Slice Rush entry point
//!
//! Runs a headless session: a scripted pointer sweeps the playfield while
//! the HUD is logged. A windowed host would supply its own `EventSource`
//! and `Renderer`.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use slice_rush::Settings;
use slice_rush::game::{Game, run_loop};
use slice_rush::persistence::JsonFileStore;
use slice_rush::platform::ScriptedInput;
use slice_rush::renderer::LogRenderer;
use slice_rush::settings::SETTINGS_FILE;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Slice Rush starting...");

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
    let settings = Settings::load(&settings_path);

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    log::info!("Game initialized with seed: {}", seed);

    let store = JsonFileStore::new(&settings.save_path);
    let mut game = Game::new(seed, settings.viewport(), store);
    let mut input = ScriptedInput::new(
        settings.viewport(),
        settings.demo_seconds,
        settings.auto_restart,
    );
    let mut renderer = LogRenderer::default();

    run_loop(&mut game, &mut input, &mut renderer);

    log::info!(
        "Final score {} (best {})",
        game.state.score,
        game.state.best_score
    );
}
