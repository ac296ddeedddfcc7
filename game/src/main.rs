use backend::system::System;
use game::config::Settings;
use game::controller::RocketGame;
use game::GameError;
use std::env;
use std::path::Path;

const USAGE: &str = "Usage: rocket [settings.toml]

Fly the rocket around the window with the arrow keys, press Q or close the
window to quit.

Options:
  -h, --help     Show this help message and exit.

Settings (all optional, defaults in brackets):
  width, height  window size in pixels [1200, 800]
  title          window caption [\"Rocket Control\"]
  background     RGB triple [[230, 230, 230]]
  image          sprite file [\"images/ship.bmp\"]
  speed          pixels per frame [1.5]
  fps_cap        frames per second, 0 for none [60]
  boundary       \"projected\" or \"last_frame\" [\"projected\"]

Set RUST_LOG=debug for more output.";

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = env::args().collect::<Vec<String>>();
    let settings = match args.get(1).map(String::as_str) {
        Some("-h") | Some("--help") => {
            println!("{USAGE}");
            return Ok(());
        }
        Some(path) => Settings::from_file(Path::new(path))?,
        None => Settings::default(),
    };

    let system = System::new(
        settings.width as usize,
        settings.height as usize,
        &settings.title,
        settings.fps_cap,
    )?;
    let mut game = RocketGame::new(system, &settings)?;
    game.run();
    Ok(())
}
