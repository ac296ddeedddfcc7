use resources::ship;
use std::env;
use std::path::Path;

const USAGE: &str = "Usage: mkship <output> [<width> <height>]

Writes the default rocket sprite as a 24-bit BMP file.

Options:
  -h, --help     Show this help message and exit.

Examples:
  mkship ./images/ship.bmp
      Write a 50 x 80 sprite, the size the game ships with.

  mkship ./images/big_ship.bmp 100 160
      Write a larger sprite.";

fn parse_dim(arg: &str, name: &str) -> usize {
    match arg.parse::<usize>() {
        Ok(v) if v > 0 => v,
        _ => {
            eprintln!("mkship: {name} must be a positive integer, got '{arg}'");
            std::process::exit(1);
        }
    }
}

fn main() {
    let args = env::args().collect::<Vec<String>>();
    if args.len() < 2 || args[1] == "-h" || args[1] == "--help" {
        println!("{USAGE}");
        std::process::exit(1);
    }
    let (width, height) = match args.len() {
        2 => (ship::DEFAULT_WIDTH, ship::DEFAULT_HEIGHT),
        4 => (parse_dim(&args[2], "width"), parse_dim(&args[3], "height")),
        _ => {
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    let dst = Path::new(&args[1]);
    if let Err(e) = ship::write_ship(dst, width, height) {
        eprintln!("mkship: writing to {dst:?} error: {e}");
        std::process::exit(1);
    }
    println!("{dst:?}: {width} x {height}");
}
