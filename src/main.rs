//! Rotating-shapes demo binary

use whirligig::prelude::*;

fn main() {
    let config = EngineConfig::default().with_title("Rotating Animation Fun");

    if let Err(e) = Engine::new(config).run() {
        eprintln!("Engine error: {e}");
        std::process::exit(1);
    }
}
