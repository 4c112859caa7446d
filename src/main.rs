use pursuit::prelude::*;

fn main() {
    env_logger::init();

    if let Err(e) = Simulation::new().run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
