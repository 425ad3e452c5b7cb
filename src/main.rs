mod config;
mod error;
mod member;
mod menu;
mod notification;
mod tools;

use crate::config::GymConfig;
use crate::tools::clock::SystemClock;
use std::io;

fn main() {
    env_logger::init();

    let config = GymConfig::from_env();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = menu::run(stdin.lock(), &mut stdout, &config, &SystemClock) {
        log::error!("Stopping...\n{e:#?}");
        std::process::exit(1);
    }
}
