use clap::Parser;
use rust_parking::facility::config::{CommandLineArgs, Config};
use rust_parking::facility::controller::FacilityControllerBuilder;
use rust_parking::facility::logging::init_logging;
use std::io;
use std::sync::Arc;
use tracing::info;

fn main() {
    let args = CommandLineArgs::parse();

    let config = Arc::new(Config::from(args.clone()));
    let _guards = init_logging(&config);
    info!("Started with args: {:?}", args);

    let controller = FacilityControllerBuilder::default()
        .config(config)
        .build()
        .unwrap();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    controller
        .run(stdin.lock(), &mut stdout)
        .expect("failed to run the command loop");
}
