use clap::Parser;
use nextbus::app::NextbusApp;

fn main() {
    env_logger::init();
    let args = NextbusApp::parse();
    match args.run() {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("failed running nextbus: {e}");
            std::process::exit(1);
        }
    }
}
