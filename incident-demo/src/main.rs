use std::process::ExitCode;

use incident_demo::{Mode, Options};

fn main() -> ExitCode {
    incident_demo::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = Options {
        mode: if args.iter().any(|arg| arg == "--demo") {
            Mode::Scripted
        } else {
            Mode::View
        },
        json: args.iter().any(|arg| arg == "--json"),
    };

    match incident_demo::run(&options) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("incident-demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}
