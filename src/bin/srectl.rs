use std::env;
use std::process::ExitCode;

use sunlight_control::{is_enabled, is_supported, set_enabled, sre_path};

// manual poke at the sre node; the display manager normally drives this
fn main() -> ExitCode {
    let cmd = env::args().nth(1);
    match cmd.as_deref() {
        None | Some("status") => {
            if !is_supported() {
                println!("sre: unsupported ({} missing)", sre_path());
                return ExitCode::FAILURE;
            }
            println!("sre: {}", if is_enabled() { "on" } else { "off" });
            ExitCode::SUCCESS
        }
        Some("enable") => exit_for(set_enabled(true)),
        Some("disable") => exit_for(set_enabled(false)),
        Some(other) => {
            eprintln!("unknown command '{}'", other);
            eprintln!("usage: srectl [status|enable|disable]");
            ExitCode::FAILURE
        }
    }
}

fn exit_for(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
