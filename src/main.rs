//! rexitlog entrypoint.

use rexitlog::run;
use rexitlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
