//! babystats main entrypoint.

use babystats::run;
use babystats::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
