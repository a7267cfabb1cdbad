//! Filedrop demo
//!
//! Replays recorded drop-zone and file-input events (NDJSON on stdin)
//! through the event bindings and prints the files each one delivers.

fn main() {
    if let Err(e) = filedrop::demo::run() {
        eprintln!("[filedrop-demo] {}", e);
        std::process::exit(1);
    }
}
