//! `idb` - source control for your brilliant ideas
//!
//! Keeps a personal list of ideas in a single JSON file (`~/.idb/ideas.json`).

use idb::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
