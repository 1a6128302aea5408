// src/main.rs

use consul_sentinel::{cli, run};

fn main() {
    if let Err(err) = run(cli::parse()) {
        eprintln!("consul-sentinel error: {err:?}");
        std::process::exit(1);
    }
}
