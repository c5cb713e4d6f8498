use stipend_core::{cli, init};

fn main() {
    init();

    if let Err(err) = cli::run(std::env::args().skip(1)) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
