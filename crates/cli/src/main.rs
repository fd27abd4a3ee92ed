fn main() {
    if let Err(e) = unl_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
