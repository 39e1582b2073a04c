fn main() {
    if let Err(e) = arex_drv::main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
