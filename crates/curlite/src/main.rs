fn main() {
    if let Err(e) = curlite::run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
