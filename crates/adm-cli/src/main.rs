fn main() {
    if let Err(err) = adm_cli::run() {
        adm_cli::print_error(&err.to_string());
        std::process::exit(1);
    }
}
