mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::report_error(e.as_ref());
        std::process::exit(1);
    }
}
