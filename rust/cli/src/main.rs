use std::io;

fn main() {
    tablestakes_cli::logging::init_logging();
    let code = tablestakes_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
