mod adapters;
mod cli;
mod config;
mod core;

use cli::Cli;

fn main() {
    let args = Cli::parse_verbatim(std::env::args_os());
    cli::logging::init();

    match cli::commands::run::execute(&args.args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            cli::output::error(&format!("Error: {e}"));
            std::process::exit(1);
        }
    }
}
