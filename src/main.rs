mod cli;
mod echo;
mod error;
mod types;

fn main() {
    cli::init(std::env::args_os()).run();
}
