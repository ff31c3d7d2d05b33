use basin::adapter::inbound::cli::output::{self, Line};
use basin::adapter::inbound::cli::{self, command::Cli};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::run(cli).await {
        output::print(Line::Error(&e.to_string()));
        std::process::exit(1);
    }
}
