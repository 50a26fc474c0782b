use anyhow::Result;
use ghstats::cli::Cli;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    ghstats::logging::init(cli.log_target());
    cli.execute()
}
