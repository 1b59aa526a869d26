use anyhow::Result;
use clap::Parser;

use matcost_cli::Cli;
use matcost_observability::LogConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    matcost_observability::init(&LogConfig::default().json(cli.log_json));

    let stdout = std::io::stdout();
    matcost_cli::run(cli, &mut stdout.lock())
}
