use cinestory_lib::{
    bootstrap,
    commands::{dispatch, Cli},
    shared::{utils::init_logger, Config},
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let scope = bootstrap(&config);

    dispatch(&scope, cli.command).await?;
    Ok(())
}
