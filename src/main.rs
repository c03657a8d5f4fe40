mod cli;
mod config;
mod gateways;
mod snapshot;
mod task;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    cli::run()
}
