use clap::Parser;
use stock_data_prep::{
    cli::commands::{Cli, Commands},
    io::csv_store,
    models::request_params::DailyBarsParams,
    pipeline::{self, RunConfig, RunOutcome},
    providers::yahoo::YahooProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => {
            let config = RunConfig::from_path(&config)?;
            let provider = YahooProvider::new()?;

            match pipeline::run(&config, &provider).await? {
                RunOutcome::NoData => {
                    eprintln!("no data available for {}; nothing written", config.ticker);
                }
                RunOutcome::Completed {
                    rows_clean,
                    processed_path,
                    scaler_path,
                    ..
                } => {
                    eprintln!("{} rows processed", rows_clean);
                    println!("{}", processed_path.display());
                    println!("{}", scaler_path.display());
                }
            }
        }

        Commands::Fetch {
            ticker,
            start,
            end,
            out_dir,
        } => {
            let params = DailyBarsParams { ticker, start, end };
            let provider = YahooProvider::new()?;

            let series = pipeline::fetch(&provider, &params, out_dir.as_ref()).await?;
            if series.is_empty() {
                eprintln!("no data available for {}; nothing written", params.ticker);
            } else {
                let path = csv_store::raw_path(out_dir.as_ref(), &params);
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
