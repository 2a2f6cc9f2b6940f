mod cli;

use std::io;
use std::process;

use clap::Parser;
use reqwest::Client;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use sampleinfo::config::{self, Config};
use sampleinfo::{
  DataType, EndpointResolver, Error, OutputFormat, OutputWriter, QueryParams, SampleInfoLoader,
  SampleInfoService,
};

#[tokio::main]
async fn main() {
  let env_files = config::load_env_files();

  let log_level = std::env::var("SAMPLEINFO_LOG").unwrap_or_else(|_| "warn".to_string());
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)))
    .with_writer(io::stderr)
    .init();
  for path in env_files {
    debug!(path = %path.display(), "loaded env file");
  }

  if let Err(e) = run(Cli::parse()).await {
    eprintln!("Error: {e}");
    process::exit(e.exit_code());
  }
}

async fn run(cli: Cli) -> Result<(), Error> {
  let Cli {
    data_type,
    study_id,
    center_id,
    center_ids,
    dataset_type_id,
    out_file,
    output_format,
    server_url,
  } = cli;

  let data_type: DataType = data_type.parse()?;
  let output_format: OutputFormat = output_format.parse()?;
  let config = Config::new(server_url)?;
  let params = QueryParams::new(&study_id, &center_id, &center_ids, &dataset_type_id);

  let url = EndpointResolver::new(&config.server_url).resolve(data_type, &params)?;

  let service = SampleInfoService { client: Client::new() };
  let payload = service.fetch(&url).await?;

  let stdout = io::stdout();
  OutputWriter::write(&payload, out_file.as_deref(), output_format, &mut stdout.lock())
}
