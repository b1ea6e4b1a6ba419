use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "hnfeed",
  version,
  about = "Page through a Hacker News style item feed"
)]
pub(crate) struct Arguments {
  /// Base URL of the aggregation API
  #[arg(long, env = "HNFEED_API_BASE", default_value = DEFAULT_API_BASE)]
  api_base: String,
  /// Items requested per page
  #[arg(
    long,
    default_value_t = DEFAULT_PAGE_SIZE,
    value_parser = clap::value_parser!(u64).range(1..=MAX_PAGE_SIZE),
  )]
  limit: u64,
  /// Write logs to this file (filtered by `HNFEED_LOG`)
  #[arg(long)]
  log_file: Option<PathBuf>,
  /// Location to open, e.g. `/type/job`
  #[arg(long, default_value = ROOT_PATH)]
  path: String,
  /// Request timeout in seconds
  #[arg(
    long,
    default_value_t = 10,
    value_parser = clap::value_parser!(u64).range(1..),
  )]
  timeout: u64,
}

impl Arguments {
  pub(crate) fn config(self) -> Result<Config> {
    let api_base = Url::parse(&self.api_base)
      .with_context(|| format!("invalid API base URL `{}`", self.api_base))?;

    ensure!(
      matches!(api_base.scheme(), "http" | "https"),
      "API base URL must use http or https, got `{}`",
      api_base.scheme()
    );

    Ok(Config {
      api_base,
      initial_path: self.path,
      limit: self.limit,
      log_file: self.log_file,
      request_timeout: Duration::from_secs(self.timeout),
    })
  }
}
