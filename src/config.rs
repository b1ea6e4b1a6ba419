use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) api_base: Url,
  pub(crate) initial_path: String,
  pub(crate) limit: u64,
  pub(crate) log_file: Option<PathBuf>,
  pub(crate) request_timeout: Duration,
}
