use {super::*, std::error::Error as _};

#[derive(Debug, Error, PartialEq)]
pub(crate) enum FetchError {
  #[error("Invalid response: {0}")]
  Decode(String),
  #[error("Server error: {0}")]
  Server(u16),
  #[error("{}", transport_message(.0))]
  Transport(String),
}

impl From<reqwest::Error> for FetchError {
  fn from(error: reqwest::Error) -> Self {
    let mut message = error.to_string();

    let mut source = error.source();

    while let Some(cause) = source {
      message.push_str(": ");
      message.push_str(&cause.to_string());
      source = cause.source();
    }

    Self::Transport(message)
  }
}

fn transport_message(message: &str) -> &str {
  if message.is_empty() {
    FETCH_FALLBACK_MESSAGE
  } else {
    message
  }
}
