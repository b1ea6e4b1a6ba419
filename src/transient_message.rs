use super::*;

/// A status line message that reverts to the previous one once it expires.
#[derive(Clone)]
pub(crate) struct TransientMessage {
  expires_at: Instant,
  shown: String,
  underlying: String,
}

impl TransientMessage {
  const LIFETIME: Duration = Duration::from_secs(3);

  pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
    now >= self.expires_at
  }

  pub(crate) fn new(shown: String, underlying: String) -> Self {
    Self {
      expires_at: Instant::now() + Self::LIFETIME,
      shown,
      underlying,
    }
  }

  pub(crate) fn shown(&self) -> &str {
    &self.shown
  }

  pub(crate) fn underlying(&self) -> &str {
    &self.underlying
  }
}
