use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Effect {
  FetchPage {
    request: PageRequest,
    request_id: u64,
  },
  OpenUrl {
    url: String,
  },
}

impl From<Load> for Effect {
  fn from(load: Load) -> Self {
    Effect::FetchPage {
      request: load.request,
      request_id: load.request_id,
    }
  }
}
