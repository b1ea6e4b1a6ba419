use super::*;

pub(crate) enum Event {
  Page {
    request_id: u64,
    result: Result<PageResult, FetchError>,
  },
}
