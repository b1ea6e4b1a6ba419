use super::*;

/// A page request the feed wants issued, tagged with the id its response
/// must carry to be applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Load {
  pub(crate) request: PageRequest,
  pub(crate) request_id: u64,
}
