use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PageRequest {
  pub(crate) filter: Option<ItemType>,
  pub(crate) limit: u64,
  pub(crate) page: u64,
}
