use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Resolution {
  pub(crate) filter: Option<ItemType>,
  pub(crate) path: String,
  pub(crate) redirected: bool,
}
