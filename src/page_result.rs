use super::*;

#[derive(Debug, Default, Deserialize, PartialEq)]
pub(crate) struct PageResult {
  #[serde(default, deserialize_with = "deserialize_lenient_items")]
  pub(crate) items: Vec<Item>,
  #[serde(default, deserialize_with = "deserialize_lenient_count")]
  pub(crate) total: u64,
}
