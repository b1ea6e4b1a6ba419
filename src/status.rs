#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Status {
  Error(String),
  Idle,
  Loading,
  Success,
}
