use super::*;

#[derive(Debug, PartialEq)]
pub(crate) enum Body<'a> {
  Empty,
  Error(&'a str),
  Items(&'a [Item]),
  Loading,
}
