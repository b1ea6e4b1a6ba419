use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct NavLink {
  pub(crate) filter: Option<ItemType>,
  pub(crate) label: &'static str,
  pub(crate) path: &'static str,
}

impl NavLink {
  pub(crate) fn all() -> &'static [NavLink] {
    &[
      NavLink {
        filter: None,
        label: "all",
        path: ROOT_PATH,
      },
      NavLink {
        filter: Some(ItemType::Story),
        label: "new / story",
        path: "/type/story",
      },
      NavLink {
        filter: Some(ItemType::Comment),
        label: "comments",
        path: "/type/comment",
      },
      NavLink {
        filter: Some(ItemType::Job),
        label: "jobs",
        path: "/type/job",
      },
      NavLink {
        filter: Some(ItemType::Poll),
        label: "polls",
        path: "/type/poll",
      },
      NavLink {
        filter: Some(ItemType::PollOpt),
        label: "pollopts",
        path: "/type/pollopt",
      },
    ]
  }

  pub(crate) fn index_of(filter: Option<ItemType>) -> usize {
    Self::all()
      .iter()
      .position(|link| link.filter == filter)
      .unwrap_or(0)
  }
}
