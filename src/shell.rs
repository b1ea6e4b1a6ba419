use super::*;

pub(crate) struct Shell {
  location: Resolution,
}

impl Shell {
  pub(crate) fn active_link(&self) -> usize {
    NavLink::index_of(self.location.filter)
  }

  pub(crate) fn filter(&self) -> Option<ItemType> {
    self.location.filter
  }

  pub(crate) fn location(&self) -> &Resolution {
    &self.location
  }

  /// Moves to `path` and reports whether the resolved filter changed.
  pub(crate) fn navigate(&mut self, path: &str) -> bool {
    let resolution = Self::resolve(path);

    let changed = resolution.filter != self.location.filter;

    self.location = resolution;

    changed
  }

  pub(crate) fn navigate_to_link(&mut self, index: usize) -> bool {
    NavLink::all()
      .get(index)
      .is_some_and(|link| self.navigate(link.path))
  }

  pub(crate) fn new(path: &str) -> Self {
    Self {
      location: Self::resolve(path),
    }
  }

  pub(crate) fn next_link(&mut self) -> bool {
    let count = NavLink::all().len();

    self.navigate_to_link((self.active_link() + 1) % count)
  }

  pub(crate) fn previous_link(&mut self) -> bool {
    let count = NavLink::all().len();

    self.navigate_to_link((self.active_link() + count - 1) % count)
  }

  fn resolve(path: &str) -> Resolution {
    let resolution = Router::resolve(path);

    if resolution.redirected {
      info!(requested = path, "redirecting unknown path to {ROOT_PATH}");
    }

    resolution
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_resolves_initial_path() {
    let shell = Shell::new("/type/comment");

    assert_eq!(shell.filter(), Some(ItemType::Comment));
    assert_eq!(shell.active_link(), 2);
  }

  #[test]
  fn new_redirects_unknown_initial_path() {
    let shell = Shell::new("/bogus");

    assert_eq!(shell.filter(), None);
    assert_eq!(shell.location().path, "/");
    assert!(shell.location().redirected);
  }

  #[test]
  fn navigate_reports_filter_changes_only() {
    let mut shell = Shell::new("/");

    assert!(shell.navigate("/type/poll"));
    assert_eq!(shell.filter(), Some(ItemType::Poll));

    assert!(!shell.navigate("/type/poll/"));

    assert!(shell.navigate("/bogus"));
    assert_eq!(shell.filter(), None);
    assert_eq!(shell.location().path, "/");

    assert!(!shell.navigate("/"));
  }

  #[test]
  fn link_navigation_wraps_around() {
    let mut shell = Shell::new("/");

    assert!(shell.previous_link());
    assert_eq!(shell.filter(), Some(ItemType::PollOpt));

    assert!(shell.next_link());
    assert_eq!(shell.filter(), None);

    assert!(shell.next_link());
    assert_eq!(shell.filter(), Some(ItemType::Story));
  }

  #[test]
  fn navigate_to_missing_link_is_ignored() {
    let mut shell = Shell::new("/type/job");

    assert!(!shell.navigate_to_link(42));
    assert_eq!(shell.filter(), Some(ItemType::Job));
  }
}
