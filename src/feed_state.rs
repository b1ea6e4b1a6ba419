use super::*;

pub(crate) struct FeedState {
  filter: Option<ItemType>,
  in_flight: Option<u64>,
  items: ListView<Item>,
  limit: u64,
  next_request_id: u64,
  page: u64,
  status: Status,
  total: u64,
}

impl FeedState {
  pub(crate) fn apply(
    &mut self,
    request_id: u64,
    result: Result<PageResult, FetchError>,
  ) -> bool {
    if self.in_flight != Some(request_id) {
      debug!(
        request_id,
        latest = ?self.in_flight,
        "discarding stale page response"
      );

      return false;
    }

    self.in_flight = None;

    match result {
      Ok(PageResult { items, total }) => {
        debug!(
          request_id,
          count = items.len(),
          total,
          page = self.page,
          "page loaded"
        );

        self.items = ListView::new(items);
        self.total = total;
        self.status = Status::Success;
      }
      Err(error) => {
        warn!(request_id, page = self.page, %error, "page load failed");

        self.status = Status::Error(error.to_string());
      }
    }

    true
  }

  pub(crate) fn body(&self) -> Body<'_> {
    match &self.status {
      Status::Loading => Body::Loading,
      Status::Error(message) => Body::Error(message),
      Status::Success if !self.items.is_empty() => {
        Body::Items(self.items.items())
      }
      Status::Idle | Status::Success => Body::Empty,
    }
  }

  pub(crate) fn can_go_next(&self) -> bool {
    !self.is_loading() && self.page < self.total_pages()
  }

  pub(crate) fn can_go_prev(&self) -> bool {
    !self.is_loading() && self.page > 1
  }

  pub(crate) fn can_refresh(&self) -> bool {
    !self.is_loading()
  }

  /// Pulls `page` back inside `[1, total_pages]` after a response reports a
  /// smaller total, reloading the last page that still exists.
  pub(crate) fn clamp_page(&mut self) -> Option<Load> {
    let last = self.total_pages();

    if self.is_loading() || self.page <= last {
      return None;
    }

    info!(page = self.page, last, "total shrank below current page");

    self.page = last;

    Some(self.load())
  }

  pub(crate) fn go_to_next_page(&mut self) -> Option<Load> {
    if !self.can_go_next() {
      return None;
    }

    self.page += 1;

    Some(self.load())
  }

  pub(crate) fn go_to_prev_page(&mut self) -> Option<Load> {
    if !self.can_go_prev() {
      return None;
    }

    self.page -= 1;

    Some(self.load())
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.status == Status::Loading
  }

  pub(crate) fn list(&self) -> &ListView<Item> {
    &self.items
  }

  pub(crate) fn list_mut(&mut self) -> &mut ListView<Item> {
    &mut self.items
  }

  fn load(&mut self) -> Load {
    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    let request = PageRequest {
      filter: self.filter,
      limit: self.limit,
      page: self.page,
    };

    debug!(request_id, ?request, "issuing page load");

    self.in_flight = Some(request_id);
    self.status = Status::Loading;

    Load {
      request,
      request_id,
    }
  }

  /// Issues the initial load. Only the idle state can be mounted.
  pub(crate) fn mount(&mut self) -> Option<Load> {
    (self.status == Status::Idle).then(|| self.load())
  }

  pub(crate) fn new(filter: Option<ItemType>, limit: u64) -> Self {
    Self {
      filter,
      in_flight: None,
      items: ListView::default(),
      limit: limit.max(1),
      next_request_id: 0,
      page: 1,
      status: Status::Idle,
      total: 0,
    }
  }

  /// Switches to `filter` and starts over from the first page. Any load
  /// still in flight for the previous filter becomes stale.
  pub(crate) fn on_filter_change(
    &mut self,
    filter: Option<ItemType>,
  ) -> Option<Load> {
    if filter == self.filter && self.status != Status::Idle {
      return None;
    }

    self.filter = filter;
    self.page = 1;

    Some(self.load())
  }

  pub(crate) fn page(&self) -> u64 {
    self.page
  }

  pub(crate) fn refresh(&mut self) -> Option<Load> {
    if !self.can_refresh() {
      return None;
    }

    self.page = 1;

    Some(self.load())
  }

  pub(crate) fn total(&self) -> u64 {
    self.total
  }

  pub(crate) fn total_pages(&self) -> u64 {
    self.total.div_ceil(self.limit).max(1)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn item(id: u64) -> Item {
    Item {
      by: None,
      id,
      score: None,
      time: None,
      title: None,
      r#type: None,
      url: None,
    }
  }

  fn page_of(total: u64, count: u64) -> PageResult {
    PageResult {
      items: (0..count).map(item).collect(),
      total,
    }
  }

  fn loaded(total: u64) -> FeedState {
    let mut feed = FeedState::new(None, 20);

    let load = feed.mount().expect("mount issues a load");

    assert!(feed.apply(load.request_id, Ok(page_of(total, 0))));

    feed
  }

  #[test]
  fn total_pages_is_at_least_one() {
    for (total, limit, expected) in [
      (0, 20, 1),
      (1, 20, 1),
      (20, 20, 1),
      (21, 20, 2),
      (45, 20, 3),
      (100, 1, 100),
    ] {
      let mut feed = FeedState::new(None, limit);
      let load = feed.mount().unwrap();
      feed.apply(load.request_id, Ok(page_of(total, 0)));

      assert_eq!(feed.total_pages(), expected, "total={total} limit={limit}");
    }
  }

  #[test]
  fn zero_limit_is_raised_to_one() {
    assert_eq!(FeedState::new(None, 0).limit, 1);
  }

  #[test]
  fn starts_idle_and_mount_issues_first_page() {
    let mut feed = FeedState::new(Some(ItemType::Story), 20);

    assert_eq!(feed.status, Status::Idle);
    assert_eq!(feed.body(), Body::Empty);

    let load = feed.mount().unwrap();

    assert_eq!(
      load.request,
      PageRequest {
        filter: Some(ItemType::Story),
        limit: 20,
        page: 1,
      }
    );

    assert!(feed.is_loading());
    assert_eq!(feed.body(), Body::Loading);
    assert_eq!(feed.mount(), None);
  }

  #[test]
  fn successful_response_replaces_items_and_total() {
    let mut feed = FeedState::new(None, 20);
    let load = feed.mount().unwrap();

    let story = Item {
      by: Some("alice".into()),
      id: 1,
      score: Some(5),
      time: Some(1_700_000_000),
      title: Some("A".into()),
      r#type: Some(ItemType::Story),
      url: None,
    };

    assert!(feed.apply(
      load.request_id,
      Ok(PageResult {
        items: vec![story.clone()],
        total: 1,
      })
    ));

    assert_eq!(feed.status, Status::Success);
    assert_eq!(feed.total(), 1);
    assert_eq!(feed.body(), Body::Items(&[story]));
  }

  #[test]
  fn prev_on_first_page_is_noop() {
    let mut feed = loaded(100);

    assert_eq!(feed.go_to_prev_page(), None);
    assert_eq!(feed.page(), 1);
    assert_eq!(feed.status, Status::Success);
  }

  #[test]
  fn next_on_last_page_is_noop() {
    let mut feed = loaded(45);

    for expected in [2, 3] {
      let load = feed.go_to_next_page().unwrap();
      assert_eq!(load.request.page, expected);
      feed.apply(load.request_id, Ok(page_of(45, 5)));
    }

    assert_eq!(feed.go_to_next_page(), None);
    assert_eq!(feed.page(), 3);
  }

  #[test]
  fn navigation_is_blocked_while_loading() {
    let mut feed = loaded(100);

    let load = feed.go_to_next_page().unwrap();

    assert!(feed.is_loading());
    assert_eq!(feed.go_to_next_page(), None);
    assert_eq!(feed.go_to_prev_page(), None);
    assert_eq!(feed.refresh(), None);
    assert_eq!(feed.page(), 2);

    feed.apply(load.request_id, Ok(page_of(100, 20)));

    assert!(feed.can_go_prev());
    assert!(feed.can_go_next());
    assert!(feed.can_refresh());
  }

  #[test]
  fn page_stays_in_bounds_under_any_sequence() {
    let mut feed = loaded(45);

    let moves = [true, true, true, true, false, true, false, false, false];

    for forward in moves {
      let load = if forward {
        feed.go_to_next_page()
      } else {
        feed.go_to_prev_page()
      };

      if let Some(load) = load {
        feed.apply(load.request_id, Ok(page_of(45, 5)));
      }

      assert!((1..=feed.total_pages()).contains(&feed.page()));
    }

    assert_eq!(feed.page(), 1);
  }

  #[test]
  fn refresh_returns_to_first_page() {
    let mut feed = loaded(100);

    for _ in 0..3 {
      let load = feed.go_to_next_page().unwrap();
      feed.apply(load.request_id, Ok(page_of(100, 20)));
    }

    assert_eq!(feed.page(), 4);

    let load = feed.refresh().unwrap();

    assert_eq!(load.request.page, 1);
    assert_eq!(feed.page(), 1);
  }

  #[test]
  fn refresh_on_first_page_still_issues_a_load() {
    let mut feed = loaded(5);

    assert_eq!(feed.refresh().map(|load| load.request.page), Some(1));
  }

  #[test]
  fn failure_keeps_last_known_data() {
    let mut feed = FeedState::new(None, 20);
    let load = feed.mount().unwrap();
    feed.apply(load.request_id, Ok(page_of(45, 20)));

    let load = feed.go_to_next_page().unwrap();

    feed.apply(load.request_id, Err(FetchError::Server(500)));

    assert_eq!(feed.status, Status::Error("Server error: 500".into()));
    assert_eq!(feed.body(), Body::Error("Server error: 500"));
    assert_eq!(feed.total(), 45);
    assert_eq!(feed.items.items().len(), 20);
  }

  #[test]
  fn error_state_allows_retry() {
    let mut feed = FeedState::new(None, 20);
    let load = feed.mount().unwrap();

    feed.apply(load.request_id, Err(FetchError::Transport("offline".into())));

    assert_eq!(feed.status, Status::Error("offline".into()));

    let retry = feed.refresh().unwrap();

    assert!(feed.is_loading());
    assert_eq!(retry.request.page, 1);
  }

  #[test]
  fn filter_change_resets_to_first_page_and_reloads() {
    let mut feed = loaded(100);

    let load = feed.go_to_next_page().unwrap();
    feed.apply(load.request_id, Ok(page_of(100, 20)));

    let load = feed.on_filter_change(Some(ItemType::Poll)).unwrap();

    assert_eq!(
      load.request,
      PageRequest {
        filter: Some(ItemType::Poll),
        limit: 20,
        page: 1,
      }
    );

    assert_eq!(feed.filter, Some(ItemType::Poll));
    assert_eq!(feed.on_filter_change(Some(ItemType::Poll)), None);
  }

  #[test]
  fn filter_change_supersedes_in_flight_load() {
    let mut feed = FeedState::new(None, 20);

    let stale = feed.mount().unwrap();
    let fresh = feed.on_filter_change(Some(ItemType::Job)).unwrap();

    assert_ne!(stale.request_id, fresh.request_id);

    assert!(!feed.apply(stale.request_id, Ok(page_of(99, 20))));
    assert!(feed.is_loading());
    assert_eq!(feed.total(), 0);

    assert!(feed.apply(fresh.request_id, Ok(page_of(3, 3))));
    assert_eq!(feed.total(), 3);
    assert_eq!(feed.items.items().len(), 3);
  }

  #[test]
  fn late_duplicate_response_is_discarded() {
    let mut feed = FeedState::new(None, 20);
    let load = feed.mount().unwrap();

    assert!(feed.apply(load.request_id, Ok(page_of(7, 7))));
    assert!(!feed.apply(load.request_id, Err(FetchError::Server(502))));
    assert_eq!(feed.status, Status::Success);
  }

  #[test]
  fn success_without_items_renders_empty_body() {
    let feed = loaded(0);

    assert_eq!(feed.body(), Body::Empty);
    assert_eq!(feed.total_pages(), 1);
    assert!(!feed.can_go_next());
  }

  #[test]
  fn shrinking_total_pulls_page_back_in_range() {
    let mut feed = loaded(45);

    let load = feed.go_to_next_page().unwrap();
    feed.apply(load.request_id, Ok(page_of(45, 20)));

    assert_eq!(feed.clamp_page(), None);

    let load = feed.go_to_next_page().unwrap();
    assert_eq!(load.request.page, 3);

    feed.apply(load.request_id, Ok(page_of(10, 0)));

    let reload = feed.clamp_page().unwrap();

    assert_eq!(reload.request.page, 1);
    assert_eq!(feed.page(), 1);
    assert_eq!(feed.total_pages(), 1);
    assert!(feed.is_loading());
    assert_eq!(feed.clamp_page(), None);

    feed.apply(reload.request_id, Ok(page_of(10, 10)));

    assert_eq!(feed.page(), 1);
    assert!(!feed.can_go_next());
  }
}
