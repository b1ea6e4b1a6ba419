use super::*;

pub(crate) struct State {
  feed: FeedState,
  help: HelpView,
  message: String,
  pending_effects: Vec<Effect>,
  shell: Shell,
  transient_message: Option<TransientMessage>,
}

impl State {
  pub(crate) fn controls(&self) -> [(&'static str, bool); 3] {
    [
      ("p prev", self.feed.can_go_prev()),
      ("n next", self.feed.can_go_next()),
      ("r refresh", self.feed.can_refresh()),
    ]
  }

  pub(crate) fn dispatch_action(&mut self, action: Action) -> Dispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "action dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match action {
      Action::Quit => should_exit = true,
      Action::ShowHelp => self.help.show(),
      Action::HideHelp => self.help.hide(),
      Action::NavigateTo(index) => {
        let changed = self.shell.navigate_to_link(index);
        self.follow_filter(changed);
      }
      Action::NextFilter => {
        let changed = self.shell.next_link();
        self.follow_filter(changed);
      }
      Action::PreviousFilter => {
        let changed = self.shell.previous_link();
        self.follow_filter(changed);
      }
      Action::NextPage => {
        let load = self.feed.go_to_next_page();
        self.issue(load);
      }
      Action::PreviousPage => {
        let load = self.feed.go_to_prev_page();
        self.issue(load);
      }
      Action::Refresh => {
        let load = self.feed.refresh();
        self.issue(load);
      }
      Action::SelectNext => self.feed.list_mut().select_next(),
      Action::SelectPrevious => self.feed.list_mut().select_previous(),
      Action::SelectFirst => self.feed.list_mut().set_selected(0),
      Action::SelectLast => self.feed.list_mut().set_selected(usize::MAX),
      Action::OpenCurrentInBrowser => self.open_current_in_browser(),
      Action::None => {}
    }

    self.take_dispatch(should_exit)
  }

  pub(crate) fn feed(&self) -> &FeedState {
    &self.feed
  }

  pub(crate) fn feed_mut(&mut self) -> &mut FeedState {
    &mut self.feed
  }

  fn follow_filter(&mut self, changed: bool) {
    if changed {
      let filter = self.shell.filter();

      info!(
        path = %self.shell.location().path,
        filter = filter.map_or("all", ItemType::as_str),
        "filter changed"
      );

      let load = self.feed.on_filter_change(filter);
      self.issue(load);
    }
  }

  pub(crate) fn footer(&self) -> String {
    format!(
      "Page {} of {} • Total stories: {}",
      self.feed.page(),
      self.feed.total_pages(),
      self.feed.total()
    )
  }

  pub(crate) fn handle_event(&mut self, event: Event) -> Dispatch {
    match event {
      Event::Page { request_id, result } => {
        if self.feed.apply(request_id, result) {
          let load = self.feed.clamp_page();
          self.issue(load);
        }
      }
    }

    self.take_dispatch(false)
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  fn issue(&mut self, load: Option<Load>) {
    if let Some(load) = load {
      self.pending_effects.push(load.into());
    }
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  /// Starts the first load for the initial location.
  pub(crate) fn mount(&mut self) -> Dispatch {
    let load = self.feed.mount();

    self.issue(load);

    self.take_dispatch(false)
  }

  pub(crate) fn new(config: &Config) -> Self {
    let shell = Shell::new(&config.initial_path);

    Self {
      feed: FeedState::new(shell.filter(), config.limit),
      help: HelpView::new(),
      message: LIST_STATUS.into(),
      pending_effects: Vec::new(),
      shell,
      transient_message: None,
    }
  }

  fn open_current_in_browser(&mut self) {
    if !matches!(self.feed.body(), Body::Items(_)) {
      return;
    }

    if let Some(item) = self.feed.list().selected_item() {
      let url = item.resolved_url();
      self.pending_effects.push(Effect::OpenUrl { url });
    }
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let underlying = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.underlying().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), underlying));

    self.message = message;
  }

  pub(crate) fn shell(&self) -> &Shell {
    &self.shell
  }

  fn take_dispatch(&mut self, should_exit: bool) -> Dispatch {
    Dispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  pub(crate) fn update_transient_message(&mut self, now: Instant) {
    if let Some(transient) = self.transient_message.as_ref() {
      if self.message != transient.shown() {
        self.transient_message = None;
      } else if transient.is_expired_at(now) {
        self.message = transient.underlying().to_string();
        self.transient_message = None;
      }
    }
  }
}
