use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn controls_line(&self) -> Line<'static> {
    let mut spans = vec![Span::raw(BASE_INDENT)];

    let controls = self.state.controls();

    for (index, (label, enabled)) in controls.into_iter().enumerate() {
      if index > 0 {
        spans.push(Span::raw("  "));
      }

      let style = if enabled {
        Style::default().fg(Color::White)
      } else {
        Style::default()
          .fg(Color::DarkGray)
          .add_modifier(Modifier::CROSSED_OUT)
      };

      spans.push(Span::styled(label, style));
    }

    Line::from(spans)
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let tab_titles: Vec<Line> = NavLink::all()
      .iter()
      .map(|link| Line::from(link.label.to_uppercase()))
      .collect();

    let tabs_widget = Tabs::new(tab_titles)
      .select(self.state.shell().active_link())
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw("|"))
      .block(
        Block::default()
          .borders(Borders::BOTTOM)
          .border_style(Style::default().fg(Color::DarkGray))
          .title_bottom(self.state.shell().location().path.clone()),
      );

    frame.render_widget(tabs_widget, layout[0]);

    let (list_items, selected_index, offset) = match self.state.feed().body() {
      Body::Loading => (Self::notice(LOADING_STATUS, Color::Gray), None, 0),
      Body::Error(message) => (Self::notice(message, Color::Red), None, 0),
      Body::Empty => (Self::notice(EMPTY_STATUS, Color::Gray), None, 0),
      Body::Items(items) => {
        let list = self.state.feed().list();

        (
          items.iter().map(Self::item_list_item).collect(),
          list.selected_index(),
          list.offset(),
        )
      }
    };

    let mut list_state = ListState::default()
      .with_selected(selected_index)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    self
      .state
      .feed_mut()
      .list_mut()
      .set_offset(list_state.offset());

    let footer = Paragraph::new(format!("{BASE_INDENT}{}", self.state.footer()))
      .style(Style::default().fg(Color::White));

    frame.render_widget(footer, layout[2]);

    frame.render_widget(Paragraph::new(self.controls_line()), layout[3]);

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[4]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchPage {
        request,
        request_id,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let result = client.fetch_page(request).await;

          if sender.send(Event::Page { request_id, result }).is_err() {
            debug!(request_id, "page response arrived after shutdown");
          }
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          info!(%url, "opened item in browser");

          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          warn!(%url, %error, "could not open item in browser");

          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  fn item_list_item(item: &Item) -> ListItem<'static> {
    ListItem::new(vec![
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(item.label(), Style::default().fg(Color::White)),
      ]),
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(item.detail(), Style::default().fg(Color::DarkGray)),
      ]),
      Line::from(Span::raw(BASE_INDENT)),
    ])
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn notice(text: &str, color: Color) -> Vec<ListItem<'static>> {
    vec![ListItem::new(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(text.to_string(), Style::default().fg(color)),
    ]))]
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message(Instant::now());

    while let Ok(event) = self.event_rx.try_recv() {
      let dispatch = self.state.handle_event(event);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    let mount = self.state.mount();

    for effect in mount.effects {
      self.execute_effect(effect);
    }

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(100))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let action = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        Action::for_key(key)
      };

      let dispatch = self.state.dispatch_action(action);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }
    }

    Ok(())
  }
}
