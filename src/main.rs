use {
  action::Action,
  anyhow::{Context, ensure},
  app::App,
  arguments::Arguments,
  body::Body,
  chrono::{DateTime, Local, TimeZone},
  clap::Parser,
  client::Client,
  config::Config,
  crossterm::{
    cursor::Show,
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  dispatch::Dispatch,
  effect::Effect,
  event::Event,
  feed_state::FeedState,
  fetch_error::FetchError,
  help_view::HelpView,
  item::Item,
  item_type::ItemType,
  list_view::ListView,
  load::Load,
  nav_link::NavLink,
  page_request::PageRequest,
  page_result::PageResult,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap,
    },
  },
  reqwest::{Url, header::ACCEPT},
  resolution::Resolution,
  router::Router,
  serde::{Deserialize, Deserializer, Serialize},
  serde_json::Value,
  shell::Shell,
  state::State,
  status::Status,
  std::{
    backtrace::BacktraceStatus,
    fmt::{self, Display, Formatter},
    fs::OpenOptions,
    io::{self, IsTerminal, Stdout},
    panic,
    path::{Path, PathBuf},
    process,
    str::FromStr,
    sync::Mutex,
    time::{Duration, Instant},
  },
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task,
  },
  tracing::{debug, info, warn},
  tracing_subscriber::{EnvFilter, fmt::layer as fmt_layer, prelude::*},
  transient_message::TransientMessage,
  utils::{
    deserialize_lenient_count, deserialize_lenient_integer,
    deserialize_lenient_item_type, deserialize_lenient_items,
    deserialize_optional_string, format_points, format_time, truncate,
  },
};

#[cfg(test)]
use utils::format_time_in;

mod action;
mod app;
mod arguments;
mod body;
mod client;
mod config;
mod dispatch;
mod effect;
mod event;
mod feed_state;
mod fetch_error;
mod help_view;
mod item;
mod item_type;
mod list_view;
mod load;
mod nav_link;
mod page_request;
mod page_result;
mod resolution;
mod router;
mod shell;
mod state;
mod status;
mod transient_message;
mod utils;

const BASE_INDENT: &str = " ";

const DEFAULT_API_BASE: &str = "http://localhost:8080";

const DEFAULT_PAGE_SIZE: u64 = 20;

const EMPTY_STATUS: &str = "No items on this page.";

const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch items";

const HELP_TITLE: &str = "Help";

const HELP_TEXT: &str = "\
Filters:
  ← / h      previous filter
  → / l      next filter
  tab        next filter
  shift+tab  previous filter
  1-6        all, story, comment, job, poll, pollopt

Pages:
  p / pg↑    previous page
  n / pg↓    next page
  r          refresh from the first page

Items:
  ↑ / k      move selection up
  ↓ / j      move selection down
  home       jump to first item
  end        jump to last item
  enter / o  open the selected item in your browser

  ?          toggle this help
  q / esc    quit
";

const LIST_STATUS: &str =
  "←/→ filter • p/n page • r refresh • o open • ? help • q quit";

const LOADING_STATUS: &str = "Loading...";

const LOG_ENV: &str = "HNFEED_LOG";

const MAX_PAGE_SIZE: u64 = 100;

const ROOT_PATH: &str = "/";

const TIME_PLACEHOLDER: &str = "-";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging(log_file: Option<&Path>) -> Result {
  let Some(path) = log_file else {
    return Ok(());
  };

  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  let filter = EnvFilter::try_from_env(LOG_ENV)
    .unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::registry()
    .with(fmt_layer().with_ansi(false).with_writer(Mutex::new(file)))
    .with(filter)
    .try_init()
    .context("could not install log subscriber")?;

  Ok(())
}

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  install_panic_hook(restore_terminal);

  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Runs `restore` ahead of the existing hook so a panic message lands on the
/// normal screen instead of the raw-mode alternate one.
fn install_panic_hook(restore: fn() -> Result) {
  let hook = panic::take_hook();

  panic::set_hook(Box::new(move |info| {
    if let Err(error) = restore() {
      eprintln!("could not restore terminal: {error}");
    }

    hook(info);
  }));
}

fn restore_terminal() -> Result {
  disable_raw_mode()?;

  execute!(io::stdout(), LeaveAlternateScreen, Show)?;

  Ok(())
}

async fn run() -> Result {
  let config = Arguments::parse().config()?;

  initialize_logging(config.log_file.as_deref())?;

  info!(
    api_base = %config.api_base,
    limit = config.limit,
    path = %config.initial_path,
    "starting hnfeed"
  );

  let client = Client::new(&config)?;

  let state = State::new(&config);

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, state);

  let result = task::spawn_blocking(move || app.run(&mut terminal)).await;

  restore_terminal()?;

  result.context("terminal event loop panicked")?
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
