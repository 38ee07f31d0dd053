mod app;
mod config;
mod logging;
mod ui;

use std::io::{
  self,
  Stdout
};
use std::path::PathBuf;
use std::sync::mpsc::{
  self,
  Receiver
};
use std::time::{
  Duration,
  Instant
};

use anyhow::{
  Context,
  Result
};
use crossterm::event::{
  self,
  Event
};
use crossterm::execute;
use crossterm::terminal::{
  EnterAlternateScreen,
  LeaveAlternateScreen,
  disable_raw_mode,
  enable_raw_mode
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::app::{
  App,
  AppEvent
};
use crate::config::{
  TuiConfig,
  default_config_path
};

fn main() -> Result<()> {
  let config_path =
    resolve_config_path();
  let config =
    TuiConfig::load(&config_path)
      .with_context(|| {
        format!(
          "load config: {}",
          config_path.display()
        )
      })?;
  let keys = config
    .resolved_keybindings()
    .with_context(|| {
      "resolve keybindings"
    })?;

  logging::init_logging(
    &config.logging
  )
  .with_context(|| "init logging")?;
  info!(
    roll_url = %config.roll.url,
    "starting rollscan tui"
  );

  enable_raw_mode()?;

  let mut stdout = io::stdout();

  execute!(
    stdout,
    EnterAlternateScreen
  )?;

  let backend =
    CrosstermBackend::new(stdout);

  let mut terminal =
    Terminal::new(backend)?;

  let mut app =
    App::new(&config, keys);

  let (event_tx, event_rx) =
    mpsc::channel();
  app.set_event_sender(event_tx);

  let tick_rate = Duration::from_millis(
    config.ui.refresh_interval_ms
  );

  let mut last_tick = Instant::now();

  let res = run_app(
    &mut terminal,
    &mut app,
    &event_rx,
    tick_rate,
    &mut last_tick
  );

  disable_raw_mode()?;

  execute!(
    terminal.backend_mut(),
    LeaveAlternateScreen
  )?;

  terminal.show_cursor()?;

  res
}

fn resolve_config_path() -> PathBuf {
  if let Some(path) =
    std::env::args().nth(1)
  {
    return PathBuf::from(path);
  }

  if let Ok(path) =
    std::env::var("ROLLSCAN_TUI_CONFIG")
  {
    return PathBuf::from(path);
  }

  default_config_path()
}

fn run_app(
  terminal: &mut Terminal<
    CrosstermBackend<Stdout>
  >,
  app: &mut App,
  events: &Receiver<AppEvent>,
  tick_rate: Duration,
  last_tick: &mut Instant
) -> Result<()> {
  loop {
    while let Ok(event) =
      events.try_recv()
    {
      app.apply_event(event);
    }

    terminal.draw(|frame| {
      ui::draw(frame, app)
    })?;

    let timeout = tick_rate
      .saturating_sub(
        last_tick.elapsed()
      );

    if event::poll(timeout)? {
      if let Event::Key(key) =
        event::read()?
      {
        if app.handle_key(key)? {
          return Ok(());
        }
      }
    }

    if last_tick.elapsed() >= tick_rate
    {
      *last_tick = Instant::now();
    }
  }
}
