use std::sync::mpsc::Sender;

use rollscan_core::domain::model::VoterRecord;
use rollscan_core::infra::postgrest::RollTarget;

use crate::config::{
  ResolvedKeybindings,
  TuiConfig
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub(crate) enum Focus {
  Query,
  Results
}

/// What the results pane shows.
/// Derived, never stored: the flags
/// on `App` are the single source.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub(crate) enum ResultsView {
  Idle,
  Loading,
  Error,
  Empty,
  Table
}

pub(crate) struct App {
  pub(crate) focus: Focus,
  pub(crate) query: String,
  pub(crate) status: String,
  pub(crate) searched: bool,
  pub(crate) loading: bool,
  pub(crate) error: Option<String>,
  pub(crate) event_tx: Option<
    Sender<crate::app::AppEvent>
  >,
  pub(crate) voters: Vec<VoterRecord>,
  pub(crate) selected: usize,
  pub(crate) keys: ResolvedKeybindings,
  pub(crate) roll: RollTarget
}

impl App {
  pub(crate) fn new(
    config: &TuiConfig,
    keys: ResolvedKeybindings
  ) -> Self {
    Self {
      focus: Focus::Query,
      query: String::new(),
      status: "Enter a name or EPIC \
               ID. Enter searches. \
               Esc browses results."
        .to_string(),
      searched: false,
      loading: false,
      error: None,
      event_tx: None,
      voters: Vec::new(),
      selected: 0,
      keys,
      roll: RollTarget {
        url: config.roll.url.clone(),
        key: config.roll.key.clone(),
        timeout_ms: config
          .roll
          .timeout_ms
      }
    }
  }

  pub(crate) fn results_view(
    &self
  ) -> ResultsView {
    if self.loading {
      return ResultsView::Loading;
    }
    if self.error.is_some() {
      return ResultsView::Error;
    }
    if !self.voters.is_empty() {
      return ResultsView::Table;
    }
    if self.searched {
      return ResultsView::Empty;
    }
    ResultsView::Idle
  }
}

#[cfg(test)]
pub(crate) fn test_config() -> TuiConfig
{
  use crate::config::{
    Keybindings,
    LoggingConfig,
    RollConfig,
    UiConfig
  };

  TuiConfig {
    roll: RollConfig {
      url: "http://127.0.0.1:54321"
        .to_string(),
      key: "test-key".to_string(),
      timeout_ms: 1_000
    },
    ui: UiConfig {
      refresh_interval_ms: 100
    },
    logging: LoggingConfig {
      level: "info".to_string(),
      file:  None
    },
    keybindings: Keybindings {
      quit: "q".to_string(),
      open_search: "/".to_string(),
      clear_search: "c".to_string(),
      move_down: "j".to_string(),
      move_up: "k".to_string(),
      go_top: "g".to_string(),
      go_middle: "m".to_string(),
      go_bottom: "G".to_string()
    }
  }
}

#[cfg(test)]
pub(crate) fn test_app() -> App {
  let config = test_config();
  let keys = config
    .resolved_keybindings()
    .expect("test bindings parse");
  App::new(&config, keys)
}

#[cfg(test)]
pub(crate) fn sample_voter(
  serial_no: i64
) -> VoterRecord {
  VoterRecord {
    serial_no,
    voter_name: "Asha Devi"
      .to_string(),
    relation_name: Some(
      "Mohan Lal".to_string(),
    ),
    relation_type: Some(
      "father".to_string(),
    ),
    epic_id: Some(
      "ABC1234567".to_string(),
    ),
    age: Some(34),
    gender: Some("F".to_string()),
    house_number: Some(
      "12-4".to_string(),
    )
  }
}
