use std::sync::mpsc::Sender;
use std::thread;

use rollscan_core::domain::model::VoterRecord;
use rollscan_core::infra::postgrest::RollClient;

use super::{
  App,
  Focus
};

pub(crate) enum AppEvent {
  SearchLoaded {
    voters: Vec<VoterRecord>
  },
  SearchFailed {
    message: String
  }
}

impl App {
  pub(crate) fn set_event_sender(
    &mut self,
    sender: Sender<AppEvent>
  ) {
    self.event_tx = Some(sender);
  }

  pub(crate) fn apply_event(
    &mut self,
    event: AppEvent
  ) {
    match event {
      | AppEvent::SearchLoaded {
        voters
      } => {
        self.loading = false;
        self.error = None;
        self.voters = voters;
        self.selected = 0;
        self.status = format!(
          "{} found",
          self.voters.len()
        );
      }
      | AppEvent::SearchFailed {
        message
      } => {
        self.loading = false;
        self.error = Some(message);
        self.status =
          "Search failed".to_string();
      }
    }
  }

  /// Entry point for the search
  /// form. Refuses empty terms and
  /// keeps at most one request in
  /// flight.
  pub(crate) fn submit_search(
    &mut self
  ) {
    let term = self
      .query
      .trim()
      .to_string();
    if term.is_empty() {
      self.status =
        "Search query is empty"
          .to_string();
      return;
    }
    if self.loading {
      self.status = "A search is \
                     already running"
        .to_string();
      return;
    }

    self.searched = true;
    self.loading = true;
    self.error = None;
    self.voters.clear();
    self.selected = 0;
    self.focus = Focus::Results;
    self.status = format!(
      "Searching for '{term}'"
    );
    self.queue_search(term);
  }

  fn queue_search(
    &mut self,
    term: String
  ) {
    let Some(sender) =
      self.event_tx.clone()
    else {
      return;
    };

    let target = self.roll.clone();

    thread::spawn(move || {
      let client =
        match RollClient::new(&target)
        {
          | Ok(client) => client,
          | Err(err) => {
            let _ = sender.send(
              AppEvent::SearchFailed {
                message: err
                  .to_string()
              }
            );
            return;
          }
        };

      match client
        .search_voters(&term)
      {
        | Ok(voters) => {
          let _ = sender.send(
            AppEvent::SearchLoaded {
              voters
            }
          );
        }
        | Err(err) => {
          let _ = sender.send(
            AppEvent::SearchFailed {
              message: err.to_string()
            }
          );
        }
      }
    });
  }
}
