use anyhow::Result;
use crossterm::event::{
  KeyCode,
  KeyEvent
};

use super::super::{
  App,
  Focus
};

impl App {
  pub(super) fn handle_query_key(
    &mut self,
    key: KeyEvent
  ) -> Result<bool> {
    match key.code {
      | KeyCode::Esc
      | KeyCode::Tab => {
        self.focus = Focus::Results;
      }
      | KeyCode::Enter => {
        self.submit_search();
      }
      | KeyCode::Backspace => {
        self.query.pop();
      }
      | KeyCode::Char(ch) => {
        self.query.push(ch);
      }
      | _ => {}
    }

    Ok(false)
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::{
    KeyCode,
    KeyEvent,
    KeyModifiers
  };

  use crate::app::{
    test_app,
    App,
    Focus,
    ResultsView
  };

  fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(
      code,
      KeyModifiers::NONE
    )
  }

  fn type_term(
    app: &mut App,
    term: &str
  ) {
    for ch in term.chars() {
      app
        .handle_key(press(
          KeyCode::Char(ch),
        ))
        .expect("handled");
    }
  }

  #[test]
  fn typing_edits_the_query() {
    let mut app = test_app();
    type_term(&mut app, "asha");
    assert_eq!(app.query, "asha");

    app
      .handle_key(press(
        KeyCode::Backspace,
      ))
      .expect("handled");
    assert_eq!(app.query, "ash");
  }

  #[test]
  fn backspace_on_empty_is_a_noop() {
    let mut app = test_app();
    app
      .handle_key(press(
        KeyCode::Backspace,
      ))
      .expect("handled");
    assert!(app.query.is_empty());
  }

  #[test]
  fn esc_moves_focus_to_results() {
    let mut app = test_app();
    app
      .handle_key(press(KeyCode::Esc))
      .expect("handled");
    assert_eq!(
      app.focus,
      Focus::Results
    );
  }

  #[test]
  fn enter_submits_the_query() {
    let mut app = test_app();
    type_term(&mut app, "devi");
    app
      .handle_key(press(
        KeyCode::Enter,
      ))
      .expect("handled");
    assert!(app.loading);
    assert_eq!(
      app.results_view(),
      ResultsView::Loading
    );
  }

  #[test]
  fn enter_on_blank_stays_idle() {
    let mut app = test_app();
    type_term(&mut app, "   ");
    app
      .handle_key(press(
        KeyCode::Enter,
      ))
      .expect("handled");
    assert!(!app.loading);
    assert_eq!(
      app.results_view(),
      ResultsView::Idle
    );
    assert_eq!(
      app.status,
      "Search query is empty"
    );
  }
}
