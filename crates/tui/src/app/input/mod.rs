mod browse;
mod query;

use anyhow::Result;
use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyModifiers
};

use super::{
  App,
  Focus
};
use crate::config::KeyBinding;

impl App {
  pub(crate) fn handle_key(
    &mut self,
    key: KeyEvent
  ) -> Result<bool> {
    // ctrl+c quits no matter which
    // pane holds focus.
    if key.code == KeyCode::Char('c')
      && key.modifiers
        == KeyModifiers::CONTROL
    {
      return Ok(true);
    }

    match self.focus {
      | Focus::Query => {
        self.handle_query_key(key)
      }
      | Focus::Results => {
        self.handle_browse_key(key)
      }
    }
  }

  pub(crate) fn key_matches(
    &self,
    binding: &KeyBinding,
    key: KeyEvent
  ) -> bool {
    key.code == binding.code
      && key.modifiers
        == binding.modifiers
  }
}
