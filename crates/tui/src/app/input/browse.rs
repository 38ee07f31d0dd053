use anyhow::Result;
use crossterm::event::KeyEvent;

use super::super::util::move_index;
use super::super::{
  App,
  Focus
};

impl App {
  pub(super) fn handle_browse_key(
    &mut self,
    key: KeyEvent
  ) -> Result<bool> {
    if self.key_matches(
      &self.keys.quit,
      key
    ) {
      return Ok(true);
    }

    if self.key_matches(
      &self.keys.open_search,
      key
    ) {
      self.focus = Focus::Query;
      return Ok(false);
    }

    if self.key_matches(
      &self.keys.clear_search,
      key
    ) {
      self.clear_search();
      return Ok(false);
    }

    if self.key_matches(
      &self.keys.move_down,
      key
    ) {
      self.move_selection(1);
      return Ok(false);
    }

    if self.key_matches(
      &self.keys.move_up,
      key
    ) {
      self.move_selection(-1);
      return Ok(false);
    }

    if self.key_matches(
      &self.keys.go_top,
      key
    ) {
      self.jump_top();
      return Ok(false);
    }

    if self.key_matches(
      &self.keys.go_middle,
      key
    ) {
      self.jump_middle();
      return Ok(false);
    }

    if self.key_matches(
      &self.keys.go_bottom,
      key
    ) {
      self.jump_bottom();
      return Ok(false);
    }

    Ok(false)
  }

  /// Back to the blank form. A
  /// running search keeps its state
  /// until it resolves.
  fn clear_search(&mut self) {
    if self.loading {
      self.status = "Wait for the \
                     running search"
        .to_string();
      return;
    }
    self.query.clear();
    self.voters.clear();
    self.error = None;
    self.searched = false;
    self.selected = 0;
    self.focus = Focus::Query;
    self.status =
      "Search cleared".to_string();
  }

  fn move_selection(
    &mut self,
    delta: i32
  ) {
    self.selected = move_index(
      self.selected,
      self.voters.len(),
      delta
    );
  }

  fn jump_top(&mut self) {
    self.selected = 0;
  }

  fn jump_middle(&mut self) {
    if !self.voters.is_empty() {
      self.selected =
        self.voters.len() / 2;
    }
  }

  fn jump_bottom(&mut self) {
    if !self.voters.is_empty() {
      self.selected =
        self.voters.len() - 1;
    }
  }
}
