mod background;
mod input;
mod state;
mod util;

pub(crate) use background::AppEvent;
pub(crate) use state::{
  App,
  Focus,
  ResultsView
};

#[cfg(test)]
pub(crate) use state::{
  sample_voter,
  test_app
};
