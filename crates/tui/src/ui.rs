use ratatui::Frame;
use ratatui::layout::{
  Alignment,
  Constraint,
  Direction,
  Layout,
  Rect
};
use ratatui::style::{
  Color,
  Modifier,
  Style
};
use ratatui::text::Line;
use ratatui::widgets::{
  Block,
  Borders,
  Paragraph,
  Row,
  Table,
  TableState,
  Wrap
};
use rollscan_core::domain::model::VoterRecord;

use crate::app::{
  App,
  Focus,
  ResultsView
};

pub(crate) fn draw(
  frame: &mut Frame,
  app: &App
) {
  let banner = banner_text(app);
  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .margin(1)
    .constraints([
      Constraint::Length(3),
      Constraint::Min(5),
      Constraint::Length(3)
    ])
    .split(frame.area());

  draw_query_box(
    frame, chunks[0], app
  );
  draw_results(frame, chunks[1], app);
  draw_status_with_notice(
    frame,
    chunks[2],
    app.status.as_str(),
    banner
  );
}

fn draw_query_box(
  frame: &mut Frame,
  area: Rect,
  app: &App
) {
  let block_style = if matches!(
    app.focus,
    Focus::Query
  ) {
    Style::default().fg(Color::Yellow)
  } else {
    Style::default()
  };

  let block = Block::default()
    .borders(Borders::ALL)
    .title("Voter Search")
    .style(block_style);

  let query = if app.query.is_empty() {
    Paragraph::new(
      "Enter Name or EPIC ID"
    )
    .style(
      Style::default()
        .fg(Color::DarkGray)
    )
    .block(block)
  } else {
    Paragraph::new(
      app.query.as_str()
    )
    .block(block)
  };

  frame.render_widget(query, area);
}

fn draw_results(
  frame: &mut Frame,
  area: Rect,
  app: &App
) {
  let view = app.results_view();
  let block = Block::default()
    .borders(Borders::ALL)
    .title(results_title(
      view,
      app.voters.len(),
    ));

  match view {
    | ResultsView::Idle => {
      let hint = Paragraph::new(vec![
        Line::from(""),
        Line::from(
          "Enter a name or EPIC ID \
           to start searching"
        ),
      ])
      .alignment(Alignment::Center)
      .style(
        Style::default()
          .fg(Color::DarkGray)
      )
      .block(block);
      frame.render_widget(hint, area);
    }
    | ResultsView::Loading => {
      let notice = Paragraph::new(
        vec![
          Line::from(""),
          Line::from(
            "Searching the roll..."
          ),
        ]
      )
      .alignment(Alignment::Center)
      .style(
        Style::default()
          .fg(Color::Yellow)
      )
      .block(block);
      frame
        .render_widget(notice, area);
    }
    | ResultsView::Error => {
      let message = app
        .error
        .as_deref()
        .unwrap_or("unknown error");
      let notice = Paragraph::new(
        vec![
          Line::from(""),
          Line::from(format!(
            "Something went wrong: \
             {message}"
          )),
        ]
      )
      .alignment(Alignment::Center)
      .style(
        Style::default()
          .fg(Color::Red)
      )
      .wrap(Wrap {
        trim: true
      })
      .block(block);
      frame
        .render_widget(notice, area);
    }
    | ResultsView::Empty => {
      let hint = Paragraph::new(vec![
        Line::from(""),
        Line::from("No voters found"),
        Line::from(
          "Try utilizing a different \
           spelling or EPIC ID"
        ),
      ])
      .alignment(Alignment::Center)
      .style(
        Style::default()
          .fg(Color::DarkGray)
      )
      .block(block);
      frame.render_widget(hint, area);
    }
    | ResultsView::Table => {
      draw_voter_table(
        frame, area, app, block
      );
    }
  }
}

fn draw_voter_table(
  frame: &mut Frame,
  area: Rect,
  app: &App,
  block: Block
) {
  let header = Row::new([
    "Serial No",
    "Name",
    "Relation",
    "EPIC ID",
    "Age/Gender",
    "House #"
  ])
  .style(
    Style::default()
      .add_modifier(Modifier::BOLD)
  );

  let rows = app
    .voters
    .iter()
    .map(voter_row)
    .collect::<Vec<_>>();

  let table = Table::new(
    rows,
    [
      Constraint::Length(9),
      Constraint::Min(14),
      Constraint::Min(16),
      Constraint::Length(12),
      Constraint::Length(10),
      Constraint::Length(8)
    ]
  )
  .header(header)
  .block(block)
  .row_highlight_style(
    Style::default()
      .fg(Color::Yellow)
      .add_modifier(Modifier::BOLD)
  )
  .highlight_symbol("> ");

  let mut state = table_state(
    app.selected,
    app.voters.len()
  );

  frame.render_stateful_widget(
    table, area, &mut state
  );
}

fn voter_row(
  voter: &VoterRecord
) -> Row<'static> {
  Row::new([
    voter.serial_no.to_string(),
    voter.voter_name.clone(),
    relation_cell(voter),
    voter
      .epic_id
      .clone()
      .unwrap_or_else(|| {
        "-".to_string()
      }),
    age_gender_cell(voter),
    voter
      .house_number
      .clone()
      .unwrap_or_else(|| {
        "-".to_string()
      })
  ])
}

fn relation_cell(
  voter: &VoterRecord
) -> String {
  match (
    &voter.relation_name,
    &voter.relation_type
  ) {
    | (Some(name), Some(kind)) => {
      format!(
        "{name} ({})",
        title_case(kind)
      )
    }
    | (Some(name), None) => {
      name.clone()
    }
    | (None, Some(kind)) => {
      title_case(kind)
    }
    | (None, None) => "-".to_string()
  }
}

fn age_gender_cell(
  voter: &VoterRecord
) -> String {
  let age = voter
    .age
    .map(|age| age.to_string())
    .unwrap_or_else(|| {
      "-".to_string()
    });
  let gender = voter
    .gender
    .as_deref()
    .unwrap_or("-");
  format!("{age} / {gender}")
}

fn title_case(value: &str) -> String {
  let mut chars = value.chars();
  match chars.next() {
    | Some(first) => {
      first
        .to_uppercase()
        .collect::<String>()
        + chars.as_str()
    }
    | None => String::new()
  }
}

fn results_title(
  view: ResultsView,
  rows: usize
) -> String {
  if view == ResultsView::Table {
    format!("Results ({rows} found)")
  } else {
    "Results".to_string()
  }
}

fn table_state(
  selected: usize,
  len: usize
) -> TableState {
  let mut state =
    TableState::default();
  if len > 0 {
    state.select(Some(
      selected.min(len - 1),
    ));
  }
  state
}

fn draw_status_with_notice(
  frame: &mut Frame,
  area: Rect,
  status_text: &str,
  notice: Option<(String, Style)>
) {
  if let Some((text, style)) = notice {
    let split = Layout::default()
      .direction(Direction::Horizontal)
      .constraints([
        Constraint::Percentage(70),
        Constraint::Percentage(30)
      ])
      .split(area);

    let status =
      Paragraph::new(status_text)
        .block(
          Block::default()
            .borders(Borders::ALL)
            .title("Status")
        )
        .wrap(Wrap {
          trim: true
        });

    let banner = Paragraph::new(text)
      .block(
        Block::default()
          .borders(Borders::ALL)
          .title("Notice")
      )
      .style(style)
      .wrap(Wrap {
        trim: true
      });

    frame
      .render_widget(status, split[0]);
    frame
      .render_widget(banner, split[1]);
  } else {
    let status =
      Paragraph::new(status_text)
        .block(
          Block::default()
            .borders(Borders::ALL)
            .title("Status")
        )
        .wrap(Wrap {
          trim: true
        });

    frame.render_widget(status, area);
  }
}

fn banner_text(
  app: &App
) -> Option<(String, Style)> {
  if let Some(err) = &app.error {
    return Some((
      format!("Error: {err}"),
      Style::default().fg(Color::Red)
    ));
  }

  if app.loading {
    return Some((
      "Searching...".to_string(),
      Style::default()
        .fg(Color::Yellow)
    ));
  }

  None
}
