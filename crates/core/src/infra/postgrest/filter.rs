//! Builds the PostgREST filter
//! expression for the voter lookup.

/// Columns the free-text term is
/// matched against.
pub const SEARCH_COLUMNS: [&str; 2] =
  ["voter_name", "epic_id"];

/// Wraps the trimmed term in `*`
/// wildcards so `ilike` matches the
/// term anywhere in the column.
pub fn ilike_pattern(
  term: &str
) -> String {
  format!("*{}*", term.trim())
}

/// The value of the `or=` query
/// parameter: one `ilike` condition
/// per search column.
pub fn or_ilike_filter(
  term: &str
) -> String {
  let pattern =
    quote_term(&ilike_pattern(term));
  let conditions = SEARCH_COLUMNS
    .iter()
    .map(|column| {
      format!(
        "{column}.ilike.{pattern}"
      )
    })
    .collect::<Vec<_>>();
  format!("({})", conditions.join(","))
}

/// PostgREST reads a filter value up
/// to the next `,` or `)`. Quoting
/// keeps such characters, and edge
/// whitespace, part of the term.
pub fn quote_term(
  value: &str
) -> String {
  if !needs_quoting(value) {
    return value.to_string();
  }
  let mut quoted =
    String::with_capacity(
      value.len() + 2
    );
  quoted.push('"');
  for ch in value.chars() {
    if ch == '"' || ch == '\\' {
      quoted.push('\\');
    }
    quoted.push(ch);
  }
  quoted.push('"');
  quoted
}

fn needs_quoting(value: &str) -> bool {
  value.starts_with(' ')
    || value.ends_with(' ')
    || value.chars().any(|ch| {
      matches!(
        ch,
        ',' | '(' | ')' | '"' | '\\'
      )
    })
}
