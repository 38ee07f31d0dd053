use rollscan_core::infra::postgrest::filter::{
  ilike_pattern,
  or_ilike_filter,
  quote_term
};

#[test]
fn plain_terms_stay_unquoted() {
  assert_eq!(
    ilike_pattern("kumar"),
    "*kumar*"
  );
  assert_eq!(
    or_ilike_filter("kumar"),
    "(voter_name.ilike.*kumar*,\
     epic_id.ilike.*kumar*)"
  );
}

#[test]
fn terms_are_trimmed_first() {
  assert_eq!(
    ilike_pattern("  SBN0012  "),
    "*SBN0012*"
  );
}

#[test]
fn inner_spaces_do_not_quote() {
  assert_eq!(
    quote_term("*ram lal*"),
    "*ram lal*"
  );
  assert_eq!(
    or_ilike_filter("ram lal"),
    "(voter_name.ilike.*ram lal*,\
     epic_id.ilike.*ram lal*)"
  );
}

#[test]
fn delimiters_force_quoting() {
  // `,` would otherwise end the
  // condition early.
  assert_eq!(
    or_ilike_filter("singh, jr"),
    "(voter_name.ilike.\"*singh, jr*\",\
     epic_id.ilike.\"*singh, jr*\")"
  );
  assert_eq!(
    quote_term("*a(b)*"),
    "\"*a(b)*\""
  );
}

#[test]
fn quotes_and_backslashes_escape() {
  assert_eq!(
    quote_term("*a\"b*"),
    "\"*a\\\"b*\""
  );
  assert_eq!(
    quote_term("*a\\b*"),
    "\"*a\\\\b*\""
  );
}

#[test]
fn edge_whitespace_forces_quoting() {
  assert_eq!(
    quote_term(" abc"),
    "\" abc\""
  );
}
