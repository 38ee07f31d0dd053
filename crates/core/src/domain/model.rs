//! Domain models: the voter row as
//! the hosted table serves it.

use serde::Deserialize;

/// One row of the `voters` table.
/// The schema is owned by the
/// hosted service; every column
/// except the serial and the name
/// may come back null.
#[derive(
  Debug, Clone, Deserialize,
)]
pub struct VoterRecord {
  pub serial_no:     i64,
  pub voter_name:    String,
  pub relation_name: Option<String>,
  pub relation_type: Option<String>,
  pub epic_id:       Option<String>,
  pub age:           Option<i64>,
  pub gender:        Option<String>,
  pub house_number:  Option<String>
}
