use rollscan_core::domain::model::VoterRecord;

#[test]
fn a_full_row_deserializes() {
  let row = r#"{
    "serial_no": 101,
    "voter_name": "Asha Devi",
    "relation_name": "Mohan Lal",
    "relation_type": "father",
    "epic_id": "ABC1234567",
    "age": 34,
    "gender": "F",
    "house_number": "12-4"
  }"#;
  let voter =
    serde_json::from_str::<VoterRecord>(
      row,
    )
    .expect("row should parse");
  assert_eq!(voter.serial_no, 101);
  assert_eq!(
    voter.voter_name,
    "Asha Devi"
  );
  assert_eq!(
    voter.epic_id.as_deref(),
    Some("ABC1234567")
  );
  assert_eq!(voter.age, Some(34));
}

#[test]
fn null_columns_become_none() {
  let row = r#"{
    "serial_no": 7,
    "voter_name": "Ram Singh",
    "relation_name": null,
    "relation_type": null,
    "epic_id": null,
    "age": null,
    "gender": null,
    "house_number": null
  }"#;
  let voter =
    serde_json::from_str::<VoterRecord>(
      row,
    )
    .expect("row should parse");
  assert!(voter.epic_id.is_none());
  assert!(voter.age.is_none());
  assert!(
    voter.house_number.is_none()
  );
}

#[test]
fn absent_columns_become_none() {
  // PostgREST omits nothing today,
  // but a narrower select must not
  // break the decode.
  let row = r#"{
    "serial_no": 9,
    "voter_name": "Sita Kumari"
  }"#;
  let voter =
    serde_json::from_str::<VoterRecord>(
      row,
    )
    .expect("row should parse");
  assert!(voter.gender.is_none());
}

#[test]
fn a_result_page_is_a_row_array() {
  let body = r#"[
    {"serial_no": 1,
     "voter_name": "A"},
    {"serial_no": 2,
     "voter_name": "B"}
  ]"#;
  let voters = serde_json::from_str::<
    Vec<VoterRecord>,
  >(body)
  .expect("page should parse");
  assert_eq!(voters.len(), 2);
  assert_eq!(voters[1].serial_no, 2);
}
