use chrono::NaiveDate;
use legiscan_api::types::{Bill, Chamber, RollCall, Session};

fn load_payload(name: &str, key: &str) -> serde_json::Value {
    let json = std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap();
    let mut envelope: serde_json::Value = serde_json::from_str(&json).unwrap();
    envelope.get_mut(key).unwrap().take()
}

#[test]
fn deserialize_bill_full() {
    let bill: Bill = serde_json::from_value(load_payload("bill.json", "bill")).unwrap();

    assert_eq!(bill.bill_id, 1635636);
    assert_eq!(bill.bill_number, "SB 101");
    assert_eq!(bill.status, 4);
    assert_eq!(
        bill.status_date,
        Some(NaiveDate::from_ymd_opt(2023, 10, 8).unwrap())
    );
    assert_eq!(bill.session.session_id, 2016);

    assert_eq!(bill.sponsors.len(), 2);
    assert_eq!(bill.sponsors[0].people_id, 42);
    assert_eq!(bill.sponsors[0].sponsor_type_id, 1);
    assert_eq!(bill.sponsors[0].sponsor_order, 1);
    assert_eq!(bill.sponsors[1].sponsor_type_id, 2);

    assert_eq!(bill.votes.len(), 2);
    assert_eq!(bill.votes[0].chamber, Chamber::Senate);
    assert_eq!(bill.votes[1].chamber, Chamber::House);

    assert_eq!(bill.texts.len(), 2);
    assert_eq!(bill.texts[1].doc_type, "Enrolled");
}

#[test]
fn deserialize_roll_call_full() {
    let roll_call: RollCall =
        serde_json::from_value(load_payload("roll_call.json", "roll_call")).unwrap();

    assert_eq!(roll_call.roll_call_id, 1302751);
    assert_eq!(roll_call.bill_id, 1635636);
    assert_eq!(roll_call.chamber, Chamber::Senate);
    assert_eq!(roll_call.passed, 1);
    assert_eq!(roll_call.votes.len(), 3);
    assert_eq!(roll_call.votes[2].vote_id, 3);
    assert_eq!(roll_call.votes[2].vote_text, "NV");
}

#[test]
fn deserialize_sessions() {
    let sessions: Vec<Session> =
        serde_json::from_value(load_payload("session_list.json", "sessions")).unwrap();

    assert_eq!(sessions.len(), 3);
    assert_eq!(sessions[0].year_end, 2024);
    assert_eq!(sessions[2].special, 1);
    assert_eq!(sessions[2].session_name, "2021 First Special Session");
}

#[test]
fn deserialize_bill_missing_required_field_fails() {
    // A bill without its identifier must be a hard decode error, not a default.
    let mut payload = load_payload("bill.json", "bill");
    payload.as_object_mut().unwrap().remove("bill_id");
    assert!(serde_json::from_value::<Bill>(payload).is_err());
}

#[test]
fn unknown_status_date_decodes_as_none() {
    let mut payload = load_payload("bill.json", "bill");
    payload["status_date"] = serde_json::json!("0000-00-00");
    let bill: Bill = serde_json::from_value(payload).unwrap();
    assert_eq!(bill.status_date, None);
}
