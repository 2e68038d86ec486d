use chrono::NaiveDate;
use hackreg::core::entities::{ParticipantRecord, RunSummary, SourceRecord};
use hackreg::core::types::RunStatus;

fn sample_participant() -> ParticipantRecord {
    ParticipantRecord {
        participant_id: "id-1".to_string(),
        first_name: "Aris".to_string(),
        last_name: "Setiawan".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1993, 9, 11).unwrap(),
        address: "Gg. Rajawali Timur No. 7\\nPrabumulih, MA 09434".to_string(),
        phone_number: "+62 (036) 461 7027".to_string(),
        country: "Korea Utara".to_string(),
        institute: "Universitas Diponegoro".to_string(),
        occupation: "Frontend Engineer".to_string(),
        register_time: 1617634018,
        postal_code: Some("09434".to_string()),
        city: Some("Prabumulih".to_string()),
        github_profile: "https://github.com/arissetiawan".to_string(),
        cleaned_phone_number: "00364617027".to_string(),
        team_name: "AS-Korea Utara-UD".to_string(),
        email: "arissetiawan@ud.ac.ku".to_string(),
        register_at: NaiveDate::from_ymd_opt(2021, 4, 5)
            .unwrap()
            .and_hms_opt(14, 46, 58)
            .unwrap(),
    }
}

#[test]
fn test_columns_match_record_width() {
    // one column per source field plus one per derived field
    assert_eq!(ParticipantRecord::COLUMNS.len(), 17);
    assert_eq!(ParticipantRecord::COLUMNS[0], "participant_id");
    assert_eq!(ParticipantRecord::COLUMNS[16], "register_at");
}

#[test]
fn test_participant_record_json_roundtrip() {
    let record = sample_participant();
    let json = serde_json::to_string(&record).unwrap();
    let back: ParticipantRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, back);
}

#[test]
fn test_source_record_json_roundtrip() {
    let source = SourceRecord {
        participant_id: "id-2".to_string(),
        first_name: "Citra".to_string(),
        last_name: "Nurdiyanti".to_string(),
        birth_date: "05 Feb 1991".to_string(),
        address: "Gg. Monginsidi No. 08".to_string(),
        phone_number: "(0151) 081 2706".to_string(),
        country: "Georgia".to_string(),
        institute: "UD Prakasa Mandasari".to_string(),
        occupation: "Business Intelligence Engineer".to_string(),
        register_time: 1617634046,
    };
    let json = serde_json::to_string(&source).unwrap();
    let back: SourceRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(source, back);
}

#[test]
fn test_run_summary_serializes_status() {
    let mut summary = RunSummary::started("participants.csv".into());
    summary.records_read = 5000;
    summary.records_written = 5000;
    summary.complete();

    assert_eq!(summary.status, RunStatus::Completed);
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"records_read\":5000"));
    assert!(json.contains("Completed"));
}
