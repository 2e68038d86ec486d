use chrono::{NaiveDate, NaiveDateTime};
use hackreg::core::derive::FieldDeriver;
use hackreg::core::entities::SourceRecord;

fn deriver() -> FieldDeriver {
    FieldDeriver::new()
}

fn sample_record() -> SourceRecord {
    SourceRecord {
        participant_id: "bd9b6f88-b84f-4c4d-90f8-b67fe2f1a29a".to_string(),
        first_name: "Citra".to_string(),
        last_name: "Nurdiyanti".to_string(),
        birth_date: "05 Feb 1991".to_string(),
        address: "Gg. Monginsidi No. 08\\nMedan, Aceh 80734".to_string(),
        phone_number: "(0151) 081 2706".to_string(),
        country: "Georgia".to_string(),
        institute: "UD Prakasa Mandasari".to_string(),
        occupation: "Business Intelligence Engineer".to_string(),
        register_time: 1617634046,
    }
}

#[test]
fn postal_code_extracts_trailing_digit_run() {
    let d = deriver();
    assert_eq!(
        d.postal_code("Gg. Monginsidi No. 08\\nMedan, Aceh 80734"),
        Some("80734".to_string())
    );
    assert_eq!(d.postal_code("Jl. Gardujati No. 53"), Some("53".to_string()));
}

#[test]
fn postal_code_missing_without_trailing_digits() {
    let d = deriver();
    assert_eq!(d.postal_code("Medan, Aceh"), None);
    assert_eq!(d.postal_code(""), None);
    // digits in the middle don't count
    assert_eq!(d.postal_code("No. 08 Medan"), None);
}

#[test]
fn city_extracts_token_after_literal_linebreak() {
    let d = deriver();
    assert_eq!(
        d.city("Gg. Monginsidi No. 08\\nMedan, Aceh 80734"),
        Some("Medan".to_string())
    );
}

#[test]
fn city_extracts_token_after_real_newline() {
    let d = deriver();
    assert_eq!(
        d.city("Jl. Medoho III No. 75\nSemarang, Jawa Tengah 50198"),
        Some("Semarang".to_string())
    );
}

#[test]
fn city_extracts_hyphen_joined_fragment() {
    let d = deriver();
    assert_eq!(
        d.city("Jalan Gandapura 95-Bandung"),
        Some("Bandung".to_string())
    );
}

#[test]
fn city_missing_when_no_delimiter_convention_matches() {
    let d = deriver();
    assert_eq!(d.city("Jl. Gardujati No. 53 Cirebon"), None);
    assert_eq!(d.city(""), None);
}

#[test]
fn github_profile_is_lowercased_concatenation() {
    let d = deriver();
    assert_eq!(
        d.github_profile("Citra", "Nurdiyanti"),
        "https://github.com/citranurdiyanti"
    );
    // defined for all inputs, including empty strings
    assert_eq!(d.github_profile("", ""), "https://github.com/");
}

#[test]
fn clean_phone_number_translates_country_prefix_first() {
    let d = deriver();
    assert_eq!(d.clean_phone_number("+62-811-2222-3333"), "081122223333");
    assert_eq!(d.clean_phone_number("62(811)-1111-2222"), "081111112222");
    assert_eq!(d.clean_phone_number("+62(812)3456789"), "08123456789");
    assert_eq!(d.clean_phone_number("+62 (812)-3456-789"), "08123456789");
}

#[test]
fn clean_phone_number_strips_punctuation_and_whitespace() {
    let d = deriver();
    assert_eq!(d.clean_phone_number("(0151) 081 2706"), "01510812706");
    // only a leading 62 is a country code
    assert_eq!(d.clean_phone_number("0862 33 44"), "08623344");
}

#[test]
fn team_name_concatenates_initials_country_and_institute() {
    let d = deriver();
    assert_eq!(
        d.team_name("Citra", "Nurdiyanti", "Georgia", "UD Prakasa Mandasari"),
        "CN-Georgia-UPM"
    );
    // initials keep their original case, country is verbatim
    assert_eq!(
        d.team_name("aris", "Setiawan", "Korea Utara", "Universitas Diponegoro"),
        "aS-Korea Utara-UD"
    );
}

#[test]
fn team_name_empty_components() {
    let d = deriver();
    // empty names and institutes contribute empty initials, never an error
    assert_eq!(d.team_name("", "", "Georgia", ""), "-Georgia-");
}

#[test]
fn email_universitas_gets_academic_suffix() {
    let d = deriver();
    assert_eq!(
        d.email("Aris", "Setiawan", "Korea Utara", "Universitas Diponegoro"),
        "arissetiawan@ud.ac.ku"
    );
    // single-word country: first three characters
    assert_eq!(
        d.email("Aris", "Setiawan", "Georgia", "Universitas Diponegoro"),
        "arissetiawan@ud.ac.geo"
    );
}

#[test]
fn email_non_universitas_ignores_country() {
    // Regression pin: the non-Universitas branch uses .com and drops the
    // country entirely.
    let d = deriver();
    assert_eq!(
        d.email("Citra", "Nurdiyanti", "Georgia", "UD Prakasa Mandasari"),
        "citranurdiyanti@upm.com"
    );
}

#[test]
fn email_universitas_check_is_case_sensitive() {
    let d = deriver();
    assert_eq!(
        d.email("Budi", "Santoso", "Georgia", "universitas negeri semarang"),
        "budisantoso@uns.com"
    );
}

#[test]
fn birth_date_normalizes_to_calendar_date() {
    let d = deriver();
    assert_eq!(
        d.normalize_birth_date("07 Apr 2021").unwrap(),
        NaiveDate::from_ymd_opt(2021, 4, 7).unwrap()
    );
    assert_eq!(
        d.normalize_birth_date("05 Feb 1991").unwrap(),
        NaiveDate::from_ymd_opt(1991, 2, 5).unwrap()
    );
}

#[test]
fn birth_date_malformed_is_hard_error() {
    let d = deriver();
    assert!(d.normalize_birth_date("April 7, 2021").is_err());
    assert!(d.normalize_birth_date("2021-04-07").is_err());
    assert!(d.normalize_birth_date("").is_err());
}

#[test]
fn register_at_converts_epoch_seconds() {
    let d = deriver();
    let expected: NaiveDateTime = NaiveDate::from_ymd_opt(2021, 4, 7)
        .unwrap()
        .and_hms_opt(13, 0, 55)
        .unwrap();
    assert_eq!(d.register_at(1617800455).unwrap(), expected);
}

#[test]
fn derive_populates_every_field() {
    let d = deriver();
    let record = d.derive(&sample_record()).unwrap();

    assert_eq!(record.participant_id, sample_record().participant_id);
    assert_eq!(record.postal_code, Some("80734".to_string()));
    assert_eq!(record.city, Some("Medan".to_string()));
    assert_eq!(record.github_profile, "https://github.com/citranurdiyanti");
    assert_eq!(record.cleaned_phone_number, "01510812706");
    assert_eq!(record.team_name, "CN-Georgia-UPM");
    assert_eq!(record.email, "citranurdiyanti@upm.com");
    assert_eq!(
        record.birth_date,
        NaiveDate::from_ymd_opt(1991, 2, 5).unwrap()
    );
    assert_eq!(record.register_time, 1617634046);
}

#[test]
fn derive_is_deterministic() {
    let d = deriver();
    let source = sample_record();
    let first = d.derive(&source).unwrap();
    let second = d.derive(&source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn derive_fails_on_malformed_birth_date() {
    let d = deriver();
    let mut source = sample_record();
    source.birth_date = "not a date".to_string();
    let err = d.derive(&source).unwrap_err();
    assert!(err.to_string().contains("Malformed birth date"));
}
