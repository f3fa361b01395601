use super::{format_commit_date, parse_latest_commit};

#[test]
fn newest_commit_is_extracted() {
    let body = r#"[
        {
            "sha": "abc",
            "commit": {
                "author": {"name": "Ryu", "email": "r@example.test", "date": "2024-03-05T10:00:00Z"},
                "message": "add maxxed_city"
            },
            "author": {"login": "ryu", "avatar_url": "https://avatars.test/ryu", "html_url": "https://github.com/ryu"}
        },
        {
            "sha": "def",
            "commit": {
                "author": {"name": "Older", "date": "2023-01-01T00:00:00Z"},
                "message": "initial"
            },
            "author": null
        }
    ]"#;
    let info = parse_latest_commit(body)
        .expect("parse")
        .expect("one commit");
    assert_eq!(info.author, "Ryu");
    assert_eq!(info.date, "March 5, 2024");
    assert_eq!(info.message, "add maxxed_city");
    assert_eq!(info.avatar_url, "https://avatars.test/ryu");
    assert_eq!(info.profile_url, "https://github.com/ryu");
}

#[test]
fn unlinked_author_has_empty_profile() {
    let body = r#"[{"commit": {"author": {"name": "Anon", "date": "2022-12-31T23:59:59Z"}, "message": ""}, "author": null}]"#;
    let info = parse_latest_commit(body).expect("parse").expect("commit");
    assert_eq!(info.profile_url, "");
    assert_eq!(info.date, "December 31, 2022");
}

#[test]
fn empty_history_is_absent() {
    assert_eq!(parse_latest_commit("[]").expect("parse"), None);
}

#[test]
fn malformed_history_is_an_error() {
    assert!(parse_latest_commit(r#"{"message": "Not Found"}"#).is_err());
}

#[test]
fn unparseable_dates_pass_through() {
    assert_eq!(format_commit_date("yesterday"), "yesterday");
    assert_eq!(format_commit_date("2024-13-01T00:00:00Z"), "2024-13-01T00:00:00Z");
    assert_eq!(format_commit_date("2024-01-09"), "January 9, 2024");
}

#[test]
fn dates_use_the_utc_calendar_day() {
    assert_eq!(format_commit_date("2024-03-05T23:59:59Z"), "March 5, 2024");
    assert_eq!(format_commit_date("2024-03-06T00:00:01Z"), "March 6, 2024");
    assert_eq!(format_commit_date("2023-12-31T23:30:00Z"), "December 31, 2023");
}
