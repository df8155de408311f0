use crate::helpers::{client_for, company_path_regex};

use ready_client::CancellationToken;

use chrono::{NaiveDate, TimeDelta};
use serde_json::json;
use wiremock::matchers::{method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

fn entry_set_body(account_id: i64) -> serde_json::Value {
    json!({
        "employee": {"account_id": account_id, "username": "jdoe"},
        "start_date": "2024-03-01",
        "end_date": "2024-03-31",
        "time_entries": [
            {
                "id": 1,
                "date": "2024-03-04",
                "type": "TIME",
                "total": 28800000,
                "is_raw": true,
                "time_off": {"id": 3, "name": "PTO"}
            },
            {"id": 2, "date": "2024-03-05", "total": 14400000}
        ]
    })
}

/// **VALUE**: Verifies dates are sent as `yyyy-MM-dd` and the light flag as
/// a lowercase boolean.
///
/// **WHY THIS MATTERS**: The service rejects any other date format with a
/// 400, and treats `True` as an unknown value.
///
/// **BUG THIS CATCHES**: Would catch timestamps or locale formats leaking
/// into the query.
#[tokio::test]
async fn given_date_range_when_listing_time_entries_then_dates_and_flag_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(company_path_regex("/time-entries")))
        .and(query_param("start_date", "2024-03-01"))
        .and(query_param("end_date", "2024-03-31"))
        .and(query_param("is_light", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"time_entry_sets": [entry_set_body(101)]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let sets = client
        .time_entries(march(1), march(31), Some(true), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(sets.len(), 1);
    let set = &sets[0];
    assert_eq!(set.start_date, march(1));
    assert_eq!(set.time_entries.len(), 2);
    assert_eq!(set.total(), TimeDelta::hours(12));
    assert_eq!(set.time_entries[0].date, march(4));
}

#[tokio::test]
async fn given_no_light_flag_when_listing_time_entries_then_flag_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(company_path_regex("/time-entries")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"time_entry_sets": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);

    client
        .time_entries(march(1), march(31), None, &CancellationToken::new())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("start_date=2024-03-01&end_date=2024-03-31")
    );
}

#[tokio::test]
async fn given_account_id_when_listing_employee_time_entries_then_single_set_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(company_path_regex("/employees/101/time-entries")))
        .and(query_param("start_date", "2024-03-01"))
        .and(query_param("end_date", "2024-03-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_set_body(101)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let set = client
        .employee_time_entries(101, march(1), march(15), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(set.employee.unwrap().account_id, 101);
    assert_eq!(set.time_entries[1].total(), TimeDelta::hours(4));
}
