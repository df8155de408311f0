use crate::helpers::{client_for, company_path_regex};

use ready_client::models::EmployeeStatus;
use ready_client::{CancellationToken, EmployeeFilter};

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn employees_body() -> serde_json::Value {
    json!({
        "employees": [
            {
                "id": 101,
                "username": "jdoe",
                "first_name": "Jane",
                "last_name": "Doe",
                "employee_id": "E-101",
                "primary_account_id": 101,
                "ein_name": "ACME Holdings",
                "status": "Active",
                "dates": {"hired": "2019-04-15", "terminated": null},
                "_links": {
                    "self": "/ta/rest/v2/companies/|ACME/employees/101",
                    "pay-info": "/ta/rest/v2/companies/|ACME/employees/101/pay-info"
                }
            }
        ]
    })
}

/// **VALUE**: Verifies unset filters never reach the query string.
///
/// **WHY THIS MATTERS**: `terminated=` would be read by the service as a
/// filter value. An unfiltered listing must send no parameters at all.
///
/// **BUG THIS CATCHES**: Would catch absent filters encoded as empty values.
#[tokio::test]
async fn given_no_filters_when_listing_employees_then_query_has_no_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(company_path_regex("/employees")))
        .respond_with(ResponseTemplate::new(200).set_body_json(employees_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let employees = client
        .employees(&EmployeeFilter::all(), &CancellationToken::new())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);

    assert_eq!(employees.len(), 1);
    let employee = &employees[0];
    assert_eq!(employee.id, 101);
    assert_eq!(employee.first_name.as_deref(), Some("Jane"));
    let dates = employee.dates.as_ref().unwrap();
    assert_eq!(dates.hired, NaiveDate::from_ymd_opt(2019, 4, 15));
    assert_eq!(dates.terminated, None);
    let links = employee.links.as_ref().unwrap();
    assert!(links.pay_info.as_deref().unwrap().ends_with("/pay-info"));
}

#[tokio::test]
async fn given_filters_when_listing_employees_then_parameters_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(company_path_regex("/employees")))
        .and(query_param("ein_id", "7"))
        .and(query_param("terminated", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"employees": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = EmployeeFilter::all().with_ein_id(7).active_only();

    let employees = client
        .employees(&filter, &CancellationToken::new())
        .await
        .unwrap();

    assert!(employees.is_empty());
}

#[tokio::test]
async fn given_missing_employees_array_when_listing_then_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(company_path_regex("/employees")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let employees = client
        .employees(&EmployeeFilter::all(), &CancellationToken::new())
        .await
        .unwrap();

    assert!(employees.is_empty());
}

#[tokio::test]
async fn given_quoted_ids_when_listing_employees_then_ids_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(company_path_regex("/employees")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Employees": [{"ID": "42", "Primary_Account_Id": "42", "Status": "On Leave"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let employees = client
        .employees(&EmployeeFilter::all(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(employees[0].id, 42);
    assert_eq!(employees[0].primary_account_id, Some(42));
    assert_eq!(
        employees[0].status,
        Some(EmployeeStatus::Other("On Leave".to_string()))
    );
}
