use std::fs;
use tracing::info;

// Adds automatic logging to test
mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(base: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/v6/latest/{base}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn write_config(base_url: &str, base_currency: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
providers:
  open_er_api:
    base_url: {base_url}
base_currency: "{base_currency}"
"#
        );
        std::fs::write(config_file.path(), config_content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test(tokio::test)]
async fn test_full_convert_flow_with_mock() {
    let mock_response = r#"{
        "result": "success",
        "rates": {
            "IDR": 1,
            "USD": 0.0000666666666667,
            "EUR": 0.00005
        }
    }"#;

    let mock_server = test_utils::create_mock_server("IDR", mock_response).await;
    let config_file = test_utils::write_config(&mock_server.uri(), "IDR");

    let result = kurs::run_command(
        kurs::AppCommand::Convert {
            amount: 100.0,
            from: "USD".to_string(),
            to: "IDR".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Convert failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_full_rates_flow_with_mock() {
    let mock_response = r#"{
        "result": "success",
        "rates": {
            "IDR": 1,
            "USD": 0.0000625
        }
    }"#;

    let mock_server = test_utils::create_mock_server("IDR", mock_response).await;
    let config_file = test_utils::write_config(&mock_server.uri(), "IDR");

    let result = kurs::run_command(
        kurs::AppCommand::Rates,
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Rates failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_snapshot_falls_back_when_service_errors() {
    use kurs::fallback::fallback_table;
    use kurs::providers::open_er_api::OpenErApiProvider;
    use kurs::rates::RateSource;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v6/latest/IDR"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let provider = OpenErApiProvider::new(&mock_server.uri(), "IDR");
    let snapshot = kurs::snapshot::acquire(&provider, "IDR").await;

    info!(?snapshot.source, "Acquired snapshot after service error");
    assert_eq!(snapshot.source, RateSource::Local);
    assert_eq!(snapshot.table, fallback_table());
}

#[test_log::test(tokio::test)]
async fn test_convert_with_unknown_code_reports_error() {
    let mock_response = r#"{
        "result": "success",
        "rates": {
            "IDR": 1,
            "USD": 0.0000625
        }
    }"#;

    let mock_server = test_utils::create_mock_server("IDR", mock_response).await;
    let config_file = test_utils::write_config(&mock_server.uri(), "IDR");

    let result = kurs::run_command(
        kurs::AppCommand::Convert {
            amount: 1.0,
            from: "XYZ".to_string(),
            to: "USD".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("conversion with unknown code should fail");
    assert!(err.to_string().contains("Unknown currency code: XYZ"));
}

#[test_log::test(tokio::test)]
async fn test_convert_to_zero_rate_currency_reports_error() {
    let mock_response = r#"{
        "result": "success",
        "rates": {
            "IDR": 1,
            "USD": 0.0000625,
            "XXX": 0
        }
    }"#;

    let mock_server = test_utils::create_mock_server("IDR", mock_response).await;
    let config_file = test_utils::write_config(&mock_server.uri(), "IDR");

    let result = kurs::run_command(
        kurs::AppCommand::Convert {
            amount: 1.0,
            from: "USD".to_string(),
            to: "XXX".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("conversion to zero-rate currency should fail");
    assert!(
        err.to_string()
            .contains("No conversion available for currency: XXX")
    );
}

#[test_log::test(tokio::test)]
async fn test_invalid_config_file_is_rejected() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    fs::write(config_file.path(), "not: [valid: yaml").expect("Failed to write config file");

    let result = kurs::run_command(
        kurs::AppCommand::Rates,
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_err());
}
