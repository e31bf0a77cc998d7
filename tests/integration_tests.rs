use country_atlas::core::Storage;
use country_atlas::{AtlasEngine, AtlasError, CliConfig, CountryPipeline, LocalStorage};
use httpmock::prelude::*;
use tempfile::TempDir;

fn test_config(api_endpoint: String, output_path: String) -> CliConfig {
    CliConfig {
        api_endpoint,
        output_path,
        region: None,
        subregions: vec![],
        min_population: None,
        max_population: None,
        top: 10,
        bins: 20,
        country: None,
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_with_real_http() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let mock_data = serde_json::json!([
        {
            "name": {"common": "Chile"},
            "capital": ["Santiago"],
            "population": 19000000,
            "area": 756102,
            "region": "Americas",
            "subregion": "South America",
            "languages": {"spa": "Spanish"},
            "currencies": {"CLP": {"name": "Chilean peso"}}
        },
        {
            "name": {"common": "Spain"},
            "capital": ["Madrid"],
            "population": 47000000,
            "area": 505990,
            "region": "Europe",
            "subregion": "Southern Europe",
            "languages": {"spa": "Spanish"},
            "currencies": {"EUR": {"name": "Euro"}}
        },
        {
            "name": {"common": "Test"}
        }
    ]);

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/countries");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(mock_data);
    });

    let config = test_config(server.url("/countries"), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = CountryPipeline::new(storage, config);
    let engine = AtlasEngine::new(pipeline);

    let outcome = engine.run().await.unwrap();

    api_mock.assert();
    assert!(outcome.output_path.ends_with("countries.csv"));
    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.records[0].name, "Chile");
    assert_eq!(outcome.records[2].capital, "No existe");

    let reader = LocalStorage::new(output_path.clone());
    let csv_bytes = reader.read_file("countries.csv").await.unwrap();
    let csv_content = String::from_utf8(csv_bytes).unwrap();
    let lines: Vec<&str> = csv_content.lines().collect();

    assert_eq!(
        lines[0],
        "name,population,area,region,subregion,capital,languages,currencies"
    );
    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains("Chile"));
    assert!(lines[2].contains("Madrid"));
    assert!(lines[3].contains("No existe"));
}

#[tokio::test]
async fn test_end_to_end_api_failure_halts_the_session() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/failed");
        then.status(500);
    });

    let config = test_config(server.url("/failed"), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = CountryPipeline::new(storage, config);
    let engine = AtlasEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, AtlasError::DataUnavailable { .. }));

    // Nothing may be written when the fetch fails.
    let full_path = std::path::Path::new(&output_path).join("countries.csv");
    assert!(!full_path.exists());
}

#[tokio::test]
async fn test_end_to_end_non_json_response_halts_the_session() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/countries");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<html>maintenance page</html>");
    });

    let config = test_config(server.url("/countries"), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = CountryPipeline::new(storage, config);
    let engine = AtlasEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, AtlasError::DataUnavailable { .. }));
}

#[tokio::test]
async fn test_end_to_end_empty_dataset_exports_header_only() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/countries");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let config = test_config(server.url("/countries"), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = CountryPipeline::new(storage, config);
    let engine = AtlasEngine::new(pipeline);

    let outcome = engine.run().await.unwrap();

    api_mock.assert();
    assert!(outcome.records.is_empty());

    let full_path = std::path::Path::new(&output_path).join("countries.csv");
    let csv_content = std::fs::read_to_string(full_path).unwrap();
    assert_eq!(
        csv_content.trim_end(),
        "name,population,area,region,subregion,capital,languages,currencies"
    );
}
