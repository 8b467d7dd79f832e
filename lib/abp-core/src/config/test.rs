use rusty_fork::rusty_fork_test;
use serde::{Deserialize, Serialize};

use super::ConfigParsingError;
use super::core_config::*;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClientConfig {
    pub trace_level: Option<String>,
    pub trace_json: Option<bool>,
}

const BASE_CONFIG: &str = indoc::indoc! {"
    production: false
    application:
        name: 'MyProjectName'
        baseUrl: 'http://localhost:4200'
    apis:
        default:
            url: 'https://localhost:44305'
            rootNamespace: 'MyCompany.MyProjectName'
        AbpIdentity:
            url: 'https://identity.localhost:44306'
    app:
        traceLevel: 'debug'
"};

#[test]
fn test_parse_single_yaml() {
    let config = AppConfig::<ClientConfig>::from_yaml([BASE_CONFIG]).unwrap();

    assert!(!config.environment.production);
    assert_eq!(config.environment.application_name(), Some("MyProjectName"));
    assert_eq!(
        config.environment.apis.get("default"),
        Some(&ApiConfig {
            url: "https://localhost:44305".to_string(),
            root_namespace: Some("MyCompany.MyProjectName".to_string()),
        })
    );
    assert_eq!(config.app.trace_level.as_deref(), Some("debug"));
    assert_eq!(config.app.trace_json, None);
}

#[test]
fn test_later_yaml_layers_override_earlier_ones() {
    let override_config = indoc::indoc! {"
        production: true
        application:
            name: 'OtherProject'
        apis:
            default:
                url: 'https://api.example.com'
        app:
            traceJson: true
    "};

    let config = AppConfig::<ClientConfig>::from_yaml([BASE_CONFIG, override_config]).unwrap();

    assert!(config.environment.production);
    assert_eq!(config.environment.application_name(), Some("OtherProject"));
    let application = config.environment.application.as_ref().unwrap();
    assert_eq!(application.base_url.as_deref(), Some("http://localhost:4200"));

    let default_api = config.environment.apis.get("default").unwrap();
    assert_eq!(default_api.url, "https://api.example.com");
    assert_eq!(
        default_api.root_namespace.as_deref(),
        Some("MyCompany.MyProjectName")
    );
    assert!(config.environment.apis.contains_key("AbpIdentity"));
    assert_eq!(config.app.trace_level.as_deref(), Some("debug"));
    assert_eq!(config.app.trace_json, Some(true));
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = AppConfig::<NoCustomConfig>::from_yaml(["{}"]).unwrap();

    assert_eq!(config.environment, EnvironmentSettings::default());
    assert_eq!(config.environment.application_name(), None);
    assert_eq!(config.environment.api_url(None), None);
}

#[test]
fn test_application_without_name() {
    let config = AppConfig::<NoCustomConfig>::from_yaml([indoc::indoc! {"
        application:
            baseUrl: 'http://localhost:4200'
    "}])
    .unwrap();

    assert!(config.environment.application.is_some());
    assert_eq!(config.environment.application_name(), None);
}

#[test]
fn test_invalid_type_is_parsing_error() {
    let result = AppConfig::<NoCustomConfig>::from_yaml([indoc::indoc! {"
        apis:
            default:
                url: ['not', 'a', 'string']
    "}]);

    assert!(matches!(
        result,
        Err(ConfigParsingError::GeneralParsingError(_))
    ));
}

#[test]
fn test_unsupported_file_extension() {
    let result = AppConfig::<NoCustomConfig>::from_files(&["config/config.toml"]);

    assert!(matches!(
        result,
        Err(ConfigParsingError::GeneralParsingError(message)) if message.contains("config.toml")
    ));
}

#[test]
fn test_api_url_resolution() {
    let config = AppConfig::<NoCustomConfig>::from_yaml([BASE_CONFIG]).unwrap();
    let environment = config.environment;

    assert_eq!(
        environment.api_url(Some("AbpIdentity")),
        Some("https://identity.localhost:44306")
    );
    assert_eq!(
        environment.api_url(Some("Unknown")),
        Some("https://localhost:44305")
    );
    assert_eq!(environment.api_url(None), Some("https://localhost:44305"));
}

#[test]
#[cfg(feature = "config_json")]
fn test_parse_json_after_yaml() {
    let config = AppConfig::<NoCustomConfig>::parse([
        InputFormat::yaml_str(BASE_CONFIG),
        InputFormat::json_str(r#"{"application": {"name": "FromJson"}}"#),
    ])
    .unwrap();

    assert_eq!(config.environment.application_name(), Some("FromJson"));
}

rusty_fork_test! {
    #[test]
    #[cfg(feature = "config_env")]
    fn test_env_overrides_files() {
        unsafe {
            std::env::set_var("ABP_application__name", "FromEnv");
            std::env::set_var("ABP_apis__default__url", "https://env.example.com");
        }

        let config = AppConfig::<ClientConfig>::from_yaml([BASE_CONFIG]).unwrap();

        assert_eq!(config.environment.application_name(), Some("FromEnv"));
        assert_eq!(
            config.environment.api_url(None),
            Some("https://env.example.com")
        );
    }
}
