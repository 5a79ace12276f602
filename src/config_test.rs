use super::*;

#[test]
fn url_joins_base_and_path() {
    let config = ApiConfig {
        base_url: "https://api.example.com/api".to_owned(),
    };
    assert_eq!(config.url("/auth/login"), "https://api.example.com/api/auth/login");
}

#[test]
fn from_env_has_nonempty_base() {
    let config = ApiConfig::from_env();
    assert!(!config.base_url.is_empty());
}

#[test]
fn default_matches_from_env() {
    assert_eq!(ApiConfig::default(), ApiConfig::from_env());
}
