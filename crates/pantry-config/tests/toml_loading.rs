//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pantry_config::PantryConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
host = "127.0.0.1"
port = 9000

[database]
path = "/var/lib/pantry/pantry.db"

[yummly]
api_key = "rapid-key"
api_host = "yummly2.p.rapidapi.com"
timeout_secs = 3

[feed]
timely_limit = 8
"#,
        )?;

        let config: PantryConfig = Figment::from(Serialized::defaults(PantryConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.database.path, "/var/lib/pantry/pantry.db");
        assert_eq!(config.yummly.api_key, "rapid-key");
        assert_eq!(config.yummly.timeout_secs, 3);
        assert_eq!(config.yummly.base_url, "https://yummly2.p.rapidapi.com");
        assert!(config.yummly.is_configured());
        assert_eq!(config.feed.timely_limit, 8);
        assert_eq!(config.feed.search_max_results, 3);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[database]\npath = \":memory:\"\n")?;

        let config: PantryConfig = Figment::from(Serialized::defaults(PantryConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.database.is_in_memory());
        assert_eq!(config.server.port, 8000);
        assert!(!config.yummly.is_configured());
        Ok(())
    });
}
