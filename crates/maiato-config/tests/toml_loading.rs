//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use maiato_config::{ANONYMOUS_USER_ID, ConfigError, MaiatoConfig};

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
url = "libsql://maiato-office.turso.io"
auth_token = "turso-token"
local_path = "/var/lib/maiato/maiato.db"
"#,
        )?;

        let config: MaiatoConfig = Figment::from(Serialized::defaults(MaiatoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.url, "libsql://maiato-office.turso.io");
        assert_eq!(config.database.auth_token, "turso-token");
        assert_eq!(config.database.local_path, "/var/lib/maiato/maiato.db");
        assert!(config.database.is_remote());
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
user_id = "5b2f6f0e-1111-2222-3333-444455556666"
default_limit = 50
receipt_prefix = "RCB"
"#,
        )?;

        let config: MaiatoConfig = Figment::from(Serialized::defaults(MaiatoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.user_id, "5b2f6f0e-1111-2222-3333-444455556666");
        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.general.receipt_prefix, "RCB");
        assert_eq!(config.general.historial_prefix, "H");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[database]\nlocal_path = \"office.db\"\n")?;

        let config: MaiatoConfig = Figment::from(Serialized::defaults(MaiatoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.local_path, "office.db");
        assert!(config.database.url.is_empty());
        assert_eq!(config.general.user_id, ANONYMOUS_USER_ID);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            "[general]\ndefault_limit = 10\n",
        )?;
        jail.set_env("MAIATO_GENERAL__DEFAULT_LIMIT", "75");

        let config: MaiatoConfig = Figment::from(Serialized::defaults(MaiatoConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("MAIATO_").split("__"))
            .extract()?;

        assert_eq!(config.general.default_limit, 75);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".maiato")?;
        jail.create_file(
            ".maiato/config.toml",
            "[general]\nhistorial_prefix = \"HX\"\n",
        )?;

        let config = MaiatoConfig::load().expect("config loads");
        assert_eq!(config.general.historial_prefix, "HX");
        Ok(())
    });
}

#[test]
fn half_configured_remote_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            "[database]\nurl = \"libsql://maiato-office.turso.io\"\n",
        )?;

        let figment = Figment::from(Serialized::defaults(MaiatoConfig::default()))
            .merge(Toml::file("config.toml"));
        let result = MaiatoConfig::from_figment(&figment);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn zero_default_limit_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\ndefault_limit = 0\n")?;

        let figment = Figment::from(Serialized::defaults(MaiatoConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = MaiatoConfig::from_figment(&figment).unwrap_err();
        assert!(err.to_string().contains("general.default_limit"));
        Ok(())
    });
}
