use figment::Jail;
use maiato_config::MaiatoConfig;

#[test]
fn env_vars_fill_database_section() {
    Jail::expect_with(|jail| {
        jail.set_env("MAIATO_DATABASE__URL", "libsql://maiato-office.turso.io");
        jail.set_env("MAIATO_DATABASE__AUTH_TOKEN", "token-from-env");

        let config = MaiatoConfig::load().expect("config loads");
        assert!(config.database.is_remote());
        assert_eq!(config.database.auth_token, "token-from-env");
        Ok(())
    });
}

#[test]
fn process_env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".maiato")?;
        jail.create_file(
            ".maiato/config.toml",
            "[general]\nuser_id = \"from-file\"\n",
        )?;
        jail.set_env("MAIATO_GENERAL__USER_ID", "from-env");

        let config = MaiatoConfig::load().expect("config loads");
        assert_eq!(config.general.user_id, "from-env");
        Ok(())
    });
}
