use advis_config::AdvisConfig;
use figment::Jail;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("ADVIS_DATA__DIR", "/tmp/snapshot");
        jail.set_env("ADVIS_GENERAL__TERM_ID", "4");
        jail.set_env("ADVIS_DATA__FILES__ADVISING_NOTES", "notes.csv");

        let config = AdvisConfig::load().expect("config loads");
        assert_eq!(config.data.dir, "/tmp/snapshot");
        assert_eq!(config.general.term_id, 4);
        assert_eq!(
            config.data.files.get("advising_notes").map(String::as_str),
            Some("notes.csv")
        );
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".advis")?;
        jail.create_file(
            ".advis/config.toml",
            r#"
[server]
bind = "127.0.0.1:7000"
"#,
        )?;
        jail.set_env("ADVIS_SERVER__BIND", "127.0.0.1:7500");

        let config = AdvisConfig::load().expect("config loads");
        assert_eq!(config.server.bind, "127.0.0.1:7500");
        Ok(())
    });
}

#[test]
fn unknown_table_key_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("ADVIS_DATA__FILES__GRADES", "grades.csv");
        assert!(AdvisConfig::load().is_err());
        Ok(())
    });
}
