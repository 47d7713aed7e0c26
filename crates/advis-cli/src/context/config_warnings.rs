use advis_config::AdvisConfig;

const SECTIONS: [&str; 3] = ["DATA", "GENERAL", "SERVER"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &AdvisConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &AdvisConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    for section in SECTIONS {
        let single = format!("ADVIS_{section}_");
        let double = format!("ADVIS_{section}__");
        if let Some(key) = env_keys
            .iter()
            .find(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            warnings.push(format!(
                "{key} is ignored. Nested config keys use double underscores (example: {double}{}).",
                example_field(section)
            ));
        }
    }

    if !config.data.is_configured() && has_env_prefix(&env_keys, "ADVIS_DATA__FILES") {
        warnings.push(
            "Per-table file names are set but ADVIS_DATA__DIR is empty; the embedded snapshot is used instead."
                .to_string(),
        );
    }

    warnings
}

fn example_field(section: &str) -> &'static str {
    match section {
        "DATA" => "DIR",
        "GENERAL" => "TERM_ID",
        _ => "BIND",
    }
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
