use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_prism_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("PRISM_ALPHA");
        env::remove_var("PRISM_CANDIDATE_GROUP");
        env::remove_var("PRISM_QUERIES_PATH");
        env::remove_var("PRISM_EMBEDDINGS_PATH");
        env::remove_var("PRISM_OUTPUT_PATH");
        env::remove_var("PRISM_DEADLINE_MS");
        env::remove_var("PRISM_EMBEDDING_URL");
        env::remove_var("PRISM_EMBEDDING_MODEL");
        env::remove_var("JINA_API_KEY");
        env::remove_var("PRISM_GENERATION_MODEL");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.alpha, 0.3);
    assert_eq!(config.candidate_group, "20_queries");
    assert_eq!(config.queries_path, PathBuf::from("output-prompt-v1.txt.json"));
    assert_eq!(
        config.embeddings_path,
        PathBuf::from("output-prompt-v1.txt.embeddings.json")
    );
    assert_eq!(
        config.output_path,
        PathBuf::from("output-prompt-v1.txt.submodular.embeddings.json")
    );
    assert!(config.deadline.is_none());
    assert_eq!(config.embedding_url, "https://api.jina.ai/v1/embeddings");
    assert_eq!(config.embedding_model, "jina-embeddings-v3");
    assert!(config.embedding_api_key.is_none());
    assert_eq!(config.generation_model, "gemini-2.5-flash");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_prism_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.alpha, 0.3);
    assert_eq!(config.candidate_group, "20_queries");
    assert!(config.deadline.is_none());
    assert!(config.embedding_api_key.is_none());
}

#[test]
#[serial]
fn test_from_env_full_override() {
    clear_prism_env();

    with_env_vars(
        &[
            ("PRISM_ALPHA", "0.5"),
            ("PRISM_CANDIDATE_GROUP", "10_queries"),
            ("PRISM_QUERIES_PATH", "/data/q.json"),
            ("PRISM_EMBEDDINGS_PATH", "/data/q.embeddings.json"),
            ("PRISM_OUTPUT_PATH", "/data/q.selected.json"),
            ("PRISM_DEADLINE_MS", "250"),
            ("PRISM_EMBEDDING_URL", "http://localhost:9000/v1/embeddings"),
            ("PRISM_EMBEDDING_MODEL", "jina-embeddings-v4"),
            ("JINA_API_KEY", "  jina_abc  "),
            ("PRISM_GENERATION_MODEL", "gpt-4o-mini"),
        ],
        || {
            let config = Config::from_env().expect("should parse full config");

            assert_eq!(config.alpha, 0.5);
            assert_eq!(config.candidate_group, "10_queries");
            assert_eq!(config.queries_path, PathBuf::from("/data/q.json"));
            assert_eq!(
                config.embeddings_path,
                PathBuf::from("/data/q.embeddings.json")
            );
            assert_eq!(config.output_path, PathBuf::from("/data/q.selected.json"));
            assert_eq!(config.deadline, Some(Duration::from_millis(250)));
            assert_eq!(config.embedding_url, "http://localhost:9000/v1/embeddings");
            assert_eq!(config.embedding_model, "jina-embeddings-v4");
            assert_eq!(config.embedding_api_key.as_deref(), Some("jina_abc"));
            assert_eq!(config.generation_model, "gpt-4o-mini");
        },
    );
}

#[test]
#[serial]
fn test_invalid_alpha_not_number() {
    clear_prism_env();

    with_env_vars(&[("PRISM_ALPHA", "lots")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::AlphaParseError { .. }));
        assert!(err.to_string().contains("failed to parse alpha"));
    });
}

#[test]
#[serial]
fn test_invalid_deadline() {
    clear_prism_env();

    with_env_vars(&[("PRISM_DEADLINE_MS", "-5")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::DeadlineParseError { .. }));
    });
}

#[test]
#[serial]
fn test_empty_deadline_means_none() {
    clear_prism_env();

    with_env_vars(&[("PRISM_DEADLINE_MS", "")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.deadline.is_none());
    });
}

#[test]
#[serial]
fn test_blank_api_key_is_unset() {
    clear_prism_env();

    with_env_vars(&[("JINA_API_KEY", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.embedding_api_key.is_none());
        assert!(matches!(
            config.require_embedding_api_key(),
            Err(ConfigError::MissingEnvVar {
                name: "JINA_API_KEY"
            })
        ));
    });
}

#[test]
fn test_validate_rejects_negative_alpha() {
    let config = Config {
        alpha: -0.1,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidAlpha { .. })
    ));

    let config = Config {
        alpha: f32::NAN,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidAlpha { .. })
    ));
}

#[test]
fn test_validate_zero_alpha_is_allowed() {
    let config = Config {
        alpha: 0.0,
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_group() {
    let config = Config {
        candidate_group: "twenty".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidCandidateGroup { .. })
    ));
}

#[test]
fn test_validate_queries_path_is_directory() {
    let config = Config {
        queries_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src"),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotAFile { .. }));
}

#[test]
fn test_validate_output_parent_missing() {
    let config = Config {
        output_path: PathBuf::from("/nonexistent/dir/out.json"),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PathNotFound { .. }));
}

#[test]
fn test_validate_output_parent_is_file() {
    let config = Config {
        output_path: PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("Cargo.toml")
            .join("out.json"),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotADirectory { .. }));
}

#[test]
fn test_validate_success_with_defaults() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_debug_redacts_api_key() {
    let config = Config {
        embedding_api_key: Some("jina_secret".to_string()),
        ..Default::default()
    };
    let debug = format!("{:?}", config);
    assert!(!debug.contains("jina_secret"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::InvalidAlpha { value: -1.0 };
    assert!(err.to_string().contains("-1"));
    assert!(err.to_string().contains("non-negative"));

    let err = ConfigError::PathNotFound {
        path: PathBuf::from("/some/path"),
    };
    assert!(err.to_string().contains("/some/path"));

    let err = ConfigError::MissingEnvVar {
        name: "JINA_API_KEY",
    };
    assert!(err.to_string().contains("JINA_API_KEY"));
}
