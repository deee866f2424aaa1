use server::errors::StartupError;

// One test per binary: it mutates process env.
#[test]
fn config_falls_back_to_env_and_rejects_bad_port() {
    std::env::set_var("CONFIG_PATH", "/nonexistent-config-for-tests.toml");
    std::env::set_var("DATABASE_URL", "sqlite::memory:");
    std::env::set_var("SERVER_HOST", "0.0.0.0");
    std::env::set_var("SERVER_PORT", "9099");
    std::env::set_var("TOKIO_WORKER_THREADS", "2");

    let cfg = server::load_config().expect("env config");
    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.server.port, 9099);
    assert_eq!(cfg.server.worker_threads, Some(2));
    assert_eq!(cfg.database.url, "sqlite::memory:");

    std::env::set_var("SERVER_PORT", "0");
    assert!(matches!(server::load_config(), Err(StartupError::InvalidConfig(_))));

    std::env::set_var("SERVER_PORT", "9099");
    std::env::set_var("DATABASE_URL", "mysql://u@h/db");
    assert!(matches!(server::load_config(), Err(StartupError::InvalidConfig(_))));
}
