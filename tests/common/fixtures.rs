//! Reusable specification file contents.

/// X25519 public key, base64
pub const MASTER_PUBLIC_KEY: &str = "3NmYBChqWMFY3bKnfsDaxFxxSk2oHBrTz9e4/b4RK3g=";

/// App descriptor as published next to `com.example:api:1.0.0`
pub const API_DESCRIPTOR: &str = r#"{
  "id": "/example/api",
  "instances": 1,
  "cpus": 0.25,
  "mem": 128,
  "container": {"docker": {"image": "example/api:1.0.0"}},
  "env": {"LOG_LEVEL": "info"}
}"#;

/// Service file pointing at `com.example:api:1.0.0`
pub const API_SERVICE: &str = r#"maven:
  groupid: com.example
  artifactid: api
  version: 1.0.0
override:
  instances: 3
variables:
  env:
    LOG_LEVEL: debug
"#;

/// Globals with the given repository URL
pub fn globals(repository: &str) -> String {
    format!(
        "maven:\n  repository: \"{repository}\"\nvariables:\n  env:\n    DATACENTER: eu-1\n"
    )
}

/// Service file with secretary wiring for the given master key (inline or path)
pub fn secret_service(master_key: &str) -> String {
    format!(
        "{API_SERVICE}secretary:\n  url: https://secretary.example.com:5070\n  master:\n    publickey: \"{master_key}\"\n"
    )
}
