use std::net::SocketAddr;

use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(e) = config.server.bind.parse::<SocketAddr>() {
        errors.push(format!(
            "server.bind: invalid socket address '{}' - {}",
            config.server.bind, e
        ));
    }

    if config.server.max_body_bytes == 0 {
        errors.push("server.max_body_bytes: must be greater than zero".to_string());
    }

    let var = config.api_key_env.trim();
    if var.is_empty() {
        errors.push("api_key_env: must not be empty".to_string());
    } else if var.contains('=') || var.contains('\0') {
        errors.push(format!("api_key_env: invalid variable name '{}'", var));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
