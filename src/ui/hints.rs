//! Next-step hints shown after a completed setup.

/// The numbered next steps printed in the setup banner.
pub fn after_setup(env_target: &str, app_port: u16, fallback_port: u16) -> Vec<String> {
    vec![
        format!("1. Edit {} file with your configuration", env_target),
        "2. Run: devstrap --start".to_string(),
        format!(
            "3. Open: http://localhost:{} (Node.js) or http://localhost:{} (static files)",
            app_port, fallback_port
        ),
    ]
}

/// Hint shown when the health check could not reach a server.
pub fn after_unreachable_health(port: u16) -> String {
    format!(
        "Start the server with `devstrap --start`, or pass --port if it listens elsewhere (checked {}).",
        port
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_setup_lists_three_steps() {
        let hints = after_setup(".env", 3000, 8080);
        assert_eq!(hints.len(), 3);
        assert!(hints[0].contains(".env"));
        assert!(hints[1].contains("devstrap --start"));
        assert!(hints[2].contains("http://localhost:3000"));
        assert!(hints[2].contains("http://localhost:8080"));
    }

    #[test]
    fn unreachable_hint_mentions_port() {
        let hint = after_unreachable_health(4000);
        assert!(hint.contains("4000"));
        assert!(hint.contains("--port"));
    }
}
