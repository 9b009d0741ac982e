//! Orchestration command vector

use serde_json::Value;

/// Program used when the configuration does not name one
pub const DEFAULT_COMPOSE_COMMAND: &[&str] = &["docker", "compose"];

/// The program (plus leading arguments) that runs compose files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeCommand(Vec<String>);

impl Default for ComposeCommand {
    fn default() -> Self {
        Self(DEFAULT_COMPOSE_COMMAND.iter().map(|s| s.to_string()).collect())
    }
}

impl ComposeCommand {
    /// Create a command vector; empty vectors fall back to the default
    pub fn new(argv: Vec<String>) -> Self {
        if argv.is_empty() {
            Self::default()
        } else {
            Self(argv)
        }
    }

    /// Read `command` from the `octoctl` settings value
    ///
    /// Anything other than a list of strings yields the default.
    pub fn from_settings(octoctl: Option<&Value>) -> Self {
        octoctl
            .and_then(|settings| settings.get("command"))
            .and_then(|command| serde_json::from_value::<Vec<String>>(command.clone()).ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Executable to spawn
    pub fn program(&self) -> &str {
        &self.0[0]
    }

    /// Arguments that precede the compose file flag
    pub fn leading_args(&self) -> &[String] {
        &self.0[1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default() {
        let cmd = ComposeCommand::default();
        assert_eq!(cmd.program(), "docker");
        assert_eq!(cmd.leading_args(), &["compose".to_string()]);
    }

    #[test]
    fn test_from_settings() {
        let settings = json!({"command": ["podman-compose"]});
        let cmd = ComposeCommand::from_settings(Some(&settings));
        assert_eq!(cmd.program(), "podman-compose");
        assert!(cmd.leading_args().is_empty());
    }

    #[test]
    fn test_from_settings_falls_back() {
        let default = ComposeCommand::default();
        assert_eq!(ComposeCommand::from_settings(None), default);
        assert_eq!(ComposeCommand::from_settings(Some(&json!({}))), default);
        assert_eq!(
            ComposeCommand::from_settings(Some(&json!({"command": "docker-compose"}))),
            default
        );
        assert_eq!(
            ComposeCommand::from_settings(Some(&json!({"command": [1, 2]}))),
            default
        );
        assert_eq!(
            ComposeCommand::from_settings(Some(&json!({"command": []}))),
            default
        );
        assert_eq!(ComposeCommand::from_settings(Some(&json!("odd"))), default);
    }
}
