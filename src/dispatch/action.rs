//! Compose sub-command arguments

/// What the user asked the orchestration tool to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeAction {
    /// `up -d`
    Start { dry_run: bool },
    /// `down`
    Stop { dry_run: bool },
    /// `restart`
    Restart { dry_run: bool },
    /// `logs`, optionally following, optionally for specific services
    Logs { follow: bool, services: Vec<String> },
    /// `ps -a`
    Status,
    /// `config`
    Show,
    /// Raw compose arguments given after `--`
    Compose { args: Vec<String> },
    /// `exec` with the user's arguments
    Exec { args: Vec<String> },
}

impl ComposeAction {
    /// Arguments placed after `-f <compose file>`
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = match self {
            ComposeAction::Start { .. } => vec!["up".into(), "-d".into()],
            ComposeAction::Stop { .. } => vec!["down".into()],
            ComposeAction::Restart { .. } => vec!["restart".into()],
            ComposeAction::Logs { .. } => vec!["logs".into()],
            ComposeAction::Status => vec!["ps".into(), "-a".into()],
            ComposeAction::Show => vec!["config".into()],
            ComposeAction::Compose { args } => return args.clone(),
            ComposeAction::Exec { .. } => vec!["exec".into()],
        };

        match self {
            ComposeAction::Start { dry_run: true }
            | ComposeAction::Stop { dry_run: true }
            | ComposeAction::Restart { dry_run: true } => args.push("--dry-run".into()),
            ComposeAction::Logs { follow, services } => {
                if *follow {
                    args.push("--follow".into());
                }
                args.extend(services.iter().cloned());
            }
            ComposeAction::Exec { args: extra } => args.extend(extra.iter().cloned()),
            _ => {}
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_start() {
        assert_eq!(ComposeAction::Start { dry_run: false }.args(), strings(&["up", "-d"]));
        assert_eq!(
            ComposeAction::Start { dry_run: true }.args(),
            strings(&["up", "-d", "--dry-run"])
        );
    }

    #[test]
    fn test_stop_and_restart() {
        assert_eq!(ComposeAction::Stop { dry_run: false }.args(), strings(&["down"]));
        assert_eq!(
            ComposeAction::Stop { dry_run: true }.args(),
            strings(&["down", "--dry-run"])
        );
        assert_eq!(ComposeAction::Restart { dry_run: false }.args(), strings(&["restart"]));
        assert_eq!(
            ComposeAction::Restart { dry_run: true }.args(),
            strings(&["restart", "--dry-run"])
        );
    }

    #[test]
    fn test_logs() {
        let plain = ComposeAction::Logs {
            follow: false,
            services: vec![],
        };
        assert_eq!(plain.args(), strings(&["logs"]));

        let followed = ComposeAction::Logs {
            follow: true,
            services: strings(&["extra-service"]),
        };
        assert_eq!(followed.args(), strings(&["logs", "--follow", "extra-service"]));
    }

    #[test]
    fn test_status_and_show() {
        assert_eq!(ComposeAction::Status.args(), strings(&["ps", "-a"]));
        assert_eq!(ComposeAction::Show.args(), strings(&["config"]));
    }

    #[test]
    fn test_compose_passthrough() {
        let action = ComposeAction::Compose {
            args: strings(&["pull", "--quiet"]),
        };
        assert_eq!(action.args(), strings(&["pull", "--quiet"]));
        assert!(ComposeAction::Compose { args: vec![] }.args().is_empty());
    }

    #[test]
    fn test_exec() {
        let action = ComposeAction::Exec {
            args: strings(&["web", "sh", "-c", "echo hi"]),
        };
        assert_eq!(action.args(), strings(&["exec", "web", "sh", "-c", "echo hi"]));
    }
}
