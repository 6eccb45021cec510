use log::debug;
use rust_i18n::t;

use super::error::MountError;
use super::traits::{Diagnostics, LogDiagnostics, UiMount};
use crate::config::StartupConfig;
use crate::updater::{UpdateCheck, UpdateStatus};

/// Runs the launch sequence: update check first, then the UI mount.
///
/// A failed update check is reported once to the diagnostics sink and
/// otherwise ignored; the mount always follows once the check has settled.
/// There is no timeout on the check. `run` consumes the sequencer, so each
/// instance mounts at most once.
pub struct StartupSequencer<C, M, D = LogDiagnostics> {
    config: StartupConfig,
    checker: C,
    mount: M,
    diagnostics: D,
}

impl<C, M> StartupSequencer<C, M, LogDiagnostics>
where
    C: UpdateCheck,
    M: UiMount,
{
    pub fn new(config: StartupConfig, checker: C, mount: M) -> Self {
        Self {
            config,
            checker,
            mount,
            diagnostics: LogDiagnostics,
        }
    }
}

impl<C, M, D> StartupSequencer<C, M, D>
where
    C: UpdateCheck,
    M: UiMount,
    D: Diagnostics,
{
    pub fn with_diagnostics<E: Diagnostics>(self, diagnostics: E) -> StartupSequencer<C, M, E> {
        StartupSequencer {
            config: self.config,
            checker: self.checker,
            mount: self.mount,
            diagnostics,
        }
    }

    /// Only a failure of the mount itself is returned; update-check errors
    /// never leave this function.
    pub async fn run(self) -> Result<(), MountError> {
        if self.config.check_updates {
            match self.checker.check().await {
                // The result is not acted on here; installing is an explicit
                // user action through the updater commands.
                Ok(UpdateStatus::UpToDate) | Ok(UpdateStatus::Available(_)) => {}
                Err(e) => self
                    .diagnostics
                    .report(&t!("startup.update_check_failed", error = e)),
            }
        } else {
            debug!("{}", t!("startup.update_check_disabled"));
        }

        self.mount.mount(&self.config.host_anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::updater::{UpdateError, UpdateInfo};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    type Journal = Arc<Mutex<Vec<String>>>;

    enum Outcome {
        NoUpdate,
        Available,
        Fail(&'static str),
        Never,
    }

    struct FakeChecker {
        outcome: Outcome,
        journal: Journal,
    }

    #[async_trait]
    impl UpdateCheck for FakeChecker {
        async fn check(&self) -> crate::updater::Result<UpdateStatus> {
            tokio::task::yield_now().await;
            let result = match &self.outcome {
                Outcome::NoUpdate => Ok(UpdateStatus::UpToDate),
                Outcome::Available => Ok(UpdateStatus::Available(UpdateInfo {
                    version: "0.2.0".to_string(),
                    current_version: "0.1.0".to_string(),
                    notes: Some("Faster clock".to_string()),
                    date: None,
                })),
                Outcome::Fail(message) => Err(UpdateError::Request(message.to_string())),
                Outcome::Never => std::future::pending().await,
            };
            self.journal.lock().push("check settled".to_string());
            result
        }
    }

    struct FakeMount {
        journal: Journal,
        refuse: bool,
    }

    impl UiMount for FakeMount {
        fn mount(&self, anchor: &str) -> Result<(), MountError> {
            self.journal.lock().push(format!("mount {}", anchor));
            if self.refuse {
                Err(MountError::AnchorNotFound(anchor.to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Clone, Default)]
    struct RecordingDiagnostics {
        lines: Journal,
    }

    impl Diagnostics for RecordingDiagnostics {
        fn report(&self, line: &str) {
            self.lines.lock().push(line.to_string());
        }
    }

    struct Harness {
        journal: Journal,
        diagnostics: RecordingDiagnostics,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                journal: Journal::default(),
                diagnostics: RecordingDiagnostics::default(),
            }
        }

        fn sequencer(
            &self,
            config: StartupConfig,
            outcome: Outcome,
            refuse_mount: bool,
        ) -> StartupSequencer<FakeChecker, FakeMount, RecordingDiagnostics> {
            StartupSequencer::new(
                config,
                FakeChecker {
                    outcome,
                    journal: self.journal.clone(),
                },
                FakeMount {
                    journal: self.journal.clone(),
                    refuse: refuse_mount,
                },
            )
            .with_diagnostics(self.diagnostics.clone())
        }

        fn journal(&self) -> Vec<String> {
            self.journal.lock().clone()
        }

        fn logged(&self) -> Vec<String> {
            self.diagnostics.lines.lock().clone()
        }

        fn mounts(&self) -> usize {
            self.journal()
                .iter()
                .filter(|entry| entry.starts_with("mount"))
                .count()
        }
    }

    #[tokio::test]
    async fn no_update_mounts_once_without_logging() {
        let harness = Harness::new();
        harness
            .sequencer(StartupConfig::default(), Outcome::NoUpdate, false)
            .run()
            .await
            .unwrap();

        assert_eq!(harness.journal(), vec!["check settled", "mount overlay"]);
        assert!(harness.logged().is_empty());
    }

    #[tokio::test]
    async fn available_update_is_not_acted_on() {
        let harness = Harness::new();
        harness
            .sequencer(StartupConfig::default(), Outcome::Available, false)
            .run()
            .await
            .unwrap();

        assert_eq!(harness.journal(), vec!["check settled", "mount overlay"]);
        assert!(harness.logged().is_empty());
    }

    #[tokio::test]
    async fn failed_check_is_logged_once_and_still_mounts() {
        let harness = Harness::new();
        let result = harness
            .sequencer(
                StartupConfig::default(),
                Outcome::Fail("network unreachable"),
                false,
            )
            .run()
            .await;

        assert!(result.is_ok());
        assert_eq!(harness.journal(), vec!["check settled", "mount overlay"]);
        let logged = harness.logged();
        assert_eq!(logged.len(), 1);
        assert!(logged[0].contains("network unreachable"), "{}", logged[0]);
    }

    #[tokio::test]
    async fn every_error_kind_is_suppressed() {
        for message in ["timeout", "invalid signature", "permission denied", ""] {
            let harness = Harness::new();
            harness
                .sequencer(StartupConfig::default(), Outcome::Fail(message), false)
                .run()
                .await
                .unwrap();
            assert_eq!(harness.mounts(), 1);
            assert_eq!(harness.logged().len(), 1);
        }
    }

    #[tokio::test]
    async fn unresolved_check_never_mounts() {
        let harness = Harness::new();
        let sequencer = harness.sequencer(StartupConfig::default(), Outcome::Never, false);

        let waited = tokio::time::timeout(Duration::from_millis(50), sequencer.run()).await;

        assert!(waited.is_err());
        assert_eq!(harness.mounts(), 0);
        assert!(harness.logged().is_empty());
    }

    #[tokio::test]
    async fn mounts_into_configured_anchor() {
        let harness = Harness::new();
        let config = StartupConfig {
            host_anchor: "timer".to_string(),
            ..StartupConfig::default()
        };
        harness
            .sequencer(config, Outcome::NoUpdate, false)
            .run()
            .await
            .unwrap();

        assert_eq!(harness.journal().last().map(String::as_str), Some("mount timer"));
    }

    #[tokio::test]
    async fn disabled_check_goes_straight_to_mount() {
        let harness = Harness::new();
        let config = StartupConfig {
            check_updates: false,
            ..StartupConfig::default()
        };
        harness
            .sequencer(config, Outcome::Never, false)
            .run()
            .await
            .unwrap();

        assert_eq!(harness.journal(), vec!["mount overlay"]);
        assert!(harness.logged().is_empty());
    }

    #[tokio::test]
    async fn mount_failure_is_returned_after_logging_the_check() {
        let harness = Harness::new();
        let result = harness
            .sequencer(StartupConfig::default(), Outcome::Fail("offline"), true)
            .run()
            .await;

        assert!(matches!(result, Err(MountError::AnchorNotFound(anchor)) if anchor == "overlay"));
        assert_eq!(harness.mounts(), 1);
        assert_eq!(harness.logged().len(), 1);
    }

    #[tokio::test]
    async fn default_diagnostics_warn_through_the_logger() {
        let journal = Journal::default();
        let sequencer = StartupSequencer::new(
            StartupConfig::default(),
            FakeChecker {
                outcome: Outcome::Fail("tls handshake with update host aborted"),
                journal: journal.clone(),
            },
            FakeMount {
                journal: journal.clone(),
                refuse: false,
            },
        );

        sequencer.run().await.unwrap();

        assert_eq!(*journal.lock(), vec!["check settled", "mount overlay"]);
        let warnings: Vec<_> = crate::logger::captured_logs()
            .into_iter()
            .filter(|(_, message)| message.contains("tls handshake with update host aborted"))
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].0, log::Level::Warn);
    }
}
