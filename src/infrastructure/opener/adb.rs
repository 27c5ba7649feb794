//! Opens links on an Android device through `adb`, the same way tapping the
//! send button fires an `ACTION_VIEW` intent on the phone.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::{application::services::link_opener::LinkOpener, domain::errors::DomainError};

const VIEW_ACTION: &str = "android.intent.action.VIEW";

/// Printed by `am start` when no installed activity accepts the intent.
const UNRESOLVED_INTENT: &str = "unable to resolve Intent";

pub struct AdbIntentOpener {
    adb: PathBuf,
    serial: Option<String>,
}

impl AdbIntentOpener {
    pub fn new(adb: PathBuf, serial: Option<String>) -> Arc<dyn LinkOpener> {
        Arc::new(Self { adb, serial }) as Arc<dyn LinkOpener>
    }

    fn args(&self, uri: &str) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(serial) = &self.serial {
            args.push("-s".to_string());
            args.push(serial.clone());
        }
        args.push("shell".to_string());
        args.push(format!(
            "am start -a {VIEW_ACTION} -d {}",
            shell_quote(uri)
        ));
        args
    }
}

#[async_trait]
impl LinkOpener for AdbIntentOpener {
    fn name(&self) -> &'static str {
        "adb"
    }

    async fn open(&self, uri: &str) -> Result<(), DomainError> {
        let args = self.args(uri);
        debug!("{} {:?}", self.adb.display(), args);

        let output = match Command::new(&self.adb).args(&args).output().await {
            Ok(output) => output,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(DomainError::NoHandlerAvailable(format!(
                    "adb not found at {}",
                    self.adb.display()
                )));
            }
            Err(err) => return Err(anyhow::Error::new(err).context("failed to run adb").into()),
        };

        // `am start` reports resolution failures on stdout with a zero exit code
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if stdout.contains(UNRESOLVED_INTENT) || stderr.contains(UNRESOLVED_INTENT) {
            return Err(DomainError::NoHandlerAvailable(
                "no activity on the device handles the link".to_string(),
            ));
        }

        if !output.status.success() {
            return Err(DomainError::Other(
                anyhow::anyhow!("adb exited with {}: {}", output.status, stderr.trim())
                    .context("failed to start activity"),
            ));
        }

        info!(serial = self.serial.as_deref(), "[adb] activity started");
        Ok(())
    }
}

/// Wraps `value` in single quotes for the device shell.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_links_for_the_device_shell() {
        assert_eq!(
            shell_quote("https://wa.me/+507?text=it's"),
            r"'https://wa.me/+507?text=it'\''s'"
        );
    }

    #[test]
    fn targets_the_configured_device() {
        let opener = AdbIntentOpener {
            adb: PathBuf::from("adb"),
            serial: Some("emulator-5554".to_string()),
        };

        assert_eq!(
            opener.args("https://wa.me/+507?text=hola"),
            vec![
                "-s",
                "emulator-5554",
                "shell",
                "am start -a android.intent.action.VIEW -d 'https://wa.me/+507?text=hola'",
            ]
        );
    }

    #[tokio::test]
    async fn missing_adb_means_no_handler() {
        let opener = AdbIntentOpener::new(
            PathBuf::from("/nonexistent/platform-tools/adb"),
            None,
        );

        let err = opener.open("https://wa.me/+507").await.unwrap_err();

        assert!(matches!(err, DomainError::NoHandlerAvailable(_)));
    }
}
