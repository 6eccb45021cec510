//! Spoken announcements
//!
//! The overlay speaks through the Windows speech synthesizer, driven by a
//! PowerShell one-liner.

use std::process::Command;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Failed to execute PowerShell TTS: {0}")]
    Launch(String),

    #[error("PowerShell TTS failed: {0}")]
    Synthesis(String),
}

pub trait Speaker: Send + Sync {
    fn speak(&self, text: &str) -> Result<(), SpeechError>;
}

pub type SharedSpeaker = Arc<dyn Speaker>;

#[derive(Debug, Default, Clone, Copy)]
pub struct PowerShellSpeaker;

impl Speaker for PowerShellSpeaker {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        let output = Command::new("powershell")
            .args(["-NoProfile", "-Command", &speech_script(text)])
            .output()
            .map_err(|e| SpeechError::Launch(e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(SpeechError::Synthesis(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ))
        }
    }
}

fn speech_script(text: &str) -> String {
    // PowerShell single-quoted strings escape a quote by doubling it.
    format!(
        "Add-Type -AssemblyName System.Speech; \
         (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{}');",
        text.replace('\'', "''")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_embeds_text_in_single_quotes() {
        let script = speech_script("countdown ended, Phantom");
        assert!(script.starts_with("Add-Type -AssemblyName System.Speech;"));
        assert!(script.ends_with(".Speak('countdown ended, Phantom');"));
    }

    #[test]
    fn single_quotes_are_doubled() {
        let script = speech_script("it's over'; Remove-Item x; '");
        assert!(script.contains(".Speak('it''s over''; Remove-Item x; ''');"));
    }

    #[test]
    fn launch_error_message_mentions_powershell() {
        let error = SpeechError::Launch("not found".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to execute PowerShell TTS: not found"
        );
    }
}
