// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for people assembling figures, not debugging
// image codecs.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::error::BildreiheError;
use crate::types::ComposeWarning;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Purely informational; the result is still usable.
    Notice,
    /// User must do something (pick other files, change a setting).
    ActionRequired,
    /// Cannot be fixed by changing settings; the input itself is the problem.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level.
    pub severity: Severity,
}

/// Convert a `BildreiheError` into a `HumanError`.
pub fn humanize_error(err: &BildreiheError) -> HumanError {
    match err {
        BildreiheError::Decode { position, .. } => HumanError {
            message: format!("Image {position} couldn't be opened."),
            suggestion: "The file may be damaged or not really a PNG/JPEG. Try re-exporting it, then run again.".into(),
            severity: Severity::Permanent,
        },

        BildreiheError::InvalidHeight(_) | BildreiheError::HeightOutOfRange { .. } => {
            let detail = match err {
                BildreiheError::HeightOutOfRange {
                    min, max, step, ..
                } => format!("Choose a height between {min} and {max} pixels, in steps of {step}."),
                _ => "Choose a height greater than zero.".into(),
            };
            HumanError {
                message: "That height can't be used.".into(),
                suggestion: detail,
                severity: Severity::ActionRequired,
            }
        }

        BildreiheError::Encode(_) => HumanError {
            message: "The combined image couldn't be saved as PNG.".into(),
            suggestion: "Try again with fewer or smaller images.".into(),
            severity: Severity::Permanent,
        },

        BildreiheError::UnsupportedImage(detail) => HumanError {
            message: "This type of file isn't supported.".into(),
            suggestion: format!("Only PNG and JPEG images can be combined. (File: {detail})"),
            severity: Severity::ActionRequired,
        },

        BildreiheError::TooManyImages { max, .. } => HumanError {
            message: format!("Maximum of {max} images allowed."),
            suggestion: format!("Only the first {max} images were used. Remove some files to choose which ones."),
            severity: Severity::ActionRequired,
        },

        BildreiheError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Check the path and try again.".into(),
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "Permission denied while reading or writing a file.".into(),
                    suggestion: "Check the file permissions, or choose a different output folder.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
                    severity: Severity::Permanent,
                }
            }
        }

        BildreiheError::InvalidConfig(detail) => HumanError {
            message: "The settings file has a value that can't be used.".into(),
            suggestion: format!("Fix the setting and run again, or remove it to use the default. ({detail})"),
            severity: Severity::ActionRequired,
        },

        BildreiheError::Serialization(_) => HumanError {
            message: "The settings file couldn't be read.".into(),
            suggestion: "Check that the config file is valid JSON, or remove it to use the defaults.".into(),
            severity: Severity::ActionRequired,
        },
    }
}

/// Convert a compositing warning into a `HumanError` of `Notice` severity.
pub fn humanize_warning(warning: &ComposeWarning) -> HumanError {
    match warning {
        ComposeWarning::FontFallback { .. } => HumanError {
            message: warning.to_string(),
            suggestion: "Labels were drawn with the small built-in font. Install the font or pass --font to use another one.".into(),
            severity: Severity::Notice,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_position() {
        let err = BildreiheError::Decode {
            position: 3,
            reason: "bad header".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Permanent);
        assert!(human.message.contains('3'));
    }

    #[test]
    fn height_out_of_range_is_action_required() {
        let err = BildreiheError::HeightOutOfRange {
            height: 900,
            min: 200,
            max: 800,
            step: 50,
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.suggestion.contains("200"));
        assert!(human.suggestion.contains("800"));
    }

    #[test]
    fn missing_file_is_action_required() {
        let err = BildreiheError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(humanize_error(&err).severity, Severity::ActionRequired);
    }

    #[test]
    fn invalid_config_names_the_setting() {
        let err = BildreiheError::InvalidConfig("max_images must be at least 1".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.suggestion.contains("max_images"));
    }

    #[test]
    fn font_fallback_is_notice() {
        let warning = ComposeWarning::FontFallback {
            requested: "arial.ttf".into(),
        };
        assert_eq!(humanize_warning(&warning).severity, Severity::Notice);
    }
}
