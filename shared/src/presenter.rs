//! View models for the result panel, the error panel and the issue dialog.
//!
//! Everything here is pure: the frontend turns these into markup, tests
//! inspect them directly.

use crate::advice::advice_for;
use crate::condition::Condition;
use crate::error::{ErrorKind, PredictError};
use crate::issues::issues_for;
use crate::prediction::{Percent, PredictionResult, round_two};

pub const UNKNOWN_ERROR: &str = "An unknown error occurred";
pub const SHARE_TITLE: &str = "Smart Paddy Field Analysis Results";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSection {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStep {
    pub position: usize,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    /// Label as returned by the server, upper-cased for display.
    pub label: String,
    /// Raw label, used for report and share text.
    pub raw_label: String,
    pub condition: Condition,
    pub filename: Option<String>,
    pub confidence: Percent,
    pub headline: &'static str,
    pub sections: Vec<ListSection>,
    pub treatment: Option<ListSection>,
    pub timeline: Vec<TimelineStep>,
}

impl ResultView {
    pub fn confidence_display(&self) -> String {
        self.confidence.to_string()
    }

    pub fn has_treatment(&self) -> bool {
        self.treatment.is_some()
    }

    pub fn share_text(&self) -> String {
        share_text(&self.raw_label, self.confidence.value())
    }
}

pub fn render_success(result: &PredictionResult) -> ResultView {
    let condition = result.condition();
    let advice = advice_for(condition);

    ResultView {
        label: result.label.to_uppercase(),
        raw_label: result.label.clone(),
        condition,
        filename: result.filename.clone(),
        confidence: result.percent(),
        headline: advice.headline,
        sections: vec![
            ListSection {
                title: "Immediate Actions",
                icon: "fa-tasks",
                items: advice.immediate,
            },
            ListSection {
                title: "Weekly Tasks",
                icon: "fa-calendar-check",
                items: advice.weekly,
            },
            ListSection {
                title: "What to Monitor",
                icon: "fa-eye",
                items: advice.monitoring,
            },
        ],
        treatment: advice.treatment.map(|items| ListSection {
            title: "Treatment Required",
            icon: "fa-medkit",
            items,
        }),
        timeline: advice
            .timeline
            .iter()
            .copied()
            .enumerate()
            .map(|(i, text)| TimelineStep {
                position: i + 1,
                text,
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TroubleshootingStep {
    pub topic: &'static str,
    pub detail: &'static str,
}

pub static TROUBLESHOOTING: &[TroubleshootingStep] = &[
    TroubleshootingStep {
        topic: "Check Backend",
        detail: "Make sure the prediction server is running",
    },
    TroubleshootingStep {
        topic: "Test URL",
        detail: "Open the prediction server address in a new tab to verify it responds",
    },
    TroubleshootingStep {
        topic: "Browser Console",
        detail: "Press F12 and check for error messages",
    },
    TroubleshootingStep {
        topic: "Image Format",
        detail: "Ensure image is JPG, PNG, or JPEG",
    },
    TroubleshootingStep {
        topic: "File Size",
        detail: "Keep image under 5MB",
    },
    TroubleshootingStep {
        topic: "Internet",
        detail: "Check your network connection",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub title: &'static str,
    pub summary: &'static str,
    pub details: String,
    pub hint: Option<&'static str>,
    pub troubleshooting: &'static [TroubleshootingStep],
}

pub fn render_error(message: Option<&str>) -> ErrorView {
    let details = match message.map(str::trim) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => UNKNOWN_ERROR.to_string(),
    };

    ErrorView {
        title: "Analysis Failed",
        summary: "We couldn't analyze your image. Please try again.",
        details,
        hint: None,
        troubleshooting: TROUBLESHOOTING,
    }
}

/// Same fixed checklist as [`render_error`], plus guidance for the error kind.
pub fn render_prediction_error(err: &PredictError) -> ErrorView {
    let message = err.to_string();
    ErrorView {
        hint: Some(hint_for(err.kind())),
        ..render_error(Some(&message))
    }
}

fn hint_for(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Validation => {
            "The file was rejected before upload. Choose a JPG or PNG image under 5MB."
        }
        ErrorKind::Transport => {
            "The prediction server could not be reached. Check that it is running and that the endpoint address is correct."
        }
        ErrorKind::Http => {
            "The prediction server answered with an error status. Check the server logs for the cause."
        }
        ErrorKind::Parse => {
            "The prediction server replied in an unexpected format. Check that the endpoint points at the prediction API."
        }
        ErrorKind::InFlight => "Wait for the current analysis to finish.",
        ErrorKind::Discarded => "Analyze the newly selected image to see its result.",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDetailView {
    pub status_label: String,
    pub condition: Condition,
    pub sections: Vec<ListSection>,
}

pub fn build_issue_detail(label: &str) -> IssueDetailView {
    let condition = Condition::from_label(&label.to_lowercase());
    let profile = issues_for(condition);

    IssueDetailView {
        status_label: label.to_uppercase(),
        condition,
        sections: vec![
            ListSection {
                title: "Possible Issues",
                icon: "fa-exclamation-circle",
                items: profile.possible,
            },
            ListSection {
                title: "Common Symptoms",
                icon: "fa-stethoscope",
                items: profile.symptoms,
            },
            ListSection {
                title: "Likely Causes",
                icon: "fa-question-circle",
                items: profile.causes,
            },
        ],
    }
}

pub fn share_text(label: &str, confidence: f64) -> String {
    format!(
        "My paddy field analysis: {} condition ({}% confidence) - Get expert recommendations with Smart Paddy Field AI",
        label,
        round_two(confidence)
    )
}

/// How a share attempt ended, from the platform share sheet down to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    Failed,
    Unsupported,
}

impl ShareOutcome {
    pub fn notice(self) -> Option<&'static str> {
        match self {
            ShareOutcome::Shared => None,
            ShareOutcome::Copied => Some("Results copied to clipboard!"),
            ShareOutcome::Failed => Some("Unable to share results"),
            ShareOutcome::Unsupported => Some("Sharing not supported on this device"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TransportError, ValidationError};
    use crate::prediction::Confidence;

    fn result(label: &str, confidence: Confidence) -> PredictionResult {
        PredictionResult {
            label: label.into(),
            confidence,
            filename: None,
        }
    }

    #[test]
    fn success_view_for_healthy_has_no_treatment() {
        let view = render_success(&result("Healthy", Confidence::Numeric(98.766)));
        assert_eq!(view.label, "HEALTHY");
        assert_eq!(view.confidence_display(), "98.77%");
        assert!(!view.has_treatment());
        assert_eq!(view.sections.len(), 3);
        assert_eq!(view.timeline[0].position, 1);
        assert_eq!(view.timeline[3].position, 4);
    }

    #[test]
    fn unknown_label_keeps_its_name_but_uses_healthy_advice() {
        let view = render_success(&result("Leaf Blast", Confidence::PercentString("40%".into())));
        assert_eq!(view.label, "LEAF BLAST");
        assert_eq!(view.condition, Condition::Healthy);
        assert_eq!(view.headline, advice_for(Condition::Healthy).headline);
    }

    #[test]
    fn empty_error_message_is_replaced() {
        assert_eq!(render_error(None).details, UNKNOWN_ERROR);
        assert_eq!(render_error(Some("  ")).details, UNKNOWN_ERROR);
        assert_eq!(render_error(Some("boom")).details, "boom");
    }

    #[test]
    fn each_error_kind_gets_its_own_hint() {
        let errors = [
            PredictError::Validation(ValidationError::Missing),
            PredictError::Transport(TransportError::new("refused")),
            PredictError::Http {
                status: 500,
                body: "Internal Server Error".into(),
            },
            PredictError::Parse("expected value".into()),
        ];
        let hints: Vec<_> = errors
            .iter()
            .map(|err| render_prediction_error(err).hint.unwrap())
            .collect();
        for (i, hint) in hints.iter().enumerate() {
            assert_eq!(hints.iter().filter(|h| *h == hint).count(), 1, "hint {i} repeated");
        }
        for err in &errors {
            assert_eq!(render_prediction_error(err).troubleshooting, TROUBLESHOOTING);
        }
    }

    #[test]
    fn issue_detail_uses_fallback_and_given_label() {
        let detail = build_issue_detail("Sheath Rot");
        assert_eq!(detail.status_label, "SHEATH ROT");
        assert_eq!(detail.condition, Condition::Healthy);
        assert_eq!(detail.sections[0].items[0], "No significant issues detected");

        let severe = build_issue_detail("Severe");
        assert_eq!(severe.condition, Condition::Severe);
        assert_eq!(severe.sections[2].title, "Likely Causes");
    }

    #[test]
    fn share_text_names_condition_and_confidence() {
        assert_eq!(
            share_text("Moderate", 72.3),
            "My paddy field analysis: Moderate condition (72.3% confidence) - Get expert recommendations with Smart Paddy Field AI"
        );
    }

    #[test]
    fn share_outcome_notices() {
        assert_eq!(ShareOutcome::Shared.notice(), None);
        assert_eq!(ShareOutcome::Copied.notice(), Some("Results copied to clipboard!"));
        assert_eq!(
            ShareOutcome::Unsupported.notice(),
            Some("Sharing not supported on this device")
        );
    }
}
