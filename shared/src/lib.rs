pub mod advice;
pub mod condition;
pub mod config;
pub mod controller;
pub mod error;
pub mod issues;
pub mod prediction;
pub mod presenter;
pub mod report;

pub use advice::{ConditionAdvice, advice_for, advice_for_label};
pub use condition::Condition;
pub use config::{ClientConfig, ConfigOverride};
pub use controller::{
    ImageBlob, InMemoryImage, Phase, PredictionService, ServiceReply, SurfaceState, UiSurface,
    UploadController, interpret_reply,
};
pub use error::{ErrorKind, PredictError, TransportError, ValidationError};
pub use issues::{IssueProfile, issues_for, issues_for_label};
pub use prediction::{Confidence, Percent, PredictionResult};
pub use presenter::{
    ErrorView, IssueDetailView, ResultView, ShareOutcome, build_issue_detail, render_error,
    render_prediction_error, render_success, share_text,
};
pub use report::{generate_report, report_file_name};
