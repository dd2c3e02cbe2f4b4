use std::cell::Cell;

use chrono::NaiveDate;
use futures::executor::block_on;
use shared::presenter::TROUBLESHOOTING;
use shared::{
    InMemoryImage, Phase, PredictError, PredictionService, ServiceReply, TransportError,
    UiSurface, UploadController, ValidationError, generate_report, render_prediction_error,
    render_success,
};

struct MockService {
    reply: Result<ServiceReply, TransportError>,
    calls: Cell<usize>,
}

impl MockService {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(ServiceReply {
                status,
                body: body.to_string(),
            }),
            calls: Cell::new(0),
        }
    }

    fn unreachable() -> Self {
        Self {
            reply: Err(TransportError::new("connection refused")),
            calls: Cell::new(0),
        }
    }
}

impl PredictionService for MockService {
    type Blob = InMemoryImage;

    async fn send(&self, _image: &InMemoryImage) -> Result<ServiceReply, TransportError> {
        self.calls.set(self.calls.get() + 1);
        self.reply.clone()
    }
}

#[derive(Default)]
struct RecordingSurface {
    events: Vec<&'static str>,
    notices: Vec<String>,
}

impl RecordingSurface {
    fn count(&self, event: &str) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

impl UiSurface for RecordingSurface {
    fn begin_loading(&mut self) {
        self.events.push("begin_loading");
    }

    fn end_loading(&mut self) {
        self.events.push("end_loading");
    }

    fn reveal_results(&mut self) {
        self.events.push("reveal_results");
    }

    fn show_notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

fn jpeg(size: usize) -> InMemoryImage {
    InMemoryImage::new("paddy.jpg", "image/jpeg", vec![0xff; size])
}

#[test]
fn gif_is_rejected_before_any_request() {
    let service = MockService::replying(200, r#"{"class":"healthy","confidence":99}"#);
    let mut controller = UploadController::default();
    let mut ui = RecordingSurface::default();
    let gif = InMemoryImage::new("field.gif", "image/gif", vec![0; 128]);

    let err = block_on(controller.submit_prediction(&service, Some(&gif), &mut ui)).unwrap_err();

    assert!(matches!(
        err,
        PredictError::Validation(ValidationError::UnsupportedType { .. })
    ));
    assert_eq!(service.calls.get(), 0);
    assert!(ui.events.is_empty());
    assert_eq!(ui.notices.len(), 1);
    assert_eq!(controller.phase(), Phase::Idle);
}

#[test]
fn six_mebibytes_is_rejected() {
    let service = MockService::replying(200, r#"{"class":"healthy","confidence":99}"#);
    let mut controller = UploadController::default();
    let mut ui = RecordingSurface::default();

    let err = block_on(controller.submit_prediction(
        &service,
        Some(&jpeg(6 * 1024 * 1024)),
        &mut ui,
    ))
    .unwrap_err();

    assert!(matches!(
        err,
        PredictError::Validation(ValidationError::TooLarge { .. })
    ));
    assert_eq!(service.calls.get(), 0);
}

#[test]
fn missing_image_is_rejected() {
    let service = MockService::replying(200, "{}");
    let mut controller = UploadController::default();
    let mut ui = RecordingSurface::default();

    let err = block_on(controller.submit_prediction(&service, None, &mut ui)).unwrap_err();

    assert_eq!(err, PredictError::Validation(ValidationError::Missing));
    assert_eq!(service.calls.get(), 0);
}

#[test]
fn moderate_result_renders_treatment_and_confidence() {
    let service = MockService::replying(200, r#"{"class":"moderate","confidence":"72.3%"}"#);
    let mut controller = UploadController::default();
    let mut ui = RecordingSurface::default();

    let result = block_on(controller.submit_prediction(&service, Some(&jpeg(2048)), &mut ui))
        .expect("prediction should succeed");
    let view = render_success(&result);

    assert_eq!(service.calls.get(), 1);
    assert!(view.has_treatment());
    assert_eq!(view.confidence_display(), "72.3%");
    assert_eq!(view.label, "MODERATE");
    assert_eq!(controller.phase(), Phase::Rendered);
    assert_eq!(ui.events, ["begin_loading", "end_loading", "reveal_results"]);
}

#[test]
fn server_error_becomes_http_error_with_checklist() {
    let service = MockService::replying(500, "Internal Server Error");
    let mut controller = UploadController::default();
    let mut ui = RecordingSurface::default();

    let err = block_on(controller.submit_prediction(&service, Some(&jpeg(2048)), &mut ui))
        .unwrap_err();

    assert!(matches!(err, PredictError::Http { status: 500, .. }));
    assert!(err.to_string().contains("500"));

    let view = render_prediction_error(&err);
    assert_eq!(view.troubleshooting, TROUBLESHOOTING);
    assert!(view.details.contains("Internal Server Error"));
    assert_eq!(controller.phase(), Phase::ErrorRendered);
}

#[test]
fn loading_clears_exactly_once_on_every_outcome() {
    let services = [
        MockService::replying(200, r#"{"class":"severe","confidence":91.2}"#),
        MockService::replying(404, "Not Found"),
        MockService::replying(200, "not json"),
        MockService::unreachable(),
    ];

    for service in &services {
        let mut controller = UploadController::default();
        let mut ui = RecordingSurface::default();

        let _ = block_on(controller.submit_prediction(service, Some(&jpeg(512)), &mut ui));

        assert_eq!(ui.count("begin_loading"), 1);
        assert_eq!(ui.count("end_loading"), 1);
        assert_eq!(ui.count("reveal_results"), 1);
        assert_eq!(ui.events, ["begin_loading", "end_loading", "reveal_results"]);
        assert_ne!(controller.phase(), Phase::Sending);
    }
}

#[test]
fn reply_for_a_removed_image_is_not_revealed() {
    let service = MockService::replying(200, r#"{"class":"severe","confidence":"88%"}"#);
    let mut controller = UploadController::default();
    let mut ui = RecordingSurface::default();
    let image = jpeg(64);

    controller.begin(Some(&image), &mut ui).unwrap();
    let reply = block_on(service.send(&image));
    controller.reset();

    assert_eq!(controller.finish(reply, &mut ui), Err(PredictError::Discarded));
    assert_eq!(ui.events, ["begin_loading", "end_loading"]);
    assert_eq!(controller.phase(), Phase::Idle);
}

#[test]
fn transport_and_parse_failures_are_distinct() {
    let mut ui = RecordingSurface::default();

    let mut controller = UploadController::default();
    let transport = block_on(controller.submit_prediction(
        &MockService::unreachable(),
        Some(&jpeg(1)),
        &mut ui,
    ))
    .unwrap_err();
    assert!(matches!(transport, PredictError::Transport(_)));
    assert_eq!(transport.to_string(), "Network error: connection refused");

    let mut controller = UploadController::default();
    let parse = block_on(controller.submit_prediction(
        &MockService::replying(200, "<html></html>"),
        Some(&jpeg(1)),
        &mut ui,
    ))
    .unwrap_err();
    assert!(matches!(parse, PredictError::Parse(_)));
    assert_ne!(
        render_prediction_error(&transport).hint,
        render_prediction_error(&parse).hint
    );
}

#[test]
fn controller_accepts_a_new_request_after_completion() {
    let service = MockService::replying(200, r#"{"class":"mild","confidence":"64.1%"}"#);
    let mut controller = UploadController::default();
    let mut ui = RecordingSurface::default();

    block_on(controller.submit_prediction(&service, Some(&jpeg(16)), &mut ui)).unwrap();
    block_on(controller.submit_prediction(&service, Some(&jpeg(16)), &mut ui)).unwrap();

    assert_eq!(service.calls.get(), 2);
    assert_eq!(ui.count("end_loading"), 2);
}

#[test]
fn report_is_deterministic_for_a_fixed_day() {
    let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let first = generate_report("severe", 91.2, day);
    let second = generate_report("severe", 91.2, day);
    assert_eq!(first, second);
    assert!(first.contains("Confidence Level: 91.2%"));
}
