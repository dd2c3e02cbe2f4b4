use crate::config::ClientConfig;
use crate::error::{PredictError, TransportError, ValidationError};
use crate::prediction::PredictionResult;

/// The selected file as seen by the controller: only name, type and size matter.
pub trait ImageBlob {
    fn name(&self) -> String;
    fn media_type(&self) -> String;
    fn size(&self) -> u64;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryImage {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl InMemoryImage {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}

impl ImageBlob for InMemoryImage {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Raw HTTP answer from the prediction server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReply {
    pub status: u16,
    pub body: String,
}

impl ServiceReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport to the prediction server. Implementations send the blob as a
/// multipart form with a single `file` field and make exactly one attempt.
#[allow(async_fn_in_trait)]
pub trait PredictionService {
    type Blob: ImageBlob;

    async fn send(&self, image: &Self::Blob) -> Result<ServiceReply, TransportError>;
}

/// The observable UI states a request toggles.
pub trait UiSurface {
    /// Disable submission and show the loading indicator.
    fn begin_loading(&mut self);
    /// Hide the loading indicator and re-enable submission.
    fn end_loading(&mut self);
    fn reveal_results(&mut self);
    fn show_notice(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceState {
    pub loading: bool,
    pub submit_enabled: bool,
    pub results_visible: bool,
    pub notice: Option<String>,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            loading: false,
            submit_enabled: true,
            results_visible: false,
            notice: None,
        }
    }
}

impl UiSurface for SurfaceState {
    fn begin_loading(&mut self) {
        self.loading = true;
        self.submit_enabled = false;
        self.results_visible = false;
        self.notice = None;
    }

    fn end_loading(&mut self) {
        self.loading = false;
        self.submit_enabled = true;
    }

    fn reveal_results(&mut self) {
        self.results_visible = true;
    }

    fn show_notice(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Sending,
    Rendered,
    ErrorRendered,
}

/// Drives one prediction request at a time through
/// `Idle -> Validating -> Sending -> Rendered | ErrorRendered`.
///
/// A second submission while a request is `Sending` is rejected with
/// [`PredictError::InFlight`] and leaves the running request untouched.
/// A [`reset`](Self::reset) while `Sending` marks the request stale; its reply
/// only clears the loading state and comes back as [`PredictError::Discarded`].
#[derive(Debug, Clone, Default)]
pub struct UploadController {
    config: ClientConfig,
    phase: Phase,
    stale: bool,
}

impl UploadController {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            stale: false,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == Phase::Sending
    }

    pub fn validate<B: ImageBlob>(&self, image: Option<&B>) -> Result<(), ValidationError> {
        let image = image.ok_or(ValidationError::Missing)?;

        let media_type = image.media_type();
        if !self.config.accepts(&media_type) {
            return Err(ValidationError::UnsupportedType { media_type });
        }

        let size = image.size();
        if size > self.config.max_upload_bytes {
            return Err(ValidationError::TooLarge {
                size,
                limit: self.config.max_upload_bytes,
            });
        }

        Ok(())
    }

    /// Validates the image and, if it passes, moves to `Sending` and shows the
    /// loading state. On rejection the surface gets a notice and nothing else.
    pub fn begin<B, U>(&mut self, image: Option<&B>, ui: &mut U) -> Result<(), PredictError>
    where
        B: ImageBlob,
        U: UiSurface,
    {
        if self.phase == Phase::Sending {
            log::warn!("Rejected submission while a prediction is in flight");
            let err = PredictError::InFlight;
            ui.show_notice(&err.to_string());
            return Err(err);
        }

        self.phase = Phase::Validating;
        if let Err(err) = self.validate(image) {
            log::warn!("Rejected image: {}", err);
            self.phase = Phase::Idle;
            ui.show_notice(&err.to_string());
            return Err(err.into());
        }

        if let Some(image) = image {
            log::info!(
                "Sending {} ({}, {} bytes) to {}",
                image.name(),
                image.media_type(),
                image.size(),
                self.config.predict_endpoint
            );
        }
        self.phase = Phase::Sending;
        self.stale = false;
        ui.begin_loading();
        Ok(())
    }

    /// Interprets the server reply, clears the loading state and reveals the
    /// results region. A reply arriving outside `Sending` leaves the surface alone.
    /// A reply for a stale request clears the loading state only.
    pub fn finish<U: UiSurface>(
        &mut self,
        reply: Result<ServiceReply, TransportError>,
        ui: &mut U,
    ) -> Result<PredictionResult, PredictError> {
        let outcome = reply.map_err(PredictError::from).and_then(interpret_reply);

        if self.phase != Phase::Sending {
            log::warn!("Ignoring prediction reply received in phase {:?}", self.phase);
            return outcome;
        }

        ui.end_loading();
        if self.stale {
            log::info!("Discarding prediction reply for a replaced image");
            self.stale = false;
            self.phase = Phase::Idle;
            return Err(PredictError::Discarded);
        }

        match &outcome {
            Ok(result) => {
                log::info!("Prediction: {} ({})", result.label, result.percent());
                self.phase = Phase::Rendered;
            }
            Err(err) => {
                log::error!("Prediction failed: {}", err);
                self.phase = Phase::ErrorRendered;
            }
        }
        ui.reveal_results();

        outcome
    }

    /// Runs a full request: validate, send once, interpret.
    pub async fn submit_prediction<S, U>(
        &mut self,
        service: &S,
        image: Option<&S::Blob>,
        ui: &mut U,
    ) -> Result<PredictionResult, PredictError>
    where
        S: PredictionService,
        U: UiSurface,
    {
        self.begin(image, ui)?;

        let reply = match image {
            Some(image) => service.send(image).await,
            None => Err(TransportError::new("no image to send")),
        };

        self.finish(reply, ui)
    }

    /// Returns to `Idle` after the selection changes. Mid-request the phase
    /// stays `Sending` and the pending reply is marked stale.
    pub fn reset(&mut self) {
        if self.phase == Phase::Sending {
            log::debug!("Selection changed while sending; reply will be discarded");
            self.stale = true;
        } else {
            self.phase = Phase::Idle;
        }
    }
}

/// Maps a raw reply to a result: non-2xx is an HTTP error, anything that is
/// not the expected JSON shape is a parse error.
pub fn interpret_reply(reply: ServiceReply) -> Result<PredictionResult, PredictError> {
    if !reply.is_success() {
        return Err(PredictError::Http {
            status: reply.status,
            body: reply.body,
        });
    }

    Ok(serde_json::from_str::<PredictionResult>(&reply.body)?)
}
