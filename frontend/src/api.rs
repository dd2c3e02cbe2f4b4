use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{ImageBlob, PredictionService, ServiceReply, TransportError};
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// A browser file picked for analysis.
#[derive(Clone)]
pub struct SelectedFile(GlooFile);

impl SelectedFile {
    pub fn file(&self) -> &GlooFile {
        &self.0
    }
}

impl From<GlooFile> for SelectedFile {
    fn from(file: GlooFile) -> Self {
        Self(file)
    }
}

impl ImageBlob for SelectedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.raw_mime_type()
    }

    fn size(&self) -> u64 {
        self.0.size()
    }
}

/// Posts the image to the prediction server as a multipart `file` field.
pub struct HttpPredictionService {
    endpoint: String,
}

impl HttpPredictionService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

fn js_error(err: JsValue) -> TransportError {
    TransportError::new(format!("{:?}", err))
}

impl PredictionService for HttpPredictionService {
    type Blob = SelectedFile;

    async fn send(&self, image: &SelectedFile) -> Result<ServiceReply, TransportError> {
        let form_data = FormData::new().map_err(js_error)?;
        form_data
            .append_with_blob_and_filename("file", image.file().as_ref(), &image.name())
            .map_err(js_error)?;

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| TransportError::new(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            log::error!("Prediction request to {} failed: {}", self.endpoint, e);
            TransportError::new(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        log::debug!("Prediction server answered {} ({} bytes)", status, body.len());

        Ok(ServiceReply { status, body })
    }
}
