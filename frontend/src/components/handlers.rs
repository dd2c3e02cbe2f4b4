use super::super::{FileData, Model, Msg, Panel};
use super::utils::{first_file, first_image_file};
use crate::api::{HttpPredictionService, SelectedFile};
use crate::export;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::report::{generate_report, report_file_name};
use shared::{
    ImageBlob, PredictError, PredictionService, ServiceReply, ShareOutcome, TransportError, UiSurface,
    build_issue_detail, render_prediction_error, render_success,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut Model, file: GlooFile) -> bool {
    let image = SelectedFile::from(file);
    log::info!(
        "File selected: {} {} {}",
        image.name(),
        image.media_type(),
        image.size()
    );

    if let Err(err) = model.controller.validate(Some(&image)) {
        log::warn!("Rejected {}: {}", image.name(), err);
        model.surface.show_notice(&err.to_string());
        return true;
    }

    model.controller.reset();
    model.surface.notice = None;
    let preview_url = ObjectUrl::from(image.file().clone());
    model.selected = Some(FileData { image, preview_url });

    true
}

pub fn handle_remove_image(model: &mut Model) -> bool {
    if model.selected.take().is_none() {
        return false;
    }

    model.panel = None;
    model.issue_detail = None;
    model.surface.results_visible = false;
    model.controller.reset();
    true
}

pub fn handle_predict(model: &mut Model, ctx: &Context<Model>) -> bool {
    let image = model.selected.as_ref().map(|file_data| file_data.image.clone());

    if let Err(err) = model.controller.begin(image.as_ref(), &mut model.surface) {
        log::warn!("Prediction not started: {}", err);
        return true;
    }

    let Some(image) = image else {
        return true;
    };

    model.panel = None;
    model.issue_detail = None;

    let service = HttpPredictionService::new(model.controller.config().predict_endpoint.clone());
    let link = ctx.link().clone();
    spawn_local(async move {
        let reply = service.send(&image).await;
        link.send_message(Msg::PredictionFinished(reply));
    });

    true
}

pub fn handle_prediction_finished(
    model: &mut Model,
    reply: Result<ServiceReply, TransportError>,
) -> bool {
    let panel = match model.controller.finish(reply, &mut model.surface) {
        Ok(result) => Panel::Success(render_success(&result)),
        Err(PredictError::Discarded) => return true,
        Err(err) => Panel::Failure(render_prediction_error(&err)),
    };
    model.panel = Some(panel);
    true
}

pub fn handle_download_report(model: &mut Model) -> bool {
    let Some(Panel::Success(view)) = &model.panel else {
        return false;
    };

    let today = chrono::Local::now().date_naive();
    let content = generate_report(&view.raw_label, view.confidence.value(), today);
    let file_name = report_file_name(today);

    match export::download_text(&file_name, &content) {
        Ok(()) => {
            log::info!("Report saved as {}", file_name);
            model.surface.show_notice("Detailed report downloaded successfully!");
        }
        Err(e) => {
            log::error!("Report download failed: {:?}", e);
            model.surface.show_notice("Unable to download report");
        }
    }

    true
}

pub fn handle_share_results(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(Panel::Success(view)) = &model.panel else {
        return false;
    };

    let text = view.share_text();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = export::share(&text).await;
        link.send_message(Msg::ShareFinished(outcome));
    });

    false
}

pub fn handle_share_finished(model: &mut Model, outcome: ShareOutcome) -> bool {
    match outcome.notice() {
        Some(notice) => {
            model.surface.show_notice(notice);
            true
        }
        None => false,
    }
}

pub fn handle_show_issues(model: &mut Model) -> bool {
    let Some(Panel::Success(view)) = &model.panel else {
        return false;
    };

    model.issue_detail = Some(build_issue_detail(&view.raw_label));
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    event.stop_propagation();
    model.is_dragging = false;

    if let Some(file) = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .as_ref()
        .and_then(first_file)
    {
        ctx.link().send_message(Msg::FileChosen(file));
    }

    true
}

pub fn handle_paste(ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(file) = event
        .clipboard_data()
        .and_then(|data_transfer| data_transfer.files())
        .as_ref()
        .and_then(first_image_file)
    {
        event.prevent_default();
        ctx.link().send_message(Msg::FileChosen(file));
    }
    false
}
