use super::super::{Model, Msg};
use yew::prelude::*;

pub fn render_issue_modal(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(detail) = &model.issue_detail else {
        return html! {};
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-content">
                <div class="modal-header">
                    <h2><i class="fas fa-search"></i>{" Detected Issues Details"}</h2>
                    <button class="modal-close" onclick={ctx.link().callback(|_| Msg::CloseIssues)}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div class="modal-body">
                    <div class="issue-details">
                        <h3>
                            {"Current Field Status: "}
                            <span class={classes!("status", detail.condition.key())}>{ &detail.status_label }</span>
                        </h3>
                        { for detail.sections.iter().map(|section| html! {
                            <div class="issue-section">
                                <h4><i class={classes!("fas", section.icon)}></i>{ format!(" {}:", section.title) }</h4>
                                <ul>
                                    { for section.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                                </ul>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </div>
    }
}
