use axum::{
    Json,
    extract::Query,
    response::{IntoResponse, Response},
};
use mealplanner_shared::{Error, Result};
use mealplanner_widgets::popup::{
    CheckboxGroup, FormField, PopupMessage, PopupResult, ScreenMetrics, SelectField,
    ToggleControl, on_popup_complete, open_create_popup, open_edit_popup, open_edit_selected_popup,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::template::Template;

#[derive(Deserialize)]
pub struct OpenQuery {
    pub href: String,
    /// Opener page, `href` is relative to it when set.
    pub base: Option<String>,
    /// Value of the select field whose record is edited; `href` then holds an
    /// `{id}` placeholder.
    pub selected: Option<String>,
    #[serde(default)]
    pub screen_left: f64,
    #[serde(default)]
    pub screen_top: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub avail_width: f64,
}

#[derive(Serialize)]
pub struct OpenResponse {
    pub url: String,
    pub features: String,
}

/// Resolved url and centered placement of a popup window.
pub async fn open(template: Template, Query(input): Query<OpenQuery>) -> Response {
    let metrics = ScreenMetrics {
        screen_left: input.screen_left,
        screen_top: input.screen_top,
        viewport_width: input.viewport_width,
        viewport_height: input.viewport_height,
        avail_width: input.avail_width,
    };

    let popup = match input.base {
        Some(base) => {
            let base = crate::try_response!(
                sync: Url::parse(&base)
                    .map_err(|err| Error::Validate(format!("invalid opener url: {err}"))),
                template
            );

            match input.selected {
                Some(selected) => crate::try_response!(
                    sync: open_edit_selected_popup(&base, &input.href, &selected, &metrics),
                    template
                ),
                None => crate::try_response!(
                    sync: open_edit_popup(&base, &input.href, &metrics),
                    template
                ),
            }
        }
        None => crate::try_response!(sync: open_create_popup(&input.href, &metrics), template),
    };

    Json(OpenResponse {
        features: popup.features(),
        url: popup.url.into(),
    })
    .into_response()
}

/// Page closing a popup after it posted its message to the opener.
#[derive(askama::Template)]
#[template(path = "popup-complete.html")]
pub struct PopupCompleteTemplate {
    pub message: String,
}

fn complete(template: Template, message: PopupMessage) -> Response {
    let message = crate::try_response!(sync: message.to_json(), template);

    template.render(PopupCompleteTemplate { message })
}

pub async fn created(template: Template, Query(result): Query<PopupResult>) -> Response {
    complete(template, PopupMessage::Created(result))
}

pub async fn print_closed(template: Template) -> Response {
    complete(template, PopupMessage::PrintClosed)
}

#[derive(askama::Template)]
#[template(path = "partials/select-field.html")]
pub struct SelectFieldTemplate {
    pub select: SelectField,
    pub field_json: String,
}

#[derive(askama::Template)]
#[template(path = "partials/checkbox-field.html")]
pub struct CheckboxFieldTemplate {
    pub group: CheckboxGroup,
    pub field_json: String,
    pub control: Option<ToggleControl>,
    pub control_json: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn render_field(template: Template, field: FormField, control: Option<ToggleControl>) -> Response {
    let field_json = crate::try_response!(sync: to_json(&field), template);

    match field {
        FormField::Select(select) => template.render(SelectFieldTemplate { select, field_json }),
        FormField::Checkboxes(group) => {
            let control_json = crate::try_response!(sync: to_json(&control), template);

            template.render(CheckboxFieldTemplate {
                group,
                field_json,
                control,
                control_json,
            })
        }
    }
}

#[derive(Deserialize)]
pub struct ApplyInput {
    pub field: FormField,
    pub message: PopupMessage,
    #[serde(default)]
    pub control: Option<ToggleControl>,
}

/// Opener field re-rendered with the popup message applied.
#[tracing::instrument(skip_all, fields(field = input.field.id()))]
pub async fn apply(template: Template, Json(mut input): Json<ApplyInput>) -> Response {
    crate::try_response!(sync: on_popup_complete(&mut input.field, &input.message), template);

    render_field(template, input.field, input.control)
}

#[derive(Deserialize)]
pub struct ToggleInput {
    pub field: FormField,
    #[serde(default)]
    pub control: Option<ToggleControl>,
}

pub async fn toggle(template: Template, Json(mut input): Json<ToggleInput>) -> Response {
    crate::try_response!(sync: input.field.toggle(input.control.as_mut()), template);

    render_field(template, input.field, input.control)
}
