use mealplanner_shared::{Error, Result, SelectionError};
use serde::{Deserialize, Serialize};
use url::Url;

pub const POPUP_HEIGHT: u32 = 300;
pub const POPUP_WIDTH: u32 = 600;

/// Browser window metrics the popup is centered against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    pub screen_left: f64,
    pub screen_top: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub avail_width: f64,
}

impl ScreenMetrics {
    /// Ratio between CSS pixels and screen pixels, 1 when unknown.
    pub fn system_zoom(&self) -> f64 {
        if self.avail_width <= 0.0 || self.viewport_width <= 0.0 {
            return 1.0;
        }

        self.viewport_width / self.avail_width
    }

    pub fn center(&self, width: u32, height: u32) -> Placement {
        let zoom = self.system_zoom();

        Placement {
            left: (self.viewport_width - f64::from(width)) / 2.0 / zoom + self.screen_left,
            top: (self.viewport_height - f64::from(height)) / 2.0 / zoom + self.screen_top,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupWindow {
    pub url: Url,
    pub height: u32,
    pub width: u32,
    pub placement: Placement,
}

impl PopupWindow {
    fn centered(url: Url, metrics: &ScreenMetrics) -> Self {
        Self {
            url,
            height: POPUP_HEIGHT,
            width: POPUP_WIDTH,
            placement: metrics.center(POPUP_WIDTH, POPUP_HEIGHT),
        }
    }

    /// `window.open` feature string.
    pub fn features(&self) -> String {
        format!(
            "height={},width={},resizable=yes,scrollbars=yes,top={},left={}",
            self.height, self.width, self.placement.top, self.placement.left
        )
    }
}

/// Popup editing a related record, `relative` being resolved against the
/// directory of the opener page.
pub fn open_edit_popup(base: &Url, relative: &str, metrics: &ScreenMetrics) -> Result<PopupWindow> {
    let url = base
        .join(relative)
        .map_err(|err| Error::Validate(format!("invalid popup url {relative:?}: {err}")))?;

    Ok(PopupWindow::centered(url, metrics))
}

/// Placeholder replaced by the selected record id in
/// [`open_edit_selected_popup`] links.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Popup editing the record currently picked in a select field, e.g.
/// `author/{id}/edit` with the `id_author` value.
pub fn open_edit_selected_popup(
    base: &Url,
    pattern: &str,
    selected: &str,
    metrics: &ScreenMetrics,
) -> Result<PopupWindow> {
    let id = selected
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::Selection(SelectionError::NoRecordSelected))?;

    open_edit_popup(base, &pattern.replace(ID_PLACEHOLDER, &id.to_string()), metrics)
}

/// Popup creating a record, `href` being the absolute link target.
pub fn open_create_popup(href: &str, metrics: &ScreenMetrics) -> Result<PopupWindow> {
    let url = Url::parse(href)
        .map_err(|err| Error::Validate(format!("invalid popup url {href:?}: {err}")))?;

    Ok(PopupWindow::centered(url, metrics))
}
