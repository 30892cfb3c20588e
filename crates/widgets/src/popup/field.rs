use mealplanner_shared::{Result, invalid};
use serde::{Deserialize, Serialize};

use super::{PopupResult, TargetKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectField {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl SelectField {
    /// Appends the created record as the selected option.
    pub fn append(&mut self, result: &PopupResult) {
        if !self.multiple {
            for option in self.options.iter_mut() {
                option.selected = false;
            }
        }

        self.options.push(SelectOption {
            value: result.new_id.to_string(),
            label: result.new_repr.to_owned(),
            selected: true,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxItem {
    pub id: String,
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<CheckboxItem>,
}

impl CheckboxGroup {
    /// Appends the created record checked, then orders items by label.
    pub fn append(&mut self, result: &PopupResult) {
        self.items.push(CheckboxItem {
            id: format!("id_{}{}", self.name, result.new_id),
            value: result.new_id.to_string(),
            label: result.new_repr.to_owned(),
            checked: true,
            hidden: false,
        });

        // stable, ties keep their order
        self.items
            .sort_by(|a, b| a.label.trim().cmp(b.label.trim()));
    }
}

/// Opener form field a popup can update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FormField {
    Select(SelectField),
    Checkboxes(CheckboxGroup),
}

impl FormField {
    pub fn id(&self) -> &str {
        match self {
            FormField::Select(field) => &field.id,
            FormField::Checkboxes(group) => &group.id,
        }
    }

    pub fn apply(&mut self, result: &PopupResult) -> Result<()> {
        if self.id() != result.target_id() {
            invalid!(
                "popup target {} does not match field {}",
                result.target,
                self.id()
            );
        }

        match (self, result.kind) {
            (FormField::Select(field), TargetKind::Option) => field.append(result),
            (FormField::Checkboxes(group), TargetKind::Checkbox) => group.append(result),
            (field, kind) => invalid!("cannot append a {kind} to field {}", field.id()),
        }

        Ok(())
    }

    /// [`toggle_visibility`] for checkbox groups; a select field has no items
    /// to hide.
    pub fn toggle(&mut self, control: Option<&mut ToggleControl>) -> Result<bool> {
        match self {
            FormField::Checkboxes(group) => Ok(toggle_visibility(group, control)),
            FormField::Select(field) => invalid!("cannot toggle the options of field {}", field.id),
        }
    }
}

/// Button toggling the unchecked items of a checkbox group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleControl {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Hides visible unchecked items and shows hidden ones. Checked items always
/// stay visible.
///
/// Returns `false` so the triggering control never navigates.
pub fn toggle_visibility(group: &mut CheckboxGroup, control: Option<&mut ToggleControl>) -> bool {
    let mut items_hidden = false;

    for item in group.items.iter_mut() {
        if item.checked {
            item.hidden = false;
            continue;
        }

        item.hidden = !item.hidden;
        items_hidden |= item.hidden;
    }

    let Some(control) = control else {
        return false;
    };

    if items_hidden {
        control.title = control.title.replacen("Hide", "Show", 1);
        control.image = control
            .image
            .take()
            .map(|src| src.replacen("invisible", "visible", 1));
    } else {
        control.title = control.title.replacen("Show", "Hide", 1);
        control.image = control.image.take().map(|src| {
            if src.contains("invisible") {
                src
            } else {
                src.replacen("visible", "invisible", 1)
            }
        });
    }

    false
}
