// src/ui/widgets/field_widgets.rs
use bevy_egui::egui;
use chrono::{Local, NaiveDate};
use egui_extras::DatePickerButton;

use crate::dataset::record::FieldValue;
use crate::ui::field_view::{bool_label, number_input_text, parse_int, FieldControl, FieldView};

const INPUT_WIDTH: f32 = 260.0;
const EMAIL_HINT: &str = "name@example.com";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Paints one field and returns the new value if the user changed it this frame.
///
/// `id` must be unique per (row, field) so text edits and the date picker keep
/// their own state.
pub(crate) fn paint_field(ui: &mut egui::Ui, id: egui::Id, view: &FieldView) -> Option<FieldValue> {
    match view {
        FieldView::Plain(text) => {
            ui.label(text);
            None
        }
        FieldView::Labeled { label, control } => {
            ui.horizontal_wrapped(|ui| {
                ui.label(format!("{}: ", label));
                paint_control(ui, id, control)
            })
            .inner
        }
    }
}

fn paint_control(ui: &mut egui::Ui, id: egui::Id, control: &FieldControl) -> Option<FieldValue> {
    match control {
        FieldControl::Display(text) => {
            ui.label(text);
            None
        }
        FieldControl::BoolChoice(current) => bool_choice(ui, *current),
        FieldControl::NumberInput(value) => number_input(ui, id, *value),
        FieldControl::EmailInput(text) => {
            let mut buffer = text.clone();
            let response = input_scope(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut buffer)
                        .id(id)
                        .hint_text(EMAIL_HINT)
                        .desired_width(INPUT_WIDTH),
                )
            });
            response.changed().then(|| FieldValue::Text(buffer))
        }
        FieldControl::DateInput(formatted) => date_input(ui, id, formatted),
        FieldControl::TextArea(text) => {
            let mut buffer = text.clone();
            let response = input_scope(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut buffer)
                        .id(id)
                        .desired_rows(4)
                        .desired_width(INPUT_WIDTH * 2.0),
                )
            });
            response.changed().then(|| FieldValue::Text(buffer))
        }
        FieldControl::TextInput(text) => {
            let mut buffer = text.clone();
            let response = input_scope(ui, |ui| {
                ui.add(egui::TextEdit::singleline(&mut buffer).id(id).desired_width(INPUT_WIDTH))
            });
            response.changed().then(|| FieldValue::Text(buffer))
        }
    }
}

/// Radio pair; exactly one side is ever selected because both bind the same bool.
fn bool_choice(ui: &mut egui::Ui, current: bool) -> Option<FieldValue> {
    let mut selected = current;
    let mut changed = false;
    for option in [true, false] {
        changed |= ui.radio_value(&mut selected, option, bool_label(option)).changed();
    }
    changed.then_some(FieldValue::Bool(selected))
}

/// Free-form numeric box. While focused, the raw text lives in egui memory so
/// partial input such as "-" survives the frame even though it parses to NaN.
fn number_input(ui: &mut egui::Ui, id: egui::Id, value: f64) -> Option<FieldValue> {
    let draft_id = id.with("draft");
    let has_focus = ui.memory(|m| m.has_focus(id));
    let mut buffer = if has_focus {
        ui.data(|d| d.get_temp::<String>(draft_id))
            .unwrap_or_else(|| number_input_text(value))
    } else {
        number_input_text(value)
    };

    let response = input_scope(ui, |ui| {
        ui.add(egui::TextEdit::singleline(&mut buffer).id(id).desired_width(INPUT_WIDTH / 2.0))
    });

    if response.lost_focus() {
        ui.data_mut(|d| d.remove::<String>(draft_id));
    }
    if response.changed() {
        let parsed = parse_int(&buffer);
        ui.data_mut(|d| d.insert_temp(draft_id, buffer));
        return Some(FieldValue::Number(parsed));
    }
    None
}

/// Date picker seeded with the formatted date. The picked date is stored as
/// its bare `YYYY-MM-DD` string.
fn date_input(ui: &mut egui::Ui, id: egui::Id, formatted: &str) -> Option<FieldValue> {
    let seeded = NaiveDate::parse_from_str(formatted, DATE_FORMAT).ok();
    if seeded.is_none() {
        ui.weak("(no date)");
    }
    let mut date = seeded.unwrap_or_else(|| Local::now().date_naive());
    let salt = format!("{:?}", id);
    let response = ui.add(DatePickerButton::new(&mut date).id_salt(&salt));
    response.changed().then(|| picked_date_value(date))
}

/// What the picker writes back: the bare date, never a date-time.
fn picked_date_value(date: NaiveDate) -> FieldValue {
    FieldValue::Text(date.format(DATE_FORMAT).to_string())
}

/// Runs `add` with the dark input background used by all edit widgets.
fn input_scope(
    ui: &mut egui::Ui,
    add: impl FnOnce(&mut egui::Ui) -> egui::Response,
) -> egui::Response {
    ui.scope(|ui_input| {
        let dark = egui::Color32::from_rgb(45, 45, 45);
        let visuals = &mut ui_input.style_mut().visuals;
        visuals.extreme_bg_color = dark;
        visuals.widgets.inactive.bg_fill = dark;
        visuals.widgets.hovered.bg_fill = dark;
        visuals.widgets.active.bg_fill = dark;
        add(ui_input)
    })
    .inner
}
