use crate::codec;
use crate::data::{storage_keys, DayAvailability, WeeklyAvailability};
use crate::matrix::AvailabilityMatrix;
use crate::window::HourWindow;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
#[serde(transparent)]
struct Keyed(#[serde(with = "storage_keys")] DayAvailability);

fn read_window(window: JsValue) -> Result<HourWindow, JsValue> {
    if window.is_undefined() || window.is_null() {
        Ok(HourWindow::default())
    } else {
        Ok(serde_wasm_bindgen::from_value(window)?)
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    Ok(value.serialize(&serializer)?)
}

/// `toMatrix(weekly, window?)`: paints a weekly availability record onto a
/// 7 x H grid of booleans, Monday first.
#[wasm_bindgen(js_name = toMatrix)]
pub fn to_matrix(weekly: JsValue, window: JsValue) -> Result<JsValue, JsValue> {
    let weekly: WeeklyAvailability = serde_wasm_bindgen::from_value(weekly)?;
    let matrix = codec::to_matrix(&weekly, read_window(window)?);
    to_js(&matrix)
}

/// `toAvailability(matrix, window?)`: reads a grid back into ranges keyed
/// Sunday first.
#[wasm_bindgen(js_name = toAvailability)]
pub fn to_availability(matrix: JsValue, window: JsValue) -> Result<JsValue, JsValue> {
    let matrix: AvailabilityMatrix = serde_wasm_bindgen::from_value(matrix)?;
    let availability = codec::to_availability(&matrix, read_window(window)?);
    to_js(&Keyed(availability))
}
