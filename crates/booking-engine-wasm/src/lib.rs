//! WASM bindings for booking-engine.
//!
//! Exposes the availability index, day-pick transitions, the month view and
//! stay validation to the browser calendar via `wasm-bindgen`. Payloads,
//! selection states and results all cross the boundary as JSON strings; days
//! are `YYYY-MM-DD` strings.
//!
//! Call `buildUnavailable` once per calendar refresh. It reports skipped
//! reservations; keep its `unavailable` array and hand it to `handleDayPick`
//! and `monthView` on every pick or redraw.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p booking-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/booking-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/booking_engine_wasm.wasm
//! ```

use booking_engine::{
    apply_pick, check_stay, month_view, AvailabilityIndex, CalendarDay, CalendarPayload,
    PickOutcome, SelectionState,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct UnavailableDto {
    unavailable: Vec<CalendarDay>,
    /// Messages for reservations left out of the index.
    skipped: Vec<String>,
}

#[derive(Serialize)]
struct PickDto {
    state: SelectionState,
    outcome: PickOutcome,
}

#[derive(Serialize)]
struct StayDto {
    check_in: CalendarDay,
    check_out: CalendarDay,
    nights: i64,
}

// ---------------------------------------------------------------------------
// Helpers: plain `String` errors so they can be exercised off-wasm
// ---------------------------------------------------------------------------

fn parse_day(s: &str) -> Result<CalendarDay, String> {
    CalendarDay::parse(s).map_err(|e| e.to_string())
}

fn parse_payload(payload_json: &str) -> Result<CalendarPayload, String> {
    CalendarPayload::from_json(payload_json).map_err(|e| e.to_string())
}

/// Rebuild the index from the `unavailable` array returned by `buildUnavailable`.
fn parse_unavailable(unavailable_json: &str) -> Result<AvailabilityIndex, String> {
    let days: Vec<CalendarDay> = serde_json::from_str(unavailable_json)
        .map_err(|e| format!("Invalid unavailable days JSON: {}", e))?;
    Ok(days.into_iter().collect())
}

/// An empty state string means no selection yet.
fn parse_state(state_json: &str) -> Result<SelectionState, String> {
    if state_json.trim().is_empty() {
        return Ok(SelectionState::Empty);
    }
    serde_json::from_str(state_json).map_err(|e| format!("Invalid selection state JSON: {}", e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn build_unavailable_impl(payload_json: &str) -> Result<String, String> {
    let build = parse_payload(payload_json)?.build_index();
    to_json(&UnavailableDto {
        unavailable: build.index.iter().collect(),
        skipped: build.skipped.iter().map(|e| e.to_string()).collect(),
    })
}

fn handle_day_pick_impl(
    state_json: &str,
    day: &str,
    today: &str,
    unavailable_json: &str,
) -> Result<String, String> {
    let state = parse_state(state_json)?;
    let index = parse_unavailable(unavailable_json)?;
    let transition = apply_pick(state, parse_day(day)?, parse_day(today)?, &index);
    to_json(&PickDto {
        state: transition.state,
        outcome: transition.outcome,
    })
}

fn month_view_impl(
    year: i32,
    month: u32,
    today: &str,
    unavailable_json: &str,
    state_json: &str,
) -> Result<String, String> {
    let index = parse_unavailable(unavailable_json)?;
    let state = parse_state(state_json)?;
    let view =
        month_view(year, month, parse_day(today)?, &index, &state).map_err(|e| e.to_string())?;
    to_json(&view)
}

fn check_stay_impl(check_in: &str, check_out: &str, payload_json: &str) -> Result<String, String> {
    let payload = parse_payload(payload_json)?;
    let stay = check_stay(
        parse_day(check_in)?,
        parse_day(check_out)?,
        &payload.blocked_dates,
        &payload.reserved_dates,
    )
    .map_err(|e| e.to_string())?;

    to_json(&StayDto {
        check_in: stay.start,
        check_out: stay.end,
        nights: stay.nights(),
    })
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Build the availability index from a calendar payload.
///
/// Returns `{unavailable: [day...], skipped: [message...]}`. Malformed
/// reservations are listed in `skipped` rather than failing the call.
#[wasm_bindgen(js_name = "buildUnavailable")]
pub fn build_unavailable(payload_json: &str) -> Result<String, JsValue> {
    build_unavailable_impl(payload_json).map_err(|e| JsValue::from_str(&e))
}

/// Apply one day pick.
///
/// `state_json` is the previous selection (`{"state":"empty"}`, or an empty
/// string); `unavailable_json` is the `unavailable` array from
/// `buildUnavailable`. Returns `{state, outcome}`; store `state` and pass it
/// back on the next pick.
#[wasm_bindgen(js_name = "handleDayPick")]
pub fn handle_day_pick(
    state_json: &str,
    day: &str,
    today: &str,
    unavailable_json: &str,
) -> Result<String, JsValue> {
    handle_day_pick_impl(state_json, day, today, unavailable_json)
        .map_err(|e| JsValue::from_str(&e))
}

/// Per-day statuses for one month, Monday-first.
#[wasm_bindgen(js_name = "monthView")]
pub fn month_view_json(
    year: i32,
    month: u32,
    today: &str,
    unavailable_json: &str,
    state_json: &str,
) -> Result<String, JsValue> {
    month_view_impl(year, month, today, unavailable_json, state_json)
        .map_err(|e| JsValue::from_str(&e))
}

/// Validate a stay before submitting it. Throws with a readable message if the
/// dates are inverted, overlap a reservation, or contain a blocked day.
#[wasm_bindgen(js_name = "checkStay")]
pub fn check_stay_json(check_in: &str, check_out: &str, payload_json: &str) -> Result<String, JsValue> {
    check_stay_impl(check_in, check_out, payload_json).map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "blocked_dates": ["2024-06-15"],
        "reserved_dates": [
            {"check_in": "2024-06-01", "check_out": "2024-06-05"},
            {"check_in": "2024-06-22", "check_out": "2024-06-20"}
        ]
    }"#;

    fn unavailable_array() -> String {
        let built: serde_json::Value =
            serde_json::from_str(&build_unavailable_impl(PAYLOAD).unwrap()).unwrap();
        built["unavailable"].to_string()
    }

    #[test]
    fn build_reports_skipped_reservations() {
        let built: serde_json::Value =
            serde_json::from_str(&build_unavailable_impl(PAYLOAD).unwrap()).unwrap();

        assert_eq!(built["unavailable"].as_array().unwrap().len(), 5);
        assert_eq!(built["skipped"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn picks_run_against_unavailable_array() {
        let unavailable = unavailable_array();

        let first = handle_day_pick_impl("", "2024-06-10", "2024-06-01", &unavailable).unwrap();
        let first: serde_json::Value = serde_json::from_str(&first).unwrap();
        assert_eq!(first["outcome"], "check_in_set");

        let state = first["state"].to_string();
        let blocked = handle_day_pick_impl(&state, "2024-06-15", "2024-06-01", &unavailable).unwrap();
        let blocked: serde_json::Value = serde_json::from_str(&blocked).unwrap();
        assert_eq!(blocked["outcome"], "rejected");
        assert_eq!(blocked["state"]["check_in"], "2024-06-10");
    }

    #[test]
    fn inverted_state_is_rejected() {
        let state = r#"{"state":"complete","check_in":"2024-06-20","check_out":"2024-06-10"}"#;
        let err = handle_day_pick_impl(state, "2024-06-25", "2024-06-01", "[]").unwrap_err();
        assert!(err.starts_with("Invalid selection state JSON"), "{err}");
    }

    #[test]
    fn month_view_marks_unavailable_days() {
        let view = month_view_impl(2024, 6, "2024-06-01", &unavailable_array(), "").unwrap();
        let view: serde_json::Value = serde_json::from_str(&view).unwrap();

        assert_eq!(view["leading_blanks"], 5);
        assert_eq!(view["cells"][14]["status"], "unavailable");
        assert_eq!(view["cells"][5]["status"], "available");
    }

    #[test]
    fn check_stay_reports_blocked_day() {
        let err = check_stay_impl("2024-06-12", "2024-06-18", PAYLOAD).unwrap_err();
        assert!(err.contains("2024-06-15 is blocked"), "{err}");

        let ok = check_stay_impl("2024-06-05", "2024-06-09", PAYLOAD).unwrap();
        assert!(ok.contains(r#""nights":4"#));
    }
}
