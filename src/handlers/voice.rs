use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Form;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha1::Sha1;

use crate::services::voice;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct VoiceForm {
    #[serde(rename = "CallSid")]
    pub call_sid: String,
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "SpeechResult")]
    pub speech_result: Option<String>,
}

fn validate_twilio_signature(
    auth_token: &str,
    signature: &str,
    url: &str,
    params: &[(&str, &str)],
) -> bool {
    // Build the data to sign: URL + sorted params concatenated
    let mut data = url.to_string();
    let mut sorted_params = params.to_vec();
    sorted_params.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in &sorted_params {
        data.push_str(key);
        data.push_str(value);
    }

    let mut mac = match Hmac::<Sha1>::new_from_slice(auth_token.as_bytes()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(data.as_bytes());
    let result = mac.finalize().into_bytes();
    let expected = base64::engine::general_purpose::STANDARD.encode(result);

    expected == signature
}

/// Reject requests with a missing or invalid X-Twilio-Signature. Skipped
/// entirely when no auth token is configured (dev mode).
fn check_signature(
    state: &AppState,
    headers: &HeaderMap,
    path: &str,
    params: &[(&str, &str)],
) -> Result<(), Response> {
    if state.config.twilio_auth_token.is_empty() {
        return Ok(());
    }

    let signature = headers
        .get("x-twilio-signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if signature.is_empty() {
        tracing::warn!("missing X-Twilio-Signature header");
        return Err((StatusCode::FORBIDDEN, "Missing signature").into_response());
    }

    // Reconstruct webhook URL — use X-Forwarded-Proto/Host if behind proxy
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("https");
    let host = headers
        .get("x-forwarded-host")
        .or_else(|| headers.get("host"))
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let url = format!("{proto}://{host}{path}");

    if !validate_twilio_signature(&state.config.twilio_auth_token, signature, &url, params) {
        tracing::warn!("invalid Twilio signature");
        return Err((StatusCode::FORBIDDEN, "Invalid signature").into_response());
    }

    Ok(())
}

pub async fn voice(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<VoiceForm>,
) -> Response {
    let params = [
        ("CallSid", form.call_sid.as_str()),
        ("From", form.from.as_str()),
    ];
    if let Err(resp) = check_signature(&state, &headers, "/voice", &params) {
        return resp;
    }

    tracing::info!(call = %form.call_sid, from = %form.from, "incoming call");

    let greeting = format!(
        "Thank you for calling {}. How can I help you today?",
        state.config.business_name
    );
    voice::begin_call(&state, &form.call_sid, &greeting).await;

    xml_response(gather_twiml(&greeting))
}

pub async fn handle_input(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<VoiceForm>,
) -> Response {
    let mut params = vec![
        ("CallSid", form.call_sid.as_str()),
        ("From", form.from.as_str()),
    ];
    if let Some(speech) = form.speech_result.as_deref() {
        params.push(("SpeechResult", speech));
    }
    if let Err(resp) = check_signature(&state, &headers, "/handle_input", &params) {
        return resp;
    }

    let speech = form.speech_result.as_deref().unwrap_or("").trim();
    if speech.is_empty() {
        return xml_response(gather_twiml(
            "I'm sorry, I didn't catch that. Could you say that again?",
        ));
    }

    tracing::info!(call = %form.call_sid, speech = %speech, "caller speech");

    match voice::process_turn(&state, &form.call_sid, &form.from, speech).await {
        Ok(turn) if turn.end_call => xml_response(hangup_twiml(&turn.reply)),
        Ok(turn) => xml_response(gather_twiml(&turn.reply)),
        Err(e) => {
            tracing::error!(error = %e, call = %form.call_sid, "voice turn failed");
            xml_response(hangup_twiml(
                "I'm sorry, I'm having trouble right now. Please call back in a moment.",
            ))
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn gather_twiml(text: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Gather input=\"speech\" action=\"/handle_input\" method=\"POST\" speechTimeout=\"auto\"><Say>{}</Say></Gather></Response>",
        escape_xml(text)
    )
}

fn hangup_twiml(text: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Say>{}</Say><Hangup/></Response>",
        escape_xml(text)
    )
}

fn xml_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/xml")], body).into_response()
}
