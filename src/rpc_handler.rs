//! RPC method handler for the credforge JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! services held by the `App` struct.
//!
//! Option parameters are layered over the configured defaults from settings,
//! then clamped into their documented ranges before generation.

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::app::App;
use crate::services::bulk_orchestrator::to_delimited_text;
use crate::services::credential_generator::CredentialGeneratorTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::strength_estimator::StrengthEstimatorTrait;
use crate::types::credential::GeneratedCredential;
use crate::types::request::{clamp_bulk_count, GenerationRequest, WORD_COUNT_RANGE};

/// Overlays the keys of a params object onto `base` and deserializes the result.
///
/// Non-object params (including `null`) leave `base` unchanged.
pub fn merge_options<T>(base: &T, params: &Value) -> Result<T, String>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(base).map_err(|e| e.to_string())?;
    if let (Value::Object(target), Value::Object(overrides)) = (&mut merged, params) {
        for (key, value) in overrides {
            target.insert(key.clone(), value.clone());
        }
    }
    serde_json::from_value(merged).map_err(|e| format!("invalid params: {}", e))
}

fn generate_response(app: &App, request: &GenerationRequest) -> Result<Value, String> {
    let credential: GeneratedCredential = app
        .generator
        .generate(&request.clamped())
        .map_err(|e| e.to_string())?;
    let analysis = app.analyze(&credential);
    Ok(json!({
        "value": credential.value(),
        "policy": credential.policy(),
        "adjustments": credential.adjustments(),
        "analysis": analysis,
    }))
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Generation ───
        "password.generate" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let options = merge_options(&a.settings_engine.get_settings().password, params)?;
            generate_response(&a, &GenerationRequest::Password(options))
        }
        "pin.generate" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let options = merge_options(&a.settings_engine.get_settings().pin, params)?;
            generate_response(&a, &GenerationRequest::Pin(options))
        }
        "passphrase.generate" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let options = merge_options(&a.settings_engine.get_settings().passphrase, params)?;
            generate_response(&a, &GenerationRequest::Passphrase(options))
        }
        "username.generate" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let options = merge_options(&a.settings_engine.get_settings().username, params)?;
            generate_response(&a, &GenerationRequest::Username(options))
        }
        "generate" => {
            let request: GenerationRequest = serde_json::from_value(params.clone())
                .map_err(|e| format!("invalid request: {}", e))?;
            let a = app.lock().map_err(|e| e.to_string())?;
            generate_response(&a, &request)
        }

        // ─── Strength ───
        "strength.analyze" => {
            let value = params.get("value").and_then(|v| v.as_str()).ok_or("missing value")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let analysis = a.estimator.analyze(value);
            serde_json::to_value(analysis).map_err(|e| e.to_string())
        }
        "strength.passphrase" => {
            let word_count = params
                .get("word_count")
                .and_then(|v| v.as_u64())
                .ok_or("missing word_count")? as usize;
            let word_count = word_count.clamp(WORD_COUNT_RANGE.0, WORD_COUNT_RANGE.1);
            let include_number = params
                .get("include_number")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            let a = app.lock().map_err(|e| e.to_string())?;
            let size = a
                .generator
                .wordlist()
                .map(|w| w.len())
                .ok_or("wordlist unavailable")?;
            let analysis = a.estimator.analyze_passphrase(word_count, size, include_number);
            serde_json::to_value(analysis).map_err(|e| e.to_string())
        }

        // ─── Bulk ───
        "bulk.generate" => {
            let request_params = params.get("request").cloned().ok_or("missing request")?;
            let request: GenerationRequest = serde_json::from_value(request_params)
                .map_err(|e| format!("invalid request: {}", e))?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let count = params
                .get("count")
                .and_then(|v| v.as_u64())
                .map(|c| c as usize)
                .unwrap_or(a.settings_engine.get_settings().bulk.default_count);
            let count = clamp_bulk_count(count);
            let request = request.clamped();

            let a = &mut *a;
            let batch = a
                .bulk
                .generate_bulk(&a.generator, &request, count)
                .map_err(|e| e.to_string())?;
            Ok(json!({"id": batch.id, "count": batch.items.len(), "items": batch.items}))
        }
        "bulk.export" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let batch = a.bulk.last_batch().ok_or("no batch to export")?;
            let text = to_delimited_text(&batch.items).map_err(|e| e.to_string())?;
            Ok(json!({"id": batch.id, "text": text}))
        }
        "bulk.clear" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.bulk.clear();
            Ok(json!({"ok": true}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let settings = a.settings_engine.get_settings();
            serde_json::to_value(settings).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            a.reload().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            a.reload().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Wordlist ───
        "wordlist.info" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let source = a
                .settings_engine
                .get_settings()
                .wordlist
                .path
                .clone()
                .unwrap_or_else(|| "embedded".to_string());
            match a.generator.wordlist() {
                Some(list) => Ok(json!({"available": true, "size": list.len(), "source": source})),
                None => Ok(json!({"available": false, "size": 0, "source": source})),
            }
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
