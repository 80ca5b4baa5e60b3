use serde_json::{json, Value};

use crate::error::CoreError;

mod command;
mod source_translation;

use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn dispatch(cmd: &str, payload: &Value) -> Result<Value, CoreError> {
    match Command::from(cmd) {
        Command::Ping => Ok(json!({ "message": "translation-core alive" })),
        Command::TranslationSlug => source_translation::slug(payload),
        Command::SourceTranslationNew => source_translation::new(payload),
        Command::SourceTranslationFromContainer => source_translation::from_container(payload),
        Command::SourceTranslationFromTranslation => source_translation::from_translation(payload),
        Command::SourceTranslationSetModifiedTime => source_translation::set_modified_time(payload),
        Command::SourceTranslationTouch => source_translation::touch(payload),
        Command::Unknown => Err(CoreError::UnknownCommand(cmd.to_string())),
    }
}

pub fn handle(input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("rejected request: {e}");
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd = get_cmd(&req);
    tracing::debug!(cmd, %id, "handling request");

    match dispatch(cmd, get_payload(&req)) {
        Ok(payload) => ok(id, payload),
        Err(e) => {
            match &e {
                CoreError::UnknownCommand(name) => tracing::warn!(cmd = %name, "unknown command"),
                other => tracing::warn!(cmd, "request failed: {other}"),
            }
            err(id, e.to_string())
        }
    }
}
