use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::CoreError;
use crate::model::language::Language;
use crate::model::project::Project;
use crate::model::resource::Resource;
use crate::model::resource_container::ResourceContainer;
use crate::model::source_translation::SourceTranslation;
use crate::model::translation::{Translation, TranslationIdentity};

fn field<T: DeserializeOwned>(payload: &Value, name: &'static str) -> Result<T, CoreError> {
    let v = payload
        .get(name)
        .filter(|v| !v.is_null())
        .cloned()
        .ok_or(CoreError::MissingField(name))?;

    serde_json::from_value(v).map_err(|source| CoreError::InvalidField { field: name, source })
}

fn timestamp(payload: &Value) -> Result<i64, CoreError> {
    let v = payload
        .get("modified_timestamp")
        .filter(|v| !v.is_null())
        .ok_or(CoreError::MissingField("modified_timestamp"))?;

    v.as_i64().ok_or(CoreError::InvalidTimestamp)
}

fn respond(st: &SourceTranslation) -> Value {
    json!({ "source_translation": st })
}

pub fn slug(payload: &Value) -> Result<Value, CoreError> {
    let t: Translation = field(payload, "translation")?;
    Ok(json!({ "slug": t.slug() }))
}

pub fn new(payload: &Value) -> Result<Value, CoreError> {
    let language: Language = field(payload, "language")?;
    let project: Project = field(payload, "project")?;
    let resource: Resource = field(payload, "resource")?;

    Ok(respond(&SourceTranslation::new(language, project, resource)))
}

pub fn from_container(payload: &Value) -> Result<Value, CoreError> {
    let container: ResourceContainer = field(payload, "container")?;
    let st = SourceTranslation::from_container(&container);

    Ok(json!({
        "source_translation": st,
        "chunk_count": container.chunk_count()
    }))
}

pub fn from_translation(payload: &Value) -> Result<Value, CoreError> {
    let t: Translation = field(payload, "translation")?;
    let ts = timestamp(payload)?;

    Ok(respond(&SourceTranslation::from_translation(&t, ts)))
}

pub fn set_modified_time(payload: &Value) -> Result<Value, CoreError> {
    let mut st: SourceTranslation = field(payload, "source_translation")?;
    let ts = timestamp(payload)?;
    st.set_modified_time(ts);

    Ok(respond(&st))
}

pub fn touch(payload: &Value) -> Result<Value, CoreError> {
    let mut st: SourceTranslation = field(payload, "source_translation")?;
    let now = st.touch();
    tracing::debug!(slug = %st.slug(), modified_timestamp = now, "touched source translation");

    Ok(respond(&st))
}
