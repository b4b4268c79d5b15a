use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::domain::Envelope;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("empty response body")]
    EmptyBody,

    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("successful response is missing `data`")]
    MissingData,

    #[error("response contains unknown channel value: {value}")]
    UnknownChannel { value: String },

    /// The envelope itself parsed, but the gateway reported `success: false`.
    #[error("API error (HTTP {status}): {message:?}")]
    Api { status: u16, message: Option<String> },
}

/// Wire form of the `{success, data, message}` envelope.
///
/// `data` is kept raw here; the per-endpoint shape decides how to decode it.
#[derive(Debug, Deserialize)]
struct RawEnvelope<'a> {
    success: bool,
    #[serde(default, borrow)]
    data: Option<&'a RawValue>,
    #[serde(default)]
    message: Option<String>,
}

/// Expected shape of the envelope's `data` field for one endpoint.
///
/// The four implementations form a closed set; every facade operation picks
/// exactly one as a type parameter to [`decode_envelope`].
pub trait DataShape {
    type Out;

    fn decode_data(data: Option<&RawValue>) -> Result<Self::Out, DecodeError>;
}

/// `data` is null or absent (`auth`). Anything else present is ignored.
pub struct NoData;

/// `data` is a single JSON object decoded as `T`.
pub struct ObjectOf<T>(PhantomData<T>);

/// `data` is a JSON array of `T`, order preserved.
pub struct ArrayOf<T>(PhantomData<T>);

/// `data` is a JSON object keyed by numeric-string indices, decoded as an
/// ordered list of `T` by ascending index. Non-numeric keys (the gateway adds
/// a `links` sibling for pagination) are metadata, not records, and are
/// skipped.
pub struct IndexedMapOf<T>(PhantomData<T>);

impl DataShape for NoData {
    type Out = ();

    fn decode_data(_data: Option<&RawValue>) -> Result<Self::Out, DecodeError> {
        Ok(())
    }
}

impl<T: DeserializeOwned> DataShape for ObjectOf<T> {
    type Out = T;

    fn decode_data(data: Option<&RawValue>) -> Result<Self::Out, DecodeError> {
        let raw = present(data).ok_or(DecodeError::MissingData)?;
        Ok(serde_json::from_str(raw.get())?)
    }
}

impl<T: DeserializeOwned> DataShape for ArrayOf<T> {
    type Out = Vec<T>;

    fn decode_data(data: Option<&RawValue>) -> Result<Self::Out, DecodeError> {
        let raw = present(data).ok_or(DecodeError::MissingData)?;
        Ok(serde_json::from_str(raw.get())?)
    }
}

impl<T: DeserializeOwned> DataShape for IndexedMapOf<T> {
    type Out = Vec<T>;

    fn decode_data(data: Option<&RawValue>) -> Result<Self::Out, DecodeError> {
        let raw = present(data).ok_or(DecodeError::MissingData)?;
        let entries: BTreeMap<String, &RawValue> = serde_json::from_str(raw.get())?;

        // String keys would sort "10" before "2"; order by the parsed index.
        let mut ordered = BTreeMap::<u64, T>::new();
        for (key, value) in entries {
            let Ok(index) = key.trim().parse::<u64>() else {
                continue;
            };
            ordered.insert(index, serde_json::from_str(value.get())?);
        }
        Ok(ordered.into_values().collect())
    }
}

fn present(data: Option<&RawValue>) -> Option<&RawValue> {
    data.filter(|raw| raw.get() != "null")
}

/// Decode one raw HTTP response into a typed envelope.
///
/// Classification order: unparseable body first, then application-level
/// failure (`success: false`, regardless of the HTTP status), then the
/// endpoint-specific `data` shape.
pub fn decode_envelope<S: DataShape>(
    status: u16,
    body: &str,
) -> Result<Envelope<S::Out>, DecodeError> {
    if body.trim().is_empty() {
        return Err(DecodeError::EmptyBody);
    }

    let raw: RawEnvelope<'_> = serde_json::from_str(body)?;
    if !raw.success {
        return Err(DecodeError::Api {
            status,
            message: raw.message,
        });
    }

    Ok(Envelope {
        success: raw.success,
        data: S::decode_data(raw.data)?,
        message: raw.message,
    })
}
