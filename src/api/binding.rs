//! Binding modes: how object results are marshaled into response bodies.
//!
//! The binding mode is process-wide. Routes that declare a produced media
//! type bypass it; routes that return objects without one (`helloObject`)
//! are rendered through [`render`] using the format picked by
//! [`BindingMode::response_format`].

use std::fmt;
use std::str::FromStr;

use axum::{
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_XML: &str = "application/xml";
pub const TEXT_XML: &str = "text/xml";
pub const TEXT_PLAIN: &str = "text/plain";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Process-wide body binding policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BindingMode {
    /// No marshaling: objects are rendered as plain text.
    Off,
    /// JSON or XML, picked from the `Accept` header.
    Auto,
    /// Always JSON.
    #[default]
    Json,
    /// Always XML.
    Xml,
}

/// Concrete body format of a single response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Json,
    Xml,
    Text,
}

impl BindingMode {
    /// Picks the body format for a response to a request with `headers`.
    pub fn response_format(self, headers: &HeaderMap) -> BodyFormat {
        match self {
            BindingMode::Off => BodyFormat::Text,
            BindingMode::Json => BodyFormat::Json,
            BindingMode::Xml => BodyFormat::Xml,
            BindingMode::Auto => negotiate(headers),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BindingMode::Off => "off",
            BindingMode::Auto => "auto",
            BindingMode::Json => "json",
            BindingMode::Xml => "xml",
        }
    }
}

impl fmt::Display for BindingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BindingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(BindingMode::Off),
            "auto" => Ok(BindingMode::Auto),
            "json" => Ok(BindingMode::Json),
            "xml" => Ok(BindingMode::Xml),
            other => Err(format!(
                "unknown binding mode '{other}' (expected off, auto, json or xml)"
            )),
        }
    }
}

/// Returns the media type of a header value without parameters, lowercased.
pub fn essence(value: &str) -> String {
    value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Chooses between JSON and XML from the `Accept` header.
///
/// The highest-weighted media range naming either format wins; ties keep
/// header order. Anything else, including a missing header, yields JSON.
fn negotiate(headers: &HeaderMap) -> BodyFormat {
    let Some(accept) = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
    else {
        return BodyFormat::Json;
    };

    let mut best: Option<(f32, BodyFormat)> = None;

    for range in accept.split(',') {
        let format = match essence(range).as_str() {
            APPLICATION_JSON => BodyFormat::Json,
            APPLICATION_XML | TEXT_XML => BodyFormat::Xml,
            _ => continue,
        };

        let weight = range
            .split(';')
            .skip(1)
            .filter_map(|param| param.trim().strip_prefix("q="))
            .find_map(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);

        if weight > 0.0 && best.is_none_or(|(w, _)| weight > w) {
            best = Some((weight, format));
        }
    }

    best.map_or(BodyFormat::Json, |(_, format)| format)
}

/// Marshals `value` in `format` into a complete response.
///
/// # Errors
///
/// Returns [`AppError::Marshal`] if serialization fails.
pub fn render<T>(value: &T, format: BodyFormat) -> Result<Response, AppError>
where
    T: Serialize + fmt::Display,
{
    let response = match format {
        BodyFormat::Json => {
            let body = serde_json::to_string(value)?;
            ([(header::CONTENT_TYPE, APPLICATION_JSON)], body).into_response()
        }
        BodyFormat::Xml => {
            let body = quick_xml::se::to_string(value)
                .map_err(|e| AppError::marshal(format!("XML serialization failed: {e}")))?;
            ([(header::CONTENT_TYPE, APPLICATION_XML)], body).into_response()
        }
        BodyFormat::Text => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            value.to_string(),
        )
            .into_response(),
    };

    Ok(response)
}
