use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// Outcome of a catalog operation. Every outcome carries the HTTP status code the
/// boundary answers with and a fixed message.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaServiceResult {
    Ok,
    // reached with an absent entity, never part of a well-formed exchange
    ImATeapot,
    InvalidIsbn,
    MissingInfo,
    BarcodeNotFound,
    NotFound,
    IsbnNotEqual,
    BarcodeNotEqual,
    DuplicateIsbn,
    DuplicateBarcode,
    Unauthorized,
    AuthUnavailable,
}

impl MediaServiceResult {
    pub fn status_code(&self) -> u16 {
        match self {
            MediaServiceResult::Ok => 200,
            MediaServiceResult::ImATeapot => 418,
            MediaServiceResult::InvalidIsbn => 400,
            MediaServiceResult::MissingInfo => 400,
            MediaServiceResult::BarcodeNotFound => 400,
            MediaServiceResult::NotFound => 404,
            MediaServiceResult::IsbnNotEqual => 400,
            MediaServiceResult::BarcodeNotEqual => 400,
            MediaServiceResult::DuplicateIsbn => 409,
            MediaServiceResult::DuplicateBarcode => 409,
            MediaServiceResult::Unauthorized => 401,
            MediaServiceResult::AuthUnavailable => 503,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MediaServiceResult::Ok => "Ok",
            MediaServiceResult::ImATeapot => "I'm a teapot",
            MediaServiceResult::InvalidIsbn => "The ISBN is not a valid ISBN-13",
            MediaServiceResult::MissingInfo => "Required information is missing",
            MediaServiceResult::BarcodeNotFound => "The barcode is missing",
            MediaServiceResult::NotFound => "No medium found for the given key",
            MediaServiceResult::IsbnNotEqual => "ISBN of path and body do not match",
            MediaServiceResult::BarcodeNotEqual => "Barcode of path and body do not match",
            MediaServiceResult::DuplicateIsbn => "A book with this ISBN already exists",
            MediaServiceResult::DuplicateBarcode => "A disc with this barcode already exists",
            MediaServiceResult::Unauthorized => "Missing or invalid token",
            MediaServiceResult::AuthUnavailable => "Authentication service unavailable",
        }
    }

    pub fn is_ok(&self) -> bool {
        *self == MediaServiceResult::Ok
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            code: *self,
            detail: self.message().to_string(),
        }
    }
}

impl Display for MediaServiceResult {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::String(code)) => write!(f, "{}", code),
            _ => write!(f, "{:?}", self),
        }
    }
}

// ErrorBody is the JSON answered for every non-entity response
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: MediaServiceResult,
    pub detail: String,
}
