use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Simulate a loan from a wire-format JSON request and return the full
/// economics as wire-format JSON. A validation failure surfaces as an
/// error whose reason joins the field messages.
#[napi]
pub fn simular(input_json: String) -> NapiResult<String> {
    let request: prestamo_core::LoanRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let outcome = prestamo_core::simulate(&request).map_err(to_napi_error)?;
    serde_json::to_string(&outcome).map_err(to_napi_error)
}

/// Validate a wire-format JSON request without computing anything.
/// Returns the ordered list of violated-constraint messages; empty when
/// the request is valid.
#[napi]
pub fn validar(input_json: String) -> NapiResult<Vec<String>> {
    let request: prestamo_core::LoanRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    match prestamo_core::validate(&request) {
        Ok(()) => Ok(Vec::new()),
        Err(e) => Ok(e.messages().to_vec()),
    }
}
