//! Status classes (1xx, 2xx, ... 5xx).

/// Get the class of a status code: its leading decimal digit followed by `00`.
///
/// `404` is in class `400`, `503` in class `500`. Codes outside the usual
/// three-digit range still map to their leading digit (`1000` → `100`), so
/// callers that care should validate the code first.
pub fn class_of(status: u16) -> u16 {
    let mut lead = status;
    while lead >= 10 {
        lead /= 10;
    }
    lead * 100
}

/// Whether the status is a client error (400–499).
pub fn is_client_error(status: u16) -> bool {
    (400..500).contains(&status)
}

/// Whether the status is a server error (500–599).
pub fn is_server_error(status: u16) -> bool {
    (500..600).contains(&status)
}

/// Whether the status is an error status at all (400–599).
pub fn is_error(status: u16) -> bool {
    is_client_error(status) || is_server_error(status)
}
