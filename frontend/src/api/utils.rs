use crate::config::Config;
use gloo_net::http::{Request, RequestBuilder, Response};
use shared::SharedError;

/// Creates a request carrying the programmatic-request marker header.
///
/// The session cookie travels with same-origin requests on its own.
pub fn programmatic_request(method: &str, url: &str) -> RequestBuilder {
    let req = match method.to_uppercase().as_str() {
        "POST" => Request::post(url),
        _ => Request::get(url),
    };
    let (name, value) = Config::REQUESTED_WITH;
    req.header(name, value)
}

pub fn programmatic_get(url: &str) -> RequestBuilder {
    programmatic_request("GET", url)
}

pub fn programmatic_post(url: &str) -> RequestBuilder {
    programmatic_request("POST", url)
}

/// Turns a non-2xx response into [`SharedError::Network`].
pub fn ensure_ok(response: Response) -> Result<Response, SharedError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(SharedError::network(response.status(), &response.status_text()))
    }
}

pub fn network_error(context: &str, err: gloo_net::Error) -> SharedError {
    SharedError::Network(format!("{}: {}", context, err))
}

pub fn malformed(context: &str, err: gloo_net::Error) -> SharedError {
    SharedError::MalformedResponse(format!("{}: {}", context, err))
}
