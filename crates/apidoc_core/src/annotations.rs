//! Human-oriented extras attached to render contexts: status reason phrases,
//! license links and example curl invocations.

use apidoc_spec::{Operation, Resource};

/// Reason phrase for the status codes documentation commonly shows.
pub fn status_text(status: u16) -> Option<&'static str> {
    let text = match status {
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        204 => "No Content",
        301 => "Moved Permanently",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        409 => "Conflict",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => return None,
    };
    Some(text)
}

/// Status code followed by its reason phrase when known, e.g. `201 Created`.
pub fn status_label(status: u16) -> String {
    match status_text(status) {
        Some(text) => format!("{} {}", status, text),
        None => status.to_string(),
    }
}

/// Link to the full text of a well-known license identifier.
pub fn license_url(license: &str) -> Option<&'static str> {
    match license {
        "apache2" => Some("http://www.apache.org/licenses/LICENSE-2.0.html"),
        "gpl" => Some("http://www.gnu.org/licenses/gpl.html"),
        _ => None,
    }
}

/// Example curl command invoking an operation against a base URL.
///
/// Entity-enclosing requests read their body from `input.txt`. Form posts
/// rely on curl's default content type; other bodies get an explicit
/// `Content-type` header when the input declares one.
pub fn curl_command(operation: &Operation, resource: &Resource, base_url: &str) -> String {
    let mut cmd = String::from("curl -v ");
    if base_url.starts_with("https://") {
        cmd.push_str("-k ");
    }

    let method = operation.method.to_uppercase();
    let content_type = operation
        .input
        .as_ref()
        .and_then(|input| input.content_type.as_ref())
        .and_then(|types| types.first());

    match (method.as_str(), content_type) {
        ("GET", _) => {}
        ("POST", Some(ct)) if ct == "application/x-www-form-urlencoded" => {
            cmd.push_str("-d @input.txt ");
        }
        ("POST", ct) | ("PUT", ct) => {
            cmd.push_str(&format!("-X {} -d @input.txt ", method));
            if let Some(ct) = ct {
                cmd.push_str(&format!("-H \"Content-type: {}\" ", ct));
            }
        }
        (other, _) => cmd.push_str(&format!("-X {} ", other)),
    }

    cmd.push_str(base_url);
    if resource.path != "/" {
        cmd.push_str(&resource.path);
    }
    cmd
}
