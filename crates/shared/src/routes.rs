//! Route paths of the request store.

use approvals_domain::RequestId;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that cannot appear verbatim inside one path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `GET` - list every request
pub const VIEW_REQUESTS: &str = "/view_requests";

/// `POST` with a URL-encoded `id` field
pub const DELETE_REQUEST: &str = "/delete_request";

/// `POST` with a JSON [`crate::CreateRequestBody`]
pub const SUBMIT_REQUEST: &str = "/submit_request";

pub const HEALTH: &str = "/api/health";

/// Router pattern for status updates
pub const UPDATE_REQUEST_PATTERN: &str = "/update_request/{id}";

/// `POST` with a JSON [`crate::UpdateStatusBody`]. The id is percent-encoded
/// so it always stays a single path segment.
pub fn update_request(id: &RequestId) -> String {
    format!(
        "/update_request/{}",
        utf8_percent_encode(id.as_str(), PATH_SEGMENT)
    )
}
