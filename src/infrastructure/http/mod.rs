mod remote_call;

pub use remote_call::{classify_send_error, ensure_success, read_json};
