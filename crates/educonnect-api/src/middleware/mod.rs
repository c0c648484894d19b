pub mod body_limit;

pub use body_limit::reject_oversized_body;
pub use educonnect_infra::{get_request_id, request_id_middleware};
