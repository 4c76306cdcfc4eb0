//! Custom request extractors.

mod payload_json;

pub use payload_json::PayloadJson;
