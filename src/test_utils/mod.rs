#![allow(missing_docs)]

pub(crate) mod http;
pub(crate) mod state;

pub(crate) use http::{get_header, parse_json_body};
pub(crate) use state::{FlakyCollection, count_documents, must_create_test_state};
