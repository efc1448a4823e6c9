#![deny(unsafe_code)]

pub mod detect;
pub mod validator;

pub use detect::{detect_format, detect_from_path};
pub use validator::{contains_attribute_key, validate};
