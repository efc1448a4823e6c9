#![deny(unsafe_code)]

//! XSLT template generation.
//!
//! One strategy per supported (source, target) pair, selected through a
//! single table so the shared structural rules (composite recursion,
//! sibling-run arrays, leaf scalar inference, attribute promotion) cannot
//! drift apart between strategies.

pub mod common;
pub mod strategy;

mod json_to_jsonx;
mod json_to_xml;
mod xml_to_json;
mod xml_to_jsonx;

pub use strategy::{Strategy, TemplateContext, fallback_template, generate, strategy_for};
