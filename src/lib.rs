#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Code-a-Pookalam registration: a validated sign-up form that posts to the
//! competition backend, plus spreadsheet import and export of a records list.

pub mod config;
pub mod form;
pub mod model;
pub mod sheet;
pub mod submit;
pub mod tui;
