//! Registration form state machine.
//!
//! The controller owns the field values and is driven by discrete events
//! (change, blur, submit, result); it knows nothing about how it is rendered.

mod controller;

pub use controller::{FormController, Phase, SubmitAttempt};
