//! Cross-module tests: registry, binder and render loop working together

mod rig_integration;
mod lab_integration;
