//! Tripwire — content hashing and drift detection for rendered manifests.

pub mod drift;
pub mod hasher;
