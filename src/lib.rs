//! Typed request and response models for an EC2-style auto-scaling
//! management API. This crate is the payload layer only: it defines the
//! parameter bags sent to the service and the resource snapshots returned
//! by it, together with their wire-name mapping and a debug rendering.
//! Transport, signing, retries and pagination belong to the calling client,
//! not to these types.
//!
//! Every model follows the same contract: all fields are optional, values
//! are assembled through an infallible builder, equality is structural and
//! `Display` lists only the fields that are present.

pub mod error;
pub mod operations;
pub mod types;

pub(crate) mod render;

pub use error::InvalidValueError;
