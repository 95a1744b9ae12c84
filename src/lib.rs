//! # Reframe
//!
//! On-the-fly raster image transformations driven by request parameters.
//! A delivery system hands this crate a decoded bitmap, a requested output
//! size, and a flat string-keyed option map carried on the request URL; the
//! pipeline applies the requested transforms in a fixed order and re-encodes
//! the result in the requested container format (JPEG, PNG, or GIF, with
//! JPEG as the universal fallback).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`options`] | Option codec — typed bundle ↔ query fragment ↔ ordered option map |
//! | [`transform`] | Geometry & color engine — grayscale, crop, center-crop, rotate/flip, EXIF orientation |
//! | [`pipeline`] | Orchestrator — reads the option map and sequences engine calls |
//! | [`encoder`] | Container serialization with JPEG fallback |
//!
//! # Pipeline Order
//!
//! Transforms compose in a fixed order: orientation correction → pixel-exact
//! crop → center crop → grayscale → explicit rotate/flip → encode. Later
//! geometric operations must act on the already-corrected buffer, so the
//! order is part of the contract, not an implementation detail.
//!
//! # Design Decisions
//!
//! ## Fail-Soft Everywhere
//!
//! The pipeline sits in front of media delivery: a broken transform must
//! never take down the response. Malformed option values read as "feature
//! not requested", out-of-range crop rectangles return the buffer unchanged,
//! unknown rotate/flip names map to the identity, and any genuine error is
//! logged and answered with [`None`] so the caller serves the original
//! bytes. There is no fatal path inside the core.
//!
//! ## Move Semantics Over Manual Disposal
//!
//! Every transform consumes its input [`image::DynamicImage`] and returns
//! the successor buffer. Superseded intermediates drop as soon as their
//! replacement exists, bounding peak memory to roughly two buffers
//! regardless of how many transforms are chained, with no disposal
//! bookkeeping.
//!
//! ## Opt-In Per Request
//!
//! Nothing happens unless the request carries `useCustomFunctions=1`. The
//! option map is consumed key by key as the pipeline runs, so processing
//! parameters never leak into downstream attribute rendering (see
//! [`options::OptionMap::strip`] for the rendering-side half of that
//! contract).

pub mod encoder;
pub mod options;
pub mod pipeline;
pub mod transform;

pub use encoder::{EncodedImage, OutputFormat};
pub use options::{CropOrigin, OptionMap, TransformOptions};
pub use pipeline::{ProcessRequest, process};
pub use transform::{Flip, RotateFlip, Rotation};
