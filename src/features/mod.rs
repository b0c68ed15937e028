//! Optional transforms layered on top of the base64 core.

pub mod compression;
