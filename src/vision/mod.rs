// Copyright (c) 2025 Sitewatch
// SPDX-License-Identifier: BUSL-1.1
//! Image decoding for uploaded site photos

pub mod image_utils;

pub use image_utils::{decode_image_bytes, detect_format, ImageError, ImageInfo};
