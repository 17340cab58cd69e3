/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shape driven transcoding between typed request/response structures and the AWS wire
//! protocols (`awsJson1_0`, `awsJson1_1`, `restJson1`, `restXml` and `awsQuery`).
//!
//! Each operation is described by static shape tables ([`shape`]). A request type implements
//! [`marshall::Marshall`] by handing out its members as [`value::FieldValue`]s; the engine walks
//! the table and produces a [`frame::WireFrame`]. A response type implements
//! [`unmarshall::Unmarshall`] by accepting [`value::WireValue`]s; the engine walks the response
//! body with a depth tracking [`cursor::TokenCursor`] and assigns the members it recognizes.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

pub mod config;
pub mod cursor;
pub mod enums;
pub mod error;
pub mod event;
pub mod frame;
pub mod header;
pub mod label;
pub mod marshall;
pub mod query;
pub mod response;
pub mod service;
pub mod shape;
pub mod unmarshall;
pub mod value;

pub use wire_types::{Blob, Instant};
