/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! <fullname>AWS IoT</fullname>
//!
//! Requests are sent with the `restJson1` protocol: members are bound to the URI path, the query
//! string and headers, and whatever is left goes into a JSON object body.

#![allow(clippy::module_inception)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod client;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use client::{Iot, UnimplementedIot, OPERATIONS};
