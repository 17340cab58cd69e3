/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! <fullname>Amazon Route 53</fullname>
//!
//! Requests are sent with the `restXml` protocol: members are bound to the URI path, the query
//! string and headers, and the payload is an XML document in the Route 53 namespace.

#![allow(clippy::module_inception)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod client;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use client::{Route53, UnimplementedRoute53, OPERATIONS};
