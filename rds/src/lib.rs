/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! <fullname>Amazon Relational Database Service</fullname>
//!
//! Requests are sent with the `awsQuery` protocol as `application/x-www-form-urlencoded` bodies
//! carrying `Action` and `Version`. Responses are XML documents holding the result one level
//! below the root element.

#![allow(clippy::module_inception)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod client;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use client::{Rds, UnimplementedRds, OPERATIONS};
