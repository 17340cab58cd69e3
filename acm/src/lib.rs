/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! <fullname>AWS Certificate Manager</fullname>
//!
//! Requests are sent with the `awsJson1_1` protocol: every operation is a `POST /` whose
//! `X-Amz-Target` header names the operation, with a JSON object body.

#![allow(clippy::module_inception)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod client;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use client::{CertificateManager, UnimplementedCertificateManager, OPERATIONS};
