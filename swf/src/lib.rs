/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! <fullname>Amazon Simple Workflow Service</fullname>
//!
//! Requests are sent with the `awsJson1_0` protocol: `POST /` with an
//! `X-Amz-Target: SimpleWorkflowService.<Operation>` header and a JSON object body.

#![allow(clippy::module_inception)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod client;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use client::{SimpleWorkflow, UnimplementedSimpleWorkflow, OPERATIONS};
