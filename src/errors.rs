// ABOUTME: Error handling for the mock server
// ABOUTME: Re-exports the shared error types and their HTTP response mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

//! Errors
//!
//! Handlers return [`AppResult`]; the `IntoResponse` implementation in
//! `proposal-core` turns every [`AppError`] into an `ErrorEnvelope`.

pub use proposal_core::errors::{AppError, AppResult, ContractError, ErrorCode};
pub use proposal_core::ErrorEnvelope;
