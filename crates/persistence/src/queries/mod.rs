// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `pilots`: Pilot records
//! - `requests`: Leave and flight requests, window and period listings
//! - `audit`: Audit events and per-request history
//! - `snapshot`: Consistent rank views handed to the eligibility engine

pub mod audit;
pub mod pilots;
pub mod requests;
pub mod snapshot;
