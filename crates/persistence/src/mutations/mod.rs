// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! ## Module Organization
//!
//! - `audit`: Audit event inserts
//! - `pilots`: Pilot registration and deactivation
//! - `requests`: Request inserts and status updates
//! - `workflow`: Orchestration writing a request change and its audit event together
//!
//! None of these open a transaction. Callers in `lib.rs` wrap them so a
//! status change is never stored without its audit event.

pub mod audit;
pub mod pilots;
pub mod requests;
pub mod workflow;
