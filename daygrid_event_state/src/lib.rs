// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Daygrid Event State: gesture state machines for day-grid selection.
//!
//! This crate converts low-level pointer lifecycle signals into selection
//! spans. It holds no range set and fires no callbacks: hosts feed resolved
//! days in, read the hover span out between events, and apply the committed
//! span to their range algebra when a gesture ends.
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
