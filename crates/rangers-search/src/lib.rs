// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Rangers Search
//!
//! Breadth-first search for fair ranger rotas.
//!
//! Core flow
//! - Pick a `rangers_model::scenario::Scenario` (usually `Scenario::rangers()`).
//! - Configure a `bfs::BfsSolver` with a `config::BfsConfig` and an injected
//!   randomness source.
//! - Pass a monitor (or a `monitor::composite::CompositeSearchMonitor` of
//!   several) to observe the run and to stop it early.
//! - Read solutions, the termination reason and statistics off the
//!   `result::BfsOutcome`.
//!
//! Guarantees
//! - The randomness source only permutes the order siblings are generated
//!   in. An exhaustive run reports the same set of move histories for every
//!   seed.
//! - Identical seeds reproduce identical runs.
//!
//! Module map
//! - `bfs`: the solver and its per-run session.
//! - `config`: search mode and depth bound.
//! - `monitor`: search monitors (progress, composite, limits).
//! - `result`: outcomes with termination reasons.
//! - `solution`: numbered goal configurations.
//! - `stats`: lightweight counters and timing.

pub mod bfs;
pub mod config;
pub mod monitor;
pub mod result;
pub mod solution;
pub mod stats;
