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

//! # Rangers Model
//!
//! Domain model of the ranger rota puzzle. Four rangers are posted to two
//! stations, North and South. A move swaps one North ranger with one South
//! ranger. A rota is fair when every ranger spent as many turns at North as
//! at South, shared a station equally often with every other ranger, and
//! moved as often as everybody else.
//!
//! ## Modules
//!
//! * **`index`**: `EntityIndex`, the typed index into a configuration's arena of records.
//! * **`station`**: the two stations.
//! * **`entity`**: `EntityId` and `EntityRecord` with its fairness counters.
//! * **`roster`**: the id→index table built once per run.
//! * **`catalog`**: `Move` and the `MoveCatalog` of all unordered pairs.
//! * **`configuration`**: `Configuration`, the cloneable unit of search state with the
//!   transition rule (`attempt_swap`) and the goal predicate (`is_goal_state`).
//! * **`scenario`**: the fixed puzzle constants and a validating builder.
//!
//! Expected rejections (an illegal swap) are plain `false` results. Broken
//! invariants, such as touching an unregistered peer or an unknown id, panic.

pub mod catalog;
pub mod configuration;
pub mod entity;
pub mod index;
pub mod roster;
pub mod scenario;
pub mod station;
