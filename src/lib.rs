//! pagesim - trace-driven page replacement simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Batch Driver (sim::batch)                       │   │
//! │  │     many traces, worker threads, per-trace Result        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Simulation (sim/)                               │   │
//! │  │     one trace → FaultCounts { Optimal, NRU, Clock, WS }  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Replacement Policies (policy/)                  │   │
//! │  │     Optimal | NRU | Clock | WSClock                      │   │
//! │  │     each owns its frames, no shared state                │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↑                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Traces (trace/)                                 │   │
//! │  │     header (p, m, c) + AccessRecord list                 │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`trace`] - Access records and the trace text format
//! - [`policy`] - The four replacement policies
//! - [`sim`] - Running policies and collecting fault counts
//!
//! # Quick Start
//! ```
//! use pagesim::{run_trace, Trace};
//!
//! let trace = Trace::parse("4\n1\n0\n1 1 R\n2 2 R\n1 3 R\n2 4 R\n").unwrap();
//! let counts = run_trace(&trace, 0).unwrap();
//! assert_eq!(counts.clock, 4);
//! println!("{}", counts); // Optimal, NRU, Clock, WSClock - one per line
//! ```

pub mod common;
pub mod policy;
pub mod sim;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result, SimConfig};

pub use policy::{AccessOutcome, PolicyKind, ReplacementPolicy};
pub use sim::batch::{run_batch, run_files, BatchOptions};
pub use sim::{run_trace, simulate, FaultCounts, PolicyStats, Simulation};
pub use trace::{AccessRecord, Trace, TraceHeader};
