//! Core library for the remsum command line application.
//!
//! remsum consolidates numeric values from several data workbooks into a
//! single output workbook shaped like a dedicated template. The modules are
//! structured to keep responsibilities narrow and composable: coordinate
//! helpers live in [`coord`], the accumulated totals in [`model`], workbook
//! sources and artifact serialization under [`io`], the two pipeline stages
//! in [`aggregate`] and [`reconstruct`], and the end-to-end orchestration in
//! [`consolidate`].

pub mod aggregate;
pub mod consolidate;
pub mod coord;
pub mod error;
pub mod io;
pub mod model;
pub mod reconstruct;
pub mod report;

pub use consolidate::{Consolidation, consolidate, consolidate_files};
pub use error::{ConsolidateError, Result};
pub use model::{CellScalar, SumTable};
pub use report::{CellWriteFailure, ConsolidationReport, NullReporter, Reporter};
