//! Benchmark Harness Module
//!
//! Memory-access timing over a generated two-sequence workload.
//!
//! # Components
//!
//! - [`glibc_random`] - glibc-compatible `rand()` generator
//! - [`workload`] - Workload generation
//! - [`strategy`] - Access strategies and result record
//! - [`access`] - Timed forward / reverse / random loops
//! - [`runner`] - Phase driver
//! - [`report`] - Console result lines

pub mod access;
pub mod glibc_random;
pub mod report;
pub mod runner;
pub mod strategy;
pub mod workload;
