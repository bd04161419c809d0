//! expense-domain
//!
//! Pure record models for the expense tracker (Expense, CategorySet, filter criteria, report rows).
//! No I/O, no CLI, no storage. Only data types and the coercion rules they carry.

pub mod category;
pub mod common;
pub mod criteria;
pub mod expense;
pub mod report;

pub use category::*;
pub use common::*;
pub use criteria::*;
pub use expense::*;
pub use report::*;
