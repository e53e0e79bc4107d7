//! Core business logic - framework-agnostic catalogue, order and seeding operations.

/// Categories, materials and products
pub mod catalog;
/// Orders, their line items and receipts
pub mod order;
/// Fixed demonstration data
pub mod seed;
