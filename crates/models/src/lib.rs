//! SeaORM entities for users, acronyms, categories and the acronym/category
//! pivot, plus connection helpers shared by the service and server crates.

pub mod errors;
pub mod db;
pub mod user;
pub mod acronym;
pub mod category;
pub mod acronym_category_pivot;

#[cfg(test)]
mod tests;
