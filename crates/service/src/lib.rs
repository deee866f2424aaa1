//! Service layer providing the acronym, user and category operations on top of models.
//! - Separates query logic from HTTP routing.
//! - Reuses entity definitions and relations from the `models` crate.
//! - Reports failures through a single `ServiceError` taxonomy.

pub mod errors;
pub mod acronym_service;
pub mod user_service;
pub mod category_service;
#[cfg(test)]
pub mod test_support;
