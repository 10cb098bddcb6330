pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{Database, DatabaseConfig};
pub use error::{DatabaseError, Result};
pub use repositories::{
    customers::CustomerRepository,
    products::ProductRepository,
    quotation_items::QuotationItemRepository,
    quotations::QuotationRepository,
};
