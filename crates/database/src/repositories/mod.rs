pub mod customers;
pub mod products;
pub mod quotation_items;
pub mod quotations;
