// Core modules
pub mod customer;
pub mod pagination;
pub mod product;
pub mod quotation;
pub mod quotation_item;

// Re-export commonly used types
pub use customer::{Customer, NewCustomer, UpdateCustomer};
pub use pagination::{Page, PageParams, PAGE_SIZE};
pub use product::{NewProduct, Product, UpdateProduct};
pub use quotation::{
    NewQuotation, Quotation, QuotationDetail, QuotationSummary, UpdateQuotation,
};
pub use quotation_item::{
    NewQuotationItem, QuotationItem, QuotationItemLine, UpdateQuotationItem,
};
