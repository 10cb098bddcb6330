// Repository tests against a live Postgres instance. Run with a database
// available:
//
//   DATABASE_URL=postgresql://... cargo test -p qms-database -- --ignored

use qms_database::{
    CustomerRepository, Database, DatabaseConfig, DatabaseError, ProductRepository,
    QuotationItemRepository, QuotationRepository,
};
use qms_models::{
    NewCustomer, NewProduct, NewQuotation, NewQuotationItem, UpdateCustomer,
};

async fn setup() -> Database {
    let db = Database::new(DatabaseConfig::from_env())
        .await
        .expect("Failed to connect to database");
    db.migrate().await.expect("Migration failed");
    db
}

// Company ids unique per test run so runs don't interfere.
fn fresh_company_id() -> i32 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    (nanos % 1_000_000) as i32 + 1_000
}

fn new_customer(name: &str, company_id: i32) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        email: None,
        phone: None,
        address: None,
        company_id,
    }
}

#[tokio::test]
#[ignore]
async fn customer_crud_round_trip() {
    let db = setup().await;
    let repo = CustomerRepository::new(db.pool().clone());
    let company_id = fresh_company_id();

    let created = repo.create(&new_customer("A", company_id)).await.unwrap();
    assert_eq!(created.name, "A");
    assert_eq!(created.company_id, company_id);

    let found = repo.find(created.id, company_id).await.unwrap();
    assert_eq!(found.id, created.id);

    let updated = repo
        .update(
            created.id,
            &UpdateCustomer {
                name: "B".to_string(),
                email: Some("b@example.com".to_string()),
                phone: None,
                address: None,
                company_id,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "B");

    let deleted = repo.delete(created.id, company_id).await.unwrap();
    assert_eq!(deleted.id, created.id);

    // Second delete of the same id: nothing matches.
    let err = repo.delete(created.id, company_id).await.unwrap_err();
    assert!(matches!(err, DatabaseError::NotFound(_)));

    let err = repo.find(created.id, company_id).await.unwrap_err();
    assert!(matches!(err, DatabaseError::NotFound(_)));
}

#[tokio::test]
#[ignore]
async fn mismatched_company_never_exposes_another_tenants_row() {
    let db = setup().await;
    let repo = CustomerRepository::new(db.pool().clone());
    let owner = fresh_company_id();
    let other = owner + 1;

    let created = repo.create(&new_customer("Tenant A", owner)).await.unwrap();

    assert!(matches!(
        repo.find(created.id, other).await.unwrap_err(),
        DatabaseError::NotFound(_)
    ));
    assert!(matches!(
        repo.update(
            created.id,
            &UpdateCustomer {
                name: "X".to_string(),
                email: None,
                phone: None,
                address: None,
                company_id: other,
            },
        )
        .await
        .unwrap_err(),
        DatabaseError::NotFound(_)
    ));
    assert!(matches!(
        repo.delete(created.id, other).await.unwrap_err(),
        DatabaseError::NotFound(_)
    ));

    // The row itself is untouched.
    let found = repo.find(created.id, owner).await.unwrap();
    assert_eq!(found.name, "Tenant A");

    repo.delete(created.id, owner).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn customer_pagination_counts_and_slices() {
    let db = setup().await;
    let repo = CustomerRepository::new(db.pool().clone());
    let company_id = fresh_company_id();

    for i in 0..25 {
        repo.create(&new_customer(&format!("Customer {}", i), company_id))
            .await
            .unwrap();
    }

    assert_eq!(repo.count(company_id).await.unwrap(), 25);

    // Page 3 of 10-per-page holds the final 5 rows.
    let page3 = repo.list(company_id, 10, 20).await.unwrap();
    assert_eq!(page3.len(), 5);

    // Descending by id: page 1 starts at the newest row.
    let page1 = repo.list(company_id, 10, 0).await.unwrap();
    assert_eq!(page1.len(), 10);
    assert!(page1[0].id > page1[9].id);

    for customer in repo.list(company_id, 25, 0).await.unwrap() {
        repo.delete(customer.id, company_id).await.unwrap();
    }
}

#[tokio::test]
#[ignore]
async fn product_crud_round_trip() {
    let db = setup().await;
    let repo = ProductRepository::new(db.pool().clone());
    let company_id = fresh_company_id();

    let created = repo
        .create(&NewProduct {
            name: "Widget".to_string(),
            description: Some("A widget".to_string()),
            unit_price: 9.99,
            company_id,
        })
        .await
        .unwrap();
    assert_eq!(created.unit_price, 9.99);

    let found = repo.find(created.id, company_id).await.unwrap();
    assert_eq!(found.name, "Widget");

    repo.delete(created.id, company_id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn quotation_generates_quote_number_and_joins_customer() {
    let db = setup().await;
    let customers = CustomerRepository::new(db.pool().clone());
    let quotations = QuotationRepository::new(db.pool().clone());
    let items = QuotationItemRepository::new(db.pool().clone());
    let company_id = fresh_company_id();

    let customer = customers
        .create(&NewCustomer {
            name: "Acme".to_string(),
            email: Some("acme@example.com".to_string()),
            phone: Some("123".to_string()),
            address: Some("1 Road".to_string()),
            company_id,
        })
        .await
        .unwrap();

    let quotation = quotations
        .create(&NewQuotation {
            customer_id: customer.id,
            quote_date: chrono::NaiveDate::from_ymd_opt(2024, 11, 25).unwrap(),
            status: "pending".to_string(),
            company_id,
        })
        .await
        .unwrap();
    assert!(quotation.quote_number.starts_with("QTN-"));

    let detail = quotations.find(quotation.id, company_id).await.unwrap();
    assert_eq!(detail.customer_name, "Acme");
    assert_eq!(detail.email.as_deref(), Some("acme@example.com"));

    let summaries = quotations.list(company_id, 10, 0).await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].customer_name, "Acme");

    // Line total is computed at read time.
    items
        .create(&NewQuotationItem {
            quotation_id: quotation.id,
            name: "Product A".to_string(),
            description: None,
            quantity: 5,
            unit_price: 100.0,
            company_id,
        })
        .await
        .unwrap();

    let lines = items
        .list_for_quotation(quotation.id, company_id)
        .await
        .unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].product_name, "Product A");
    assert_eq!(lines[0].total_price, 500.0);

    quotations.delete(quotation.id, company_id).await.unwrap();
    customers.delete(customer.id, company_id).await.unwrap();
}
