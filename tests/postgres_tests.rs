//! Pruebas contra PostgreSQL real.
//!
//! Requieren `DATABASE_URL`; ejecutar con `cargo test -- --ignored`.

use junkyard_inventory::config::DatabaseConfig;
use junkyard_inventory::database::DatabaseConnection;
use junkyard_inventory::models::added_vehicle::PartAvailability;
use junkyard_inventory::models::catalog::VehicleSpec;
use junkyard_inventory::repositories::{
    CatalogRepository, InventoryRepository, PgStore, VehicleRepository,
};
use junkyard_inventory::utils::errors::AppError;

struct Fixture {
    store: PgStore,
    spec: VehicleSpec,
    parts: Vec<i32>,
}

async fn fixture() -> Fixture {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let connection = DatabaseConnection::connect(&DatabaseConfig::new(url)).await.unwrap();
    connection.ensure_schema().await.unwrap();
    let pool = connection.pool().clone();

    // Marca única por ejecución para no chocar con otros datos
    let make = format!("Test-{}", chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default());
    let spec = VehicleSpec {
        year: 1901,
        make,
        model: "Model T".into(),
        trim: "N/A".into(),
    };
    sqlx::query(r#"INSERT INTO vehicles (year, make, model, "trim") VALUES ($1, $2, $3, $4)"#)
        .bind(spec.year)
        .bind(&spec.make)
        .bind(&spec.model)
        .bind(&spec.trim)
        .execute(&pool)
        .await
        .unwrap();

    let category: i32 = sqlx::query_scalar("INSERT INTO parts_category (name) VALUES ($1) RETURNING id")
        .bind(format!("{} parts", spec.make))
        .fetch_one(&pool)
        .await
        .unwrap();
    let parts: Vec<i32> = sqlx::query_scalar(
        r#"
        INSERT INTO parts (name, category_id)
        SELECT name, $1 FROM UNNEST($2::varchar[]) AS t(name)
        RETURNING id
        "#,
    )
    .bind(category)
    .bind(vec!["Crank".to_string(), "Running Board".to_string()])
    .fetch_all(&pool)
    .await
    .unwrap();

    Fixture {
        store: PgStore::new(pool),
        spec,
        parts,
    }
}

fn all_available(parts: &[i32]) -> Vec<PartAvailability> {
    parts
        .iter()
        .map(|&part_id| PartAvailability { part_id, available: true })
        .collect()
}

#[tokio::test]
#[ignore]
async fn test_lifecycle_on_postgres() {
    let Fixture { store, spec, parts } = fixture().await;

    let makes = store.list_makes(spec.year).await.unwrap();
    assert!(makes.contains(&spec.make));

    let before = store.count_vehicles().await.unwrap();
    let id = store.create_with_parts(&spec, &all_available(&parts)).await.unwrap();
    assert_eq!(store.find_parts(id).await.unwrap().len(), 2);

    let change = [PartAvailability { part_id: parts[0], available: false }];
    assert_eq!(store.set_parts_availability(id, &change).await.unwrap(), 1);
    let recorded = store.find_parts(id).await.unwrap();
    assert!(!recorded.iter().find(|p| p.id == parts[0]).unwrap().available);
    assert!(recorded.iter().find(|p| p.id == parts[1]).unwrap().available);

    let (vehicle, detail_parts) = store.find_with_parts(id).await.unwrap().unwrap();
    assert_eq!(vehicle.trim, spec.trim);
    assert_eq!(detail_parts, recorded);

    assert_eq!(store.delete_with_parts(id).await.unwrap(), 2);
    assert!(store.find_with_parts(id).await.unwrap().is_none());
    assert_eq!(store.count_vehicles().await.unwrap(), before);
}

#[tokio::test]
#[ignore]
async fn test_failed_create_rolls_back() {
    let Fixture { store, spec, parts } = fixture().await;
    let before = store.count_vehicles().await.unwrap();

    let mut bad = all_available(&parts);
    bad.push(PartAvailability { part_id: i32::MAX, available: true });
    assert!(matches!(
        store.create_with_parts(&spec, &bad).await,
        Err(AppError::BadRequest(_))
    ));

    let mut unknown = spec.clone();
    unknown.trim = "Deluxe".into();
    assert!(matches!(
        store.create_with_parts(&unknown, &all_available(&parts)).await,
        Err(AppError::NotFound(_))
    ));

    assert_eq!(store.count_vehicles().await.unwrap(), before);
}

#[tokio::test]
#[ignore]
async fn test_update_with_unrecorded_part_is_rejected() {
    let Fixture { store, spec, parts } = fixture().await;
    let id = store.create_with_parts(&spec, &all_available(&parts[..1])).await.unwrap();

    let changes = [
        PartAvailability { part_id: parts[0], available: false },
        PartAvailability { part_id: parts[1], available: false },
    ];
    assert!(matches!(
        store.set_parts_availability(id, &changes).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(store.find_parts(id).await.unwrap()[0].available);

    store.delete_with_parts(id).await.unwrap();
}
