//! Sample work orders inserted into an empty database.

use prodqueue_core::types::Position;
use sqlx::SqlitePool;

use crate::repositories::WorkOrderRepo;

/// `(id, name, priority, product_type, position)` for each sample order,
/// already in priority order.
pub const SAMPLE_WORK_ORDERS: &[(&str, &str, &str, &str, Position)] = &[
    ("WO-2024-001", "Hydraulic Pump Assembly", "High", "HydraulicPump", 1),
    ("WO-2024-003", "Transmission Case", "High", "TransmissionCase", 2),
    ("WO-2024-005", "Cylinder Head Repair", "High", "CylinderHead", 3),
    ("WO-2024-007", "Axle Assembly", "High", "Axle", 4),
    ("WO-2024-009", "Turbocharger Rebuild", "High", "Turbocharger", 5),
    ("WO-2024-012", "Steering Gear Box", "High", "SteeringGear", 6),
    ("WO-2024-015", "Electrical Harness", "High", "Electrical", 7),
    ("WO-2024-017", "Oil Pump Assembly", "High", "OilPump", 8),
    ("WO-2024-020", "Carburetor Rebuild", "High", "Carburetor", 9),
    ("WO-2024-002", "Engine Block Machining", "Medium", "EngineBlock", 10),
    ("WO-2024-006", "Fuel Injection System", "Medium", "FuelInjection", 11),
    ("WO-2024-010", "Radiator Repair", "Medium", "Radiator", 12),
    ("WO-2024-013", "Differential Assembly", "Medium", "Differential", 13),
    ("WO-2024-016", "Cooling System", "Medium", "CoolingSystem", 14),
    ("WO-2024-019", "Intake Manifold", "Medium", "IntakeManifold", 15),
    ("WO-2024-004", "Brake Disc Turning", "Low", "BrakeDisc", 16),
    ("WO-2024-008", "Clutch Replacement", "Low", "Clutch", 17),
    ("WO-2024-011", "Exhaust System", "Low", "Exhaust", 18),
    ("WO-2024-014", "Suspension Component", "Low", "Suspension", 19),
    ("WO-2024-018", "Valve Train Repair", "Low", "ValveTrain", 20),
];

/// Insert the sample work orders if the table is empty.
///
/// Returns the number of rows inserted (0 when data already exists).
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let count = WorkOrderRepo::count(&mut *tx).await?;
    if count > 0 {
        tracing::debug!(count, "Work orders present, skipping seed");
        return Ok(0);
    }

    for &(id, name, priority, product_type, position) in SAMPLE_WORK_ORDERS {
        sqlx::query(
            "INSERT INTO work_orders (id, name, priority, product_type, position) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(id)
        .bind(name)
        .bind(priority)
        .bind(product_type)
        .bind(position)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let inserted = SAMPLE_WORK_ORDERS.len() as u64;
    tracing::info!(inserted, "Seeded sample work orders in priority order");
    Ok(inserted)
}
