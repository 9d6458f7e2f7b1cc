//! Shared test utilities for hvac-db unit tests.

pub(crate) mod helpers {
    use crate::service::HvacService;

    /// Create an in-memory service with an empty catalog.
    pub async fn test_service() -> HvacService {
        HvacService::new_local(":memory:").await.unwrap()
    }

    /// Create an in-memory service seeded with [`seed_catalog`].
    pub async fn seeded_service() -> HvacService {
        let svc = test_service().await;
        seed_catalog(&svc).await;
        svc
    }

    pub struct SeedRow {
        pub id: &'static str,
        pub manufacturer_id: &'static str,
        pub model_number: &'static str,
        pub equipment_type: &'static str,
        pub tonnage: Option<f64>,
        pub retail_price: f64,
        pub features: Option<&'static str>,
        pub status: &'static str,
    }

    pub async fn insert_manufacturer(svc: &HvacService, id: &str, name: &str, code: &str) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO manufacturers (id, name, code) VALUES (?1, ?2, ?3)",
                libsql::params![id, name, code],
            )
            .await
            .unwrap();
    }

    pub async fn insert_equipment(svc: &HvacService, row: &SeedRow) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO equipment_models
                 (id, manufacturer_id, model_number, equipment_type, series_name, tonnage,
                  retail_price, features, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                libsql::params![
                    row.id,
                    row.manufacturer_id,
                    row.model_number,
                    row.equipment_type,
                    Option::<&str>::None,
                    row.tonnage,
                    row.retail_price,
                    row.features,
                    row.status,
                    "2025-01-15T12:00:00+00:00",
                    "2025-01-15 12:00:00"
                ],
            )
            .await
            .unwrap();
    }

    /// Three manufacturers and nine records (eight active).
    ///
    /// | id     | mfr   | type        | tons | price |
    /// |--------|-------|-------------|------|-------|
    /// | eqp-a1 | TRANE | air_handler | 2.5  | 2199  |
    /// | eqp-f1 | CARR  | furnace     | -    | 3899  |
    /// | eqp-f2 | TRANE | furnace     | -    | 3299  |
    /// | eqp-h1 | CARR  | heat_pump   | 3.0  | 6299  |
    /// | eqp-h2 | TRANE | heat_pump   | 2.0  | 4599  |
    /// | eqp-h3 | LENN  | heat_pump   | 4.0  | 8199  |
    /// | eqp-h4 | LENN  | heat_pump   | 5.0  | 5799  |
    /// | eqp-m1 | LENN  | mini_split  | 1.5  | 2899  |
    /// | eqp-d1 | CARR  | heat_pump   | 3.0  | 3999  | discontinued
    pub async fn seed_catalog(svc: &HvacService) {
        insert_manufacturer(svc, "mfr-carr", "Carrier", "CARR").await;
        insert_manufacturer(svc, "mfr-tran", "Trane", "TRANE").await;
        insert_manufacturer(svc, "mfr-lenn", "Lennox", "LENN").await;

        let rows = [
            SeedRow {
                id: "eqp-a1",
                manufacturer_id: "mfr-tran",
                model_number: "TEM6",
                equipment_type: "air_handler",
                tonnage: Some(2.5),
                retail_price: 2199.0,
                features: None,
                status: "active",
            },
            SeedRow {
                id: "eqp-f1",
                manufacturer_id: "mfr-carr",
                model_number: "59TN6A",
                equipment_type: "furnace",
                tonnage: None,
                retail_price: 3899.0,
                features: Some(r#"{"stages": 2}"#),
                status: "active",
            },
            SeedRow {
                id: "eqp-f2",
                manufacturer_id: "mfr-tran",
                model_number: "S9V2",
                equipment_type: "furnace",
                tonnage: None,
                retail_price: 3299.0,
                features: None,
                status: "active",
            },
            SeedRow {
                id: "eqp-h1",
                manufacturer_id: "mfr-carr",
                model_number: "25VNA4",
                equipment_type: "heat_pump",
                tonnage: Some(3.0),
                retail_price: 6299.0,
                features: Some(r#"{"stages": "variable", "wifi": true}"#),
                status: "active",
            },
            SeedRow {
                id: "eqp-h2",
                manufacturer_id: "mfr-tran",
                model_number: "XR17",
                equipment_type: "heat_pump",
                tonnage: Some(2.0),
                retail_price: 4599.0,
                features: None,
                status: "active",
            },
            SeedRow {
                id: "eqp-h3",
                manufacturer_id: "mfr-lenn",
                model_number: "XP25",
                equipment_type: "heat_pump",
                tonnage: Some(4.0),
                retail_price: 8199.0,
                features: None,
                status: "active",
            },
            SeedRow {
                id: "eqp-h4",
                manufacturer_id: "mfr-lenn",
                model_number: "ML18",
                equipment_type: "heat_pump",
                tonnage: Some(5.0),
                retail_price: 5799.0,
                features: None,
                status: "active",
            },
            SeedRow {
                id: "eqp-m1",
                manufacturer_id: "mfr-lenn",
                model_number: "MLA",
                equipment_type: "mini_split",
                tonnage: Some(1.5),
                retail_price: 2899.0,
                features: None,
                status: "active",
            },
            SeedRow {
                id: "eqp-d1",
                manufacturer_id: "mfr-carr",
                model_number: "25HCB6",
                equipment_type: "heat_pump",
                tonnage: Some(3.0),
                retail_price: 3999.0,
                features: None,
                status: "discontinued",
            },
        ];
        for row in &rows {
            insert_equipment(svc, row).await;
        }
    }

    pub fn ids(equipment: &[hvac_core::entities::Equipment]) -> Vec<&str> {
        equipment.iter().map(|e| e.id.as_str()).collect()
    }
}
