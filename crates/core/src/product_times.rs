//! Processing time per product type, in minutes.
//!
//! Times reflect European production lines: 20 minutes to 2 hours.

/// Key used for product types missing from [`PRODUCT_TIMES`].
pub const DEFAULT_PRODUCT: &str = "Default";

/// Minutes used when neither the product type nor `Default` is listed.
pub const DEFAULT_PROCESS_MINUTES: u32 = 60;

/// Processing minutes per product type, in display order.
pub const PRODUCT_TIMES: &[(&str, u32)] = &[
    ("HydraulicPump", 105),
    ("EngineBlock", 120),
    ("TransmissionCase", 90),
    ("BrakeDisc", 25),
    ("CylinderHead", 110),
    ("FuelInjection", 45),
    ("Axle", 75),
    ("Clutch", 35),
    ("Turbocharger", 95),
    ("Radiator", 40),
    ("Exhaust", 20),
    ("SteeringGear", 80),
    ("Differential", 85),
    ("Suspension", 50),
    ("Electrical", 60),
    ("CoolingSystem", 55),
    ("OilPump", 70),
    ("ValveTrain", 100),
    ("IntakeManifold", 45),
    ("Carburetor", 65),
    (DEFAULT_PRODUCT, DEFAULT_PROCESS_MINUTES),
];

fn lookup(product_type: &str) -> Option<u32> {
    PRODUCT_TIMES
        .iter()
        .find(|(name, _)| *name == product_type)
        .map(|(_, minutes)| *minutes)
}

/// Processing minutes for a product type, falling back to `Default`.
pub fn process_minutes(product_type: &str) -> u32 {
    lookup(product_type)
        .or_else(|| lookup(DEFAULT_PRODUCT))
        .unwrap_or(DEFAULT_PROCESS_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_product_uses_table_value() {
        assert_eq!(process_minutes("EngineBlock"), 120);
        assert_eq!(process_minutes("Exhaust"), 20);
    }

    #[test]
    fn unknown_product_falls_back_to_default() {
        assert_eq!(process_minutes("Flux Capacitor"), DEFAULT_PROCESS_MINUTES);
    }

    #[test]
    fn times_stay_within_production_range() {
        for (name, minutes) in PRODUCT_TIMES {
            assert!(
                (20..=120).contains(minutes),
                "{name} has out-of-range time {minutes}"
            );
        }
    }

    #[test]
    fn product_names_are_unique() {
        let mut names: Vec<&str> = PRODUCT_TIMES.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PRODUCT_TIMES.len());
    }
}
