use gfc_core::usecases::{self, NewRegion};
use gfc_entities::region::GeofenceRegistry;

/// The geofence locations monitored by the application.
///
/// An ordered list baked into the binary; there is no external file
/// format for regions.
pub fn geofence_regions() -> Vec<NewRegion> {
    vec![
        // Manila
        NewRegion {
            id: "Location 1".into(),
            lat: 14.5995,
            lng: 120.9842,
            radius_meters: 200.0,
            notify_on_enter: true,
            notify_on_exit: true,
        },
        // Quezon City
        NewRegion {
            id: "Location 2".into(),
            lat: 14.681_626_270_672_984,
            lng: 121.063_214_553_254_24,
            radius_meters: 50.0,
            notify_on_enter: true,
            notify_on_exit: true,
        },
    ]
}

pub fn create() -> Result<GeofenceRegistry, usecases::Error> {
    usecases::create_registry(geofence_regions())
}
