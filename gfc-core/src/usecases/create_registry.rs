use super::prelude::*;
use crate::util::validate::Validate;

/// Startup description of a geofence region, in plain degrees.
#[derive(Debug, Clone)]
pub struct NewRegion {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub radius_meters: f64,
    pub notify_on_enter: bool,
    pub notify_on_exit: bool,
}

/// Build the validated registry from the startup configuration.
///
/// All invariants (valid coordinates, strictly positive radius,
/// unique identifiers) are enforced here, never during evaluation.
pub fn create_registry(new_regions: Vec<NewRegion>) -> Result<GeofenceRegistry> {
    let mut regions = Vec::with_capacity(new_regions.len());
    for new_region in new_regions {
        let NewRegion {
            id,
            lat,
            lng,
            radius_meters,
            notify_on_enter,
            notify_on_exit,
        } = new_region;
        let center = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
        let region = GeofenceRegion {
            id: id.into(),
            center,
            radius: Distance::from_meters(radius_meters),
            notify_on_enter,
            notify_on_exit,
        };
        region.validate()?;
        regions.push(region);
    }
    Ok(GeofenceRegistry::try_new(regions)?)
}
