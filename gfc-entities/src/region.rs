use std::{borrow::Borrow, fmt, slice, str::FromStr};

use thiserror::Error;

use crate::geo::{Distance, MapPoint};

/// Human-readable identifier of a geofence region.
///
/// Doubles as the display name in user-facing alerts.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RegionId(String);

impl RegionId {
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for RegionId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for RegionId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for RegionId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<RegionId> for String {
    fn from(from: RegionId) -> Self {
        from.0
    }
}

impl FromStr for RegionId {
    type Err = ();
    fn from_str(s: &str) -> Result<RegionId, Self::Err> {
        Ok(s.into())
    }
}

impl Borrow<str> for RegionId {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}

/// A circular geofence on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceRegion {
    pub id: RegionId,
    pub center: MapPoint,
    pub radius: Distance,
    pub notify_on_enter: bool,
    pub notify_on_exit: bool,
}

impl GeofenceRegion {
    /// Closed-disk containment test: a point exactly at the
    /// boundary belongs to the region.
    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.center.is_valid());
        let Some(dist) = MapPoint::distance(self.center, pt) else {
            return false;
        };
        dist <= self.radius
    }
}

#[derive(Debug, Error)]
#[error("Duplicate geofence region identifier")]
pub struct DuplicateRegionId;

/// The ordered set of geofence regions monitored by the application.
///
/// Identifiers are unique within the registry and the original
/// ordering is preserved.
#[derive(Debug, Clone, Default)]
pub struct GeofenceRegistry(Vec<GeofenceRegion>);

impl GeofenceRegistry {
    pub fn try_new(regions: Vec<GeofenceRegion>) -> Result<Self, DuplicateRegionId> {
        for (i, region) in regions.iter().enumerate() {
            if regions[..i].iter().any(|r| r.id == region.id) {
                return Err(DuplicateRegionId);
            }
        }
        Ok(Self(regions))
    }

    pub fn find(&self, id: &str) -> Option<&GeofenceRegion> {
        self.0.iter().find(|r| r.id.as_str() == id)
    }

    pub fn iter(&self) -> slice::Iter<'_, GeofenceRegion> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a GeofenceRegistry {
    type Item = &'a GeofenceRegion;
    type IntoIter = slice::Iter<'a, GeofenceRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
