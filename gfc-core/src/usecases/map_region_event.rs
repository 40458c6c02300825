use super::prelude::*;

/// Raw region-monitoring payload as delivered on the platform
/// callback channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRegionEvent {
    pub identifier: String,
    /// Platform transition code, see `RAW_EVENT_KIND_*`.
    pub kind: u8,
    pub observed_at_ms: i64,
}

pub const RAW_EVENT_KIND_ENTER: u8 = 1;
pub const RAW_EVENT_KIND_EXIT: u8 = 2;

/// Map a raw payload to a domain transition event.
///
/// Returns `Ok(None)` when the addressed region suppresses
/// notifications for the observed transition kind.
pub fn map_region_event(
    registry: &GeofenceRegistry,
    raw: RawRegionEvent,
) -> Result<Option<TransitionEvent>> {
    let RawRegionEvent {
        identifier,
        kind,
        observed_at_ms,
    } = raw;
    let region = registry.find(&identifier).ok_or(Error::UnknownRegion)?;
    let kind = match kind {
        RAW_EVENT_KIND_ENTER => TransitionKind::Enter,
        RAW_EVENT_KIND_EXIT => TransitionKind::Exit,
        _ => return Err(Error::InvalidTransition),
    };
    let notify = match kind {
        TransitionKind::Enter => region.notify_on_enter,
        TransitionKind::Exit => region.notify_on_exit,
    };
    if !notify {
        return Ok(None);
    }
    Ok(Some(TransitionEvent {
        region: region.id.clone(),
        kind,
        observed_at: Timestamp::from_millis(observed_at_ms),
    }))
}

#[cfg(test)]
mod tests {

    use super::*;

    fn registry() -> GeofenceRegistry {
        let loud = GeofenceRegion {
            id: "loud".into(),
            center: MapPoint::from_lat_lng_deg(14.5995, 120.9842),
            radius: Distance::from_meters(200.0),
            notify_on_enter: true,
            notify_on_exit: true,
        };
        let quiet = GeofenceRegion {
            id: "quiet".into(),
            center: MapPoint::from_lat_lng_deg(14.681_626, 121.063_214),
            radius: Distance::from_meters(50.0),
            notify_on_enter: false,
            notify_on_exit: true,
        };
        GeofenceRegistry::try_new(vec![loud, quiet]).unwrap()
    }

    fn raw(identifier: &str, kind: u8) -> RawRegionEvent {
        RawRegionEvent {
            identifier: identifier.into(),
            kind,
            observed_at_ms: 1_700_000_000_000,
        }
    }

    #[test]
    fn map_enter_event() {
        let event = map_region_event(&registry(), raw("loud", RAW_EVENT_KIND_ENTER))
            .unwrap()
            .unwrap();
        assert_eq!(event.region.as_str(), "loud");
        assert_eq!(event.kind, TransitionKind::Enter);
        assert_eq!(event.observed_at, Timestamp::from_millis(1_700_000_000_000));
    }

    #[test]
    fn suppressed_kind_maps_to_none() {
        let event = map_region_event(&registry(), raw("quiet", RAW_EVENT_KIND_ENTER)).unwrap();
        assert_eq!(event, None);

        let event = map_region_event(&registry(), raw("quiet", RAW_EVENT_KIND_EXIT))
            .unwrap()
            .unwrap();
        assert_eq!(event.kind, TransitionKind::Exit);
    }

    #[test]
    fn unknown_region_is_rejected() {
        let result = map_region_event(&registry(), raw("nowhere", RAW_EVENT_KIND_ENTER));
        assert!(matches!(result, Err(Error::UnknownRegion)));
    }

    #[test]
    fn unknown_kind_code_is_rejected() {
        let result = map_region_event(&registry(), raw("loud", 0));
        assert!(matches!(result, Err(Error::InvalidTransition)));
    }
}
