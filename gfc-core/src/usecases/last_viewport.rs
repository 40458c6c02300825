use super::prelude::*;
use crate::{repositories, util::validate::Validate};

/// Load the cached viewport.
///
/// Absence is a normal state on the first run. Any repository
/// failure or corrupt value degrades to `None` with a log line.
pub fn load_last_viewport<R: ViewportRepo>(repo: &R) -> Option<Viewport> {
    match repo.load_last_viewport() {
        Ok(viewport) => {
            if viewport.is_valid() {
                Some(viewport)
            } else {
                log::warn!("Ignoring cached viewport with invalid values");
                None
            }
        }
        Err(repositories::Error::NotFound) => None,
        Err(err) => {
            log::warn!("Unable to load the last viewport: {err}");
            None
        }
    }
}

/// Overwrite the cached viewport.
pub fn store_last_viewport<R: ViewportRepo>(repo: &R, viewport: &Viewport) -> Result<()> {
    viewport.validate()?;
    repo.save_last_viewport(viewport)?;
    Ok(())
}

#[cfg(test)]
mod tests {

    use std::{cell::RefCell, io};

    use super::*;

    #[derive(Default)]
    struct MockRepo {
        slot: RefCell<Option<Viewport>>,
        fail: bool,
    }

    impl ViewportRepo for MockRepo {
        fn save_last_viewport(&self, viewport: &Viewport) -> repositories::Result<()> {
            if self.fail {
                return Err(io::Error::other("disk full").into());
            }
            *self.slot.borrow_mut() = Some(*viewport);
            Ok(())
        }

        fn load_last_viewport(&self) -> repositories::Result<Viewport> {
            if self.fail {
                return Err(io::Error::other("read error").into());
            }
            self.slot.borrow().ok_or(repositories::Error::NotFound)
        }
    }

    fn viewport() -> Viewport {
        Viewport {
            center: MapPoint::from_lat_lng_deg(14.5995, 120.9842),
            span: MapSpan {
                lat_delta_deg: 0.005,
                lng_delta_deg: 0.005,
            },
        }
    }

    #[test]
    fn round_trip() {
        let repo = MockRepo::default();
        store_last_viewport(&repo, &viewport()).unwrap();
        assert_eq!(load_last_viewport(&repo), Some(viewport()));
    }

    #[test]
    fn absent_slot_is_not_an_error() {
        let repo = MockRepo::default();
        assert_eq!(load_last_viewport(&repo), None);
    }

    #[test]
    fn io_failure_degrades_to_none() {
        let repo = MockRepo {
            fail: true,
            ..Default::default()
        };
        assert_eq!(load_last_viewport(&repo), None);
    }

    #[test]
    fn invalid_viewport_is_rejected_before_saving() {
        let repo = MockRepo::default();
        let mut invalid = viewport();
        invalid.span.lat_delta_deg = 0.0;
        assert!(matches!(
            store_last_viewport(&repo, &invalid),
            Err(Error::InvalidViewport)
        ));
        assert_eq!(load_last_viewport(&repo), None);
    }

    #[test]
    fn save_failure_is_propagated_to_the_caller() {
        let repo = MockRepo {
            fail: true,
            ..Default::default()
        };
        assert!(matches!(
            store_last_viewport(&repo, &viewport()),
            Err(Error::Repo(_))
        ));
    }
}
