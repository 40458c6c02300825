use thiserror::Error;

use crate::entities::*;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum RegionInvalidation {
    #[error("Invalid region identifier")]
    Id,
    #[error("Invalid position")]
    Position,
    #[error("Invalid radius")]
    Radius,
}

impl Validate for GeofenceRegion {
    type Error = RegionInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.id.is_valid() {
            return Err(Self::Error::Id);
        }
        if !self.center.is_valid() {
            return Err(Self::Error::Position);
        }
        if !self.radius.is_valid() || self.radius.to_meters() <= 0.0 {
            return Err(Self::Error::Radius);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ViewportInvalidation {
    #[error("Invalid position")]
    Position,
    #[error("Invalid span")]
    Span,
}

impl Validate for Viewport {
    type Error = ViewportInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.center.is_valid() {
            return Err(Self::Error::Position);
        }
        if !self.span.is_valid() {
            return Err(Self::Error::Span);
        }
        Ok(())
    }
}
