//! Time types are copied without looking inside.
//!
//! Each type here is matched by its exact identity, not by its structure, so a
//! timestamp is never taken apart and rebuilt field by field.

use std::time::{Duration, Instant, SystemTime};

use super::{Anonymise, Shape};
use crate::{error::Result, registry::Registry};

impl Anonymise for SystemTime {
    const SHAPE: Shape = Shape::Opaque;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Ok(*self)
    }

    fn is_zero(&self) -> bool {
        *self == Self::UNIX_EPOCH
    }
}

impl Anonymise for Duration {
    const SHAPE: Shape = Shape::Opaque;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Ok(*self)
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Anonymise for Instant {
    const SHAPE: Shape = Shape::Opaque;

    fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
        Ok(*self)
    }

    fn is_zero(&self) -> bool {
        false
    }
}

#[cfg(feature = "chrono")]
mod chrono_types {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

    use super::{Anonymise, Registry, Result, Shape};

    impl<Tz: TimeZone> Anonymise for DateTime<Tz> {
        const SHAPE: Shape = Shape::Opaque;

        fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
            Ok(self.clone())
        }

        fn is_zero(&self) -> bool {
            self.timestamp() == 0 && self.timestamp_subsec_nanos() == 0
        }
    }

    fn epoch() -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(1970, 1, 1).and_then(|date| date.and_hms_opt(0, 0, 0))
    }

    macro_rules! impl_anonymise_naive {
        ($ty:ty, $zero:expr) => {
            impl Anonymise for $ty {
                const SHAPE: Shape = Shape::Opaque;

                fn anonymise_with(&self, _registry: &Registry) -> Result<Self> {
                    Ok(*self)
                }

                fn is_zero(&self) -> bool {
                    Some(*self) == $zero
                }
            }
        };
    }

    impl_anonymise_naive!(NaiveDateTime, epoch());
    impl_anonymise_naive!(NaiveDate, epoch().map(|at| at.date()));
    impl_anonymise_naive!(NaiveTime, epoch().map(|at| at.time()));
}
