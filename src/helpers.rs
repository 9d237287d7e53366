// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

macro_rules! impl_subtag_traits {
    ($type:tt) => {
        impl core::str::FromStr for $type {
            type Err = crate::ParseError;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from_str(s)
            }
        }

        impl<'a> TryFrom<&'a str> for $type {
            type Error = crate::ParseError;

            #[inline]
            fn try_from(s: &'a str) -> Result<Self, Self::Error> {
                Self::try_from_str(s)
            }
        }

        impl writeable::Writeable for $type {
            #[inline]
            fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
                sink.write_str(self.as_str())
            }

            #[inline]
            fn writeable_length_hint(&self) -> writeable::LengthHint {
                writeable::LengthHint::exact(self.as_str().len())
            }
        }

        writeable::impl_display_with_writeable!($type);

        impl PartialEq<&str> for $type {
            #[inline]
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}
