use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::error::ProtocolError;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
        #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
        #[archive(check_bytes)]
        #[repr(transparent)] // Ensure it has the same layout as u32
        pub struct $name(pub u32);

        impl $name {
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }
    };
}

define_id!(
    FormOrdinal,
    "Position of a form in its declension's form list for one term type. Persisted; stable per declension."
);
define_id!(DictionaryVersion, "Version stamp written into compiled dictionary blobs.");

impl FormOrdinal {
    /// Index into a form list.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Compact single-byte encoding used by bulk form-map serialization.
    pub fn to_byte(self) -> Result<u8, ProtocolError> {
        u8::try_from(self.0).map_err(|_| ProtocolError::OrdinalOutOfRange(self.0))
    }
}
