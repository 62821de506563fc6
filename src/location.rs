use serde::*;

/// Compact grid coordinate: row in the high 16 bits, column in the low 16.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct Location {
    packed: u32,
}

impl Location {
    pub fn from_coords(row: u32, col: u32) -> Self {
        Location {
            packed: (row << 16) | (col & 0xFFFF),
        }
    }

    #[inline]
    pub fn row(self) -> u16 {
        ((self.packed >> 16) & 0xFFFF) as u16
    }

    #[inline]
    pub fn col(self) -> u16 {
        (self.packed & 0xFFFF) as u16
    }

    #[inline]
    pub fn packed_repr(self) -> u32 {
        self.packed
    }

    #[inline]
    pub fn from_packed(packed: u32) -> Self {
        Location { packed }
    }

    /// Chebyshev distance: square, not circular, coverage footprints.
    pub fn distance_to(self, other: Self) -> u32 {
        let dr = (self.row() as i32) - (other.row() as i32);
        let dc = (self.col() as i32) - (other.col() as i32);

        dr.abs().max(dc.abs()) as u32
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.packed_repr().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(Location::from_packed)
    }
}
