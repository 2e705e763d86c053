use crate::models::common::Weight;

/// A vehicle from the vehicle inventory.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    /// Vehicle identity.
    pub id: String,
    /// Capacity in kilograms.
    pub capacity: Weight,
    /// True if vehicle belongs to the company fleet.
    pub is_company: bool,
}

/// A vehicle which can be used to serve a route.
#[derive(Clone, Debug, PartialEq)]
pub enum VehicleCandidate {
    /// A company vehicle: finite, consumed once assigned, no rental cost.
    Company {
        /// Vehicle identity.
        id: String,
        /// Capacity in kilograms.
        capacity: Weight,
    },
    /// A rental archetype: unlimited supply, charged per use.
    Rental {
        /// Capacity in kilograms.
        capacity: Weight,
    },
}

impl VehicleCandidate {
    /// Returns vehicle capacity.
    pub fn capacity(&self) -> Weight {
        match self {
            Self::Company { capacity, .. } | Self::Rental { capacity } => *capacity,
        }
    }

    /// Returns true for company vehicle.
    pub fn is_company(&self) -> bool {
        matches!(self, Self::Company { .. })
    }

    /// Returns vehicle id for company vehicle.
    pub fn company_id(&self) -> Option<&str> {
        match self {
            Self::Company { id, .. } => Some(id.as_str()),
            Self::Rental { .. } => None,
        }
    }
}
