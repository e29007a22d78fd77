use serde::{Deserialize, Serialize};

use shopfront_core::{AggregateId, Entity};

/// Default minimum age at which a customer may purchase.
pub const LEGAL_AGE: u32 = 18;

/// Customer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub AggregateId);

impl CustomerId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }

    /// Fresh `c-` prefixed identifier.
    pub fn generate() -> Self {
        Self(AggregateId::generate("c"))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Customer record: identity and age. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    age: u32,
}

impl Customer {
    pub fn new(id: CustomerId, age: u32) -> Self {
        Self { id, age }
    }

    pub fn id_typed(&self) -> &CustomerId {
        &self.id
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Whether the customer has reached [`LEGAL_AGE`].
    pub fn is_legal_age(&self) -> bool {
        self.is_of_age(LEGAL_AGE)
    }

    /// Whether the customer has reached the given age threshold.
    pub fn is_of_age(&self, threshold: u32) -> bool {
        self.age >= threshold
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
