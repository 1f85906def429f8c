//! Shipping address.

use serde::{Deserialize, Serialize};

/// A postal address entered at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    /// Street line.
    pub address1: String,
    /// Apartment, suite, etc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    /// State or province code (e.g., "CA").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub zip: String,
    /// ISO country code (e.g., "US").
    pub country: String,
}

impl Address {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address1: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address1: address1.into(),
            address2: None,
            city: city.into(),
            state: None,
            zip: zip.into(),
            country: country.into(),
        }
    }

    pub fn with_address2(mut self, address2: impl Into<String>) -> Self {
        self.address2 = Some(address2.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Format as a single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.address1.as_str()];
        parts.extend(self.address2.as_deref());
        parts.push(&self.city);
        parts.extend(self.state.as_deref());
        parts.push(&self.zip);
        parts.push(&self.country);
        parts.join(", ")
    }

    /// Format as a mailing label.
    pub fn multi_line(&self) -> String {
        let mut lines = vec![self.full_name(), self.address1.clone()];
        lines.extend(self.address2.clone());
        let city_line = match &self.state {
            Some(state) => format!("{}, {} {}", self.city, state, self.zip),
            None => format!("{} {}", self.city, self.zip),
        };
        lines.push(city_line);
        lines.push(self.country.clone());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Address {
        Address::new("Jane", "Smith", "456 Oak Ave", "Los Angeles", "90001", "US").with_state("CA")
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample().full_name(), "Jane Smith");
    }

    #[test]
    fn test_one_line() {
        assert_eq!(sample().one_line(), "456 Oak Ave, Los Angeles, CA, 90001, US");
    }

    #[test]
    fn test_multi_line_with_unit() {
        let label = sample().with_address2("Apt 4").multi_line();
        assert_eq!(label, "Jane Smith\n456 Oak Ave\nApt 4\nLos Angeles, CA 90001\nUS");
    }
}
