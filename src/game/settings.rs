use super::error::SettingsError;
use super::globals::DEFAULT_TURN_LIMIT;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Rules of the game that can be changed before it starts.
pub struct Settings {
    /// The balance every player starts with.
    pub starting_money: i64,
    /// The price of every property.
    pub property_cost: i64,
    /// The rent of every unimproved property.
    pub base_rent: i64,
    /// How many times `base_rent` each improvement adds to a property's rent.
    pub rent_multiplier: i64,
    /// The price of one improvement.
    pub upgrade_cost: i64,
    /// Whether a random event is drawn at the start of every turn.
    pub enable_random_events: bool,
    /// Whether the audit trail is emitted.
    pub enable_logging: bool,
    /// The number of turns after which the game stops.
    pub turn_limit: u32,
    /// The chance an AI player raises the bid when its turn in an auction comes up.
    pub ai_bid_probability: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_money: 1500,
            property_cost: 100,
            base_rent: 50,
            rent_multiplier: 2,
            upgrade_cost: 50,
            enable_random_events: true,
            enable_logging: true,
            turn_limit: DEFAULT_TURN_LIMIT,
            ai_bid_probability: 0.5,
        }
    }
}

impl Settings {
    /// The amount the bank pays out for mortgaging a property.
    pub fn mortgage_refund(&self) -> i64 {
        self.property_cost / 2
    }

    /// Read settings from a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Settings, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check that the settings can't be used to create or destroy money.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let amounts = [
            ("startingMoney", self.starting_money),
            ("propertyCost", self.property_cost),
            ("baseRent", self.base_rent),
            ("rentMultiplier", self.rent_multiplier),
            ("upgradeCost", self.upgrade_cost),
        ];

        if let Some(&(field, value)) = amounts.iter().find(|(_, value)| *value < 0) {
            return Err(SettingsError::Negative { field, value });
        }

        // NaN isn't contained in any range
        if !(0.0..=1.0).contains(&self.ai_bid_probability) {
            return Err(SettingsError::BidProbability(self.ai_bid_probability));
        }

        if self.base_rent.checked_mul(self.rent_multiplier).is_none() {
            return Err(SettingsError::RentTooLarge {
                base_rent: self.base_rent,
                multiplier: self.rent_multiplier,
            });
        }

        Ok(())
    }
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let toggle = |on: bool| if on { "Enabled" } else { "Disabled" };

        writeln!(f, "Logging: {}", toggle(self.enable_logging))?;
        writeln!(f, "Random Events: {}", toggle(self.enable_random_events))?;
        writeln!(f, "Starting Money: ${}", self.starting_money)?;
        writeln!(f, "Property Cost: ${}", self.property_cost)?;
        writeln!(f, "Base Rent: ${}", self.base_rent)?;
        writeln!(f, "Rent Multiplier: {}", self.rent_multiplier)?;
        writeln!(f, "Upgrade Cost: ${}", self.upgrade_cost)?;
        write!(f, "Turn Limit: {}", self.turn_limit)
    }
}
