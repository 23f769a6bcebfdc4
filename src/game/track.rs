use super::globals::*;
use super::settings::Settings;
use std::collections::HashMap;

/// The board: a loop of `BOARD_SIZE` tiles, some of which are properties.
#[derive(Clone, Debug)]
pub struct Track {
    /// Property tiles keyed by their position.
    properties: HashMap<u8, Property>,
    /// Positions of the property tiles keyed by property name.
    positions: HashMap<String, u8>,
}

impl Track {
    /*********        INITIALISATION INTERFACES        *********/

    /// Return the standard board, with rents taken from `settings`.
    pub fn new(settings: &Settings) -> Track {
        let properties = PROPERTY_NAMES
            .iter()
            .map(|(&pos, &name)| {
                (
                    pos,
                    Property::new(name, pos, settings.base_rent, settings.rent_multiplier),
                )
            })
            .collect();

        Track::from_properties(properties)
    }

    fn from_properties(properties: HashMap<u8, Property>) -> Track {
        let positions = properties
            .values()
            .map(|prop| (prop.name.clone(), prop.position))
            .collect();

        Track {
            properties,
            positions,
        }
    }

    /*********        LOOKUPS        *********/

    /// The property at `position`, or `None` if it isn't a property tile.
    pub fn property_at(&self, position: u8) -> Option<&Property> {
        self.properties.get(&(position % BOARD_SIZE))
    }

    /// The property called `name`.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.positions
            .get(name)
            .and_then(|pos| self.properties.get(pos))
    }

    /// Whether there's a property called `name` on the board.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// All the properties on the board, ordered by position.
    pub fn properties(&self) -> Vec<&Property> {
        let mut props: Vec<&Property> = self.properties.values().collect();
        props.sort_by_key(|prop| prop.position);
        props
    }

    /// The position reached by moving `roll` tiles forward from `position`.
    pub fn advance(&self, position: u8, roll: u8) -> u8 {
        ((position as u16 + roll as u16) % BOARD_SIZE as u16) as u8
    }
}
