use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Running totals kept over the course of a game.
pub struct Statistics {
    /// Turns played by players who were still in the game.
    pub turns: u32,
    /// Properties that changed hands, whether bought outright or at auction.
    pub properties_bought: u32,
    /// Rent payments made.
    pub rents_paid: u32,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Turns: {}", self.turns)?;
        writeln!(f, "Total Properties Bought: {}", self.properties_bought)?;
        write!(f, "Total Rents Paid: {}", self.rents_paid)
    }
}
