use super::dice::RandomEvent;
use super::globals::PlayerId;
use super::stats::Statistics;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// What a human player can do after moving.
pub enum PostMoveAction {
    /// Add an improvement to one of their properties.
    Upgrade,
    /// Mortgage one of their properties for cash.
    Mortgage,
    /// Do nothing.
    Skip,
    /// End the whole game once this turn is over.
    EndGame,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// How the tile a player landed on was dealt with.
pub enum Resolution {
    /// The player was already out of the game, so nothing happened.
    Skipped,
    /// The player landed on a tile that isn't a property.
    NonProperty,
    /// The player bought the property.
    Bought,
    /// The property went up for auction. `winner` is `None` if nobody bid.
    Auctioned { winner: Option<PlayerId> },
    /// The player paid rent to `owner`.
    RentPaid { owner: PlayerId },
    /// The player already owns the property.
    OwnedBySelf,
    /// The property's owner has been eliminated, so nobody collects rent on it.
    Orphaned { owner: PlayerId },
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Everything that happened during a single turn.
pub struct TurnOutcome {
    /// The player whose turn it was.
    pub player: PlayerId,
    /// The random event drawn at the start of the turn, if any.
    pub event: Option<RandomEvent>,
    /// The die roll, or `None` if the turn was skipped.
    pub roll: Option<u8>,
    /// Where the player ended up.
    pub position: u8,
    /// The property the player landed on, if any.
    pub property: Option<String>,
    /// How the tile was dealt with.
    pub resolution: Resolution,
    /// The money that changed hands while resolving the tile
    /// (purchase price, winning bid, or rent).
    pub amount: i64,
    /// The action the player took after moving, if they got to take one.
    pub action: Option<PostMoveAction>,
    /// Whether the player went bankrupt this turn.
    pub eliminated: bool,
}

impl TurnOutcome {
    /// The outcome of a turn that never happened.
    pub fn skipped(player: PlayerId, position: u8) -> Self {
        Self {
            player,
            event: None,
            roll: None,
            position,
            property: None,
            resolution: Resolution::Skipped,
            amount: 0,
            action: None,
            eliminated: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A notification of something that happened in the game.
pub enum Event {
    TurnStarted { player: String, turn: u32 },
    FoundMoney { player: String, amount: i64 },
    Fined { player: String, amount: i64 },
    NoEvent { player: String },
    Moved { player: String, roll: u8, position: u8, property: Option<String> },
    Bought { player: String, property: String, price: i64 },
    AuctionStarted { property: String, opening_bid: i64 },
    Bid { player: String, amount: i64 },
    AuctionWon { player: String, property: String, price: i64 },
    AuctionUnsold { property: String },
    RentPaid { player: String, owner: String, amount: i64 },
    OwnProperty { player: String, property: String },
    OrphanedProperty { player: String, property: String },
    Upgraded { player: String, property: String, improvements: u32 },
    Mortgaged { player: String, property: String, refund: i64 },
    /// A post-move action was refused and treated as doing nothing.
    ActionRefused { player: String, reason: String },
    Eliminated { player: String },
    EndRequested { player: String },
    /// The game has finished, with these final totals.
    GameOver { stats: Statistics },
}

/// Anything that wants to hear about what's happening in the game,
/// like a console or a user interface. Observers never affect the game.
pub trait Observer {
    /// Receive notification of a game event.
    fn notify(&mut self, event: &Event);
}

/// An observer that ignores everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct Silent;

impl Observer for Silent {
    fn notify(&mut self, _: &Event) {}
}
