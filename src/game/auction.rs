use super::agent::Agent;
use super::error::LedgerError;
use super::globals::*;
use super::ledger::Ledger;
use super::outcome::{Event, Observer};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// How an auction ended.
pub struct AuctionResult {
    /// The player who now owns the property, or `None` if nobody bid.
    pub winner: Option<PlayerId>,
    /// The winning bid, or the opening bid if nobody bid.
    pub price: i64,
    /// The number of bids that were accepted.
    pub bids: u32,
}

/// Check that `amount` is a bid a player with `balance` may place
/// while the bid stands at `current_bid`.
pub fn validate_bid(amount: i64, current_bid: i64, balance: i64) -> Result<i64, LedgerError> {
    if amount >= current_bid && amount <= balance {
        Ok(amount)
    } else {
        Err(LedgerError::OutOfRangeInput {
            value: amount,
            min: current_bid,
            max: balance,
        })
    }
}

/// Auction off `property` to the players still in the game.
///
/// Every player gets exactly one chance to bid, in turn order, and the
/// highest bid standing after that single pass wins. There's no second
/// round. If nobody bids, the property stays unowned.
pub fn run_auction(
    property: &str,
    ledger: &mut Ledger,
    agents: &mut [Box<dyn Agent>],
    observer: &mut dyn Observer,
) -> AuctionResult {
    let mut current_bid = STARTING_BID;
    let mut highest_bidder = None;
    let mut bids = 0;

    observer.notify(&Event::AuctionStarted {
        property: property.to_owned(),
        opening_bid: STARTING_BID,
    });

    /*********        BIDDING        *********/

    for id in ledger.active() {
        let account = &ledger.accounts()[id];

        let amount = match agents[id].bid(account, property, current_bid) {
            Some(amount) => amount,
            None => continue,
        };

        match validate_bid(amount, current_bid, account.balance) {
            Ok(amount) => {
                current_bid = amount;
                highest_bidder = Some(id);
                bids += 1;

                observer.notify(&Event::Bid {
                    player: account.name.clone(),
                    amount,
                });
            }
            // A bid that can't be honoured is a pass
            Err(e) => log::warn!("ignoring bid from {}: {}", account.name, e),
        }
    }

    /*********        SETTLEMENT        *********/

    let winner = match highest_bidder {
        Some(id) => id,
        None => {
            observer.notify(&Event::AuctionUnsold {
                property: property.to_owned(),
            });

            return AuctionResult {
                winner: None,
                price: current_bid,
                bids,
            };
        }
    };

    if let Err(e) = ledger.record_auction_win(property, winner, current_bid) {
        log::error!("auction for '{}' could not be settled: {}", property, e);

        return AuctionResult {
            winner: None,
            price: current_bid,
            bids,
        };
    }

    ledger.debit(winner, current_bid);

    observer.notify(&Event::AuctionWon {
        player: ledger.accounts()[winner].name.clone(),
        property: property.to_owned(),
        price: current_bid,
    });

    AuctionResult {
        winner: Some(winner),
        price: current_bid,
        bids,
    }
}
