use super::error::LedgerError;
use super::globals::*;
use std::collections::HashMap;

/// Who owns what and how much everyone has.
///
/// Ownership is recorded twice: once in `owners` (property → owner) and once
/// in each player's `improvements` map (owner → properties). Both views are
/// only ever changed together, by the methods below.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    /// Every player that joined the game, eliminated or not, in turn order.
    accounts: Vec<Player>,
    /// The owner of every property that has one.
    owners: HashMap<String, PlayerId>,
}

impl Ledger {
    /*********        INITIALISATION INTERFACES        *********/

    /// Return a ledger where none of `accounts` own anything yet.
    pub fn new(mut accounts: Vec<Player>) -> Ledger {
        for player in &mut accounts {
            player.improvements.clear();
        }

        Ledger {
            accounts,
            owners: HashMap::new(),
        }
    }

    /// Rebuild a ledger from accounts that already own properties,
    /// failing if two accounts claim the same property.
    pub fn from_accounts(accounts: Vec<Player>) -> Result<Ledger, LedgerError> {
        let mut owners = HashMap::new();

        for (id, player) in accounts.iter().enumerate() {
            for property in player.improvements.keys() {
                if let Some(&owner) = owners.get(property) {
                    return Err(LedgerError::AlreadyOwned {
                        property: property.clone(),
                        owner,
                    });
                }

                owners.insert(property.clone(), id);
            }
        }

        Ok(Ledger { accounts, owners })
    }

    /*********        GETTERS        *********/

    /// All the players in turn order.
    pub fn accounts(&self) -> &[Player] {
        &self.accounts
    }

    /// The player with the id `id`.
    pub fn account(&self, id: PlayerId) -> Option<&Player> {
        self.accounts.get(id)
    }

    /// The ids of the players still in the game, in turn order.
    pub fn active(&self) -> Vec<PlayerId> {
        (0..self.accounts.len())
            .filter(|&id| !self.accounts[id].eliminated)
            .collect()
    }

    /// The sum of every player's balance.
    pub fn total_money(&self) -> i64 {
        self.accounts.iter().map(|p| p.balance).sum()
    }

    /// Whether `property` has an owner.
    pub fn is_owned(&self, property: &str) -> bool {
        self.owners.contains_key(property)
    }

    /// The owner of `property`, if it has one.
    pub fn owner_of(&self, property: &str) -> Option<PlayerId> {
        self.owners.get(property).copied()
    }

    /// The number of improvements on `property`, as recorded by `owner`.
    /// Returns 0 if `owner` doesn't actually own the property.
    pub fn improvement_count(&self, property: &str, owner: PlayerId) -> u32 {
        self.accounts
            .get(owner)
            .and_then(|p| p.improvements.get(property))
            .copied()
            .unwrap_or(0)
    }

    /// Whether the owner map and the players' owned properties agree.
    pub fn is_consistent(&self) -> bool {
        let owned_count: usize = self.accounts.iter().map(|p| p.improvements.len()).sum();

        owned_count == self.owners.len()
            && self.owners.iter().all(|(property, &owner)| {
                self.accounts
                    .get(owner)
                    .map_or(false, |p| p.owns(property))
            })
    }

    /*********        OWNERSHIP        *********/

    /// Make `player` the owner of `property`, with no improvements.
    /// The caller is responsible for charging the player.
    pub fn record_purchase(&mut self, property: &str, player: PlayerId) -> Result<(), LedgerError> {
        if let Some(owner) = self.owner_of(property) {
            return Err(LedgerError::AlreadyOwned {
                property: property.to_owned(),
                owner,
            });
        }

        self.owners.insert(property.to_owned(), player);
        self.accounts[player]
            .improvements
            .insert(property.to_owned(), 0);

        Ok(())
    }

    /// Make the winner of an auction the owner of `property`.
    /// The caller is responsible for charging the player `price`.
    pub fn record_auction_win(
        &mut self,
        property: &str,
        player: PlayerId,
        price: i64,
    ) -> Result<(), LedgerError> {
        log::debug!("player {} won '{}' at auction for ${}", player, property, price);
        self.record_purchase(property, player)
    }

    /// Add an improvement to `property`, charging its owner `cost`.
    /// Return the new improvement count.
    pub fn upgrade(&mut self, property: &str, player: PlayerId, cost: i64) -> Result<u32, LedgerError> {
        self.ensure_owner(property, player)?;
        self.ensure_funds(player, cost)?;

        let account = &mut self.accounts[player];
        account.balance -= cost;

        let count = account.improvements.entry(property.to_owned()).or_insert(0);
        *count += 1;

        Ok(*count)
    }

    /// Mortgage `property`, paying its owner `refund`. Ownership, improvements
    /// and rent collection are all left untouched. Return the amount paid out.
    pub fn mortgage(&mut self, property: &str, player: PlayerId, refund: i64) -> Result<i64, LedgerError> {
        self.ensure_owner(property, player)?;
        self.accounts[player].balance += refund;

        Ok(refund)
    }

    /*********        MONEY        *********/

    /// Pay `amount` from the bank to `player`.
    pub fn credit(&mut self, player: PlayerId, amount: i64) {
        self.accounts[player].balance += amount;
    }

    /// Take `amount` from `player` and give it to the bank.
    /// The player's balance is allowed to go negative.
    pub fn debit(&mut self, player: PlayerId, amount: i64) {
        self.accounts[player].balance -= amount;
    }

    /// Move `amount` from `from` to `to`. The sum of all balances is unchanged.
    pub fn transfer(&mut self, from: PlayerId, to: PlayerId, amount: i64) {
        self.accounts[from].balance -= amount;
        self.accounts[to].balance += amount;
    }

    /// Move `player` to `position`.
    pub fn set_position(&mut self, player: PlayerId, position: u8) {
        self.accounts[player].position = position;
    }

    /// Knock `player` out of the game. Their properties stay on the books.
    /// Return whether the player was still in the game beforehand.
    pub fn eliminate(&mut self, player: PlayerId) -> bool {
        let account = &mut self.accounts[player];
        let was_active = !account.eliminated;
        account.eliminated = true;
        was_active
    }

    /*********        HELPERS        *********/

    fn ensure_owner(&self, property: &str, player: PlayerId) -> Result<(), LedgerError> {
        if self.owner_of(property) == Some(player) {
            Ok(())
        } else {
            Err(LedgerError::InvalidOwnership {
                property: property.to_owned(),
                player,
            })
        }
    }

    /// Fail unless `player` can pay `needed` without going negative.
    pub fn ensure_funds(&self, player: PlayerId, needed: i64) -> Result<(), LedgerError> {
        let balance = self.accounts[player].balance;

        if balance >= needed {
            Ok(())
        } else {
            Err(LedgerError::InsufficientFunds {
                player,
                needed,
                balance,
            })
        }
    }
}
