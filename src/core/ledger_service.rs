//! In-memory account service
//!
//! Stands in for the remote account service: it owns the accounts and the
//! transfer log, answers history and pending queries, and applies sends,
//! requests, approvals and rejections.
//!
//! # Absent Results
//!
//! Like the remote service, history and pending queries answer
//! [`Fetched::Absent`] rather than an empty list when nothing matches.
//!
//! # Request Orientation
//!
//! A request is recorded with the requester in `from_account` and the payer in
//! `to_account`. Approving it moves funds from `to_account` to `from_account`.

use crate::core::selector::{pending_for, Fetched};
use crate::core::traits::TransferService;
use crate::types::{
    Account, AccountId, LedgerError, TransferId, TransferRecord, TransferStatus, TransferType,
    Viewer,
};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// In-memory account service
///
/// Accounts are keyed by id; transfers are kept in the order they were created
/// or loaded.
#[derive(Debug)]
pub struct InMemoryTransferService {
    accounts: HashMap<AccountId, Account>,
    transfers: Vec<TransferRecord>,
    /// `None` once the id space is used up
    next_id: Option<TransferId>,
}

impl Default for InMemoryTransferService {
    fn default() -> Self {
        InMemoryTransferService {
            accounts: HashMap::new(),
            transfers: Vec::new(),
            next_id: Some(1),
        }
    }
}

impl InMemoryTransferService {
    /// Create an empty service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service seeded with accounts and transfers
    ///
    /// If two accounts share an id, the first one wins. Transfers that repeat
    /// an earlier transfer id or name an unknown account are skipped with a
    /// warning. New transfer ids continue after the highest kept id.
    pub fn with_data(accounts: Vec<Account>, transfers: Vec<TransferRecord>) -> Self {
        let mut service = Self::new();
        for account in accounts {
            service.accounts.entry(account.id).or_insert(account);
        }

        let mut seen = HashSet::new();
        let mut skipped = 0usize;
        for record in transfers {
            let unknown = [record.from_account(), record.to_account()]
                .into_iter()
                .find(|account| !service.accounts.contains_key(account));

            if let Some(account) = unknown {
                skipped += 1;
                warn!(id = record.id(), account, "skipping transfer with unknown account");
            } else if !seen.insert(record.id()) {
                skipped += 1;
                warn!(id = record.id(), "skipping transfer with duplicate id");
            } else {
                service.transfers.push(record);
            }
        }

        service.next_id = service
            .transfers
            .iter()
            .map(TransferRecord::id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        debug!(
            accounts = service.accounts.len(),
            transfers = service.transfers.len(),
            skipped,
            "service seeded"
        );
        service
    }

    /// All transfers, in creation order
    pub fn transfers(&self) -> &[TransferRecord] {
        &self.transfers
    }

    fn account(&self, id: AccountId) -> Result<&Account, LedgerError> {
        self.accounts
            .get(&id)
            .ok_or_else(|| LedgerError::unknown_account(id))
    }

    /// Id the next transfer created on behalf of `account` will get
    fn peek_id(&self, account: AccountId) -> Result<TransferId, LedgerError> {
        self.next_id
            .ok_or_else(|| LedgerError::arithmetic_overflow("transfer id allocation", account))
    }

    /// Record a newly created transfer and advance the id counter
    fn commit(&mut self, record: TransferRecord) {
        self.next_id = record.id().checked_add(1);
        self.transfers.push(record);
    }

    /// Move `amount` from `payer` to `payee`
    ///
    /// Both balances are computed before either is written, so a failure
    /// leaves both accounts untouched.
    fn move_funds(
        &mut self,
        payer: AccountId,
        payee: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let payer_balance = self.account(payer)?.balance;
        let payee_balance = self.account(payee)?.balance;

        if payer_balance < amount {
            return Err(LedgerError::insufficient_funds(payer, payer_balance, amount));
        }

        let new_payer_balance = payer_balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("debit", payer))?;
        let new_payee_balance = payee_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("credit", payee))?;

        if let Some(account) = self.accounts.get_mut(&payer) {
            account.balance = new_payer_balance;
        }
        if let Some(account) = self.accounts.get_mut(&payee) {
            account.balance = new_payee_balance;
        }

        Ok(())
    }

    fn validate_new_transfer(
        &self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::non_positive_amount(amount));
        }
        self.account(from)?;
        self.account(to)?;
        Ok(())
    }

    fn pending_transfer(&self, id: TransferId) -> Result<(usize, TransferRecord), LedgerError> {
        let (index, record) = self
            .transfers
            .iter()
            .enumerate()
            .find(|(_, record)| record.id() == id)
            .ok_or_else(|| LedgerError::transfer_not_found(id))?;

        if record.status() != TransferStatus::Pending {
            return Err(LedgerError::not_pending(id));
        }

        Ok((index, record.clone()))
    }
}

/// (payer, payee) of a transfer once it is approved
fn settlement_parties(record: &TransferRecord) -> (AccountId, AccountId) {
    match record.transfer_type() {
        TransferType::Send => (record.from_account(), record.to_account()),
        TransferType::Request => (record.to_account(), record.from_account()),
    }
}

impl TransferService for InMemoryTransferService {
    fn transfer_history(
        &self,
        account: AccountId,
    ) -> Result<Fetched<Vec<TransferRecord>>, LedgerError> {
        self.account(account)?;

        let history: Vec<TransferRecord> = self
            .transfers
            .iter()
            .filter(|record| record.involves(account))
            .cloned()
            .collect();
        debug!(account, count = history.len(), "fetched transfer history");

        if history.is_empty() {
            Ok(Fetched::Absent)
        } else {
            Ok(Fetched::Present(history))
        }
    }

    fn pending_requests(
        &self,
        account: AccountId,
    ) -> Result<Fetched<Vec<TransferRecord>>, LedgerError> {
        self.account(account)?;

        let pending = pending_for(&self.transfers, Viewer::new(account));
        debug!(account, count = pending.len(), "fetched pending requests");

        if pending.is_empty() {
            Ok(Fetched::Absent)
        } else {
            Ok(Fetched::Present(pending))
        }
    }

    fn username(&self, account: AccountId) -> Result<String, LedgerError> {
        self.account(account).map(|account| account.username.clone())
    }

    fn accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.values().cloned().collect();
        accounts.sort_by_key(|account| account.id);
        accounts
    }

    fn balance(&self, account: AccountId) -> Result<Decimal, LedgerError> {
        self.account(account).map(|account| account.balance)
    }

    fn send(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<TransferRecord, LedgerError> {
        self.validate_new_transfer(from, to, amount)?;

        let record = TransferRecord::new(
            self.peek_id(from)?,
            TransferType::Send,
            TransferStatus::Approved,
            from,
            to,
            amount,
        )?;
        self.move_funds(from, to, amount)?;

        info!(id = record.id(), from, to, %amount, "send completed");
        self.commit(record.clone());
        Ok(record)
    }

    fn request(
        &mut self,
        requester: AccountId,
        payer: AccountId,
        amount: Decimal,
    ) -> Result<TransferRecord, LedgerError> {
        self.validate_new_transfer(requester, payer, amount)?;

        let record = TransferRecord::new(
            self.peek_id(requester)?,
            TransferType::Request,
            TransferStatus::Pending,
            requester,
            payer,
            amount,
        )?;

        info!(id = record.id(), requester, payer, %amount, "request created");
        self.commit(record.clone());
        Ok(record)
    }

    fn approve(&mut self, id: TransferId) -> Result<TransferRecord, LedgerError> {
        let (index, record) = self.pending_transfer(id)?;
        let (payer, payee) = settlement_parties(&record);

        self.move_funds(payer, payee, record.amount())?;

        let approved = record.with_status(TransferStatus::Approved);
        self.transfers[index] = approved.clone();
        info!(id, payer, payee, "transfer approved");
        Ok(approved)
    }

    fn reject(&mut self, id: TransferId) -> Result<TransferRecord, LedgerError> {
        let (index, record) = self.pending_transfer(id)?;

        let rejected = record.with_status(TransferStatus::Rejected);
        self.transfers[index] = rejected.clone();
        info!(id, "transfer rejected");
        Ok(rejected)
    }
}
