//! Interactive session
//!
//! A [`Session`] drives the menus for one viewer: it fetches from the account
//! service, runs the classifier and selector over the result, hands the
//! presenter's lines to the console, and resolves the ids the user types.
//!
//! # Recoverable Outcomes
//!
//! Absent data, unknown ids, invalid menu choices and service refusals
//! (insufficient funds, unknown usernames, ...) are reported to the user and
//! the menu loop continues. Only end of input and I/O failures end the session.

use crate::console::menu::{
    LoginOption, MainOption, PendingAction, GREETING, INVALID_MENU_SELECTION, LOGIN_MENU,
    MAIN_MENU, MENU_PROMPT, PENDING_ACTION_MENU,
};
use crate::console::presenter::{
    HistoryTable, Palette, PendingDetail, PendingTable, TransferDetail, INVALID_PENDING_SELECTION,
    NO_MATCHING_PENDING, NO_MATCHING_TRANSACTIONS, NO_PENDING_REQUESTS, NO_TRANSACTIONS,
    TRANSFER_NOT_FOUND,
};
use crate::console::prompt::Console;
use crate::core::classifier::{classify, classify_all};
use crate::core::selector::{find_by_id, pending_for, Fetched, Selection};
use crate::core::traits::TransferService;
use crate::types::{LedgerError, TransferRecord, Viewer};
use std::io::{BufRead, Write};
use tracing::{debug, error, warn};

/// Outcome of the history view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryOutcome {
    /// The service had no transfers for the viewer
    NoTransactions,
    /// The service answered with an empty list
    NoneMatch,
    /// The requested id was not in the displayed list
    NotFound(i64),
    /// The requested transfer was displayed in detail
    Viewed(TransferRecord),
}

/// Outcome of the pending requests view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingSelection {
    /// The service had no pending requests for the viewer
    NoRequests,
    /// Requests came back but none await the viewer's action
    NoneMatch,
    /// The requested id was not in the displayed list
    Invalid(i64),
    /// The requested transfer was displayed and may be acted on
    Selected(TransferRecord),
}

pub struct Session<S, R, W, E> {
    service: S,
    console: Console<R, W, E>,
    palette: Palette,
    viewer: Option<Viewer>,
}

impl<S, R, W, E> Session<S, R, W, E>
where
    S: TransferService,
    R: BufRead,
    W: Write,
    E: Write,
{
    pub fn new(service: S, console: Console<R, W, E>, palette: Palette) -> Self {
        Session {
            service,
            console,
            palette,
            viewer: None,
        }
    }

    /// Start already logged in as `viewer`, skipping the login menu
    pub fn with_viewer(mut self, viewer: Viewer) -> Self {
        self.viewer = Some(viewer);
        self
    }

    pub fn viewer(&self) -> Option<Viewer> {
        self.viewer
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Hand back the service and console, e.g. to inspect them in tests
    pub fn into_parts(self) -> (S, Console<R, W, E>) {
        (self.service, self.console)
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<(), LedgerError> {
        let result = self.console.print_lines(GREETING).and_then(|_| match self.viewer {
            Some(viewer) => self.main_menu(viewer),
            None => self.login_menu(),
        });

        match result {
            Err(LedgerError::InputClosed) => {
                debug!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn login_menu(&mut self) -> Result<(), LedgerError> {
        loop {
            self.console.print_lines(LOGIN_MENU)?;
            let selection = self.console.prompt_for_menu_selection(MENU_PROMPT)?;

            match LoginOption::try_from(selection) {
                Ok(LoginOption::Register) => self
                    .console
                    .print_error("Registration is not available from this console.")?,
                Ok(LoginOption::Login) => match self.login() {
                    Ok(viewer) => return self.main_menu(viewer),
                    Err(e) => self.recover(e)?,
                },
                Ok(LoginOption::Exit) => return Ok(()),
                Err(_) => self.console.print_error(INVALID_MENU_SELECTION)?,
            }
        }
    }

    /// Pick the viewer account by username
    fn login(&mut self) -> Result<Viewer, LedgerError> {
        let username = self.console.prompt_for_string("Username: ")?;
        let account = self.service.find_account(username.trim())?;

        let viewer = Viewer::new(account.id);
        self.viewer = Some(viewer);
        debug!(account = account.id, "viewer selected");
        Ok(viewer)
    }

    fn main_menu(&mut self, viewer: Viewer) -> Result<(), LedgerError> {
        loop {
            self.console.print_lines(MAIN_MENU)?;
            let selection = self.console.prompt_for_menu_selection(MENU_PROMPT)?;

            let result = match MainOption::try_from(selection) {
                Ok(MainOption::Balance) => self.show_balance(viewer),
                Ok(MainOption::History) => self.print_history(viewer).map(|_| ()),
                Ok(MainOption::Pending) => self.review_pending(viewer),
                Ok(MainOption::Send) => self.send_bucks(viewer),
                Ok(MainOption::Request) => self.request_bucks(viewer),
                Ok(MainOption::Exit) => return Ok(()),
                Err(_) => {
                    self.console.print_error(INVALID_MENU_SELECTION)?;
                    continue;
                }
            };

            if let Err(e) = result {
                self.recover(e)?;
            }
            self.console.pause()?;
        }
    }

    /// Report a recoverable error to the user; pass fatal ones through
    fn recover(&mut self, error: LedgerError) -> Result<(), LedgerError> {
        match error {
            LedgerError::InputClosed | LedgerError::IoError { .. } => Err(error),
            LedgerError::UnknownUsername { .. }
            | LedgerError::InsufficientFunds { .. }
            | LedgerError::NonPositiveAmount { .. }
            | LedgerError::SelfTransfer { .. }
            | LedgerError::NotPending { .. }
            | LedgerError::TransferNotFound { .. } => {
                warn!(error = %error, "request refused");
                self.console.print_error(&error.to_string())
            }
            other => {
                error!(error = %other, "unexpected failure");
                self.console.print_error_message()
            }
        }
    }

    fn show_balance(&mut self, viewer: Viewer) -> Result<(), LedgerError> {
        let balance = self.service.balance(viewer.account)?;
        self.console
            .print_line(&format!("Your current balance is: ${}", balance))
    }

    /// List every other user's name
    pub fn print_users(&mut self, viewer: Viewer) -> Result<(), LedgerError> {
        let names: Vec<String> = self
            .service
            .accounts()
            .into_iter()
            .filter(|account| account.id != viewer.account)
            .map(|account| account.username)
            .collect();

        self.console.print_line("Users")?;
        self.console.print_line("-----")?;
        self.console.print_lines(names)
    }

    /// Show the viewer's past transfers and the detail of one chosen by id
    pub fn print_history(&mut self, viewer: Viewer) -> Result<HistoryOutcome, LedgerError> {
        let records = match self.service.transfer_history(viewer.account)? {
            Fetched::Absent => {
                self.console.print_error(NO_TRANSACTIONS)?;
                return Ok(HistoryOutcome::NoTransactions);
            }
            Fetched::Present(records) => records,
        };
        if records.is_empty() {
            self.console.print_error(NO_MATCHING_TRANSACTIONS)?;
            return Ok(HistoryOutcome::NoneMatch);
        }

        let rows = classify_all(&records, viewer);
        self.console
            .print_lines(HistoryTable::new(&rows, self.palette).lines())?;

        let requested = self
            .console
            .prompt_for_int("Which transaction would you like to view?")?;

        match find_by_id(&records, requested) {
            Selection::Found(record) => {
                let from = self.service.username(record.from_account())?;
                let to = self.service.username(record.to_account())?;
                let detail = TransferDetail::new(classify(record, viewer), &from, &to, self.palette);
                self.console.print_lines(detail.lines())?;
                Ok(HistoryOutcome::Viewed(record.clone()))
            }
            Selection::NotFound(id) => {
                self.console.print_error(TRANSFER_NOT_FOUND)?;
                Ok(HistoryOutcome::NotFound(id))
            }
        }
    }

    /// Show the requests awaiting the viewer and the detail of one chosen by id
    pub fn print_pending_requests(
        &mut self,
        viewer: Viewer,
    ) -> Result<PendingSelection, LedgerError> {
        let records = match self.service.pending_requests(viewer.account)? {
            Fetched::Absent => {
                self.console.print_error(NO_PENDING_REQUESTS)?;
                return Ok(PendingSelection::NoRequests);
            }
            Fetched::Present(records) => pending_for(&records, viewer),
        };
        if records.is_empty() {
            self.console.print_error(NO_MATCHING_PENDING)?;
            return Ok(PendingSelection::NoneMatch);
        }

        self.console
            .print_lines(PendingTable::new(&records, self.palette).lines())?;

        let requested = self
            .console
            .prompt_for_int("Enter the id for the transfer you would like to view: ")?;

        match find_by_id(&records, requested) {
            Selection::Found(record) => {
                let requester = self.service.username(record.from_account())?;
                let detail = PendingDetail::new(record, &requester, self.palette);
                self.console.print_lines(detail.lines())?;
                Ok(PendingSelection::Selected(record.clone()))
            }
            Selection::NotFound(id) => {
                self.console.print_error(INVALID_PENDING_SELECTION)?;
                Ok(PendingSelection::Invalid(id))
            }
        }
    }

    fn review_pending(&mut self, viewer: Viewer) -> Result<(), LedgerError> {
        match self.print_pending_requests(viewer)? {
            PendingSelection::Selected(record) => self.act_on_pending(&record),
            _ => Ok(()),
        }
    }

    fn act_on_pending(&mut self, record: &TransferRecord) -> Result<(), LedgerError> {
        self.console.print_lines(PENDING_ACTION_MENU)?;
        let selection = self.console.prompt_for_menu_selection(MENU_PROMPT)?;

        match PendingAction::try_from(selection) {
            Ok(PendingAction::Approve) => {
                let approved = self.service.approve(record.id())?;
                self.console
                    .print_line(&format!("Transfer {} approved.", approved.id()))
            }
            Ok(PendingAction::Reject) => {
                let rejected = self.service.reject(record.id())?;
                self.console
                    .print_line(&format!("Transfer {} rejected.", rejected.id()))
            }
            Ok(PendingAction::Leave) => Ok(()),
            Err(_) => self.console.print_error(INVALID_MENU_SELECTION),
        }
    }

    fn send_bucks(&mut self, viewer: Viewer) -> Result<(), LedgerError> {
        self.print_users(viewer)?;
        let username = self
            .console
            .prompt_for_string("Enter the username of the recipient: ")?;
        let recipient = self.service.find_account(username.trim())?;
        let amount = self.console.prompt_for_decimal("Enter amount: ")?;

        let record = self.service.send(viewer.account, recipient.id, amount)?;
        self.console.print_line(&format!(
            "Sent ${} to {}. Transfer id: {}",
            record.amount(),
            recipient.username,
            record.id()
        ))
    }

    fn request_bucks(&mut self, viewer: Viewer) -> Result<(), LedgerError> {
        self.print_users(viewer)?;
        let username = self
            .console
            .prompt_for_string("Enter the username to request from: ")?;
        let payer = self.service.find_account(username.trim())?;
        let amount = self.console.prompt_for_decimal("Enter amount: ")?;

        let record = self.service.request(viewer.account, payer.id, amount)?;
        self.console.print_line(&format!(
            "Requested ${} from {}. Transfer id: {}",
            record.amount(),
            payer.username,
            record.id()
        ))
    }
}
