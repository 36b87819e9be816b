//! Menu text and menu option parsing

pub const GREETING: [&str; 3] = [
    "*********************",
    "* Welcome to TEnmo! *",
    "*********************",
];

pub const LOGIN_MENU: [&str; 5] = ["", "1: Register", "2: Login", "0: Exit", ""];

pub const MAIN_MENU: [&str; 8] = [
    "",
    "1: View your current balance",
    "2: View your past transfers",
    "3: View your pending requests",
    "4: Send TE bucks",
    "5: Request TE bucks",
    "0: Exit",
    "",
];

pub const PENDING_ACTION_MENU: [&str; 4] = [
    "1: Approve",
    "2: Reject",
    "0: Don't approve or reject",
    "---------",
];

pub const MENU_PROMPT: &str = "Please choose an option: ";
pub const INVALID_MENU_SELECTION: &str = "Invalid Selection";

/// Options on the login menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOption {
    Register,
    Login,
    Exit,
}

impl TryFrom<i64> for LoginOption {
    type Error = i64;

    fn try_from(selection: i64) -> Result<Self, Self::Error> {
        match selection {
            1 => Ok(LoginOption::Register),
            2 => Ok(LoginOption::Login),
            0 => Ok(LoginOption::Exit),
            other => Err(other),
        }
    }
}

/// Options on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainOption {
    Balance,
    History,
    Pending,
    Send,
    Request,
    Exit,
}

impl TryFrom<i64> for MainOption {
    type Error = i64;

    fn try_from(selection: i64) -> Result<Self, Self::Error> {
        match selection {
            1 => Ok(MainOption::Balance),
            2 => Ok(MainOption::History),
            3 => Ok(MainOption::Pending),
            4 => Ok(MainOption::Send),
            5 => Ok(MainOption::Request),
            0 => Ok(MainOption::Exit),
            other => Err(other),
        }
    }
}

/// What to do with a selected pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Approve,
    Reject,
    Leave,
}

impl TryFrom<i64> for PendingAction {
    type Error = i64;

    fn try_from(selection: i64) -> Result<Self, Self::Error> {
        match selection {
            1 => Ok(PendingAction::Approve),
            2 => Ok(PendingAction::Reject),
            0 => Ok(PendingAction::Leave),
            other => Err(other),
        }
    }
}
