//! Menu choices for the top-level and in-session menus

use std::fmt;
use std::str::FromStr;

use super::result::Error;

/// Options on the top-level menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    CreateAccount,
    AccessAccount,
    Exit,
}

/// Options available once a session is authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMenuChoice {
    BalanceInquiry,
    Deposit,
    Withdraw,
    Exit,
}

impl MainMenuChoice {
    pub const ALL: [MainMenuChoice; 3] = [
        MainMenuChoice::CreateAccount,
        MainMenuChoice::AccessAccount,
        MainMenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainMenuChoice::CreateAccount => "Create Account",
            MainMenuChoice::AccessAccount => "Access Account",
            MainMenuChoice::Exit => "Exit",
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            MainMenuChoice::CreateAccount => 1,
            MainMenuChoice::AccessAccount => 2,
            MainMenuChoice::Exit => 3,
        }
    }
}

impl SessionMenuChoice {
    pub const ALL: [SessionMenuChoice; 4] = [
        SessionMenuChoice::BalanceInquiry,
        SessionMenuChoice::Deposit,
        SessionMenuChoice::Withdraw,
        SessionMenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SessionMenuChoice::BalanceInquiry => "Balance Inquiry",
            SessionMenuChoice::Deposit => "Deposit",
            SessionMenuChoice::Withdraw => "Withdraw",
            SessionMenuChoice::Exit => "Exit",
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            SessionMenuChoice::BalanceInquiry => 1,
            SessionMenuChoice::Deposit => 2,
            SessionMenuChoice::Withdraw => 3,
            SessionMenuChoice::Exit => 4,
        }
    }
}

impl FromStr for MainMenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| s.parse::<u8>().ok() == Some(c.number()))
            .ok_or_else(|| Error::InvalidMenuChoice(s.to_string()))
    }
}

impl FromStr for SessionMenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| s.parse::<u8>().ok() == Some(c.number()))
            .ok_or_else(|| Error::InvalidMenuChoice(s.to_string()))
    }
}

impl fmt::Display for MainMenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl fmt::Display for SessionMenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
