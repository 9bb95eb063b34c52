//! Integration tests for atm-core
//!
//! These tests drive the public API end to end: ledger operations directly,
//! and full menu sessions through a scripted terminal.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use atm_core::adapters::ScriptedTerminal;
use atm_core::config::Config;
use atm_core::domain::{Argon2Params, CredentialScheme};
use atm_core::services::{EntryPoint, Ledger};
use atm_core::{AtmContext, Error};

// ============================================================================
// Test Helpers
// ============================================================================

/// Context with default settings and a test entry point
fn create_test_context() -> AtmContext {
    AtmContext::new(Config::default(), EntryPoint::Test)
}

/// Argon2 parameters cheap enough for tests
fn cheap_argon2() -> CredentialScheme {
    CredentialScheme::Argon2(Argon2Params {
        time_cost: 1,
        memory_cost: 1024,
        parallelism: 1,
        hash_len: 32,
    })
}

/// A handful of representative account inputs
fn sample_accounts() -> Vec<(&'static str, &'static str, Decimal, &'static str)> {
    vec![
        ("1001", "Alice", dec!(100.0), "1234"),
        ("1002", "Bob O'Neil", dec!(0), "0000"),
        ("A-77", "Chloé Dupont", dec!(12345.67), "pw9Z"),
        ("0", "", dec!(-20), ""),
    ]
}

// ============================================================================
// Ledger Properties
// ============================================================================

#[test]
fn test_create_then_authenticate_returns_supplied_values() {
    let mut ledger = Ledger::default();
    for (id, name, balance, pin) in sample_accounts() {
        ledger.create_account(id, name, balance, pin).unwrap();
    }

    for (id, name, balance, pin) in sample_accounts() {
        let session = ledger.authenticate(id, pin).unwrap();
        assert_eq!(session.balance(), balance);
        assert_eq!(session.holder_name(), name);
        assert_eq!(session.identifier(), id);
    }
}

#[test]
fn test_wrong_pin_always_fails() {
    let mut ledger = Ledger::default();
    ledger.create_account("1001", "Alice", dec!(100), "1234").unwrap();

    let alphabet: Vec<char> = ('0'..='9').chain('a'..='z').chain('A'..='Z').collect();
    for &c in &alphabet {
        for candidate in [c.to_string(), format!("123{}", c), format!("{}234", c)] {
            let result = ledger.authenticate("1001", &candidate);
            if candidate == "1234" {
                assert!(result.is_ok());
            } else {
                assert!(matches!(result, Err(Error::InvalidCredential)), "{}", candidate);
            }
        }
    }
}

#[test]
fn test_duplicate_create_leaves_first_account() {
    let mut ledger = Ledger::default();
    ledger.create_account("1001", "Alice", dec!(100), "1234").unwrap();
    ledger.authenticate("1001", "1234").unwrap().deposit(dec!(5)).unwrap();

    let result = ledger.create_account("1001", "Alice", dec!(100), "1234");
    assert!(matches!(result, Err(Error::DuplicateAccount(_))));

    let account = ledger.find_account("1001").unwrap();
    assert_eq!(account.balance(), dec!(105));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_deposit_and_withdraw_arithmetic() {
    let amounts = [dec!(0.01), dec!(1), dec!(49.99), dec!(1000000), dec!(0.5)];
    let mut ledger = Ledger::default();
    ledger.create_account("1001", "Alice", dec!(10), "1234").unwrap();
    let mut session = ledger.authenticate("1001", "1234").unwrap();

    for amount in amounts {
        let before = session.balance();
        assert_eq!(session.deposit(amount).unwrap(), before + amount);
        assert_eq!(session.balance(), before + amount);
    }

    for amount in amounts {
        let before = session.balance();
        assert_eq!(session.withdraw(amount).unwrap(), before - amount);
    }
    assert_eq!(session.balance(), dec!(10));
}

#[test]
fn test_rejected_amounts_leave_balance_unchanged() {
    let mut ledger = Ledger::default();
    ledger.create_account("1001", "Alice", dec!(10), "1234").unwrap();
    let mut session = ledger.authenticate("1001", "1234").unwrap();

    for amount in [dec!(0), dec!(-0.01), dec!(-10)] {
        assert!(matches!(session.deposit(amount), Err(Error::InvalidAmount(_))));
        assert!(matches!(session.withdraw(amount), Err(Error::InvalidAmount(_))));
        assert_eq!(session.balance(), dec!(10));
    }

    for amount in [dec!(10.01), dec!(11), dec!(1000)] {
        assert!(matches!(
            session.withdraw(amount),
            Err(Error::InsufficientFunds { .. })
        ));
        assert_eq!(session.balance(), dec!(10));
    }
}

#[test]
fn test_alice_scenario() {
    let mut ledger = Ledger::default();
    ledger.create_account("1001", "Alice", dec!(100.0), "1234").unwrap();

    let mut session = ledger.authenticate("1001", "1234").unwrap();
    assert_eq!(session.deposit(dec!(50.0)).unwrap(), dec!(150.0));
    assert_eq!(session.balance(), dec!(150.0));

    match session.withdraw(dec!(200.0)) {
        Err(Error::InsufficientFunds { requested, available }) => {
            assert_eq!(requested, dec!(200.0));
            assert_eq!(available, dec!(150.0));
        }
        other => panic!("expected insufficient funds, got {:?}", other),
    }
    assert_eq!(session.balance(), dec!(150.0));

    assert_eq!(session.withdraw(dec!(150.0)).unwrap(), dec!(0.0));
    assert_eq!(session.balance(), Decimal::ZERO);
}

#[test]
fn test_unknown_account() {
    let mut ledger = Ledger::default();
    assert!(matches!(
        ledger.authenticate("9999", "1234"),
        Err(Error::AccountNotFound(_))
    ));
}

#[test]
fn test_hardened_ledger() {
    let mut ledger = Ledger::new(cheap_argon2());
    ledger.create_account("1001", "Alice", dec!(100), "1234").unwrap();

    assert_eq!(ledger.find_account("1001").unwrap().credential_scheme(), "argon2");
    assert!(matches!(
        ledger.authenticate("1001", "1235"),
        Err(Error::InvalidCredential)
    ));
    let mut session = ledger.authenticate("1001", "1234").unwrap();
    assert_eq!(session.withdraw(dec!(100)).unwrap(), dec!(0));
}

// ============================================================================
// Menu Sessions
// ============================================================================

#[test]
fn test_full_menu_session() {
    let mut ctx = create_test_context();
    let mut terminal = ScriptedTerminal::new([
        "1", "1001", "Alice", "100.0", "1234",
        "2", "1001", "1234",
        "2", "50.0",
        "3", "200.0",
        "3", "150.0",
        "1",
        "4",
        "3",
    ]);

    ctx.run(&mut terminal).unwrap();

    assert_eq!(
        terminal.transcript(),
        vec![
            "Account created successfully!",
            "Deposit successful! New balance: 150.00",
            "Insufficient funds for withdrawal. Current balance: 150.00",
            "Withdrawal successful! New balance: 0.00",
            "Current balance: 0.00",
            "Exiting...",
            "Thank you for using the ATM Controller. Goodbye!",
        ]
    );
    assert_eq!(terminal.prompts.len(), 17);
    assert_eq!(ctx.ledger.find_account("1001").unwrap().balance(), dec!(0));
}

#[test]
fn test_failed_access_returns_to_main_menu() {
    let mut ctx = create_test_context();
    ctx.ledger.create_account("1001", "Alice", dec!(100), "1234").unwrap();

    let mut terminal = ScriptedTerminal::new([
        "2", "9999",
        "2", "1001", "1111",
        "2", "1001", "1234", "1", "4",
        "3",
    ]);
    ctx.run(&mut terminal).unwrap();

    assert_eq!(
        terminal.errors(),
        vec!["Account not found.", "Invalid PIN. Access denied."]
    );
    assert!(terminal
        .transcript()
        .contains(&"Current balance: 100.00".to_string()));
}

#[test]
fn test_session_log_events() {
    let mut ctx = create_test_context();
    let mut terminal = ScriptedTerminal::new([
        "1", "1001", "Alice", "100", "1234",
        "2", "1001", "1234", "3", "500", "4",
        "3",
    ]);
    ctx.run(&mut terminal).unwrap();

    let mut events: Vec<String> = ctx.logger.get_recent(100).into_iter().map(|e| e.event).collect();
    events.reverse();
    assert_eq!(
        events,
        vec![
            "atm_started",
            "command_executed",
            "account_created",
            "command_executed",
            "session_started",
            "command_executed",
            "withdraw_failed",
            "session_ended",
            "atm_stopped",
        ]
    );
    assert_eq!(ctx.logger.get_errors(10).len(), 1);
}

#[test]
fn test_currency_formatting_from_config() {
    let config = Config {
        currency_symbol: "$".to_string(),
        ..Config::default()
    };
    let mut ctx = AtmContext::new(config, EntryPoint::Test);
    ctx.ledger.create_account("1001", "Alice", dec!(7.5), "1234").unwrap();

    let mut terminal = ScriptedTerminal::new(["2", "1001", "1234", "1", "4", "3"]);
    ctx.run(&mut terminal).unwrap();

    assert!(terminal
        .transcript()
        .contains(&"Current balance: $7.50".to_string()));
}

#[test]
fn test_independent_contexts() {
    let mut a = create_test_context();
    let b = create_test_context();
    a.ledger.create_account("1001", "Alice", dec!(1), "1234").unwrap();

    assert_eq!(a.ledger.len(), 1);
    assert!(b.ledger.is_empty());
}
