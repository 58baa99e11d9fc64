// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use mochi_budget_core::errors::CoreError;
use mochi_budget_core::models::session::SessionPhase;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_budget_input() {
        let err = CoreError::InvalidBudgetInput("income missing".into());
        assert_eq!(err.to_string(), "Invalid budget input: income missing");
    }

    #[test]
    fn negative_budget() {
        let err = CoreError::NegativeBudget {
            income: 1000.0,
            savings: 1500.0,
        };
        assert_eq!(err.to_string(), "Savings target 1500 exceeds monthly income 1000");
    }

    #[test]
    fn wrong_phase() {
        let err = CoreError::WrongPhase(SessionPhase::Onboarding);
        assert_eq!(err.to_string(), "Operation not allowed while the session is ONBOARDING");
    }

    #[test]
    fn invalid_amount() {
        let err = CoreError::InvalidAmount(-2.5);
        assert_eq!(err.to_string(), "Transaction amount must be positive, got -2.5");
    }

    #[test]
    fn not_found() {
        let err = CoreError::NotFound("abc".into());
        assert_eq!(err.to_string(), "Transaction not found: abc");
    }

    #[test]
    fn duplicate_transaction() {
        let err = CoreError::DuplicateTransaction("abc".into());
        assert_eq!(err.to_string(), "Transaction already recorded: abc");
    }

    #[test]
    fn invalid_config() {
        let err = CoreError::InvalidConfig("bad".into());
        assert_eq!(err.to_string(), "Invalid configuration: bad");
    }

    #[test]
    fn unsupported_version() {
        let err = CoreError::UnsupportedVersion(9);
        assert_eq!(err.to_string(), "Unsupported file version: 9");
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("denied".into());
        assert_eq!(err.to_string(), "File I/O error: denied");
    }
}

// ── User-facing classification ──────────────────────────────────────

mod user_facing {
    use super::*;

    #[test]
    fn budget_errors_are_user_facing() {
        assert!(CoreError::InvalidBudgetInput(String::new()).is_user_facing());
        assert!(CoreError::NegativeBudget {
            income: 1.0,
            savings: 2.0
        }
        .is_user_facing());
    }

    #[test]
    fn silent_errors_are_not() {
        assert!(!CoreError::InvalidAmount(0.0).is_user_facing());
        assert!(!CoreError::NotFound(String::new()).is_user_facing());
        assert!(!CoreError::FileIO(String::new()).is_user_facing());
        assert!(!CoreError::WrongPhase(SessionPhase::Active).is_user_facing());
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::FileIO(ref m) if m.contains("gone")));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn from_bincode_error() {
        let bin_err = bincode::deserialize::<String>(&[0xFF]).unwrap_err();
        let err: CoreError = bin_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn question_mark_propagates() {
        fn parse(s: &str) -> Result<u32, CoreError> {
            Ok(serde_json::from_str(s)?)
        }
        assert!(parse("12").is_ok());
        assert!(parse("x").is_err());
    }
}
