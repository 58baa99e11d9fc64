// ═══════════════════════════════════════════════════════════════════
// Mood Tests — MoodService resolution order, tiers, dialogue
// ═══════════════════════════════════════════════════════════════════

use mochi_budget_core::models::mood::{Mood, MoodInput, PendingEntry};
use mochi_budget_core::models::transaction::TransactionKind;
use mochi_budget_core::services::mood_service::{spend_ratio_percent, MoodService};

fn steady(spent_today: f64, daily_limit: f64) -> MoodInput {
    MoodInput {
        spent_today,
        daily_limit,
        pending: None,
        override_mood: None,
    }
}

fn pending_expense(spent_today: f64, daily_limit: f64, amount: f64) -> MoodInput {
    MoodInput {
        pending: Some(PendingEntry::with_amount(TransactionKind::Expense, amount)),
        ..steady(spent_today, daily_limit)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Steady state
// ═══════════════════════════════════════════════════════════════════

mod steady_state {
    use super::*;

    #[test]
    fn tiers_at_inclusive_boundaries() {
        let svc = MoodService::new();
        assert_eq!(svc.resolve(&steady(0.0, 100.0)), Mood::Happy);
        assert_eq!(svc.resolve(&steady(49.99, 100.0)), Mood::Happy);
        assert_eq!(svc.resolve(&steady(50.0, 100.0)), Mood::Anxious);
        assert_eq!(svc.resolve(&steady(74.99, 100.0)), Mood::Anxious);
        assert_eq!(svc.resolve(&steady(75.0, 100.0)), Mood::Panic);
        assert_eq!(svc.resolve(&steady(90.0, 100.0)), Mood::Sad);
        assert_eq!(svc.resolve(&steady(100.0, 100.0)), Mood::Dead);
        assert_eq!(svc.resolve(&steady(250.0, 100.0)), Mood::Dead);
    }

    #[test]
    fn never_begging_or_euphoric() {
        let svc = MoodService::new();
        for cents in 0..=20_000 {
            let mood = svc.resolve(&steady(f64::from(cents) / 100.0, 100.0));
            assert_ne!(mood, Mood::Begging);
            assert_ne!(mood, Mood::Euphoric);
        }
    }

    #[test]
    fn severity_non_decreasing_as_spending_grows() {
        let svc = MoodService::new();
        for limit in [1.0, 37.5, 83.333, 100.0, 2500.0] {
            let mut last = 0;
            for step in 0..=300 {
                let spent = limit * f64::from(step) / 200.0;
                let severity = svc.resolve(&steady(spent, limit)).severity();
                assert!(severity >= last, "limit={limit} spent={spent}");
                last = severity;
            }
        }
    }

    #[test]
    fn zero_limit_is_dead_not_a_fault() {
        let svc = MoodService::new();
        assert_eq!(svc.resolve(&steady(0.0, 0.0)), Mood::Dead);
        assert_eq!(svc.resolve(&steady(5.0, 0.0)), Mood::Dead);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Pending expense preview
// ═══════════════════════════════════════════════════════════════════

mod preview {
    use super::*;

    #[test]
    fn eighty_percent_preview_is_panic() {
        let svc = MoodService::new();
        assert_eq!(svc.resolve(&pending_expense(0.0, 100.0, 80.0)), Mood::Panic);
    }

    #[test]
    fn tiers_use_strict_boundaries() {
        let svc = MoodService::new();
        assert_eq!(svc.resolve(&pending_expense(0.0, 100.0, 50.0)), Mood::Begging);
        assert_eq!(svc.resolve(&pending_expense(0.0, 100.0, 50.5)), Mood::Anxious);
        assert_eq!(svc.resolve(&pending_expense(0.0, 100.0, 75.0)), Mood::Anxious);
        assert_eq!(svc.resolve(&pending_expense(0.0, 100.0, 75.5)), Mood::Panic);
        assert_eq!(svc.resolve(&pending_expense(0.0, 100.0, 90.0)), Mood::Panic);
        assert_eq!(svc.resolve(&pending_expense(0.0, 100.0, 90.5)), Mood::Sad);
        assert_eq!(svc.resolve(&pending_expense(0.0, 100.0, 100.0)), Mood::Sad);
        assert_eq!(svc.resolve(&pending_expense(0.0, 100.0, 100.5)), Mood::Dead);
    }

    #[test]
    fn boundary_differs_from_steady_state() {
        let svc = MoodService::new();
        // Same 75% ratio: preview stays ANXIOUS, steady state is already PANIC.
        assert_eq!(svc.resolve(&pending_expense(25.0, 100.0, 50.0)), Mood::Anxious);
        assert_eq!(svc.resolve(&steady(75.0, 100.0)), Mood::Panic);
    }

    #[test]
    fn adds_pending_amount_to_spent_today() {
        let svc = MoodService::new();
        assert_eq!(svc.resolve(&pending_expense(60.0, 100.0, 35.0)), Mood::Sad);
    }

    #[test]
    fn small_amount_is_begging() {
        let svc = MoodService::new();
        assert_eq!(svc.resolve(&pending_expense(0.0, 100.0, 1.0)), Mood::Begging);
        assert_eq!(svc.resolve(&pending_expense(0.0, 100.0, 0.0)), Mood::Begging);
    }

    #[test]
    fn empty_amount_falls_back_to_steady() {
        let svc = MoodService::new();
        let input = MoodInput {
            pending: Some(PendingEntry::new(TransactionKind::Expense)),
            ..steady(60.0, 100.0)
        };
        assert_eq!(svc.resolve(&input), Mood::Anxious);
    }

    #[test]
    fn negative_amount_falls_back_to_steady() {
        let svc = MoodService::new();
        // Not previewed as 90% (PANIC): the amount is ignored, 95% steady is SAD.
        assert_eq!(svc.resolve(&pending_expense(95.0, 100.0, -5.0)), Mood::Sad);
        assert_eq!(svc.resolve(&pending_expense(10.0, 100.0, -5.0)), Mood::Happy);
        assert_eq!(svc.resolve(&pending_expense(10.0, 100.0, -0.01)), Mood::Happy);
    }

    #[test]
    fn non_finite_amount_falls_back_to_steady() {
        let svc = MoodService::new();
        assert_eq!(svc.resolve(&pending_expense(10.0, 100.0, f64::NAN)), Mood::Happy);
    }

    #[test]
    fn zero_limit_preview_is_dead() {
        let svc = MoodService::new();
        assert_eq!(svc.resolve(&pending_expense(0.0, 0.0, 1.0)), Mood::Dead);
    }

    #[test]
    fn pending_income_is_euphoric_regardless_of_amount() {
        let svc = MoodService::new();
        for pending in [
            PendingEntry::new(TransactionKind::Income),
            PendingEntry::with_amount(TransactionKind::Income, 0.01),
            PendingEntry::with_amount(TransactionKind::Income, 1_000_000.0),
        ] {
            let input = MoodInput {
                pending: Some(pending),
                ..steady(500.0, 100.0)
            };
            assert_eq!(svc.resolve(&input), Mood::Euphoric);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Override
// ═══════════════════════════════════════════════════════════════════

mod override_mood {
    use super::*;

    #[test]
    fn wins_over_steady_state() {
        let svc = MoodService::new();
        let input = MoodInput {
            override_mood: Some(Mood::Euphoric),
            ..steady(500.0, 100.0)
        };
        assert_eq!(svc.resolve(&input), Mood::Euphoric);
    }

    #[test]
    fn wins_over_pending_expense() {
        let svc = MoodService::new();
        let input = MoodInput {
            override_mood: Some(Mood::Sad),
            ..pending_expense(0.0, 100.0, 10.0)
        };
        assert_eq!(svc.resolve(&input), Mood::Sad);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Ratio, severity, dialogue
// ═══════════════════════════════════════════════════════════════════

mod helpers {
    use super::*;

    #[test]
    fn ratio_is_percent() {
        assert!((spend_ratio_percent(50.0, 83.333_333_333) - 60.0).abs() < 1e-6);
    }

    #[test]
    fn ratio_with_zero_limit_is_infinite() {
        assert_eq!(spend_ratio_percent(0.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn severity_order() {
        assert!(Mood::Happy.severity() < Mood::Anxious.severity());
        assert!(Mood::Anxious.severity() < Mood::Panic.severity());
        assert!(Mood::Panic.severity() < Mood::Sad.severity());
        assert!(Mood::Sad.severity() < Mood::Dead.severity());
    }

    #[test]
    fn steady_and_preview_tier_functions() {
        assert_eq!(MoodService::steady_tier(10.0), Mood::Happy);
        assert_eq!(MoodService::preview_tier(10.0), Mood::Begging);
        assert_eq!(MoodService::steady_tier(100.0), Mood::Dead);
        assert_eq!(MoodService::preview_tier(100.0), Mood::Sad);
    }

    #[test]
    fn dialogue_steady() {
        assert_eq!(Mood::Happy.dialogue(None), "Purrfect! Keep saving!");
        assert_eq!(Mood::Euphoric.dialogue(None), "I LOVE MONEY! YAY!");
        assert_eq!(Mood::Dead.dialogue(None), "*Ghost Noises*");
        assert_eq!(Mood::Begging.dialogue(None), "Meow.");
    }

    #[test]
    fn dialogue_while_entering_expense() {
        let p = Some(TransactionKind::Expense);
        assert_eq!(Mood::Begging.dialogue(p), "Please... I'm saving for a boat...");
        assert_eq!(Mood::Panic.dialogue(p), "NO! WE ARE BROKE! STOP!");
        // No expense-specific line for HAPPY: steady line is used.
        assert_eq!(Mood::Happy.dialogue(p), "Purrfect! Keep saving!");
    }

    #[test]
    fn dialogue_while_entering_income() {
        assert_eq!(Mood::Euphoric.dialogue(Some(TransactionKind::Income)), "Make it rain!");
        assert_eq!(Mood::Dead.dialogue(Some(TransactionKind::Income)), "Make it rain!");
    }

    #[test]
    fn display_is_uppercase() {
        assert_eq!(Mood::Panic.to_string(), "PANIC");
        assert_eq!(Mood::Begging.to_string(), "BEGGING");
    }
}
