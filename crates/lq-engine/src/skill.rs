//! Skill estimation from recent answer history.
//!
//! Two signals feed the generators: the learner's weakest arithmetic
//! operation (from the bounded question history) and a difficulty tier
//! derived from rolling accuracy (for spelling).

use lq_core::{Difficulty, Operation, QuestionRecord};

/// The operation with the lowest historical accuracy.
///
/// Ties, operations without history, and an empty history all resolve toward
/// addition. An operation only displaces the current weakest when its
/// accuracy is strictly lower, so a perfect record never flags anything but
/// the default.
pub fn weakest_operation(history: &[QuestionRecord]) -> Operation {
    let mut totals = [0u32; 3];
    let mut corrects = [0u32; 3];
    for entry in history {
        let idx = op_index(entry.operation);
        totals[idx] += 1;
        if entry.correct {
            corrects[idx] += 1;
        }
    }

    let mut weakest = Operation::Add;
    let mut lowest = 1.0_f64;
    for op in Operation::all() {
        let idx = op_index(*op);
        if totals[idx] == 0 {
            continue;
        }
        let accuracy = f64::from(corrects[idx]) / f64::from(totals[idx]);
        if accuracy < lowest {
            lowest = accuracy;
            weakest = *op;
        }
    }
    weakest
}

/// Map rolling accuracy to a spelling difficulty tier.
///
/// 90 and above is hard, 50 through 89 is medium, below 50 is easy. Band
/// boundaries are inclusive of the lower bound.
pub fn tier_for_accuracy(accuracy: u8) -> Difficulty {
    if accuracy >= 90 {
        Difficulty::Hard
    } else if accuracy >= 50 {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

fn op_index(op: Operation) -> usize {
    match op {
        Operation::Add => 0,
        Operation::Sub => 1,
        Operation::Mul => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(operation: Operation, correct: bool) -> QuestionRecord {
        QuestionRecord {
            operation,
            correct,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_history_defaults_to_add() {
        assert_eq!(weakest_operation(&[]), Operation::Add);
    }

    #[test]
    fn finds_lowest_accuracy_operation() {
        let history = vec![
            entry(Operation::Add, true),
            entry(Operation::Add, true),
            entry(Operation::Sub, true),
            entry(Operation::Sub, false),
            entry(Operation::Mul, false),
            entry(Operation::Mul, false),
        ];
        assert_eq!(weakest_operation(&history), Operation::Mul);
    }

    #[test]
    fn tie_breaks_toward_add() {
        // Add and Sub both at 50%.
        let history = vec![
            entry(Operation::Add, true),
            entry(Operation::Add, false),
            entry(Operation::Sub, true),
            entry(Operation::Sub, false),
        ];
        assert_eq!(weakest_operation(&history), Operation::Add);
    }

    #[test]
    fn perfect_history_stays_on_add() {
        let history = vec![
            entry(Operation::Mul, true),
            entry(Operation::Sub, true),
        ];
        assert_eq!(weakest_operation(&history), Operation::Add);
    }

    #[test]
    fn unseen_operation_is_not_weakest() {
        // Only multiplication has history, and it is failing.
        let history = vec![entry(Operation::Mul, false)];
        assert_eq!(weakest_operation(&history), Operation::Mul);
    }

    #[test]
    fn accuracy_bands() {
        assert_eq!(tier_for_accuracy(0), Difficulty::Easy);
        assert_eq!(tier_for_accuracy(49), Difficulty::Easy);
        assert_eq!(tier_for_accuracy(50), Difficulty::Medium);
        assert_eq!(tier_for_accuracy(89), Difficulty::Medium);
        assert_eq!(tier_for_accuracy(90), Difficulty::Hard);
        assert_eq!(tier_for_accuracy(100), Difficulty::Hard);
    }
}
