//! Arithmetic question generation.
//!
//! Operand magnitudes scale with the learner's level; the operation choice
//! is biased toward the learner's weakest operation when history exists.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use lq_core::{Operation, QuestionRecord};

use crate::skill::weakest_operation;

/// Probability of drilling the weakest operation when history is available.
pub const WEAK_OP_BIAS: f64 = 0.7;

/// Cap on multiplication operands to keep products learnable.
pub const MUL_OPERAND_CAP: u32 = 12;

/// A generated arithmetic question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticQuestion {
    /// Question text, e.g. `"7 + 12"`.
    pub question: String,
    /// The exact numeric answer.
    pub answer: u32,
    /// The level the question was generated for.
    pub level: u32,
    /// The operation used.
    pub operation: Operation,
    /// Coarse difficulty score, `floor(10 * multiplier)`.
    pub difficulty: u32,
}

/// Generate the next arithmetic question for a learner.
///
/// With non-empty history the weakest operation is chosen with probability
/// [`WEAK_OP_BIAS`], otherwise uniformly. Subtraction operands are arranged
/// so the result is never negative.
pub fn generate(level: u32, history: &[QuestionRecord], rng: &mut StdRng) -> ArithmeticQuestion {
    let level = level.max(1);

    let operation = if !history.is_empty() && rng.random_bool(WEAK_OP_BIAS) {
        weakest_operation(history)
    } else {
        random_operation(rng)
    };

    let multiplier = 1.0 + 0.3 * f64::from(level);
    let bound = (10.0 * multiplier).floor() as u32;
    let difficulty = (multiplier * 10.0).floor() as u32;

    let (a, b, answer) = match operation {
        Operation::Add => {
            let a = rng.random_range(1..=bound);
            let b = rng.random_range(1..=bound);
            (a, b, a + b)
        }
        Operation::Sub => {
            let minuend = rng.random_range(level + 1..=bound + level);
            let subtrahend = rng.random_range(1..=minuend);
            (minuend, subtrahend, minuend - subtrahend)
        }
        Operation::Mul => {
            let cap = (level + 3).min(MUL_OPERAND_CAP);
            let a = rng.random_range(1..=cap);
            let b = rng.random_range(1..=cap);
            (a, b, a * b)
        }
    };

    ArithmeticQuestion {
        question: format!("{a} {} {b}", operation.symbol()),
        answer,
        level,
        operation,
        difficulty,
    }
}

fn random_operation(rng: &mut StdRng) -> Operation {
    let ops = Operation::all();
    ops[rng.random_range(0..ops.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::SeedableRng;

    fn entry(operation: Operation, correct: bool) -> QuestionRecord {
        QuestionRecord {
            operation,
            correct,
            timestamp: Utc::now(),
        }
    }

    fn evaluate(question: &ArithmeticQuestion) -> u32 {
        let mut parts = question.question.split_whitespace();
        let a: u32 = parts.next().unwrap().parse().unwrap();
        let op = parts.next().unwrap();
        let b: u32 = parts.next().unwrap().parse().unwrap();
        match op {
            "+" => a + b,
            "-" => a - b,
            "*" => a * b,
            other => panic!("unexpected operator {other}"),
        }
    }

    #[test]
    fn answers_are_exact() {
        let mut rng = StdRng::seed_from_u64(1);
        for level in 1..=8 {
            for _ in 0..200 {
                let q = generate(level, &[], &mut rng);
                assert_eq!(q.answer, evaluate(&q), "{}", q.question);
            }
        }
    }

    #[test]
    fn subtraction_never_negative() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..500 {
            let q = generate(3, &[], &mut rng);
            if q.operation == Operation::Sub {
                // answer is u32; also confirm the minuend dominates.
                let mut parts = q.question.split_whitespace();
                let a: u32 = parts.next().unwrap().parse().unwrap();
                parts.next();
                let b: u32 = parts.next().unwrap().parse().unwrap();
                assert!(a >= b, "{}", q.question);
            }
        }
    }

    #[test]
    fn addition_operands_within_level_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        let level = 2;
        let bound = 16; // floor(10 * (1 + 0.3 * 2))
        for _ in 0..300 {
            let q = generate(level, &[], &mut rng);
            if q.operation == Operation::Add {
                let mut parts = q.question.split_whitespace();
                let a: u32 = parts.next().unwrap().parse().unwrap();
                parts.next();
                let b: u32 = parts.next().unwrap().parse().unwrap();
                assert!((1..=bound).contains(&a));
                assert!((1..=bound).contains(&b));
            }
        }
    }

    #[test]
    fn multiplication_operands_capped() {
        let mut rng = StdRng::seed_from_u64(4);
        for level in [1, 5, 9, 30] {
            let cap = (level + 3).min(12);
            for _ in 0..200 {
                let q = generate(level, &[], &mut rng);
                if q.operation == Operation::Mul {
                    let mut parts = q.question.split_whitespace();
                    let a: u32 = parts.next().unwrap().parse().unwrap();
                    parts.next();
                    let b: u32 = parts.next().unwrap().parse().unwrap();
                    assert!(a <= cap && b <= cap, "{} at level {level}", q.question);
                }
            }
        }
    }

    #[test]
    fn difficulty_score_scales_with_level() {
        let mut rng = StdRng::seed_from_u64(5);
        let q1 = generate(1, &[], &mut rng);
        let q5 = generate(5, &[], &mut rng);
        assert_eq!(q1.difficulty, 13);
        assert_eq!(q5.difficulty, 25);
    }

    #[test]
    fn weak_operation_dominates_with_history() {
        let mut rng = StdRng::seed_from_u64(6);
        // Subtraction is failing badly.
        let mut history = Vec::new();
        for _ in 0..10 {
            history.push(entry(Operation::Sub, false));
            history.push(entry(Operation::Add, true));
            history.push(entry(Operation::Mul, true));
        }

        let sub_count = (0..300)
            .filter(|_| generate(2, &history, &mut rng).operation == Operation::Sub)
            .count();
        // 0.7 bias plus 1/3 of the uniform remainder ≈ 0.8; far above uniform.
        assert!(sub_count > 180, "only {sub_count} subtraction draws");
    }

    #[test]
    fn level_zero_is_treated_as_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let q = generate(0, &[], &mut rng);
        assert_eq!(q.level, 1);
        assert_eq!(q.difficulty, 13);
    }

    #[test]
    fn deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        let q1 = generate(3, &[], &mut rng1);
        let q2 = generate(3, &[], &mut rng2);
        assert_eq!(q1, q2);
    }
}
