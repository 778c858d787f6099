use std::collections::HashMap;

use qjack_engine::cards::{all_ranks, Rank};
use qjack_engine::errors::GameError;
use qjack_engine::shoe::Shoe;

fn rank_counts(cards: &[Rank]) -> HashMap<Rank, usize> {
    let mut counts = HashMap::new();
    for &c in cards {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

#[test]
fn single_deck_shoe_has_four_of_each_rank() {
    let shoe = Shoe::new(1, 42);
    assert_eq!(shoe.remaining(), 52);
    let counts = rank_counts(shoe.cards());
    assert_eq!(counts.len(), 13);
    for r in all_ranks() {
        assert_eq!(counts[&r], 4, "rank {} should appear 4 times", r);
    }
}

#[test]
fn multi_deck_shoe_scales_copies_per_rank() {
    let shoe = Shoe::new(6, 9);
    assert_eq!(shoe.remaining(), 312);
    for (_, n) in rank_counts(shoe.cards()) {
        assert_eq!(n, 24);
    }
}

#[test]
fn hi_lo_weights_of_a_fresh_deck_cancel_out() {
    let shoe = Shoe::new(1, 5);
    let total: i32 = shoe.cards().iter().map(|c| c.hi_lo()).sum();
    assert_eq!(total, 0);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let a = Shoe::new(2, 12345);
    let b = Shoe::new(2, 12345);
    assert_eq!(a.cards(), b.cards(), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let a = Shoe::new(1, 1);
    let b = Shoe::new(1, 2);
    assert_ne!(
        a.cards(),
        b.cards(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn drawing_past_the_last_card_is_an_error() {
    let mut shoe = Shoe::new(1, 77);
    for _ in 0..52 {
        shoe.draw().expect("should have 52 cards");
    }
    assert!(shoe.is_empty());
    assert_eq!(shoe.draw(), Err(GameError::EmptyShoe));
}

#[test]
fn draw_takes_from_the_top() {
    let mut shoe = Shoe::new(1, 3);
    let top = *shoe.cards().last().unwrap();
    assert_eq!(shoe.draw(), Ok(top));
    assert_eq!(shoe.remaining(), 51);
}
