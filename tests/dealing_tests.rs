//! Dealing integration tests.
//!
//! End-to-end exercises of the dealer: the opening sequence, starting
//! hands, deck exhaustion, and pausing a deal in flight.

use cardtable::actions::{ActionBatchManager, ActionRunner, Completion};
use cardtable::cards::{Card, CardCollection, CardColor, Table};
use cardtable::core::{GameConfig, TickContext};
use cardtable::deal::Dealer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn setup(seed: u64, names: &[&str], config: GameConfig) -> (ActionRunner, Rc<RefCell<Table>>, Dealer) {
    let runner = ActionRunner::new();
    let batches = ActionBatchManager::new(runner.clone());
    let table = Rc::new(RefCell::new(Table::new(seed)));
    let dealer = Dealer::new(batches, table.clone(), config, names);
    (runner, table, dealer)
}

fn drain(runner: &ActionRunner, dealer: &Dealer) -> u32 {
    let ctx = TickContext::new(0.1);
    let mut ticks = 0;
    while dealer.batches().is_processing() || !runner.is_idle() {
        runner.tick(&ctx);
        ticks += 1;
        assert!(ticks < 100_000, "deal did not converge");
    }
    ticks
}

/// The full opening: wait, shuffle, deal, then the drained callback.
#[test]
fn test_opening_sequence_ends_with_dealt_hands() {
    let config = GameConfig::new().with_starting_cards(4);
    let (runner, table, dealer) = setup(42, &["you", "left", "right"], config);
    let finished = Rc::new(Cell::new(false));

    dealer.queue_opening();
    dealer.queue_starting_hands();

    let flag = finished.clone();
    dealer.start(Completion::new(move || flag.set(true)));
    drain(&runner, &dealer);

    assert!(finished.get());
    let table = table.borrow();
    for &pile in dealer.player_piles() {
        assert_eq!(table.pile(pile).unwrap().len(), 4);
    }
    assert_eq!(table.deck_len(), 76 - 3 * 4);
    assert!(table.pile(dealer.middle_pile()).unwrap().is_empty());
}

/// Deals happen one card at a time, round-robin: after the first card
/// lands somewhere, hand sizes never differ by more than one.
#[test]
fn test_deal_is_one_card_at_a_time() {
    let config = GameConfig::new().with_starting_cards(3);
    let (runner, table, dealer) = setup(7, &["a", "b"], config);
    let ctx = TickContext::new(0.1);

    dealer.queue_starting_hands();
    dealer.start(Completion::none());

    let mut max_spread = 0usize;
    while dealer.batches().is_processing() {
        runner.tick(&ctx);
        let table = table.borrow();
        let sizes: Vec<usize> = dealer
            .player_piles()
            .iter()
            .map(|&p| table.pile(p).unwrap().len())
            .collect();
        let spread = sizes.iter().max().unwrap() - sizes.iter().min().unwrap();
        max_spread = max_spread.max(spread);
    }

    assert!(max_spread <= 1, "hands grew unevenly: spread {max_spread}");
}

/// When the deck runs dry before a deal, the dealer reclaims the middle
/// pile and keeps dealing.
#[test]
fn test_dry_deck_reclaims_middle_pile() {
    let runner = ActionRunner::new();
    let batches = ActionBatchManager::new(runner.clone());
    // Empty deck: everything that can be dealt must come from the middle.
    let table = Rc::new(RefCell::new(Table::with_collection(
        1,
        CardCollection::new(),
    )));
    let config = GameConfig::new().with_starting_cards(1);
    let dealer = Dealer::new(batches, table.clone(), config, &["solo"]);

    table
        .borrow_mut()
        .pile_mut(dealer.middle_pile())
        .unwrap()
        .add(Card::new(CardColor::Red, 5));

    dealer.queue_starting_hands();
    dealer.start(Completion::none());
    drain(&runner, &dealer);

    let table = table.borrow();
    assert_eq!(
        table.pile(dealer.player_piles()[0]).unwrap().top(),
        Some(Card::new(CardColor::Red, 5))
    );
    assert!(table.pile(dealer.middle_pile()).unwrap().is_empty());
}

/// With nothing left anywhere, draws degrade and the deal still
/// finishes instead of stalling.
#[test]
fn test_exhausted_table_degrades_without_stalling() {
    let runner = ActionRunner::new();
    let batches = ActionBatchManager::new(runner.clone());
    let table = Rc::new(RefCell::new(Table::with_collection(
        1,
        CardCollection::new(),
    )));
    let config = GameConfig::new().with_starting_cards(5);
    let dealer = Dealer::new(batches, table.clone(), config, &["solo"]);
    let finished = Rc::new(Cell::new(false));

    dealer.queue_starting_hands();
    let flag = finished.clone();
    dealer.start(Completion::new(move || flag.set(true)));
    drain(&runner, &dealer);

    assert!(finished.get(), "drain must complete despite empty table");
    assert!(table.borrow().pile(dealer.player_piles()[0]).unwrap().is_empty());
}

/// Pausing mid-deal freezes the cards where they are; resuming finishes
/// the deal with nothing lost.
#[test]
fn test_pause_freezes_deal_in_flight() {
    let config = GameConfig::new().with_starting_cards(2);
    let (runner, table, dealer) = setup(9, &["a", "b"], config);
    let ctx = TickContext::new(0.1);

    dealer.queue_starting_hands();
    dealer.start(Completion::none());

    for _ in 0..8 {
        runner.tick(&ctx);
    }

    runner.set_paused(true);
    let snapshot: Vec<usize> = {
        let table = table.borrow();
        dealer
            .player_piles()
            .iter()
            .map(|&p| table.pile(p).unwrap().len())
            .collect()
    };

    for _ in 0..50 {
        runner.tick(&ctx);
    }
    {
        let table = table.borrow();
        let now: Vec<usize> = dealer
            .player_piles()
            .iter()
            .map(|&p| table.pile(p).unwrap().len())
            .collect();
        assert_eq!(snapshot, now, "no cards may land while paused");
    }

    runner.set_paused(false);
    drain(&runner, &dealer);

    let table = table.borrow();
    for &pile in dealer.player_piles() {
        assert_eq!(table.pile(pile).unwrap().len(), 2);
    }
}

/// A faster time scale shortens the deal without changing its outcome.
#[test]
fn test_time_scale_speeds_up_the_deal() {
    let config = GameConfig::new().with_starting_cards(2);

    let mut tick_counts = Vec::new();
    for time_scale in [1.0, 5.0] {
        let (runner, table, dealer) = setup(11, &["a", "b"], config);
        let ctx = TickContext::new(0.1).with_time_scale(time_scale);

        dealer.queue_starting_hands();
        dealer.start(Completion::none());

        let mut ticks = 0;
        while dealer.batches().is_processing() {
            runner.tick(&ctx);
            ticks += 1;
            assert!(ticks < 100_000);
        }
        tick_counts.push(ticks);

        let table = table.borrow();
        for &pile in dealer.player_piles() {
            assert_eq!(table.pile(pile).unwrap().len(), 2);
        }
    }

    assert!(
        tick_counts[1] < tick_counts[0],
        "5x time scale must drain in fewer ticks ({tick_counts:?})"
    );
}
