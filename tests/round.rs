//! Round controller integration tests.

use core::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use spsrs::{
    FINGERS, FrameOutcome, HandLandmarks, Keypoint, LANDMARK_COUNT, Move, Opponent, Outcome, RoundController,
    RoundEpoch, RoundOptions, RoundPhase, ScoreBoard, SeededOpponent, TickOutcome,
};

fn hand(raised: [bool; 4]) -> Vec<Keypoint> {
    let mut points = vec![Keypoint::new(0.5, 0.5); LANDMARK_COUNT];
    for (&(tip, _), up) in FINGERS.iter().zip(raised) {
        points[tip] = Keypoint::new(0.5, if up { 0.2 } else { 0.8 });
    }
    points
}

fn stone() -> Vec<Keypoint> {
    hand([false; 4])
}

fn paper() -> Vec<Keypoint> {
    hand([true; 4])
}

fn scissors() -> Vec<Keypoint> {
    hand([true, true, false, false])
}

fn frame_for(mv: Move) -> Vec<Keypoint> {
    match mv {
        Move::Stone => stone(),
        Move::Paper => paper(),
        Move::Scissors => scissors(),
    }
}

/// Ticks the current countdown until capture opens.
fn open_round<O: Opponent>(controller: &RoundController<O>) -> RoundEpoch {
    let epoch = controller.epoch();
    loop {
        match controller.tick(epoch) {
            TickOutcome::Counting { .. } => {}
            TickOutcome::Opened => return epoch,
            other => panic!("unexpected tick outcome {other:?}"),
        }
    }
}

fn fixed(mv: Move) -> impl FnMut() -> Move {
    move || mv
}

#[test]
fn new_controller_starts_counting_down() {
    let controller = RoundController::new(RoundOptions::default(), 1);
    let snapshot = controller.snapshot();

    assert_eq!(snapshot.phase, RoundPhase::Countdown);
    assert_eq!(snapshot.countdown, 3);
    assert!(snapshot.locked);
    assert!(!snapshot.can_capture);
    assert_eq!(snapshot.countdown_word, Some(Move::Stone));
    assert_eq!(snapshot.player_move, None);
    assert_eq!(snapshot.computer_move, None);
    assert_eq!(snapshot.result, None);
    assert_eq!(snapshot.scores, ScoreBoard::default());
}

#[test]
fn countdown_announces_words_then_opens() {
    let controller = RoundController::new(RoundOptions::default(), 1);
    let epoch = controller.epoch();

    assert_eq!(
        controller.tick(epoch),
        TickOutcome::Counting {
            remaining: 2,
            word: Some(Move::Paper)
        }
    );
    assert_eq!(controller.countdown_word(), Some(Move::Paper));
    assert!(controller.is_locked());

    assert_eq!(
        controller.tick(epoch),
        TickOutcome::Counting {
            remaining: 1,
            word: Some(Move::Scissors)
        }
    );
    assert!(controller.is_locked());

    assert_eq!(controller.tick(epoch), TickOutcome::Opened);
    assert_eq!(controller.phase(), RoundPhase::Open);
    assert_eq!(controller.countdown(), 0);
    assert_eq!(controller.countdown_word(), None);
    assert!(controller.can_capture());
    assert!(!controller.is_locked());
}

#[test]
fn silent_countdown_has_no_words() {
    let options = RoundOptions::default().with_announce_countdown(false);
    let controller = RoundController::new(options, 1);
    let epoch = controller.epoch();

    assert_eq!(controller.countdown_word(), None);
    assert_eq!(
        controller.tick(epoch),
        TickOutcome::Counting {
            remaining: 2,
            word: None
        }
    );
}

#[test]
fn long_countdown_cycles_words() {
    let options = RoundOptions::default().with_countdown_from(5);
    let controller = RoundController::new(options, 1);
    let epoch = controller.epoch();

    let mut words = vec![controller.countdown_word()];
    while let TickOutcome::Counting { word, .. } = controller.tick(epoch) {
        words.push(word);
    }

    assert_eq!(
        words,
        vec![
            Some(Move::Stone),
            Some(Move::Paper),
            Some(Move::Scissors),
            Some(Move::Stone),
            Some(Move::Paper),
        ]
    );
    assert_eq!(controller.phase(), RoundPhase::Open);
}

#[test]
fn terminal_tick_is_idempotent() {
    let controller = RoundController::new(RoundOptions::default(), 1);
    let epoch = open_round(&controller);

    for _ in 0..10 {
        let outcome = controller.tick(epoch);
        assert_eq!(outcome, TickOutcome::Idle);
        assert!(outcome.is_terminal());
        assert!(!controller.is_locked());
        assert_eq!(controller.countdown(), 0);
        assert_eq!(controller.phase(), RoundPhase::Open);
    }
}

#[test]
fn frames_during_countdown_are_discarded() {
    let controller = RoundController::with_opponent(RoundOptions::default(), fixed(Move::Scissors));
    let before = controller.snapshot();

    assert_eq!(controller.submit_frame(&stone()), FrameOutcome::Locked);
    controller.tick(controller.epoch());
    assert_eq!(controller.submit_frame(&paper()), FrameOutcome::Locked);

    let after = controller.snapshot();
    assert_eq!(after.scores, before.scores);
    assert_eq!(after.player_move, None);
    assert_eq!(after.countdown, 2);
}

#[test]
fn empty_and_ambiguous_frames_change_nothing() {
    let controller = RoundController::with_opponent(RoundOptions::default(), fixed(Move::Stone));
    open_round(&controller);
    let before = controller.snapshot();

    assert_eq!(controller.submit_frame(&[]), FrameOutcome::NoHand);
    assert_eq!(controller.submit_hand(None), FrameOutcome::NoHand);
    assert_eq!(
        controller.submit_frame(&hand([true, false, false, false])),
        FrameOutcome::Unrecognized
    );
    assert_eq!(
        controller.submit_frame(&hand([true, true, true, false])),
        FrameOutcome::Unrecognized
    );
    assert_eq!(
        controller.submit_frame(&stone()[..10]),
        FrameOutcome::Unrecognized
    );

    assert_eq!(controller.snapshot(), before);
    assert!(!controller.is_locked());
}

#[test]
fn stone_against_each_computer_move() {
    let cases = [
        (Move::Scissors, Outcome::Win, ScoreBoard { player: 1, computer: 0 }),
        (Move::Stone, Outcome::Draw, ScoreBoard { player: 0, computer: 0 }),
        (Move::Paper, Outcome::Lose, ScoreBoard { player: 0, computer: 1 }),
    ];

    for (computer, outcome, scores) in cases {
        let controller = RoundController::with_opponent(RoundOptions::default(), fixed(computer));
        let opened = open_round(&controller);

        let FrameOutcome::Resolved { result, next } = controller.submit_frame(&stone()) else {
            panic!("stone frame should resolve against {computer}");
        };

        assert_eq!(result.player, Move::Stone);
        assert_eq!(result.computer, computer);
        assert_eq!(result.outcome, outcome);
        assert_eq!(controller.scores(), scores);

        // The next round is already counting down, draws included.
        assert_ne!(next, opened);
        assert_eq!(controller.epoch(), next);
        assert_eq!(controller.phase(), RoundPhase::Countdown);
        assert_eq!(controller.countdown(), 3);
        assert!(controller.is_locked());
        assert!(!controller.can_capture());

        // The resolved round stays visible during the next countdown.
        assert_eq!(controller.player_move(), Some(Move::Stone));
        assert_eq!(controller.computer_move(), Some(computer));
        assert_eq!(controller.result(), Some(outcome));
    }
}

#[test]
fn only_first_recognized_frame_resolves() {
    let picks = Cell::new(0);
    let opponent = || {
        picks.set(picks.get() + 1);
        Move::Stone
    };
    let controller = RoundController::with_opponent(RoundOptions::default(), opponent);
    open_round(&controller);

    let outcomes: Vec<FrameOutcome> = [scissors(), paper(), stone(), scissors()]
        .iter()
        .map(|frame| controller.submit_frame(frame))
        .collect();

    assert!(matches!(outcomes[0], FrameOutcome::Resolved { .. }));
    assert!(outcomes[1..].iter().all(|o| *o == FrameOutcome::Locked));
    assert_eq!(picks.get(), 1);
    assert!(controller.is_locked());
    assert_eq!(controller.player_move(), Some(Move::Scissors));
    assert_eq!(controller.scores(), ScoreBoard { player: 0, computer: 1 });
}

#[test]
fn concurrent_frames_resolve_once() {
    let controller = RoundController::new(RoundOptions::default(), 99);
    open_round(&controller);
    let frame = paper();
    let (controller, frame) = (&controller, frame.as_slice());

    let resolved = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(move || controller.submit_frame(frame)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|outcome| matches!(outcome, FrameOutcome::Resolved { .. }))
            .count()
    });

    assert_eq!(resolved, 1);
    assert!(controller.scores().decided() <= 1);
    assert_eq!(controller.phase(), RoundPhase::Countdown);
}

#[test]
fn panicking_opponent_leaves_round_open() {
    let mut first = true;
    let opponent = move || {
        if first {
            first = false;
            panic!("opponent failed");
        }
        Move::Scissors
    };
    let controller = RoundController::with_opponent(RoundOptions::default(), opponent);
    let epoch = open_round(&controller);

    let caught = panic::catch_unwind(AssertUnwindSafe(|| controller.submit_frame(&stone())));
    assert!(caught.is_err());

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.phase, RoundPhase::Open);
    assert_eq!(snapshot.epoch, epoch);
    assert!(snapshot.can_capture);
    assert!(!snapshot.locked);
    assert_eq!(snapshot.scores, ScoreBoard::default());
    assert_eq!(snapshot.player_move, None);
    assert_eq!(controller.tick(epoch), TickOutcome::Idle);

    let FrameOutcome::Resolved { result, next } = controller.submit_frame(&stone()) else {
        panic!("round should still accept a move");
    };
    assert_eq!(result.outcome, Outcome::Win);
    assert_ne!(next, epoch);
    assert_eq!(controller.scores(), ScoreBoard { player: 1, computer: 0 });
}

#[test]
fn submit_hand_resolves_detected_hand() {
    let controller = RoundController::with_opponent(RoundOptions::default(), fixed(Move::Stone));
    open_round(&controller);

    let hand = HandLandmarks::from_points(&paper()).unwrap();
    let FrameOutcome::Resolved { result, .. } = controller.submit_hand(Some(&hand)) else {
        panic!("paper hand should resolve");
    };
    assert_eq!(result.player, Move::Paper);
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(controller.submit_hand(Some(&hand)), FrameOutcome::Locked);
}

#[test]
fn scores_count_decided_rounds() {
    let mut script = [Move::Scissors, Move::Stone, Move::Paper, Move::Paper, Move::Stone]
        .into_iter()
        .cycle();
    let controller =
        RoundController::with_opponent(RoundOptions::default(), move || script.next().unwrap());

    let plays = [Move::Stone, Move::Stone, Move::Scissors, Move::Paper, Move::Paper, Move::Stone];
    let mut decided = 0;
    let mut previous = ScoreBoard::default();

    for play in plays.into_iter().cycle().take(30) {
        open_round(&controller);
        let FrameOutcome::Resolved { result, .. } = controller.submit_frame(&frame_for(play)) else {
            panic!("open round should resolve");
        };
        if result.outcome != Outcome::Draw {
            decided += 1;
        }

        let scores = controller.scores();
        assert!(scores.player >= previous.player);
        assert!(scores.computer >= previous.computer);
        assert!(scores.decided() - previous.decided() <= 1);
        previous = scores;
    }

    assert_eq!(controller.scores().decided(), decided);
}

#[test]
fn reset_clears_session() {
    let controller = RoundController::with_opponent(RoundOptions::default(), fixed(Move::Scissors));
    open_round(&controller);
    controller.submit_frame(&stone());
    assert_eq!(controller.scores().player, 1);

    let stale = open_round(&controller);
    let epoch = controller.reset();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.epoch, epoch);
    assert_ne!(epoch, stale);
    assert_eq!(snapshot.phase, RoundPhase::Countdown);
    assert_eq!(snapshot.countdown, 3);
    assert!(snapshot.locked);
    assert!(!snapshot.can_capture);
    assert_eq!(snapshot.scores, ScoreBoard::default());
    assert_eq!(snapshot.player_move, None);
    assert_eq!(snapshot.computer_move, None);
    assert_eq!(snapshot.result, None);

    // Frames from the previous capture window are now discarded.
    assert_eq!(controller.submit_frame(&stone()), FrameOutcome::Locked);
}

#[test]
fn stale_timer_cannot_touch_new_round() {
    let controller = RoundController::new(RoundOptions::default(), 5);
    let old = controller.epoch();
    controller.tick(old);

    let current = controller.reset();
    for _ in 0..5 {
        assert_eq!(controller.tick(old), TickOutcome::Stale);
    }
    assert_eq!(controller.countdown(), 3);
    assert!(controller.is_locked());

    assert!(matches!(
        controller.tick(current),
        TickOutcome::Counting { remaining: 2, .. }
    ));
}

#[test]
fn zero_countdown_opens_immediately() {
    let options = RoundOptions::default().with_countdown_from(0);
    let controller = RoundController::with_opponent(options, fixed(Move::Paper));

    assert_eq!(controller.phase(), RoundPhase::Open);
    assert!(!controller.is_locked());
    assert_eq!(controller.countdown_word(), None);
    assert_eq!(controller.tick(controller.epoch()), TickOutcome::Idle);

    assert!(matches!(
        controller.submit_frame(&scissors()),
        FrameOutcome::Resolved { .. }
    ));
    assert_eq!(controller.phase(), RoundPhase::Open);
    assert_eq!(controller.scores(), ScoreBoard { player: 1, computer: 0 });
}

#[test]
fn seeded_opponent_is_deterministic_and_covers_all_moves() {
    let mut a = SeededOpponent::new(42);
    let mut b = SeededOpponent::new(42);
    let picks: Vec<Move> = (0..100).map(|_| a.pick()).collect();
    let again: Vec<Move> = (0..100).map(|_| b.pick()).collect();

    assert_eq!(picks, again);
    for mv in Move::ALL {
        assert!(picks.contains(&mv), "{mv} never drawn");
    }
}

#[test]
fn options_builder_sets_fields() {
    let options = RoundOptions::default()
        .with_countdown_from(4)
        .with_tick_interval_ms(250)
        .with_announce_countdown(false);

    assert_eq!(options.countdown_from, 4);
    assert_eq!(options.tick_interval_ms, 250);
    assert!(!options.announce_countdown);
    assert_eq!(RoundOptions::default().countdown_from, 3);
    assert_eq!(RoundOptions::default().tick_interval_ms, 1000);
}
