use spsrs::{
    FrameOutcome, HandLandmarks, Move, Outcome, RoundController, RoundOptions, RoundPhase,
    RoundResult, RoundSnapshot, TickOutcome,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct WasmGame {
    controller: RoundController,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            controller: RoundController::new(RoundOptions::default(), seed as u64),
        }
    }

    pub fn with_options(seed: u32, countdown_from: u8, announce: bool) -> Self {
        let options = RoundOptions::default()
            .with_countdown_from(countdown_from)
            .with_announce_countdown(announce);
        Self {
            controller: RoundController::new(options, seed as u64),
        }
    }

    /// Epoch the page's countdown interval should be armed with.
    pub fn epoch(&self) -> u32 {
        self.controller.epoch().get()
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.controller.options.tick_interval_ms
    }

    pub fn tick(&self, epoch: u32) -> Result<JsValue, JsValue> {
        let outcome = self.controller.tick(epoch.into());
        to_js_value(&JsTick::from(outcome))
    }

    /// Takes the detector's hands as a flat `x, y` buffer, 42 values per
    /// hand. An empty buffer means no hand was found.
    pub fn submit_landmarks(&self, values: &[f32]) -> Result<JsValue, JsValue> {
        let hand = HandLandmarks::first_from_flat(values).map_err(js_err)?;
        let outcome = self.controller.submit_hand(hand.as_ref());
        to_js_value(&JsFrame::from(outcome))
    }

    pub fn reset(&self) -> u32 {
        self.controller.reset().get()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.controller.snapshot()))
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    epoch: u32,
    countdown: u8,
    can_capture: bool,
    locked: bool,
    countdown_word: Option<&'static str>,
    player_move: Option<&'static str>,
    computer_move: Option<&'static str>,
    result: Option<&'static str>,
    player_score: u32,
    computer_score: u32,
}

impl From<RoundSnapshot> for Snapshot {
    fn from(snapshot: RoundSnapshot) -> Self {
        Self {
            phase: phase_to_str(snapshot.phase),
            epoch: snapshot.epoch.get(),
            countdown: snapshot.countdown,
            can_capture: snapshot.can_capture,
            locked: snapshot.locked,
            countdown_word: snapshot.countdown_word.map(Move::as_str),
            player_move: snapshot.player_move.map(Move::as_str),
            computer_move: snapshot.computer_move.map(Move::as_str),
            result: snapshot.result.map(Outcome::as_str),
            player_score: snapshot.scores.player,
            computer_score: snapshot.scores.computer,
        }
    }
}

#[derive(Serialize)]
struct JsTick {
    kind: &'static str,
    remaining: Option<u8>,
    word: Option<&'static str>,
    /// The page should clear its interval.
    done: bool,
}

impl From<TickOutcome> for JsTick {
    fn from(outcome: TickOutcome) -> Self {
        let (kind, remaining, word) = match outcome {
            TickOutcome::Stale => ("Stale", None, None),
            TickOutcome::Counting { remaining, word } => {
                ("Counting", Some(remaining), word.map(Move::as_str))
            }
            TickOutcome::Opened => ("Opened", Some(0), None),
            TickOutcome::Idle => ("Idle", None, None),
        };

        Self {
            kind,
            remaining,
            word,
            done: outcome.is_terminal(),
        }
    }
}

#[derive(Serialize)]
struct JsFrame {
    kind: &'static str,
    round: Option<JsRoundResult>,
    /// Epoch to arm the next countdown with, set once a round resolves.
    next_epoch: Option<u32>,
}

impl From<FrameOutcome> for JsFrame {
    fn from(outcome: FrameOutcome) -> Self {
        let (kind, round, next_epoch) = match outcome {
            FrameOutcome::Locked => ("Locked", None, None),
            FrameOutcome::NoHand => ("NoHand", None, None),
            FrameOutcome::Unrecognized => ("Unrecognized", None, None),
            FrameOutcome::Resolved { result, next } => {
                ("Resolved", Some(JsRoundResult::from(result)), Some(next.get()))
            }
        };

        Self {
            kind,
            round,
            next_epoch,
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    player: &'static str,
    computer: &'static str,
    outcome: &'static str,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            player: result.player.as_str(),
            computer: result.computer.as_str(),
            outcome: result.outcome.as_str(),
        }
    }
}

fn phase_to_str(phase: RoundPhase) -> &'static str {
    match phase {
        RoundPhase::Countdown => "Countdown",
        RoundPhase::Open => "Open",
        RoundPhase::Resolved => "Resolved",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
