//! CLI stone/paper/scissors example with a simulated capture adapter.
//!
//! Run with `RUST_LOG=debug` to see round transitions.

use core::time::Duration;
use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use spsrs::{
    FINGERS, FrameOutcome, Keypoint, LANDMARK_COUNT, Move, RoundController, RoundOptions,
    TickOutcome,
};

fn main() {
    env_logger::init();
    println!("Stone Paper Scissors CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = RoundOptions::default().with_tick_interval_ms(600);
    let controller = RoundController::new(options, seed);

    loop {
        run_countdown(&controller);

        loop {
            let input =
                prompt_line("Hand (s)tone (p)aper (x)scissors, (1)/(3) fingers, (n)o hand, (r)eset: ");
            let frame = match input.as_str() {
                "s" | "stone" => synthetic_hand(0),
                "p" | "paper" => synthetic_hand(4),
                "x" | "scissors" => synthetic_hand(2),
                "1" => synthetic_hand(1),
                "3" => synthetic_hand(3),
                "n" | "" => Vec::new(),
                "r" | "reset" => {
                    controller.reset();
                    println!("Scores cleared.");
                    break;
                }
                "q" | "quit" => return,
                _ => {
                    println!("Unknown input.");
                    continue;
                }
            };

            match controller.submit_frame(&frame) {
                FrameOutcome::Resolved { result, .. } => {
                    let scores = controller.scores();
                    println!(
                        "You: {} | Computer: {} => {}",
                        result.player, result.computer, result.outcome
                    );
                    println!("You {} : {} Computer", scores.player, scores.computer);
                    break;
                }
                FrameOutcome::NoHand => println!("No hand detected."),
                FrameOutcome::Unrecognized => println!("Gesture not recognized, try again."),
                FrameOutcome::Locked => println!("Capture is closed."),
            }
        }
    }
}

/// Drives the countdown like a page timer would, one tick per interval.
fn run_countdown(controller: &RoundController) {
    let epoch = controller.epoch();
    let interval = Duration::from_millis(u64::from(controller.options.tick_interval_ms));

    print_countdown(controller.countdown(), controller.countdown_word().map(Move::as_str));
    loop {
        thread::sleep(interval);
        match controller.tick(epoch) {
            TickOutcome::Counting { remaining, word } => {
                print_countdown(remaining, word.map(Move::as_str));
            }
            TickOutcome::Opened => {
                println!("Go!");
                return;
            }
            TickOutcome::Idle | TickOutcome::Stale => return,
        }
    }
}

fn print_countdown(value: u8, word: Option<&str>) {
    if value > 0 {
        println!("{value}... {}", word.unwrap_or_default());
    }
}

/// Builds a hand with the first `raised` non-thumb fingers extended.
fn synthetic_hand(raised: usize) -> Vec<Keypoint> {
    let mut points = vec![Keypoint::new(0.5, 0.6); LANDMARK_COUNT];
    for (finger, &(tip, base)) in FINGERS.iter().enumerate() {
        points[base] = Keypoint::new(0.5, 0.6);
        points[tip] = Keypoint::new(0.5, if finger < raised { 0.3 } else { 0.75 });
    }
    points
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return String::from("q"),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}
