//! Game engines behind the terminal arcade: blackjack, the password
//! "hacking" puzzle, snake and pong.
//!
//! Every engine here is a plain state machine. Callers feed inputs, read the
//! full state back after each operation, and decide what to draw and when.
//! No engine blocks, sleeps or renders; presentation pacing belongs to the
//! front end.

pub mod blackjack;
pub mod hacking;
pub mod pong;
pub mod snake;
