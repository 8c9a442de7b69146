//! The dispenser controller
//!
//! [`Dispenser`] owns the candy stack, the spring and the status line, and
//! is the only thing that mutates them. Every user command goes through
//! [`Dispenser::execute`].

use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::candy::{Candy, CandyFactory};
use crate::command::Command;
use crate::config::SpringConfig;
use crate::display::DisplayState;
use crate::error::StackError;
use crate::spring::{Adjustment, Spring};
use crate::stack::Stack;

/// Status text shown whenever a command finds the stack empty
pub const EMPTY_MESSAGE: &str = "Error : Stack is empty";

/// Application state behind the dispenser window
#[derive(Debug, Clone)]
pub struct Dispenser<R = StdRng> {
    candies: Stack<Candy>,
    spring: Spring,
    display: DisplayState,
    factory: CandyFactory<R>,
}

impl Dispenser<StdRng> {
    /// Dispenser whose candies come from an entropy-seeded RNG
    pub fn new(spring: &SpringConfig) -> Self {
        Self::with_factory(spring, CandyFactory::from_entropy())
    }
}

impl<R: Rng> Dispenser<R> {
    pub fn with_factory(spring: &SpringConfig, factory: CandyFactory<R>) -> Self {
        Self {
            candies: Stack::new(),
            spring: Spring::new(spring),
            display: DisplayState::new(),
            factory,
        }
    }

    /// Run one user command
    pub fn execute(&mut self, command: Command) {
        debug!(%command, size = self.candies.len(), "executing command");
        match command {
            Command::Push => self.push_candy(),
            Command::Pop => self.pop_candy(),
            Command::Top => self.top_candy(),
            Command::IsEmpty => self.report_empty(),
            Command::Len => self.report_length(),
            Command::Reset => self.reset(),
        }
    }

    /// Load a new candy with a random color.
    ///
    /// The first candy rests on the uncompressed spring; each one after
    /// that compresses it by a step.
    pub fn push_candy(&mut self) {
        if !self.candies.is_empty() && !self.spring.adjust(Adjustment::Shrink) {
            debug!(extension = self.spring.extension(), "spring fully compressed");
        }
        let color = self.factory.random_color();
        let candy = self.factory.create(color);
        debug!(label = candy.label(), "pushed candy");
        self.candies.push(candy);
        self.display.reset();
    }

    /// Take the top candy out
    pub fn pop_candy(&mut self) {
        match self.candies.pop() {
            Ok(candy) => {
                self.spring.adjust(Adjustment::Grow);
                self.display.set_result(format!("Popped : {}", candy.label()));
            }
            Err(StackError::Empty) => self.display.set_error(EMPTY_MESSAGE),
        }
    }

    /// Show the top candy without removing it
    pub fn top_candy(&mut self) {
        match self.candies.peek() {
            Ok(candy) => {
                let message = format!("Top Candy Label : {}", candy.label());
                self.display.set_result(message);
            }
            Err(StackError::Empty) => self.display.set_error(EMPTY_MESSAGE),
        }
    }

    pub fn report_empty(&mut self) {
        if self.candies.is_empty() {
            self.display.set_error(EMPTY_MESSAGE);
        } else {
            self.display.set_result("Stack is not empty.");
        }
    }

    pub fn report_length(&mut self) {
        self.display
            .set_result(format!("Stack Length : {}", self.candies.len()));
    }

    /// Drop every candy and relax the spring
    pub fn reset(&mut self) {
        self.candies.clear();
        self.spring.reset();
        self.display.reset();
    }

    /// Candies currently loaded
    pub fn candies(&self) -> &Stack<Candy> {
        &self.candies
    }

    pub fn spring(&self) -> &Spring {
        &self.spring
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }
}
