//! Tokenizer running as a separate producer.
//!
//! The lexer runs on its own thread and hands tokens over a zero-capacity
//! channel: every send blocks until the consumer asks for the next token, so
//! the producer is never more than one token ahead. The channel closes when
//! the lexer stops, which is how the consumer learns the stream is over.

use std::{
    sync::mpsc::{self, Receiver},
    thread::{self, JoinHandle},
};

use tracing::{trace, warn};

use super::{lexer::Lexer, tokens::Token};

/// Consumer end of a lexer thread.
pub struct TokenStream {
    receiver: Option<Receiver<Token>>,
    handle: Option<JoinHandle<()>>,
}

/// Starts tokenizing `source` on a new thread.
pub fn spawn_lexer(source: impl Into<String>) -> TokenStream {
    let (sender, receiver) = mpsc::sync_channel::<Token>(0);
    let lexer = Lexer::new(source);

    let handle = thread::spawn(move || {
        for token in lexer {
            if sender.send(token).is_err() {
                trace!("token consumer hung up");
                return;
            }
        }
        trace!("lexer finished, closing token channel");
    });

    TokenStream {
        receiver: Some(receiver),
        handle: Some(handle),
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.receiver.as_ref()?.recv().ok();
        if token.is_none() {
            self.receiver = None;
        }
        token
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        // Unblocks a producer that is waiting in `send`.
        self.receiver.take();

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("lexer thread panicked");
            }
        }
    }
}
