//! # Nexus Runtime
//!
//! Runtime implementation for the Nexus identity flows.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Event Loop**: Manages the action → reducer → effects → action
//!   feedback loop
//!
//! ## Execution Model
//!
//! The flows are cooperative and event-driven: every user interaction
//! (keystroke, blur, submit) is one action, and [`Store::send`] processes
//! that action — plus any actions its effects feed back — to completion
//! before returning. The only suspension points are the effects themselves.
//!
//! ## Example
//!
//! ```ignore
//! use nexus_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action and wait for its effects to settle
//! store.send(Action::DoSomething).await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field.clone()).await;
//! ```

use nexus_core::{effect::Effect, reducer::Reducer};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The Store - runtime for reducer-based flows
///
/// The Store manages:
/// 1. State (behind `RwLock` for shared read access)
/// 2. Reducer (flow logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (with action feedback)
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync,
    A: Send + 'static,
    S: Send + Sync,
    E: Send + Sync,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
        }
    }

    /// Send an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Acquires the write lock on state
    /// 2. Calls the reducer with (state, action, environment)
    /// 3. Awaits each returned effect in order
    /// 4. Actions produced by effects re-enter the reducer (feedback loop)
    ///
    /// `send` returns only once the action and its entire effect cascade
    /// have settled, so callers observe run-to-completion semantics.
    /// Concurrent `send` calls serialize at the state lock; effects of one
    /// action finish before that call returns, but interleaving between
    /// concurrent callers is not ordered beyond the lock.
    ///
    /// Action payloads are deliberately not logged: the identity flows
    /// carry credentials in their actions.
    pub async fn send(&self, action: A) {
        let mut queue = VecDeque::new();
        queue.push_back(action);
        let mut processed: usize = 0;

        while let Some(action) = queue.pop_front() {
            let effects = {
                let mut state = self.state.write().await;
                self.reducer.reduce(&mut state, action, &self.environment)
            };
            processed += 1;

            for effect in effects {
                match effect {
                    Effect::None => {}
                    Effect::Future(future) => {
                        if let Some(feedback) = future.await {
                            queue.push_back(feedback);
                        }
                    }
                }
            }
        }

        tracing::trace!(actions = processed, "action cascade settled");
    }

    /// Read a projection of the current state
    ///
    /// The closure runs under the read lock; keep it cheap and clone out
    /// what you need.
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
        }
    }
}
