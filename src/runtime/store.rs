use std::collections::VecDeque;

use flume::{Receiver, Sender};
use tokio::task::JoinSet;

use crate::environment::Environment;

use super::effect::Effect;

/// Pure state-transition function plus the action vocabulary of one view.
pub trait Reducer {
    type State: Clone;
    type Action: std::fmt::Debug + Send + 'static;

    fn reduce(
        action: Self::Action,
        state: &mut Self::State,
        environment: &Environment,
    ) -> Effect<Self::Action>;
}

type Observer<State> = Box<dyn Fn(&State, &State, &Environment)>;

/// Owns the state of one view instance and drives its reducer.
///
/// Dispatch is synchronous and runs to completion: every action, including
/// the ones an effect queued, is applied in dispatch order before `send`
/// returns. Effect futures run as tasks inside a [`JoinSet`] whose lifetime
/// is tied to the store, so tearing the store down (or dropping it) aborts
/// everything still in flight and no completion action is ever dispatched
/// for an aborted task.
pub struct Store<R: Reducer> {
    state: R::State,
    environment: Environment,
    sender: Sender<R::Action>,
    receiver: Receiver<R::Action>,
    tasks: JoinSet<()>,
    subscriptions: JoinSet<()>,
    observer: Option<Observer<R::State>>,
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R::State, environment: Environment) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            state,
            environment,
            sender,
            receiver,
            tasks: JoinSet::new(),
            subscriptions: JoinSet::new(),
            observer: None,
        }
    }

    /// Observe every transition. Runs after the reducer, with the state
    /// before and after; the home for lifecycle-bound side effects the
    /// reducer itself must stay free of.
    pub fn with_observer(
        mut self,
        observer: impl Fn(&R::State, &R::State, &Environment) + 'static,
    ) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// A handle for feeding actions in from outside the store's own effects.
    pub fn sender(&self) -> Sender<R::Action> {
        self.sender.clone()
    }

    /// Synchronously apply `action` and everything it queues, in order.
    pub fn send(&mut self, action: R::Action) {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            let previous = self.state.clone();
            let effect = R::reduce(action, &mut self.state, &self.environment);
            self.apply(effect, &mut queue);
            if let Some(ref observer) = self.observer {
                observer(&previous, &self.state, &self.environment);
            }
        }
    }

    fn apply(&mut self, effect: Effect<R::Action>, queue: &mut VecDeque<R::Action>) {
        match effect {
            Effect::Nothing => {}
            Effect::Action(action) => queue.push_back(action),
            Effect::Future(future) => {
                let sender = self.sender.clone();
                self.tasks.spawn(async move {
                    if let Some(action) = future.await {
                        let _ = sender.send_async(action).await;
                    }
                });
            }
            Effect::Multiple(effects) => {
                for effect in effects {
                    self.apply(effect, queue);
                }
            }
        }
    }

    /// Forward an external event stream into actions. The forwarding task
    /// lives until teardown, so remounting a view never leaks a listener.
    pub fn subscribe<E: Send + 'static>(
        &mut self,
        events: Receiver<E>,
        map: impl Fn(E) -> R::Action + Send + 'static,
    ) {
        let sender = self.sender.clone();
        self.subscriptions.spawn(async move {
            while let Ok(event) = events.recv_async().await {
                if sender.send_async(map(event)).await.is_err() {
                    break;
                }
            }
        });
    }

    /// Await the next queued action (an effect completion or a subscribed
    /// event) and dispatch it.
    pub async fn process_next(&mut self) -> bool {
        match self.receiver.recv_async().await {
            Ok(action) => {
                self.send(action);
                true
            }
            Err(_) => false,
        }
    }

    /// Drive every outstanding effect task to its end and dispatch whatever
    /// completions arrive, including effects those dispatches spawn in turn.
    /// Subscriptions are left running.
    pub async fn settle(&mut self) {
        while !self.tasks.is_empty() {
            // aborted tasks surface as join errors; their completion action
            // was never sent, so there is nothing to do with the result
            let _ = self.tasks.join_next().await;
            self.drain();
        }
        self.drain();
    }

    fn drain(&mut self) {
        while let Ok(action) = self.receiver.try_recv() {
            self.send(action);
        }
    }

    /// Cancel all in-flight effect tasks and subscriptions. Dropping the
    /// store has the same effect.
    pub fn teardown(&mut self) {
        self.tasks.abort_all();
        self.subscriptions.abort_all();
    }
}
