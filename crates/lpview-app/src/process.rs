//! Message processing
//!
//! Runs a message (and any follow-up messages) through the TEA update
//! function and dispatches the resulting actions.

use std::sync::Arc;

use lpview_api::LaunchApi;
use tokio::sync::{mpsc, watch};

use crate::actions::{handle_action, FetchTaskMap};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<A>,
    fetch_tasks: &FetchTaskMap,
    shutdown_rx: &watch::Receiver<bool>,
) where
    A: LaunchApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(
                action,
                msg_tx.clone(),
                Arc::clone(api),
                fetch_tasks.clone(),
                shutdown_rx.clone(),
            );
        }

        msg = result.message;
    }
}
