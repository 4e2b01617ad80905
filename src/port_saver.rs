use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Orbit, Rocket};
use std::sync::Mutex;
use tokio::sync::{oneshot, Mutex as AsyncMutex};

/// Creates a liftoff fairing and the handle that learns which port the
/// server actually bound. Needed when the configured port is 0.
pub fn create_pair() -> (PortSaver, Port) {
    let (tx, rx) = oneshot::channel();
    (
        PortSaver {
            sender: Mutex::new(Some(tx)),
        },
        Port {
            state: AsyncMutex::new(PortState::Pending(rx)),
        },
    )
}

enum PortState {
    Pending(oneshot::Receiver<u16>),
    Bound(u16),
    Unknown,
}

pub struct Port {
    state: AsyncMutex<PortState>,
}

impl Port {
    /// Waits for liftoff. `None` if the server was dropped before it bound.
    pub async fn get(&self) -> Option<u16> {
        let mut state = self.state.lock().await;
        let next = match std::mem::replace(&mut *state, PortState::Unknown) {
            PortState::Pending(rx) => match rx.await {
                Ok(port) => PortState::Bound(port),
                Err(_) => PortState::Unknown,
            },
            other => other,
        };
        *state = next;
        match *state {
            PortState::Bound(port) => Some(port),
            _ => None,
        }
    }
}

pub struct PortSaver {
    sender: Mutex<Option<oneshot::Sender<u16>>>,
}

#[rocket::async_trait]
impl Fairing for PortSaver {
    fn info(&self) -> Info {
        Info {
            name: "Port Saver",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let port = rocket.config().port;
        tracing::info!(port, "Server is listening");
        let sender = match self.sender.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        if let Some(sender) = sender {
            let _ = sender.send(port);
        }
    }
}
