use crate::app::App;
use crate::gateway::actor::{GatewayEvent, spawn_gateway_actor};
use crate::messages::app::{AppCommand, AppEvent};
use crate::settings::RuntimeConfig;

use tokio::sync::mpsc;

use crate::core::effects::{CoreDispatch, CoreEffects, run_effects};
use crate::core::infra::{GuideRefreshTimer, Requests};

mod detail;
mod guide;
mod map;
mod navigation;
mod ui;

enum CoreMsg {
    Ui(AppCommand),
    Gateway(GatewayEvent),
    GuideTick { generation: u64 },
}

struct CoreState {
    app: App,
    requests: Requests,
    refresh: GuideRefreshTimer,
    schedule_hours: u32,
    bootstrapped: bool,
}

enum UiAction {
    Handled,
    NotHandled,
    Quit,
}

impl CoreState {
    fn new(cfg: &RuntimeConfig, tx_tick: mpsc::Sender<u64>) -> Self {
        Self {
            app: App::default(),
            requests: Requests::default(),
            refresh: GuideRefreshTimer::new(cfg.guide_refresh, tx_tick),
            schedule_hours: cfg.schedule_hours,
            bootstrapped: false,
        }
    }

    /// State with default config; the tick receiver is returned so tests can
    /// observe the timer.
    #[cfg(test)]
    fn for_test() -> (Self, mpsc::Receiver<u64>) {
        let (tx_tick, rx_tick) = mpsc::channel(8);
        (Self::new(&RuntimeConfig::default(), tx_tick), rx_tick)
    }
}

fn reduce(msg: CoreMsg, state: &mut CoreState, effects: &mut CoreEffects) -> bool {
    match msg {
        CoreMsg::Ui(cmd) => {
            match ui::handle_ui(&cmd, state, effects) {
                UiAction::Quit => return true,
                UiAction::Handled => return false,
                UiAction::NotHandled => {}
            }
            if matches!(
                navigation::handle_ui(&cmd, state, effects),
                UiAction::Handled
            ) {
                return false;
            }
            if matches!(map::handle_ui(&cmd, state, effects), UiAction::Handled) {
                return false;
            }
            if matches!(guide::handle_ui(&cmd, state, effects), UiAction::Handled) {
                return false;
            }
            if matches!(detail::handle_ui(&cmd, state, effects), UiAction::Handled) {
                return false;
            }
            tracing::trace!(?cmd, "command not handled");
        }
        CoreMsg::Gateway(evt) => {
            tracing::trace!(req_id = evt.req_id(), "gateway reply");
            if map::handle_gateway_event(&evt, state, effects) {
                return false;
            }
            if guide::handle_gateway_event(&evt, state, effects) {
                return false;
            }
            if detail::handle_gateway_event(&evt, state, effects) {
                return false;
            }
            navigation::handle_gateway_event(&evt, state, effects);
        }
        CoreMsg::GuideTick { generation } => {
            navigation::handle_tick(generation, state, effects);
        }
    }

    false
}

pub fn spawn_app_actor(cfg: RuntimeConfig) -> (mpsc::Sender<AppCommand>, mpsc::Receiver<AppEvent>) {
    let (tx_cmd, mut rx_cmd) = mpsc::channel::<AppCommand>(64);
    let (tx_evt, rx_evt) = mpsc::channel::<AppEvent>(64);
    let (tx_tick, mut rx_tick) = mpsc::channel::<u64>(4);

    let (tx_gateway, mut rx_gateway) = spawn_gateway_actor(cfg.gateway.clone());

    tokio::spawn(async move {
        let mut state = CoreState::new(&cfg, tx_tick);
        let dispatch = CoreDispatch {
            tx_gateway: &tx_gateway,
            tx_evt: &tx_evt,
        };
        tracing::info!(
            api_base = %cfg.gateway.api_base,
            refresh_secs = cfg.guide_refresh.as_secs(),
            schedule_hours = cfg.schedule_hours,
            "app actor started"
        );

        loop {
            let msg = tokio::select! {
                cmd = rx_cmd.recv() => match cmd {
                    Some(cmd) => CoreMsg::Ui(cmd),
                    None => break,
                },
                Some(evt) = rx_gateway.recv() => CoreMsg::Gateway(evt),
                Some(generation) = rx_tick.recv() => CoreMsg::GuideTick { generation },
            };

            let mut effects = CoreEffects::default();
            let should_quit = reduce(msg, &mut state, &mut effects);
            run_effects(effects, &dispatch).await;
            if should_quit {
                break;
            }
        }

        state.refresh.stop();
        tracing::info!("app actor stopped");
    });

    (tx_cmd, rx_evt)
}
